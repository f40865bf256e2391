pub const CPU_VERSION: u16 = 0x82; /* v2.2 */

pub const TRANS_NUM: usize = 249;

pub const MSG_CLEAR: u8 = 0x00;
pub const MSG_RD_CPU_VERSION: u8 = 0x01;
pub const MSG_RD_FPGA_VERSION: u8 = 0x03;
pub const MSG_RD_FPGA_FUNCTION: u8 = 0x04;
pub const MSG_BEGIN: u8 = 0x05;
pub const MSG_END: u8 = 0xF0;

pub const MOD_BUF_SEGMENT_SIZE_WIDTH: u32 = 15;
pub const MOD_BUF_SEGMENT_SIZE: u32 = 1 << MOD_BUF_SEGMENT_SIZE_WIDTH;
pub const MOD_BUF_SEGMENT_SIZE_MASK: u32 = MOD_BUF_SEGMENT_SIZE - 1;

pub const POINT_STM_BUF_SEGMENT_SIZE_WIDTH: u32 = 11;
pub const POINT_STM_BUF_SEGMENT_SIZE: u32 = 1 << POINT_STM_BUF_SEGMENT_SIZE_WIDTH;
pub const POINT_STM_BUF_SEGMENT_SIZE_MASK: u32 = POINT_STM_BUF_SEGMENT_SIZE - 1;

pub const GAIN_STM_BUF_SEGMENT_SIZE_WIDTH: u32 = 5;
pub const GAIN_STM_BUF_SEGMENT_SIZE: u32 = 1 << GAIN_STM_BUF_SEGMENT_SIZE_WIDTH;
pub const GAIN_STM_BUF_SEGMENT_SIZE_MASK: u32 = GAIN_STM_BUF_SEGMENT_SIZE - 1;

pub const GAIN_DATA_MODE_PHASE_DUTY_FULL: u16 = 0x0001;
pub const GAIN_DATA_MODE_PHASE_FULL: u16 = 0x0002;
pub const GAIN_DATA_MODE_PHASE_HALF: u16 = 0x0004;

pub const CTL_REG_LEGACY_MODE_BIT: u16 = 0;
pub const CTL_REG_FORCE_FAN_BIT: u16 = 4;
pub const CTL_REG_OP_MODE_BIT: u16 = 5;
pub const CTL_REG_STM_GAIN_MODE_BIT: u16 = 6;
pub const CTL_REG_READS_FPGA_INFO_BIT: u16 = 7;
pub const CTL_REG_SYNC_BIT: u16 = 8;

pub const CTL_FLAG_LEGACY_MODE: u16 = 1 << CTL_REG_LEGACY_MODE_BIT;
pub const CTL_FLAG_FORCE_FAN: u16 = 1 << CTL_REG_FORCE_FAN_BIT;
pub const CTL_FLAG_OP_MODE: u16 = 1 << CTL_REG_OP_MODE_BIT;
pub const CTL_FLAG_STM_GAIN_MODE: u16 = 1 << CTL_REG_STM_GAIN_MODE_BIT;
pub const CTL_FLAG_READS_FPGA_INFO: u16 = 1 << CTL_REG_READS_FPGA_INFO_BIT;
pub const CTL_FLAG_SYNC: u16 = 1 << CTL_REG_SYNC_BIT;

// MOD and CONFIG_EN_N share bit 0, MOD_BEGIN and CONFIG_SILENCER bit 1,
// MOD_END and CONFIG_SYNC bit 2; the MOD bit selects the interpretation.
pub const CPU_CTL_FLAG_MOD: u8 = 1 << 0;
pub const CPU_CTL_FLAG_MOD_BEGIN: u8 = 1 << 1;
pub const CPU_CTL_FLAG_MOD_END: u8 = 1 << 2;
pub const CPU_CTL_FLAG_CONFIG_EN_N: u8 = 1 << 0;
pub const CPU_CTL_FLAG_CONFIG_SILENCER: u8 = 1 << 1;
pub const CPU_CTL_FLAG_CONFIG_SYNC: u8 = 1 << 2;
pub const CPU_CTL_FLAG_WRITE_BODY: u8 = 1 << 3;
pub const CPU_CTL_FLAG_STM_BEGIN: u8 = 1 << 4;
pub const CPU_CTL_FLAG_STM_END: u8 = 1 << 5;
pub const CPU_CTL_FLAG_IS_DUTY: u8 = 1 << 6;
pub const CPU_CTL_FLAG_MOD_DELAY: u8 = 1 << 7;

pub const BUF_SIZE: u32 = 32;

pub const SILENCER_STEP_DEFAULT: u16 = 10;
pub const SILENCER_CYCLE_DEFAULT: u16 = 4096;
pub const MOD_FREQ_DIV_4K: u32 = 40960;
