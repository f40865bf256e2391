use crate::{cpu::params::*, fpga::params::*, CPUEmulator};

impl CPUEmulator {
    /// Invoked at power-on and on `MSG_CLEAR`.
    pub(crate) fn clear(&mut self) {
        let freq_div_4k: u32 = MOD_FREQ_DIV_4K;

        self.read_fpga_info = false;
        self.bram_write(BRAM_SELECT_CONTROLLER, BRAM_ADDR_CTL_REG, CTL_FLAG_LEGACY_MODE);

        self.bram_write(
            BRAM_SELECT_CONTROLLER,
            BRAM_ADDR_SILENT_STEP,
            SILENCER_STEP_DEFAULT,
        );
        self.bram_write(
            BRAM_SELECT_CONTROLLER,
            BRAM_ADDR_SILENT_CYCLE,
            SILENCER_CYCLE_DEFAULT,
        );

        self.stm_cycle = 0;

        self.mod_cycle = 2;
        self.bram_write(
            BRAM_SELECT_CONTROLLER,
            BRAM_ADDR_MOD_CYCLE,
            (self.mod_cycle.max(1) - 1) as u16,
        );
        self.bram_cpy(
            BRAM_SELECT_CONTROLLER,
            BRAM_ADDR_MOD_FREQ_DIV_0,
            &freq_div_4k as *const u32 as *const u16,
            std::mem::size_of::<u32>() >> 1,
        );
        self.bram_write(BRAM_SELECT_MOD, 0, 0x0000);

        self.bram_set(BRAM_SELECT_NORMAL, 0, 0x0000, TRANS_NUM << 1);

        self.ring.reset_slots();
    }
}
