use crate::{cpu::params::CPU_VERSION, fpga::params::*, CPUEmulator};

impl CPUEmulator {
    pub(crate) const fn get_cpu_version() -> u16 {
        CPU_VERSION
    }

    pub(crate) fn get_fpga_version(&self) -> u16 {
        self.bram_read(BRAM_SELECT_CONTROLLER, BRAM_ADDR_VERSION_NUM)
    }

    pub(crate) fn read_fpga_info(&self) -> u16 {
        self.bram_read(BRAM_SELECT_CONTROLLER, BRAM_ADDR_FPGA_INFO)
    }
}
