use crate::{cpu::datagram::GlobalHeader, fpga::params::*, CPUEmulator};

impl CPUEmulator {
    pub(crate) fn config_silencer(&mut self, header: &GlobalHeader) {
        let step = header.silent().step;
        let cycle = header.silent().cycle;
        self.bram_write(BRAM_SELECT_CONTROLLER, BRAM_ADDR_SILENT_STEP, step);
        self.bram_write(BRAM_SELECT_CONTROLLER, BRAM_ADDR_SILENT_CYCLE, cycle);
    }
}
