use crate::{cpu::datagram::Body, cpu::params::TRANS_NUM, fpga::params::*, CPUEmulator};

impl CPUEmulator {
    pub(crate) fn write_mod_delay(&mut self, body: &Body) {
        self.bram_cpy(
            BRAM_SELECT_CONTROLLER,
            BRAM_ADDR_MOD_DELAY_BASE,
            body.data.as_ptr(),
            TRANS_NUM,
        );
    }
}
