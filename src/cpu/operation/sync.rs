use crate::{
    cpu::datagram::{Body, GlobalHeader},
    cpu::params::*,
    fpga::params::*,
    CPUEmulator,
};

impl CPUEmulator {
    /// Invoked directly from the receive context on a non-MOD CONFIG_SYNC
    /// frame; the ring is bypassed so the cycle table and EC sync time are
    /// programmed before the next bus cycle.
    pub(crate) fn synchronize(&mut self, header: &GlobalHeader, body: &Body) {
        let next_sync0 = self.dc_cyc_start_time.sys_time();

        self.bram_cpy(
            BRAM_SELECT_CONTROLLER,
            BRAM_ADDR_CYCLE_BASE,
            body.data.as_ptr(),
            TRANS_NUM,
        );
        self.bram_cpy(
            BRAM_SELECT_CONTROLLER,
            BRAM_ADDR_EC_SYNC_TIME_0,
            &next_sync0 as *const u64 as *const u16,
            std::mem::size_of::<u64>() >> 1,
        );

        self.bram_write(
            BRAM_SELECT_CONTROLLER,
            BRAM_ADDR_CTL_REG,
            header.fpga_ctl().bits() as u16 | CTL_FLAG_SYNC,
        );

        self.cycle[..TRANS_NUM].copy_from_slice(&body.data);
    }
}
