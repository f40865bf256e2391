use crate::{
    cpu::datagram::{Body, GlobalHeader},
    cpu::params::TRANS_NUM,
    fpga::params::*,
    CPUEmulator,
};

impl CPUEmulator {
    fn write_normal_op_legacy(&mut self, body: &Body) {
        (0..TRANS_NUM).for_each(|i| {
            self.bram_write(BRAM_SELECT_NORMAL, (i << 1) as u16, body.data[i]);
        });
    }

    fn write_normal_op_raw(&mut self, body: &Body, is_duty: bool) {
        let offset: usize = if is_duty { 1 } else { 0 };
        (0..TRANS_NUM).for_each(|i| {
            self.bram_write(BRAM_SELECT_NORMAL, ((i << 1) | offset) as u16, body.data[i]);
        });
    }

    pub(crate) fn write_normal_op(&mut self, header: &GlobalHeader, body: &Body) {
        if header.fpga_ctl().legacy_mode() {
            self.write_normal_op_legacy(body);
        } else {
            self.write_normal_op_raw(body, header.cpu_ctl().is_duty());
        }
    }
}
