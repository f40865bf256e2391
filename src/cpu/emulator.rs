use zerocopy::FromZeros;

use crate::ethercat::DcSysTime;
use crate::fpga::emulator::FPGAEmulator;
use crate::fpga::params::*;

use super::datagram::{Body, CpuIntent, GlobalHeader, TxDatagram};
use super::params::*;
use super::ring::Ring;

/// The CPU-side firmware of one device.
///
/// [`send`](CPUEmulator::send) models the EtherCAT receive interrupt and
/// [`update`](CPUEmulator::update) the 1 ms periodic task. The two contexts
/// exchange frames exclusively through the internal [`Ring`].
pub struct CPUEmulator {
    pub(crate) msg_id: u8,
    pub(crate) ack: u16,
    pub(crate) tx_ack: u16,
    pub(crate) read_fpga_info: bool,
    // One guard slot past TRANS_NUM: the gain STM PHASE_FULL raw path reads
    // one entry past the programmed table (see write_gain_stm).
    pub(crate) cycle: [u16; TRANS_NUM + 1],
    pub(crate) mod_cycle: u32,
    pub(crate) stm_cycle: u32,
    pub(crate) seq_gain_data_mode: u16,
    pub(crate) ring: Ring,
    pub(crate) push_retries: u32,
    pub(crate) dc_cyc_start_time: DcSysTime,
    pub(crate) fpga: FPGAEmulator,
}

impl CPUEmulator {
    pub fn new() -> Self {
        let mut s = Self {
            msg_id: 0x00,
            ack: 0x0000,
            tx_ack: 0x0000,
            read_fpga_info: false,
            cycle: [0x0000; TRANS_NUM + 1],
            mod_cycle: 0,
            stm_cycle: 0,
            seq_gain_data_mode: GAIN_DATA_MODE_PHASE_DUTY_FULL,
            ring: Ring::new(),
            push_retries: 0,
            dc_cyc_start_time: DcSysTime::ZERO,
            fpga: FPGAEmulator::new(),
        };
        s.init();
        s
    }

    pub fn init(&mut self) {
        self.fpga.init();
        self.clear();
    }

    /// Fires on EtherCAT frame arrival (receive context).
    pub fn send(&mut self, tx: &TxDatagram) {
        self.recv_ethercat(tx.header(), tx.body());
    }

    /// The acknowledgement word exposed in the device TX region.
    pub const fn ack(&self) -> u16 {
        self.tx_ack
    }

    pub const fn last_msg_id(&self) -> u8 {
        self.msg_id
    }

    pub const fn reads_fpga_info(&self) -> bool {
        self.read_fpga_info
    }

    pub const fn mod_cycle(&self) -> u32 {
        self.mod_cycle
    }

    pub const fn stm_cycle(&self) -> u32 {
        self.stm_cycle
    }

    /// Number of failed ring pushes observed in the receive context.
    pub const fn push_retries(&self) -> u32 {
        self.push_retries
    }

    /// The cached per-channel cycle programmed by the last synchronization.
    pub fn cycle_at(&self, idx: usize) -> u16 {
        self.cycle[idx]
    }

    pub const fn fpga(&self) -> &FPGAEmulator {
        &self.fpga
    }

    pub fn fpga_mut(&mut self) -> &mut FPGAEmulator {
        &mut self.fpga
    }

    pub fn set_dc_cyc_start_time(&mut self, time: DcSysTime) {
        self.dc_cyc_start_time = time;
    }

    /// Fires with a 1 ms interval (periodic context).
    pub fn update(&mut self) {
        self.process();

        match self.msg_id {
            MSG_RD_CPU_VERSION | MSG_RD_FPGA_VERSION | MSG_RD_FPGA_FUNCTION => {}
            _ => {
                if self.read_fpga_info {
                    self.ack = (self.ack & 0xFF00) | self.read_fpga_info();
                }
            }
        }
        self.tx_ack = self.ack;
    }
}

impl Default for CPUEmulator {
    fn default() -> Self {
        Self::new()
    }
}

impl CPUEmulator {
    const fn get_addr(select: u8, addr: u16) -> u16 {
        (((select as u16) & 0x0003) << 14) | (addr & 0x3FFF)
    }

    pub(crate) fn bram_read(&self, select: u8, addr: u16) -> u16 {
        self.fpga.read(Self::get_addr(select, addr))
    }

    pub(crate) fn bram_write(&mut self, select: u8, addr: u16, data: u16) {
        self.fpga.write(Self::get_addr(select, addr), data)
    }

    pub(crate) fn bram_cpy(&mut self, select: u8, addr_base: u16, data: *const u16, size: usize) {
        let mut addr = Self::get_addr(select, addr_base);
        let mut src = data;
        (0..size).for_each(|_| unsafe {
            self.fpga.write(addr, src.read_unaligned());
            addr += 1;
            src = src.add(1);
        })
    }

    pub(crate) fn bram_set(&mut self, select: u8, addr_base: u16, value: u16, size: usize) {
        let mut addr = Self::get_addr(select, addr_base);
        (0..size).for_each(|_| {
            self.fpga.write(addr, value);
            addr += 1;
        })
    }

    fn recv_ethercat(&mut self, header: &GlobalHeader, body: &Body) {
        if header.msg_id == self.msg_id {
            return;
        }
        self.msg_id = header.msg_id;
        self.ack = (header.msg_id as u16) << 8;
        self.read_fpga_info = header.fpga_ctl().reads_fpga_info();
        if self.read_fpga_info {
            self.ack = (self.ack & 0xFF00) | self.read_fpga_info();
        }

        match self.msg_id {
            MSG_CLEAR => self.clear(),
            MSG_RD_CPU_VERSION => {
                self.ack = (self.ack & 0xFF00) | (Self::get_cpu_version() & 0xFF)
            }
            MSG_RD_FPGA_VERSION => {
                self.ack = (self.ack & 0xFF00) | (self.get_fpga_version() & 0xFF)
            }
            MSG_RD_FPGA_FUNCTION => {
                self.ack = (self.ack & 0xFF00) | ((self.get_fpga_version() >> 8) & 0xFF)
            }
            _ => {
                if self.msg_id <= MSG_END {
                    if let CpuIntent::Config { sync: true, .. } = header.cpu_ctl().intent() {
                        self.synchronize(header, body);
                    } else {
                        while !self.ring.push(header, body) {
                            self.push_retries += 1;
                            std::thread::yield_now();
                        }
                    }
                }
            }
        }
        self.tx_ack = self.ack;
    }

    fn process(&mut self) {
        let mut head = GlobalHeader::new_zeroed();
        let mut body = Body::new_zeroed();
        if !self.ring.pop(&mut head, &mut body) {
            return;
        }

        let fpga_ctl = head.fpga_ctl();
        let cpu_ctl = head.cpu_ctl();

        self.bram_write(BRAM_SELECT_CONTROLLER, BRAM_ADDR_CTL_REG, fpga_ctl.bits() as u16);

        match cpu_ctl.intent() {
            CpuIntent::Modulation { begin, end } => self.write_mod(&head, begin, end),
            CpuIntent::Config { silencer: true, .. } => self.config_silencer(&head),
            CpuIntent::Config { .. } => {}
        }

        if !cpu_ctl.write_body() {
            return;
        }

        if cpu_ctl.mod_delay() {
            self.write_mod_delay(&body);
            return;
        }

        if !fpga_ctl.stm_mode() {
            self.write_normal_op(&head, &body);
            return;
        }

        if !fpga_ctl.stm_gain_mode() {
            self.write_point_stm(&head, &body);
        } else {
            self.write_gain_stm(&head, &body);
        }
    }
}
