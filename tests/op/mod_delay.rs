use autd3_firmware_emulator::{cpu::datagram::TxDatagram, cpu::params::*, CPUEmulator};

use itertools::Itertools;
use rand::Rng;

use crate::send;

#[test]
fn write_mod_delay() {
    let mut rng = rand::rng();

    let mut cpu = CPUEmulator::new();
    let mut tx = TxDatagram::new();

    let delays = (0..TRANS_NUM).map(|_| rng.random::<u16>()).collect_vec();

    tx.header_mut().msg_id = 0x10;
    tx.header_mut().cpu_ctl_reg = CPU_CTL_FLAG_WRITE_BODY | CPU_CTL_FLAG_MOD_DELAY;
    tx.body_mut().data.copy_from_slice(&delays);
    send(&mut cpu, &tx);

    assert_eq!(delays, cpu.fpga().mod_delays());
}

#[test]
fn mod_delay_requires_write_body() {
    let mut cpu = CPUEmulator::new();
    let mut tx = TxDatagram::new();

    tx.header_mut().msg_id = 0x10;
    tx.header_mut().cpu_ctl_reg = CPU_CTL_FLAG_MOD_DELAY;
    tx.body_mut().data.fill(0xABCD);
    send(&mut cpu, &tx);

    assert!(cpu.fpga().mod_delays().iter().all(|&d| d == 0));
}
