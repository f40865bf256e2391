use autd3_firmware_emulator::{cpu::datagram::TxDatagram, cpu::params::*, CPUEmulator};

use itertools::Itertools;
use rand::Rng;

use crate::{data_msg_id, send};

const GAIN_STM_CTL: u8 = (CTL_FLAG_OP_MODE | CTL_FLAG_STM_GAIN_MODE) as u8;

fn send_begin(cpu: &mut CPUEmulator, msg_id: u8, fpga_ctl: u8, freq_div: u32, mode: u16) {
    let mut tx = TxDatagram::new();
    tx.header_mut().msg_id = msg_id;
    tx.header_mut().fpga_ctl_reg = GAIN_STM_CTL | fpga_ctl;
    tx.header_mut().cpu_ctl_reg = CPU_CTL_FLAG_WRITE_BODY | CPU_CTL_FLAG_STM_BEGIN;
    tx.body_mut().data[0] = freq_div as u16;
    tx.body_mut().data[1] = (freq_div >> 16) as u16;
    tx.body_mut().data[2] = mode;
    send(cpu, &tx);
}

fn send_body(cpu: &mut CPUEmulator, msg_id: u8, fpga_ctl: u8, cpu_ctl: u8, buf: &[u16]) {
    let mut tx = TxDatagram::new();
    tx.header_mut().msg_id = msg_id;
    tx.header_mut().fpga_ctl_reg = GAIN_STM_CTL | fpga_ctl;
    tx.header_mut().cpu_ctl_reg = CPU_CTL_FLAG_WRITE_BODY | cpu_ctl;
    tx.body_mut().data.copy_from_slice(buf);
    send(cpu, &tx);
}

#[test]
fn begin_latches_mode_without_writing() {
    let mut cpu = CPUEmulator::new();

    send_begin(&mut cpu, 0x10, 0, 3000, GAIN_DATA_MODE_PHASE_FULL);

    assert_eq!(0, cpu.stm_cycle());
    assert_eq!(3000, cpu.fpga().stm_frequency_division());
    assert_eq!(0, cpu.fpga().stm_addr_offset());
}

#[test]
fn phase_duty_full_legacy() {
    let mut rng = rand::rng();

    let mut cpu = CPUEmulator::new();
    let legacy = CTL_FLAG_LEGACY_MODE as u8;

    send_begin(&mut cpu, 0x10, legacy, 512, GAIN_DATA_MODE_PHASE_DUTY_FULL);

    let frames = (0..3)
        .map(|_| (0..TRANS_NUM).map(|_| rng.random::<u16>()).collect_vec())
        .collect_vec();
    frames.iter().enumerate().for_each(|(k, buf)| {
        let end = if k == frames.len() - 1 {
            CPU_CTL_FLAG_STM_END
        } else {
            0
        };
        send_body(&mut cpu, data_msg_id(k), legacy, end, buf);
        assert_eq!(k as u32 + 1, cpu.stm_cycle());
    });

    assert_eq!(frames.len(), cpu.fpga().stm_cycle());
    frames.iter().enumerate().for_each(|(k, buf)| {
        (0..TRANS_NUM).for_each(|i| {
            assert_eq!(buf[i], cpu.fpga().gain_stm_drive_at(k, i).0);
        });
    });
}

#[test]
fn phase_duty_full_raw_advances_on_duty_only() {
    let mut rng = rand::rng();

    let mut cpu = CPUEmulator::new();

    send_begin(&mut cpu, 0x10, 0, 512, GAIN_DATA_MODE_PHASE_DUTY_FULL);

    let phases = (0..TRANS_NUM).map(|_| rng.random::<u16>()).collect_vec();
    let duties = (0..TRANS_NUM).map(|_| rng.random::<u16>()).collect_vec();

    send_body(&mut cpu, 0x20, 0, 0, &phases);
    assert_eq!(0, cpu.stm_cycle());

    send_body(
        &mut cpu,
        0x21,
        0,
        CPU_CTL_FLAG_IS_DUTY | CPU_CTL_FLAG_STM_END,
        &duties,
    );
    assert_eq!(1, cpu.stm_cycle());

    assert_eq!(1, cpu.fpga().stm_cycle());
    (0..TRANS_NUM).for_each(|i| {
        assert_eq!((phases[i], duties[i]), cpu.fpga().gain_stm_drive_at(0, i));
    });
}

#[test]
fn phase_full_legacy_expands_to_two_frames() {
    let mut rng = rand::rng();

    let mut cpu = CPUEmulator::new();
    let legacy = CTL_FLAG_LEGACY_MODE as u8;

    send_begin(&mut cpu, 0x10, legacy, 512, GAIN_DATA_MODE_PHASE_FULL);

    let buf = (0..TRANS_NUM).map(|_| rng.random::<u16>()).collect_vec();
    send_body(&mut cpu, 0x20, legacy, CPU_CTL_FLAG_STM_END, &buf);

    assert_eq!(2, cpu.stm_cycle());
    assert_eq!(2, cpu.fpga().stm_cycle());
    (0..TRANS_NUM).for_each(|i| {
        assert_eq!(
            0xFF00 | (buf[i] & 0x00FF),
            cpu.fpga().gain_stm_drive_at(0, i).0
        );
        assert_eq!(
            0xFF00 | ((buf[i] >> 8) & 0x00FF),
            cpu.fpga().gain_stm_drive_at(1, i).0
        );
    });
}

#[test]
fn phase_full_raw_duty_comes_from_next_channel_cycle() {
    let mut rng = rand::rng();

    let mut cpu = CPUEmulator::new();

    // Program the cycle table first.
    let cycles = (0..TRANS_NUM).map(|_| rng.random::<u16>()).collect_vec();
    let mut tx = TxDatagram::new();
    tx.header_mut().msg_id = 0x10;
    tx.header_mut().cpu_ctl_reg = CPU_CTL_FLAG_CONFIG_SYNC;
    tx.body_mut().data.copy_from_slice(&cycles);
    send(&mut cpu, &tx);

    send_begin(&mut cpu, 0x11, 0, 512, GAIN_DATA_MODE_PHASE_FULL);

    let buf = (0..TRANS_NUM).map(|_| rng.random::<u16>()).collect_vec();
    send_body(&mut cpu, 0x20, 0, CPU_CTL_FLAG_STM_END, &buf);

    assert_eq!(1, cpu.stm_cycle());
    // The duty word of channel i is cycle[i + 1] >> 1, one channel ahead; the
    // final channel reads the zeroed guard entry.
    (0..TRANS_NUM - 1).for_each(|i| {
        assert_eq!(
            (buf[i], cycles[i + 1] >> 1),
            cpu.fpga().gain_stm_drive_at(0, i)
        );
    });
    assert_eq!(
        (buf[TRANS_NUM - 1], 0x0000),
        cpu.fpga().gain_stm_drive_at(0, TRANS_NUM - 1)
    );
}

#[test]
fn phase_full_raw_skips_duty_frames() {
    let mut cpu = CPUEmulator::new();

    send_begin(&mut cpu, 0x10, 0, 512, GAIN_DATA_MODE_PHASE_FULL);

    let buf = vec![0xFFFF; TRANS_NUM];
    send_body(&mut cpu, 0x20, 0, CPU_CTL_FLAG_IS_DUTY, &buf);

    assert_eq!(0, cpu.stm_cycle());
    (0..TRANS_NUM).for_each(|i| {
        assert_eq!((0x0000, 0x0000), cpu.fpga().gain_stm_drive_at(0, i));
    });
}

#[test]
fn phase_half_legacy_expands_to_four_frames() {
    let mut cpu = CPUEmulator::new();
    let legacy = CTL_FLAG_LEGACY_MODE as u8;

    send_begin(&mut cpu, 0x10, legacy, 512, GAIN_DATA_MODE_PHASE_HALF);

    let buf = vec![0x1234u16; TRANS_NUM];
    send_body(&mut cpu, 0x20, legacy, CPU_CTL_FLAG_STM_END, &buf);

    assert_eq!(4, cpu.stm_cycle());
    assert_eq!(4, cpu.fpga().stm_cycle());
    let expected = [
        0xFF00 | (0x4 << 4) | 0x4,
        0xFF00 | (0x3 << 4) | 0x3,
        0xFF00 | (0x2 << 4) | 0x2,
        0xFF00 | (0x1 << 4) | 0x1,
    ];
    expected.iter().enumerate().for_each(|(k, &word)| {
        (0..TRANS_NUM).for_each(|i| {
            assert_eq!(word, cpu.fpga().gain_stm_drive_at(k, i).0);
        });
    });
}

#[test]
fn phase_half_raw_is_ignored() {
    let mut cpu = CPUEmulator::new();

    send_begin(&mut cpu, 0x10, 0, 512, GAIN_DATA_MODE_PHASE_HALF);

    let buf = vec![0x1234u16; TRANS_NUM];
    send_body(&mut cpu, 0x20, 0, 0, &buf);

    assert_eq!(0, cpu.stm_cycle());
    (0..TRANS_NUM).for_each(|i| {
        assert_eq!((0x0000, 0x0000), cpu.fpga().gain_stm_drive_at(0, i));
    });
}

#[test]
fn unknown_mode_falls_back_to_phase_duty_full() {
    let mut rng = rand::rng();

    let mut cpu = CPUEmulator::new();
    let legacy = CTL_FLAG_LEGACY_MODE as u8;

    send_begin(&mut cpu, 0x10, legacy, 512, 0x0008);

    let buf = (0..TRANS_NUM).map(|_| rng.random::<u16>()).collect_vec();
    send_body(&mut cpu, 0x20, legacy, CPU_CTL_FLAG_STM_END, &buf);

    assert_eq!(1, cpu.stm_cycle());
    (0..TRANS_NUM).for_each(|i| {
        assert_eq!(buf[i], cpu.fpga().gain_stm_drive_at(0, i).0);
    });
}

#[test]
fn segment_boundary_updates_addr_offset() {
    let mut rng = rand::rng();

    let mut cpu = CPUEmulator::new();
    let legacy = CTL_FLAG_LEGACY_MODE as u8;

    send_begin(&mut cpu, 0x10, legacy, 512, GAIN_DATA_MODE_PHASE_DUTY_FULL);

    // 2^5 frames fill one segment exactly; the 33rd lands in the next one.
    let frames = (0..33)
        .map(|_| (0..TRANS_NUM).map(|_| rng.random::<u16>()).collect_vec())
        .collect_vec();
    frames.iter().enumerate().for_each(|(k, buf)| {
        let end = if k == frames.len() - 1 {
            CPU_CTL_FLAG_STM_END
        } else {
            0
        };
        send_body(&mut cpu, data_msg_id(k), legacy, end, buf);
        if k < 31 {
            assert_eq!(0, cpu.fpga().stm_addr_offset());
        } else {
            assert_eq!(1, cpu.fpga().stm_addr_offset());
        }
    });

    assert_eq!(frames.len(), cpu.fpga().stm_cycle());
    frames.iter().enumerate().for_each(|(k, buf)| {
        (0..TRANS_NUM).for_each(|i| {
            assert_eq!(buf[i], cpu.fpga().gain_stm_drive_at(k, i).0);
        });
    });
}
