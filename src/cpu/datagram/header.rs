use super::flags::{CpuCtl, FpgaCtl};

#[repr(C, align(2))]
#[derive(Clone, Copy)]
pub struct ModHead {
    pub freq_div: u32,
    pub data: [u8; 120],
}

#[repr(C, align(2))]
#[derive(Clone, Copy)]
pub struct ModBody {
    pub data: [u8; 124],
}

#[repr(C, align(2))]
#[derive(Clone, Copy)]
pub struct Silent {
    pub cycle: u16,
    pub step: u16,
    __pad: [u8; 120],
}

#[repr(C, align(2))]
#[derive(Clone, Copy)]
union Payload {
    mod_head: ModHead,
    mod_body: ModBody,
    silent: Silent,
}

/// Wire-exact 128-byte frame header shared by every datagram.
///
/// The payload is interpreted as [`ModHead`], [`ModBody`] or [`Silent`]
/// depending on the control flags.
#[repr(C, align(2))]
#[derive(Clone, Copy)]
pub struct GlobalHeader {
    pub msg_id: u8,
    pub fpga_ctl_reg: u8,
    pub cpu_ctl_reg: u8,
    pub size: u8,
    data: Payload,
}

impl GlobalHeader {
    pub fn new_zeroed() -> Self {
        unsafe { std::mem::zeroed() }
    }

    pub const fn fpga_ctl(&self) -> FpgaCtl {
        FpgaCtl::new(self.fpga_ctl_reg)
    }

    pub const fn cpu_ctl(&self) -> CpuCtl {
        CpuCtl::new(self.cpu_ctl_reg)
    }

    pub fn mod_head(&self) -> &ModHead {
        unsafe { &self.data.mod_head }
    }

    pub fn mod_head_mut(&mut self) -> &mut ModHead {
        unsafe { &mut self.data.mod_head }
    }

    pub fn mod_body(&self) -> &ModBody {
        unsafe { &self.data.mod_body }
    }

    pub fn mod_body_mut(&mut self) -> &mut ModBody {
        unsafe { &mut self.data.mod_body }
    }

    pub fn silent(&self) -> &Silent {
        unsafe { &self.data.silent }
    }

    pub fn silent_mut(&mut self) -> &mut Silent {
        unsafe { &mut self.data.silent }
    }
}

impl Default for GlobalHeader {
    fn default() -> Self {
        Self::new_zeroed()
    }
}
