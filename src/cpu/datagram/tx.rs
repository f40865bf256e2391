use super::{Body, GlobalHeader};

/// One outgoing EtherCAT frame: the header landing in RX1 and the body
/// landing in RX0.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct TxDatagram {
    header: GlobalHeader,
    body: Body,
}

impl TxDatagram {
    pub fn new() -> Self {
        unsafe { std::mem::zeroed() }
    }

    pub const fn header(&self) -> &GlobalHeader {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut GlobalHeader {
        &mut self.header
    }

    pub const fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

impl Default for TxDatagram {
    fn default() -> Self {
        Self::new()
    }
}
