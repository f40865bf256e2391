mod body;
mod flags;
mod header;
mod tx;

pub use body::Body;
pub use flags::{CpuCtl, CpuIntent, FpgaCtl};
pub use header::{GlobalHeader, ModBody, ModHead, Silent};
pub use tx::TxDatagram;
