use time::OffsetDateTime;

use crate::error::AUTDFirmwareEmulatorError;

pub const ECAT_DC_SYS_TIME_BASE: time::OffsetDateTime =
    time::macros::datetime!(2000-01-01 0:00 UTC);

pub const EC_OUTPUT_FRAME_SIZE: usize = 626;
pub const EC_INPUT_FRAME_SIZE: usize = 2;

pub const EC_CYCLE_TIME_BASE_MICRO_SEC: u64 = 500;
pub const EC_CYCLE_TIME_BASE_NANO_SEC: u64 = EC_CYCLE_TIME_BASE_MICRO_SEC * 1000;

/// EtherCAT Distributed Clock time, in nanoseconds since [`ECAT_DC_SYS_TIME_BASE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DcSysTime {
    dc_sys_time: u64,
}

impl DcSysTime {
    pub const ZERO: Self = Self { dc_sys_time: 0 };

    pub const fn sys_time(&self) -> u64 {
        self.dc_sys_time
    }

    pub fn to_utc(&self) -> OffsetDateTime {
        ECAT_DC_SYS_TIME_BASE + std::time::Duration::from_nanos(self.dc_sys_time)
    }

    pub fn from_utc(utc: OffsetDateTime) -> Result<Self, AUTDFirmwareEmulatorError> {
        match (utc - ECAT_DC_SYS_TIME_BASE).whole_nanoseconds() {
            i if i < 0 => Err(AUTDFirmwareEmulatorError::InvalidDateTime),
            i => Ok(Self {
                dc_sys_time: i as u64,
            }),
        }
    }

    pub fn now() -> Self {
        Self::from_utc(OffsetDateTime::now_utc()).unwrap()
    }
}

impl std::ops::Add<std::time::Duration> for DcSysTime {
    type Output = Self;

    fn add(self, rhs: std::time::Duration) -> Self::Output {
        Self {
            dc_sys_time: self.dc_sys_time + rhs.as_nanos() as u64,
        }
    }
}

impl std::ops::Sub<std::time::Duration> for DcSysTime {
    type Output = Self;

    fn sub(self, rhs: std::time::Duration) -> Self::Output {
        Self {
            dc_sys_time: self.dc_sys_time - rhs.as_nanos() as u64,
        }
    }
}
