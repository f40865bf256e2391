use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AUTDFirmwareEmulatorError {
    #[error("The specified date time is out of range.")]
    InvalidDateTime,
}
