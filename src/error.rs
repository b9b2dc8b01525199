//
// error.rs
//
// @date Oct 19 2026
//

use thiserror::Error;

/// Errors raised while building servo command frames
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Invalid device address {0}, expected 0-255")]
    InvalidAddress(u32),
    #[error("Invalid {name} value {value}, does not fit in {bits} bits")]
    InvalidParameter {
        name: &'static str,
        value: u32,
        bits: u8,
    },
    #[error("{axis} position {value:#X} outside calibrated range {min:#X}-{max:#X}")]
    OutOfRange {
        axis: &'static str,
        value: u16,
        min: u16,
        max: u16,
    },
    #[error("Invalid {axis} range: min {min:#X} is greater than max {max:#X}")]
    InvalidRange {
        axis: &'static str,
        min: u16,
        max: u16,
    },
}
