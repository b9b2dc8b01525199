//
// address.rs
//
// @date Oct 19 2026
//

//! Arbitration ID layout for the servo controllers.
//!
//! Every device owns a block of `DEVICE_STRIDE` IDs starting at
//! `CAN_ID_BASE + address * DEVICE_STRIDE`. The command kind selects the
//! offset inside that block.

use crate::error::ProtocolError;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use std::fmt;
use std::str::FromStr;

pub const CAN_ID_BASE: u32 = 0x200;
pub const DEVICE_STRIDE: u32 = 0x10;

/// Largest ID a standard (11 bit) frame can carry
pub const MAX_STANDARD_ID: u32 = 0x7FF;

/// Last ID of the block owned by device 255
pub const MAX_SERVO_ID: u32 = CAN_ID_BASE + 0xFF * DEVICE_STRIDE + DEVICE_STRIDE - 1;

/// Highest arbitration ID a command can produce (StoreConfig to device 255)
pub const MAX_COMMAND_ID: u32 = CAN_ID_BASE + 0xFF * DEVICE_STRIDE + CommandKind::StoreConfig as u32;

/// Logical address of one servo controller on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DeviceAddress(u8);

impl DeviceAddress {
    pub const fn new(address: u8) -> Self {
        DeviceAddress(address)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for DeviceAddress {
    fn from(value: u8) -> Self {
        DeviceAddress(value)
    }
}

impl TryFrom<u32> for DeviceAddress {
    type Error = ProtocolError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(DeviceAddress)
            .map_err(|_| ProtocolError::InvalidAddress(value))
    }
}

impl FromStr for DeviceAddress {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = crate::utils::parse_int(s)?;
        DeviceAddress::try_from(value).map_err(|e| e.to_string())
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Command selector, the value is the offset inside a device's ID block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum CommandKind {
    SetPosition = 0x01,
    SetUpperLimit = 0x02,
    SetLowerLimit = 0x03,
    SetPositionRaw = 0x04,
    SetAddress = 0x06,
    StoreConfig = 0x07,
}

impl CommandKind {
    pub const ALL: [CommandKind; 6] = [
        CommandKind::SetPosition,
        CommandKind::SetUpperLimit,
        CommandKind::SetLowerLimit,
        CommandKind::SetPositionRaw,
        CommandKind::SetAddress,
        CommandKind::StoreConfig,
    ];

    pub fn offset(self) -> u32 {
        u8::from(self) as u32
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandKind::SetPosition => "set-position",
            CommandKind::SetUpperLimit => "set-upper-limit",
            CommandKind::SetLowerLimit => "set-lower-limit",
            CommandKind::SetPositionRaw => "set-position-raw",
            CommandKind::SetAddress => "set-address",
            CommandKind::StoreConfig => "store-config",
        };
        f.write_str(name)
    }
}

/// Arbitration ID for a command sent to `address`
pub fn arbitration_id(address: DeviceAddress, kind: CommandKind) -> u32 {
    CAN_ID_BASE + address.value() as u32 * DEVICE_STRIDE + kind.offset()
}

/// Arbitration ID for a command sent to a raw, unchecked address
pub fn encode_id(address: u32, kind: CommandKind) -> Result<u32, ProtocolError> {
    let address = DeviceAddress::try_from(address)?;
    Ok(arbitration_id(address, kind))
}

/// Split an arbitration ID back into its device address and command kind
pub fn decode_id(id: u32) -> Option<(DeviceAddress, CommandKind)> {
    if !(CAN_ID_BASE..=MAX_SERVO_ID).contains(&id) {
        return None;
    }

    let rel = id - CAN_ID_BASE;
    let address = DeviceAddress::try_from(rel / DEVICE_STRIDE).ok()?;
    let kind = CommandKind::try_from((rel % DEVICE_STRIDE) as u8).ok()?;

    Some((address, kind))
}
