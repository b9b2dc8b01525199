//
// command.rs
//
// @date Oct 19 2026
//

use crate::address::{arbitration_id, CommandKind, DeviceAddress, MAX_COMMAND_ID};
use crate::error::ProtocolError;
use crate::frame::CanFrame;

use embedded_can::Frame;

use std::fmt;

/// A command for one servo controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move to a calibrated position
    SetPosition { address: DeviceAddress, pitch: u16, yaw: u16 },
    /// Move to a raw position, bypassing the device limits
    SetPositionRaw { address: DeviceAddress, pitch: u16, yaw: u16, brightness: u8 },
    /// Latch the current raw position as the upper travel bound
    SetUpperLimit { address: DeviceAddress },
    /// Latch the current raw position as the lower travel bound
    SetLowerLimit { address: DeviceAddress },
    /// Move the device to a new bus address
    SetAddress { address: DeviceAddress, new_address: DeviceAddress },
    /// Persist limits and address to non-volatile memory
    StoreConfig { address: DeviceAddress },
}

fn check_bits(name: &'static str, value: u32, bits: u8) -> Result<u32, ProtocolError> {
    if value >> bits == 0 {
        Ok(value)
    }
    else {
        Err(ProtocolError::InvalidParameter { name, value, bits })
    }
}

impl Command {
    pub fn set_position(address: u32, pitch: u32, yaw: u32) -> Result<Self, ProtocolError> {
        Ok(Command::SetPosition {
            address: address.try_into()?,
            pitch: check_bits("pitch", pitch, 16)? as u16,
            yaw: check_bits("yaw", yaw, 16)? as u16,
        })
    }

    pub fn set_position_raw(address: u32, pitch: u32, yaw: u32, brightness: u32) -> Result<Self, ProtocolError> {
        Ok(Command::SetPositionRaw {
            address: address.try_into()?,
            pitch: check_bits("pitch", pitch, 16)? as u16,
            yaw: check_bits("yaw", yaw, 16)? as u16,
            brightness: check_bits("brightness", brightness, 8)? as u8,
        })
    }

    pub fn set_upper_limit(address: u32) -> Result<Self, ProtocolError> {
        Ok(Command::SetUpperLimit { address: address.try_into()? })
    }

    pub fn set_lower_limit(address: u32) -> Result<Self, ProtocolError> {
        Ok(Command::SetLowerLimit { address: address.try_into()? })
    }

    pub fn set_address(address: u32, new_address: u32) -> Result<Self, ProtocolError> {
        let address: DeviceAddress = address.try_into()?;
        let new_address = check_bits("new address", new_address, 8)? as u8;

        Ok(Command::SetAddress { address, new_address: new_address.into() })
    }

    pub fn store_config(address: u32) -> Result<Self, ProtocolError> {
        Ok(Command::StoreConfig { address: address.try_into()? })
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::SetPosition { .. } => CommandKind::SetPosition,
            Command::SetPositionRaw { .. } => CommandKind::SetPositionRaw,
            Command::SetUpperLimit { .. } => CommandKind::SetUpperLimit,
            Command::SetLowerLimit { .. } => CommandKind::SetLowerLimit,
            Command::SetAddress { .. } => CommandKind::SetAddress,
            Command::StoreConfig { .. } => CommandKind::StoreConfig,
        }
    }

    pub fn address(&self) -> DeviceAddress {
        match *self {
            Command::SetPosition { address, .. }
            | Command::SetPositionRaw { address, .. }
            | Command::SetUpperLimit { address }
            | Command::SetLowerLimit { address }
            | Command::SetAddress { address, .. }
            | Command::StoreConfig { address } => address,
        }
    }

    pub fn arbitration_id(&self) -> u32 {
        arbitration_id(self.address(), self.kind())
    }

    /// Encode the command into a transmit-ready frame
    pub fn encode(&self) -> CanFrame {
        let mut payload = [0u8; 8];

        let len = match *self {
            Command::SetPosition { pitch, yaw, .. } => {
                payload[0..2].copy_from_slice(&pitch.to_be_bytes());
                payload[2..4].copy_from_slice(&yaw.to_be_bytes());
                4
            },
            Command::SetPositionRaw { pitch, yaw, brightness, .. } => {
                payload[0..2].copy_from_slice(&pitch.to_be_bytes());
                payload[2..4].copy_from_slice(&yaw.to_be_bytes());
                payload[4] = brightness;
                5
            },
            Command::SetAddress { new_address, .. } => {
                payload[0] = new_address.value();
                1
            },
            Command::SetUpperLimit { .. }
            | Command::SetLowerLimit { .. }
            | Command::StoreConfig { .. } => 0,
        };

        let id = self.arbitration_id();
        debug_assert!(id <= MAX_COMMAND_ID && len <= 8);

        // from_raw only fails above 29 bits or 8 bytes
        CanFrame::from_raw(id, &payload[..len])
            .expect("servo frame out of bounds")
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.kind(), self.address())?;

        match self {
            Command::SetPosition { pitch, yaw, .. } => write!(f, " pitch={:#06X} yaw={:#06X}", pitch, yaw),
            Command::SetPositionRaw { pitch, yaw, brightness, .. } => {
                write!(f, " pitch={:#06X} yaw={:#06X} brightness={}", pitch, yaw, brightness)
            },
            Command::SetAddress { new_address, .. } => write!(f, " new={}", new_address),
            _ => Ok(()),
        }
    }
}
