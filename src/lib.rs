//
// lib.rs
//
// @date Oct 19 2026
//
pub mod action;
pub mod address;
pub mod command;
pub mod drivers;
pub mod error;
pub mod format;
pub mod frame;
pub mod limits;
pub mod utils;

pub use address::{decode_id, encode_id, CommandKind, DeviceAddress};
pub use command::Command as ServoCommand;
pub use error::ProtocolError;
pub use frame::CanFrame;

use std::str::FromStr;
use regex::Regex;

use clap::{Parser, Subcommand};
use thiserror::Error;

use drivers::AsyncCanDriverPtr;
use limits::{Calibration, RangePolicy, DEFAULT_MAX, DEFAULT_MIN};

#[derive(Error, Debug)]
pub enum ServocalParseErrors {
    #[error("Invalid device options")]
    InvalidDriver,
}

/// CAN driver options
#[derive(Debug, Clone, PartialEq)]
pub enum DriverOpts {
    /// SocketCAN driver. Options: interface
    SocketCan(String),
    /// Print frames instead of sending them. Options: label
    DryRun(String),
}

impl FromStr for DriverOpts {
    type Err = ServocalParseErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re = Regex::new(r"^([\w]+)://([\w.-]+)$").map_err(|_| ServocalParseErrors::InvalidDriver)?;

        // Attempt to match the specified driver
        // This takes the form:
        //   - socketcan://interface
        //   - dryrun://label
        if let Some(caps) = re.captures(s) {
            let (_, [driver, opts]) = caps.extract();

            match driver {
                "socketcan" => {
                    Ok(DriverOpts::SocketCan(opts.to_string()))
                },
                "dryrun" => {
                    Ok(DriverOpts::DryRun(opts.to_string()))
                },
                _ => {
                    Err(ServocalParseErrors::InvalidDriver)
                }
            }
        }
        else {
            // If the expression doesn't match, just return the string as a SocketCAN driver option
            Ok(DriverOpts::SocketCan(s.to_string()))
        }

    }
}

/// servocal calibrates pitch/yaw servo controllers over CAN
#[derive(Parser, Debug)]
#[command(version, about = "Servo calibration over CAN")]
pub struct Args {
    /// The CAN interface to use (with driver options if applicable)
    #[arg(value_parser = clap::value_parser!(DriverOpts))]
    pub interface: DriverOpts,
    #[command(subcommand)]
    pub cmd: Command,
    /// Address of the servo controller to talk to
    #[arg(short = 'a', long = "address", default_value = "0")]
    pub address: DeviceAddress,
    #[arg(long = "pitch-min", default_value_t = DEFAULT_MIN, value_parser = utils::parse_u16)]
    pub pitch_min: u16,
    #[arg(long = "pitch-max", default_value_t = DEFAULT_MAX, value_parser = utils::parse_u16)]
    pub pitch_max: u16,
    #[arg(long = "yaw-min", default_value_t = DEFAULT_MIN, value_parser = utils::parse_u16)]
    pub yaw_min: u16,
    #[arg(long = "yaw-max", default_value_t = DEFAULT_MAX, value_parser = utils::parse_u16)]
    pub yaw_max: u16,
    /// How to treat positions outside the calibrated range
    #[arg(long = "policy", value_enum, default_value_t = RangePolicy::Reject)]
    pub policy: RangePolicy,
    /// Refuse to send frames that need an extended (29 bit) identifier
    #[arg(long = "standard-only")]
    pub standard_only: bool,
    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Command to run
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Move both axes to a raw position
    Move(action::position::MoveArgs),
    /// Move both axes to the middle of the calibrated range
    Center(action::position::CenterArgs),
    /// Step one axis across the calibrated range
    Sweep(action::position::SweepArgs),
    /// Latch the current position as the lower travel limit
    LowerLimit,
    /// Latch the current position as the upper travel limit
    UpperLimit,
    /// Give the device a new bus address
    SetAddress(action::config::SetAddressArgs),
    /// Persist limits and address to the device EEPROM
    Store,
}

/// Subcommand context
pub struct CommandContext {
    pub driver: AsyncCanDriverPtr,
    pub address: DeviceAddress,
    pub calibration: Calibration,
    pub policy: RangePolicy,
    pub standard_only: bool,
}

impl CommandContext {
    pub fn new(driver: AsyncCanDriverPtr, args: &Args) -> Result<Self, ProtocolError> {
        let calibration = Calibration::new((args.pitch_min, args.pitch_max), (args.yaw_min, args.yaw_max))?;

        Ok(CommandContext {
            driver,
            address: args.address,
            calibration,
            policy: args.policy,
            standard_only: args.standard_only,
        })
    }
}
