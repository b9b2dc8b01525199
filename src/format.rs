//
// format.rs
//
// @date Oct 19 2026
//

use crate::{address, frame::CanFrame};

use std::fmt;

use embedded_can::{Frame, Id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataFormatMode {
    #[default]
    Hex,
    Binary,
}

/// Data for formatting a CAN frame
pub struct CanFrameFormatter<'a> {
    frame: &'a CanFrame,
    data_format_mode: DataFormatMode,
}

impl<'a> From<(&'a CanFrame, DataFormatMode)> for CanFrameFormatter<'a> {
    fn from(value: (&'a CanFrame, DataFormatMode)) -> Self {
        CanFrameFormatter {
            frame: value.0,
            data_format_mode: value.1,
        }
    }
}

impl fmt::Display for CanFrameFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw_id = self.frame.raw_id();
        let id = match self.frame.id() {
            Id::Standard(_) => format!("{:03X}", raw_id),
            Id::Extended(_) => format!("{:08X}", raw_id),
        };

        let dlc = self.frame.dlc();
        let data_string =
            self.frame
                .data()
                .iter()
                .fold(String::from(""), |a, b| match self.data_format_mode {
                    DataFormatMode::Hex => format!("{} {:02X}", a, b),
                    DataFormatMode::Binary => format!("{} {:08b}", a, b),
                });

        write!(f, "{} [{}]{}", id, dlc, data_string)?;

        if let Some((address, kind)) = address::decode_id(raw_id) {
            write!(f, "  ({} @ {})", kind, address)?;
        }

        Ok(())
    }
}
