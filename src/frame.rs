//
// frame.rs
//
// @date Oct 19 2026
//

use crate::address::MAX_STANDARD_ID;
use crate::utils;

use embedded_can::{ExtendedId, Frame, Id, StandardId};

/// Independent CAN frame type common to all drivers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanFrame {
    id: Id,
    is_remote: bool,
    dlc: usize,
    data: [u8; 8],
}

impl CanFrame {
    /// Build a data frame from a raw arbitration ID.
    ///
    /// IDs that fit in 11 bits become standard IDs, anything else up to 29 bits
    /// is carried as an extended ID.
    pub fn from_raw(id: u32, data: &[u8]) -> Option<Self> {
        let id: Id = if id <= MAX_STANDARD_ID {
            StandardId::new(id as u16)?.into()
        }
        else {
            ExtendedId::new(id)?.into()
        };

        CanFrame::new(id, data)
    }

    pub fn raw_id(&self) -> u32 {
        utils::id_to_raw(&self.id)
    }
}

impl Frame for CanFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        if data.len() <= 8 {
            let mut payload = [0u8; 8];
            payload[..data.len()].copy_from_slice(data);

            Some(CanFrame { id: id.into(), is_remote: false, dlc: data.len(), data: payload })
        }
        else {
            None
        }
    }

    fn new_remote(id: impl Into<Id>, dlc: usize) -> Option<Self> {
        if dlc <= 8 {
            Some(CanFrame { id: id.into(), is_remote: true, dlc, data: [0u8; 8] })
        }
        else {
            None
        }
    }

    fn id(&self) -> Id {
        self.id
    }

    fn is_extended(&self) -> bool {
        matches!(self.id, Id::Extended(_))
    }

    fn is_remote_frame(&self) -> bool {
        self.is_remote
    }

    fn dlc(&self) -> usize {
        self.dlc
    }

    fn data(&self) -> &[u8] {
        &self.data[..self.dlc]
    }
}
