//
// socketcan.rs
//
// @date Oct 19 2026
//

use crate::frame::CanFrame;
use crate::drivers::{AsyncCanDriver, DriverError};

use socketcan::{CanFrame as SocketCanFrame, tokio::CanSocket};
use embedded_can::Frame;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use std::io;

#[derive(Debug, Error)]
pub enum SocketCanDriverError {
    #[error("Failed to open CAN device")]
    OpenError(#[from] io::Error)
}

pub struct SocketCanDriver {
    socket: CanSocket,
    interface: String,
}

impl SocketCanDriver {
    pub fn new(can_interface: &str) -> Result<SocketCanDriver, SocketCanDriverError> {
        let socket = CanSocket::open(can_interface)?;
        info!(interface = can_interface, "opened CAN interface");

        Ok(SocketCanDriver { socket, interface: can_interface.to_owned() })
    }
}

#[async_trait]
impl AsyncCanDriver for SocketCanDriver {
    async fn send(&mut self, frame: CanFrame) -> Result<(), DriverError> {
        let id = frame.raw_id();
        let send_failed = |reason: String| DriverError::SendFailed { id, reason };

        let frame = SocketCanFrame::new(frame.id(), frame.data())
            .ok_or_else(|| send_failed("frame rejected by socketcan".to_owned()))?;

        self.socket
            .write_frame(frame)
            .await
            .map_err(|e| send_failed(e.to_string()))?;

        debug!(interface = %self.interface, id = format_args!("{:#X}", id), "frame sent");

        Ok(())
    }

    fn name(&self) -> &str {
        &self.interface
    }
}
