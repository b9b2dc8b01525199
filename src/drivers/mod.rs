//
// drivers/mod.rs
//
// @date Oct 19 2026
//
pub mod dryrun;
pub mod socketcan;

use self::dryrun::DryRunDriver;
use self::socketcan::{SocketCanDriver, SocketCanDriverError};

use crate::frame::CanFrame;
use crate::DriverOpts;

use async_trait::async_trait;
use thiserror::Error;

/// Driver errors
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Error initializing socketcan driver: {0}")]
    SocketCanError(#[from] SocketCanDriverError),
    #[error("Failed to transmit frame {id:#X}: {reason}")]
    SendFailed { id: u32, reason: String },
}

#[async_trait]
pub trait AsyncCanDriver {
    /// Send CAN frame
    async fn send(&mut self, frame: CanFrame) -> Result<(), DriverError>;
    /// Name of the underlying interface
    fn name(&self) -> &str;
}
pub type AsyncCanDriverPtr = Box<dyn AsyncCanDriver + Sync + Send>;

impl TryFrom<DriverOpts> for AsyncCanDriverPtr {
    type Error = DriverError;

    fn try_from(value: DriverOpts) -> Result<Self, Self::Error> {
        match value {
            DriverOpts::SocketCan(can_interface) => SocketCanDriver::new(&can_interface)
                .map(|driver| upcast(Box::new(driver)))
                .map_err(DriverError::SocketCanError),
            DriverOpts::DryRun(name) => Ok(upcast(Box::new(DryRunDriver::new(name)))),
        }
    }
}

fn upcast<T: AsyncCanDriver + Sync + Send + 'static>(a: Box<T>) -> AsyncCanDriverPtr {
    a
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    use std::sync::{Arc, Mutex};

    /// Driver that keeps every frame it is given
    #[derive(Clone, Default)]
    pub struct RecordingDriver {
        pub frames: Arc<Mutex<Vec<CanFrame>>>,
        pub fail: bool,
    }

    impl RecordingDriver {
        pub fn sent(&self) -> Vec<CanFrame> {
            self.frames.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AsyncCanDriver for RecordingDriver {
        async fn send(&mut self, frame: CanFrame) -> Result<(), DriverError> {
            if self.fail {
                return Err(DriverError::SendFailed { id: frame.raw_id(), reason: "bus off".to_owned() });
            }
            self.frames.lock().unwrap().push(frame);
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dryrun_driver_from_opts() {
        let driver: AsyncCanDriverPtr = DriverOpts::DryRun("bench".to_owned()).try_into().unwrap();
        assert_eq!(driver.name(), "bench");
    }
}
