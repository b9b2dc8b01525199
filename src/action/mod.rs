//
// action/mod.rs
//
// @date Oct 19 2026
//
pub mod config;
pub mod position;

use crate::command::Command;
use crate::CommandContext;

use anyhow::bail;
use embedded_can::Frame;
use tracing::info;

/// Encode `cmd` and hand the frame to the context's driver
pub async fn transmit(ctx: &mut CommandContext, cmd: &Command) -> anyhow::Result<()> {
    let frame = cmd.encode();

    if ctx.standard_only && frame.is_extended() {
        bail!(
            "{} needs extended ID {:#X}, which --standard-only forbids (addresses above 95 do not fit in 11 bits)",
            cmd,
            frame.raw_id()
        );
    }

    info!(driver = ctx.driver.name(), id = format_args!("{:#X}", frame.raw_id()), "{}", cmd);
    ctx.driver.send(frame).await?;

    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::drivers::testing::RecordingDriver;
    use crate::limits::{Calibration, RangePolicy};
    use crate::{CommandContext, DeviceAddress};

    pub fn context(address: u8, policy: RangePolicy) -> (CommandContext, RecordingDriver) {
        let driver = RecordingDriver::default();
        let ctx = CommandContext {
            driver: Box::new(driver.clone()),
            address: DeviceAddress::new(address),
            calibration: Calibration::default(),
            policy,
            standard_only: false,
        };

        (ctx, driver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::testing::context;
    use crate::drivers::testing::RecordingDriver;
    use crate::limits::RangePolicy;

    #[tokio::test]
    async fn transmit_sends_encoded_frame() {
        let (mut ctx, driver) = context(0, RangePolicy::Reject);
        let cmd = Command::store_config(0).unwrap();

        transmit(&mut ctx, &cmd).await.unwrap();

        assert_eq!(driver.sent(), vec![cmd.encode()]);
    }

    #[tokio::test]
    async fn standard_only_blocks_extended_ids() {
        let (mut ctx, driver) = context(255, RangePolicy::Reject);
        ctx.standard_only = true;

        let cmd = Command::set_address(255, 10).unwrap();
        assert!(transmit(&mut ctx, &cmd).await.is_err());
        assert!(driver.sent().is_empty());

        let cmd = Command::store_config(95).unwrap();
        transmit(&mut ctx, &cmd).await.unwrap();
        assert_eq!(driver.sent().len(), 1);
    }

    #[tokio::test]
    async fn transport_errors_propagate() {
        let (mut ctx, _) = context(0, RangePolicy::Reject);
        ctx.driver = Box::new(RecordingDriver { fail: true, ..Default::default() });

        let err = transmit(&mut ctx, &Command::store_config(0).unwrap()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to transmit frame 0x207: bus off");
    }
}
