//
// config.rs
//
// @date Oct 19 2026
//

use crate::action::transmit;
use crate::command::Command;
use crate::{CommandContext, DeviceAddress};

use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct SetAddressArgs {
    /// Address the device answers to afterwards
    pub new_address: DeviceAddress,
}

pub async fn run_lower_limit(mut ctx: CommandContext) -> anyhow::Result<()> {
    let cmd = Command::SetLowerLimit { address: ctx.address };
    transmit(&mut ctx, &cmd).await
}

pub async fn run_upper_limit(mut ctx: CommandContext) -> anyhow::Result<()> {
    let cmd = Command::SetUpperLimit { address: ctx.address };
    transmit(&mut ctx, &cmd).await
}

pub async fn run_set_address(mut ctx: CommandContext, args: SetAddressArgs) -> anyhow::Result<()> {
    let cmd = Command::SetAddress { address: ctx.address, new_address: args.new_address };
    transmit(&mut ctx, &cmd).await?;

    // The device stops listening on the old address right away
    info!("device {} now answers to address {}, use -a {} from here on", ctx.address, args.new_address, args.new_address);

    Ok(())
}

pub async fn run_store(mut ctx: CommandContext) -> anyhow::Result<()> {
    let cmd = Command::StoreConfig { address: ctx.address };
    transmit(&mut ctx, &cmd).await
}
