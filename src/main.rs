//
// main.rs
//
// @date Oct 19 2026
//

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use servocal::{action, drivers::AsyncCanDriverPtr, Args, Command, CommandContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {

    let args = Args::parse();

    let level = if args.verbose { "servocal=debug" } else { "servocal=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .init();

    let driver: AsyncCanDriverPtr = args.interface.clone().try_into()
        .with_context(|| format!("Failed to open CAN interface {:?}", args.interface))?;

    let ctx = CommandContext::new(driver, &args).context("Invalid calibration range")?;

    match args.cmd {
        Command::Move(args) => action::position::run_move(ctx, args).await,
        Command::Center(args) => action::position::run_center(ctx, args).await,
        Command::Sweep(args) => action::position::run_sweep(ctx, args).await,
        Command::LowerLimit => action::config::run_lower_limit(ctx).await,
        Command::UpperLimit => action::config::run_upper_limit(ctx).await,
        Command::SetAddress(args) => action::config::run_set_address(ctx, args).await,
        Command::Store => action::config::run_store(ctx).await,
    }
}
