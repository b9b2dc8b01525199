//
// position.rs
//
// @date Oct 19 2026
//

use crate::action::transmit;
use crate::command::Command;
use crate::limits::RangePolicy;
use crate::{utils, CommandContext};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use std::time::Duration;

#[derive(Parser, Debug)]
pub struct MoveArgs {
    #[arg(value_parser = utils::parse_u16)]
    pub pitch: u16,
    #[arg(value_parser = utils::parse_u16)]
    pub yaw: u16,
    #[arg(short = 'b', long = "brightness", default_value_t = 0)]
    pub brightness: u8,
    /// Resend the position at this rate (Hz) until interrupted
    #[arg(short = 'r', long = "rate")]
    pub rate: Option<f32>,
}

#[derive(Parser, Debug)]
pub struct CenterArgs {
    #[arg(short = 'b', long = "brightness", default_value_t = 0)]
    pub brightness: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Axis {
    Pitch,
    Yaw,
}

#[derive(Parser, Debug)]
pub struct SweepArgs {
    #[arg(value_enum)]
    pub axis: Axis,
    #[arg(short = 's', long = "step", default_value_t = 0x40, value_parser = utils::parse_u16)]
    pub step: u16,
    /// Delay between steps
    #[arg(short = 'p', long = "period-ms", default_value_t = 50)]
    pub period_ms: u64,
}

/// Build a raw position command for the context's device, applying the range policy
fn position_command(ctx: &CommandContext, pitch: u16, yaw: u16, brightness: u8) -> anyhow::Result<Command> {
    let (p, y) = ctx.calibration.apply(ctx.policy, pitch, yaw)?;

    if ctx.policy == RangePolicy::Clamp && (p, y) != (pitch, yaw) {
        warn!("clamped position {:#X},{:#X} to {:#X},{:#X}", pitch, yaw, p, y);
    }

    Ok(Command::SetPositionRaw { address: ctx.address, pitch: p, yaw: y, brightness })
}

/// Resend period for a rate in Hz, `None` for a single shot
fn rate_period(rate: Option<f32>) -> anyhow::Result<Option<Duration>> {
    rate.filter(|&r| r > 0.0)
        .map(|r| Duration::try_from_secs_f32(1.0 / r).with_context(|| format!("Invalid rate {} Hz", r)))
        .transpose()
}

pub async fn run_move(mut ctx: CommandContext, args: MoveArgs) -> anyhow::Result<()> {
    let cmd = position_command(&ctx, args.pitch, args.yaw, args.brightness)?;

    match rate_period(args.rate)? {
        None => transmit(&mut ctx, &cmd).await,
        Some(period) => {
            let task = tokio::spawn(repeat_task(ctx, cmd, period));

            tokio::select! {
                res = task => res?,
                res = tokio::signal::ctrl_c() => Ok(res?),
            }
        },
    }
}

async fn repeat_task(mut ctx: CommandContext, cmd: Command, period: Duration) -> anyhow::Result<()> {
    loop {
        transmit(&mut ctx, &cmd).await?;
        tokio::time::sleep(period).await;
    }
}

pub async fn run_center(mut ctx: CommandContext, args: CenterArgs) -> anyhow::Result<()> {
    let (pitch, yaw) = ctx.calibration.center();
    let cmd = position_command(&ctx, pitch, yaw, args.brightness)?;

    transmit(&mut ctx, &cmd).await
}

pub async fn run_sweep(mut ctx: CommandContext, args: SweepArgs) -> anyhow::Result<()> {
    let (pitch_mid, yaw_mid) = ctx.calibration.center();
    let range = match args.axis {
        Axis::Pitch => ctx.calibration.pitch,
        Axis::Yaw => ctx.calibration.yaw,
    };
    let period = Duration::from_millis(args.period_ms);

    info!("sweeping {} from {:#X} to {:#X}", range.axis(), range.min(), range.max());

    for value in range.steps(args.step) {
        let (pitch, yaw) = match args.axis {
            Axis::Pitch => (value, yaw_mid),
            Axis::Yaw => (pitch_mid, value),
        };

        let cmd = position_command(&ctx, pitch, yaw, 0)?;
        transmit(&mut ctx, &cmd).await?;
        tokio::time::sleep(period).await;
    }

    Ok(())
}
