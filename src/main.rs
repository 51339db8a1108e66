#![deny(unsafe_code)]

mod demo;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use frame_helpers::config::Config;
use frame_helpers::constants::defaults;
use frame_helpers::{Scheduler, SchedulerMode, align_start_end, font_string, to_left_right_center};

#[derive(Parser)]
#[command(name = "frame-helpers")]
#[command(version)]
#[command(about = "Font, alignment and frame scheduling helpers", long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a font shorthand string (missing parts come from the config)
    Font {
        #[arg(long)]
        size: Option<f64>,
        #[arg(long)]
        style: Option<String>,
        #[arg(long)]
        family: Option<String>,
    },

    /// Map an alignment keyword to left/right/center and a start/end value
    Align {
        /// `start`, `end`, or anything else for center
        align: String,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        start: f64,
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        end: f64,
    },

    /// Send a burst of throttled and debounced calls through a frame loop
    Demo {
        #[arg(long, default_value_t = defaults::demo::CALLS)]
        calls: u32,
        /// Debounce delay in milliseconds (0 = invoke immediately)
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Scheduler mode: auto, frame or immediate
        #[arg(long)]
        mode: Option<SchedulerMode>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so command output stays clean
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Font {
            size,
            style,
            family,
        } => {
            let font = &config.font;
            println!(
                "{}",
                font_string(
                    size.unwrap_or(font.size),
                    style.as_deref().unwrap_or(&font.style),
                    family.as_deref().unwrap_or(&font.family),
                )
            );
        }
        Command::Align { align, start, end } => {
            println!("{}", to_left_right_center(align.as_str()));
            println!("{}", align_start_end(align.as_str(), start, end));
        }
        Command::Demo {
            calls,
            delay_ms,
            mode,
        } => {
            let scheduler = Scheduler::from_mode(mode.unwrap_or(config.scheduler));
            let debounce_delay = delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.debounce_delay());

            // Scheduler handles are !Send, so drive them on the current thread
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("Failed to build Tokio runtime")?;

            let report = rt.block_on(demo::run(
                scheduler,
                calls,
                config.frame_interval(),
                debounce_delay,
            ));

            println!("calls:               {}", report.calls);
            println!("frames driven:       {}", report.frames);
            println!(
                "throttled targets:   {} {:?}",
                report.throttled_invocations.len(),
                report.throttled_invocations
            );
            println!("debounced targets:   {}", report.debounced_invocations);
        }
    }

    Ok(())
}
