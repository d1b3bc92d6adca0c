//! CLI entry point: loads the three input images, drives the pipeline to
//! completion, and writes the two output files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pipe5sim::config::{
    self, DEFAULT_DCACHE_FILE, DEFAULT_ICACHE_FILE, DEFAULT_ODCACHE_FILE, DEFAULT_REGISTER_FILE,
    DEFAULT_STATS_FILE,
};
use pipe5sim::{Cpu, loader};

/// Cycle-accurate simulator for a 16-bit five-stage in-order pipeline CPU.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the instruction image (hex bytes, packed big-endian).
    #[arg(long, default_value = DEFAULT_ICACHE_FILE)]
    instructions: PathBuf,

    /// Path to the initial data-memory image (hex bytes).
    #[arg(long, default_value = DEFAULT_DCACHE_FILE)]
    data: PathBuf,

    /// Path to the initial register image (16 hex values).
    #[arg(long, default_value = DEFAULT_REGISTER_FILE)]
    registers: PathBuf,

    /// Path to write the final data-cache dump to.
    #[arg(long, default_value = DEFAULT_ODCACHE_FILE)]
    data_out: PathBuf,

    /// Path to write the statistics report to.
    #[arg(long, default_value = DEFAULT_STATS_FILE)]
    stats_out: PathBuf,

    /// Optional TOML configuration file; may enable tracing without `--trace`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable per-cycle pipeline tracing on stderr.
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let trace_from_config = args
        .config
        .as_deref()
        .map(loader::load_config)
        .transpose()
        .map(|cfg: Option<config::Config>| cfg.is_some_and(|c| c.trace));

    let trace_from_config = match trace_from_config {
        Ok(enabled) => enabled,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if args.trace || trace_from_config {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("trace"))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .init();
    }

    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<(), pipe5sim::SimError> {
    let ic = loader::load_instructions(&args.instructions)?;
    let dc = loader::load_data(&args.data)?;
    let regs = loader::load_register_image(&args.registers)?;

    let mut cpu = Cpu::new();
    cpu.ic = ic;
    cpu.dc = dc;
    cpu.load_registers(&regs);

    while !cpu.halted {
        cpu.tick();
    }

    loader::write_data_dump(&args.data_out, &cpu.dc)?;
    loader::write_stats_report(&args.stats_out, &cpu.stats)?;

    Ok(())
}
