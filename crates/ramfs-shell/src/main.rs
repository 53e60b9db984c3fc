//! `ramfs`: an interactive shell over an in-memory file table.
//!
//! ```bash
//! # Default 1 MiB heap with the sample files
//! ramfs
//!
//! # Tiny heap, empty table, verbose logs on stderr
//! ramfs --heap-size 4096 --no-samples --log-level debug
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use ramfs_arena::ArenaConfig;
use ramfs_shell::{seed_samples, Shell, StdConsole};
use ramfs_table::{FileTable, StorageConfig};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Interactive shell over a RAM-resident file table
#[derive(Parser, Debug)]
#[command(name = "ramfs", version, about, long_about = None)]
struct Cli {
    /// Heap size in bytes backing file content
    #[arg(long, default_value_t = ArenaConfig::DEFAULT_HEAP_SIZE, env = "RAMFS_HEAP_SIZE")]
    heap_size: usize,

    /// Start with an empty table instead of the sample files
    #[arg(long)]
    no_samples: bool,

    /// Log level for ramfs crates (trace, debug, info, warn, error);
    /// ignored when RUST_LOG is set
    #[arg(long, default_value = "info", env = "RAMFS_LOG")]
    log_level: String,

    /// Echo typed input back, for raw terminals
    #[arg(long)]
    echo: bool,
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("ramfs={level}"))
            .with_context(|| format!("invalid log level '{level}'"))?,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = StorageConfig::with_heap_size(cli.heap_size);
    let mut table = FileTable::new(config).context("failed to create file table")?;
    info!(
        capacity = table.capacity(),
        heap = table.arena().capacity(),
        "file table ready"
    );

    if !cli.no_samples {
        if let Err(err) = seed_samples(&mut table) {
            warn!(error = %err, "could not create every sample file");
        }
    }

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut console = StdConsole::new(stdin, stdout);
    Shell::new(table)
        .with_echo(cli.echo)
        .run(&mut console)
        .context("console I/O failed")?;
    Ok(())
}
