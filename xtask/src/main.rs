// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! fixed-trig repository maintenance tasks.
//!
//! This crate exists to provide a single, discoverable entrypoint for repo automation via
//! `cargo xtask …` (see `.cargo/config.toml`).
//!
//! Invariants:
//! - This is *not* production runtime code; it may use floating point and the filesystem.
//! - Generated artifacts must be byte-for-byte reproducible so `--check` can gate CI.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Number of interpolation segments in the quarter-wave table.
const SIN_QTR_SEGMENTS: u32 = 256;

/// Peak table amplitude (`2^31 - 1`).
const AMPLITUDE: f64 = 2_147_483_647.0;

/// Entries per row in the rendered table.
const ENTRIES_PER_ROW: usize = 6;

/// Table module path relative to the workspace root.
const TABLE_PATH: &str = "crates/fixed-trig/src/table.rs";

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "fixed-trig repo maintenance tasks (cargo xtask …)",
    disable_help_subcommand = true
)]
struct Cli {
    /// Log at DEBUG instead of INFO.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the quarter-wave sine table module.
    SinTable(SinTableArgs),
}

#[derive(Args)]
struct SinTableArgs {
    /// Fail instead of writing if the checked-in table differs from the generator output.
    #[arg(long)]
    check: bool,

    /// Output path (defaults to the fixed-trig table module).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    match cli.command {
        Commands::SinTable(args) => run_sin_table(args),
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

fn run_sin_table(args: SinTableArgs) -> Result<()> {
    let path = args
        .out
        .unwrap_or_else(|| workspace_root().join(TABLE_PATH));

    let entries = quarter_wave_entries()?;
    check_entries(&entries)?;
    debug!(
        first = entries.first().copied().unwrap_or_default(),
        last = entries.last().copied().unwrap_or_default(),
        count = entries.len(),
        "generated quarter-wave table"
    );
    let rendered = render_table(&entries);

    if args.check {
        let on_disk = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if on_disk != rendered {
            bail!(
                "{} is stale; run `cargo xtask sin-table` to regenerate",
                path.display()
            );
        }
        info!(path = %path.display(), "sin table is up to date");
        return Ok(());
    }

    fs::write(&path, rendered).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), entries = entries.len(), "wrote sin table");
    Ok(())
}

/// Samples `round(sin(i * PI / 512) * (2^31 - 1))` for `i` in `0..=256`.
fn quarter_wave_entries() -> Result<Vec<u32>> {
    (0..=SIN_QTR_SEGMENTS)
        .map(|i| {
            let theta = f64::from(i) * core::f64::consts::FRAC_PI_2 / f64::from(SIN_QTR_SEGMENTS);
            let scaled = libm::round(libm::sin(theta) * AMPLITUDE);
            if !(0.0..=AMPLITUDE).contains(&scaled) {
                bail!("entry {i} out of range: {scaled}");
            }
            // Range-checked above.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let entry = scaled as u32;
            Ok(entry)
        })
        .collect()
}

/// Enforces the invariants the interpolator relies on.
fn check_entries(entries: &[u32]) -> Result<()> {
    if entries.len() != SIN_QTR_SEGMENTS as usize + 1 {
        bail!("expected {} entries, got {}", SIN_QTR_SEGMENTS + 1, entries.len());
    }
    if entries.first() != Some(&0) {
        bail!("first entry must be 0");
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let peak = AMPLITUDE as u32;
    if entries.last() != Some(&peak) {
        bail!("last entry must be 2^31 - 1");
    }
    if let Some(i) = entries.windows(2).position(|w| w[1] < w[0]) {
        bail!("table decreases between entries {i} and {}", i + 1);
    }
    Ok(())
}

fn format_entry(entry: u32) -> String {
    format!("0x{:04x}_{:04x}", entry >> 16, entry & 0xffff)
}

fn render_table(entries: &[u32]) -> String {
    let mut out = String::new();
    out.push_str("// SPDX-License-Identifier: Apache-2.0\n");
    out.push_str("// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>\n");
    out.push_str("//! Quarter-wave sine table.\n");
    out.push_str("//!\n");
    out.push_str("//! @generated by `cargo xtask sin-table`. Do not edit by hand.\n");
    out.push_str("//!\n");
    out.push_str(
        "//! Entry `i` is `round(sin(i * PI / 512) * (2^31 - 1))` for `i` in `0..=256`.\n",
    );
    out.push_str(
        "//! The last entry is the quarter-wave endpoint, so the pair `(i, i + 1)` is in\n",
    );
    out.push_str("//! bounds for every 8-bit index `i`.\n");
    out.push('\n');
    out.push_str("/// Number of interpolation segments spanning `[0, PI/2]`.\n");
    out.push_str(&format!(
        "pub(crate) const SIN_QTR_SEGMENTS: usize = {SIN_QTR_SEGMENTS};\n"
    ));
    out.push('\n');
    out.push_str("/// `sin` sampled over `[0, PI/2]`, in units of `2^31 - 1`.\n");
    out.push_str("#[rustfmt::skip]\n");
    out.push_str("pub(crate) const SIN_QTR_TABLE: [u32; SIN_QTR_SEGMENTS + 1] = [\n");
    for row in entries.chunks(ENTRIES_PER_ROW) {
        let cells: Vec<String> = row.iter().copied().map(format_entry).collect();
        out.push_str("    ");
        out.push_str(&cells.join(", "));
        out.push_str(",\n");
    }
    out.push_str("];\n");
    out
}
