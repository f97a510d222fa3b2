mod bam_input;
mod cli;
mod header;
mod pipeline;

use anyhow::Result;
use clap::Parser;
use mimalloc::MiMalloc;
use rust_htslib::bam::{self, Format, Read as HtsRead};
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    // Initialize tracing subscriber. Stdout carries the BAM stream, so all
    // logging goes to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().collect();
    let mut reader = bam_input::open_bam(&args.bam)?;
    let out_header = header::build_output_header(reader.header(), args.flag, &argv);
    let mut writer = bam::Writer::from_stdout(&out_header, Format::Bam)?;
    let stats = pipeline::run(&mut reader, &mut writer, args.flag)?;
    tracing::info!(
        total_records = stats.total_records,
        records_changed = stats.records_changed,
        flag = args.flag,
        "clearflag-rs: processing complete"
    );
    Ok(())
}
