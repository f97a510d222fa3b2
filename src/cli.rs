// cli.rs is used only by the binary.
#![allow(dead_code)]
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "clearflag-rs",
    about = "Clear SAM flag bits from every record of a BAM, streaming the result to stdout",
    version
)]
pub struct Args {
    /// Input BAM ('-' reads from standard input)
    pub bam: PathBuf,

    /// SAM flag bitmask to clear from every record
    pub flag: u16,
}
