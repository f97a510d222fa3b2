// bam_input.rs is used only by the binary (BAM I/O path).
#![allow(dead_code)]
use anyhow::{Context, Result};
use rust_htslib::bam;
use std::path::Path;

/// Open the input BAM for a single forward pass.
///
/// A path of `-` reads the stream from standard input, so the tool can sit
/// in the middle of a pipe.
pub fn open_bam(path: &Path) -> Result<bam::Reader> {
    if path == Path::new("-") {
        return bam::Reader::from_stdin().context("failed to open BAM on stdin");
    }
    bam::Reader::from_path(path)
        .with_context(|| format!("failed to open BAM {}", path.display()))
}
