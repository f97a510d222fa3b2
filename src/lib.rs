//! clearflag-rs: clear SAM flag bits from every record of a BAM stream.
//!
//! # Library usage
//!
//! ```no_run
//! use clearflag_rs::{build_output_header, run};
//! use rust_htslib::bam::{self, Format, Read as _};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut reader = bam::Reader::from_path("in.bam")?;
//!
//! // Clear the duplicate bit (0x400) from every record.
//! let argv: Vec<String> = std::env::args().collect();
//! let header = build_output_header(reader.header(), 0x400, &argv);
//!
//! let mut writer = bam::Writer::from_path("out.bam", &header, Format::Bam)?;
//! let stats = run(&mut reader, &mut writer, 0x400)?;
//! eprintln!("{} of {} records changed", stats.records_changed, stats.total_records);
//! # Ok(())
//! # }
//! ```

// Internal modules, not part of the public API.
pub(crate) mod bam_input;
pub(crate) mod cli;
pub(crate) mod header;
pub(crate) mod pipeline;

// Flat re-exports for the most commonly used public items.
pub use header::{build_output_header, PROGRAM_NAME, VERSION};
pub use pipeline::{clear_flags, run, Stats};
