use rust_htslib::bam::header::HeaderRecord;
use rust_htslib::bam::{Header, HeaderView};

/// Tool name reported in the appended @PG entry (PN tag).
pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

/// Tool version reported in the appended @PG entry (VN tag).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Copy the input header and append one @PG provenance entry.
///
/// All existing header lines, prior @PG entries included, are carried over
/// unchanged. The entry ID embeds the literal mask value so invocations with
/// different masks stay distinguishable in the program chain.
pub fn build_output_header(template: &HeaderView, mask: u16, argv: &[String]) -> Header {
    let mut header = Header::from_template(template);
    let mut pg = HeaderRecord::new(b"PG");
    pg.push_tag(b"ID", format!("clearFlag_{mask}"));
    pg.push_tag(b"PN", PROGRAM_NAME);
    pg.push_tag(b"VN", VERSION);
    pg.push_tag(b"CL", argv.join(" "));
    header.push_record(&pg);
    header
}
