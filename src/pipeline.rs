use anyhow::Result;
use rust_htslib::bam;
use rust_htslib::bam::Read as HtsRead;

#[derive(Debug, Default)]
pub struct Stats {
    pub total_records: u64,
    pub records_changed: u64,
}

/// Clear the masked bits from a FLAG value. A mask of 0 is a no-op.
#[inline]
pub fn clear_flags(flags: u16, mask: u16) -> u16 {
    flags & !mask
}

/// Stream records from `reader` to `writer`, clearing `mask` from every FLAG.
///
/// Single forward pass with one record resident at a time. Record order is
/// preserved and no field other than FLAG is touched.
pub fn run(reader: &mut bam::Reader, writer: &mut bam::Writer, mask: u16) -> Result<Stats> {
    let mut stats = Stats::default();
    for result in reader.records() {
        let mut record = result?;
        stats.total_records += 1;

        let flags = record.flags();
        let cleared = clear_flags(flags, mask);
        if cleared != flags {
            stats.records_changed += 1;
        }
        record.set_flags(cleared);
        writer.write(&record)?;
    }
    Ok(stats)
}
