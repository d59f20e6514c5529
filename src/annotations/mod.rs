use std::io::{BufRead, Write};

use anyhow::{Context, Result};

pub mod annotation_writer;
pub mod filter;
pub mod gaf_parser;
pub mod models;
pub mod utils;

use self::annotation_writer::AnnotationWriter;
use self::filter::AnnotationFilter;
use self::gaf_parser::GafParser;

/// Counters reported after a filtering pass
#[derive(Debug, Default)]
pub struct RunStats {
    pub records: u64,
    pub comments: u64,
    pub matched: u64,
    pub malformed: u64,
}

/// Run a single filtering pass: records the filter rejects are dropped,
/// the rest are projected into the writer.
///
/// Records with fewer fields than the filter or the projection reference
/// are counted as malformed and never produce output.
pub fn filter_annotations<B: BufRead, W: Write>(
    parser: &mut GafParser<B>,
    filter: &AnnotationFilter,
    writer: &mut AnnotationWriter<W>,
    verbose: bool,
) -> Result<RunStats> {
    let mut stats = RunStats::default();
    let required_fields = filter.required_fields().max(writer.required_fields());

    loop {
        let record = match parser.next() {
            None => break,
            Some(r) => r.context("Error reading record from GAF input")?,
        };
        stats.records += 1;

        if record.field_count() < required_fields {
            stats.malformed += 1;
            if verbose {
                eprintln!(
                    "INFO VERBOSE: skipped record with {} fields ({} required)",
                    record.field_count(),
                    required_fields
                );
            }
            continue;
        }

        if !filter.matches(&record) {
            continue;
        }

        if writer
            .write_record(&record)
            .context("Error writing projected record")?
        {
            stats.matched += 1;
        } else {
            stats.malformed += 1;
        }
    }

    stats.comments = parser.comments();

    Ok(stats)
}
