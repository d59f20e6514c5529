use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use goa_filter::annotations::annotation_writer::AnnotationWriter;
use goa_filter::annotations::filter::AnnotationFilter;
use goa_filter::annotations::filter_annotations;
use goa_filter::annotations::gaf_parser::GafParser;
use goa_filter::annotations::utils::now_str;
use goa_filter::utils::files::open_read;

fn main() -> Result<()> {
    let args = Cli::parse();

    let reader = open_read(&args.input)?;
    let mut parser = GafParser::new(reader, args.delimiter, args.verbose);
    let filter = AnnotationFilter::new(args.db, args.qualifier, args.aspect);
    let mut writer = AnnotationWriter::from_path(&args.output, args.projection)
        .context("Unable to instantiate AnnotationWriter")?;

    if args.header {
        writer.write_header().context("Error writing output header")?;
    }

    let stats = filter_annotations(&mut parser, &filter, &mut writer, args.verbose)
        .context("Error filtering annotations")?;

    writer.finish().context("Error finishing output file")?;

    eprintln!(
        "[{}] done: {} records read, {} matched, {} comment lines skipped, {} malformed records skipped",
        now_str(),
        stats.records,
        stats.matched,
        stats.comments,
        stats.malformed
    );

    Ok(())
}

#[derive(Parser, Debug)]
struct Cli {
    /// GAF input file
    #[clap(short, long)]
    input: PathBuf,

    /// Filtered TSV output file, created or truncated
    #[clap(short, long)]
    output: PathBuf,

    /// Required value of the DB column
    #[clap(long, default_value = "UniProtKB")]
    db: String,

    /// Required value of the Qualifier column
    #[clap(long, default_value = "enables")]
    qualifier: String,

    /// Required value of the Aspect column
    #[clap(long, default_value = "F")]
    aspect: String,

    /// Zero-based columns to copy to the output, in order
    #[clap(long, value_delimiter = ',', default_value = "1,4,6")]
    projection: Vec<usize>,

    /// Field delimiter of the input file
    #[clap(long, default_value_t = '\t')]
    delimiter: char,

    /// Write a header line naming the projected columns
    #[clap(long, default_value_t = false)]
    header: bool,

    /// Enable verbose mode
    #[clap(short, long, default_value_t = false)]
    verbose: bool,
}
