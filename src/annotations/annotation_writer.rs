use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::annotations::models::{GafRecord, GAF_COLUMNS};
use crate::utils::files::open_write;

/// Writes the configured projection of matching records as TSV lines.
pub struct AnnotationWriter<W: Write> {
    output: W,
    projection: Vec<usize>,
    written: u64,
}

impl AnnotationWriter<BufWriter<File>> {
    /// Open `pb` for writing, truncating any previous content
    pub fn from_path(pb: &PathBuf, projection: Vec<usize>) -> Result<Self> {
        let output = open_write(pb).context("Unable to open output file")?;
        Ok(Self::new(output, projection))
    }
}

impl<W: Write> AnnotationWriter<W> {
    pub fn new(output: W, projection: Vec<usize>) -> Self {
        AnnotationWriter {
            output,
            projection,
            written: 0,
        }
    }

    /// Lowest field count a record needs to fill the whole projection
    pub fn required_fields(&self) -> usize {
        self.projection.iter().map(|&i| i + 1).max().unwrap_or(0)
    }

    /// Write a header line naming the projected columns.
    /// Indices past the documented GAF columns get a positional name.
    pub fn write_header(&mut self) -> Result<()> {
        let names: Vec<String> = self
            .projection
            .iter()
            .map(|&i| match GAF_COLUMNS.get(i) {
                Some(name) => name.to_string(),
                None => format!("Column_{i}"),
            })
            .collect();

        writeln!(&mut self.output, "{}", names.join("\t")).context("Error writing TSV header")?;

        Ok(())
    }

    /// Project a record into one output line.
    /// Ok(false) when the record is too short for the projection; nothing
    /// is written in that case.
    pub fn write_record(&mut self, record: &GafRecord) -> Result<bool> {
        let fields = match record.project(&self.projection) {
            None => return Ok(false),
            Some(f) => f,
        };

        writeln!(&mut self.output, "{}", fields.join("\t")).context("Error writing to TSV")?;
        self.written += 1;

        Ok(true)
    }

    /// Number of record lines written (the header is not counted)
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.output.flush().context("Error flushing output")?;
        Ok(self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "UniProtKB\tP12345\tSYM\tenables\tGO:0003674\tREF\tREF1\tW\tF";

    #[test]
    fn records_are_projected_and_tab_joined() {
        let mut writer = AnnotationWriter::new(Vec::new(), vec![1, 4, 6]);
        let record = GafRecord::parse(LINE, '\t');

        assert!(writer.write_record(&record).unwrap());
        assert_eq!(writer.written(), 1);

        let output = writer.finish().unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "P12345\tGO:0003674\tREF1\n");
    }

    #[test]
    fn short_records_produce_no_output() {
        let mut writer = AnnotationWriter::new(Vec::new(), vec![1, 4, 6]);
        let record = GafRecord::parse("UniProtKB\tP12345", '\t');

        assert!(!writer.write_record(&record).unwrap());
        assert_eq!(writer.written(), 0);

        let output = writer.finish().unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn header_names_the_projected_columns() {
        let mut writer = AnnotationWriter::new(Vec::new(), vec![1, 4, 6]);
        writer.write_header().unwrap();

        let output = writer.finish().unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "DB_Object_ID\tGO_ID\tDB_Reference\n"
        );
    }

    #[test]
    fn header_falls_back_to_positional_names() {
        let mut writer = AnnotationWriter::new(Vec::new(), vec![0, 20]);
        writer.write_header().unwrap();

        let output = writer.finish().unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "DB\tColumn_20\n");
    }

    #[test]
    fn required_fields_follows_the_highest_index() {
        assert_eq!(AnnotationWriter::new(Vec::new(), vec![1, 4, 6]).required_fields(), 7);
        assert_eq!(AnnotationWriter::new(Vec::new(), vec![13, 1]).required_fields(), 14);
        assert_eq!(AnnotationWriter::new(Vec::new(), vec![]).required_fields(), 0);
    }
}
