use std::io::{BufRead, Lines};

use anyhow::{Context, Result};

use crate::annotations::models::GafRecord;

/// Streaming parser over the lines of a GAF file.
///
/// Comment lines (`!` prefix) and blank lines are consumed without being
/// yielded; everything else comes out as a record. The input is read
/// forward-only, one line at a time, so file size doesn't matter.
pub struct GafParser<B: BufRead> {
    lines: Lines<B>,
    delimiter: char,
    comments: u64,
    verbose: bool,
}

impl<B: BufRead> GafParser<B> {
    pub fn new(reader: B, delimiter: char, verbose: bool) -> Self {
        Self {
            lines: reader.lines(),
            delimiter,
            comments: 0,
            verbose,
        }
    }

    /// Number of comment lines consumed so far
    pub fn comments(&self) -> u64 {
        self.comments
    }
}

impl<B: BufRead> Iterator for GafParser<B> {
    type Item = Result<GafRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        // Lines.next() in a loop rather than a for-loop, so comment lines
        // can be dropped without recursing
        loop {
            let line = match self.lines.next() {
                None => return None,
                Some(l) => l.context("Error reading line from GAF input"),
            };

            let line = match line {
                Ok(l) => l,
                Err(e) => return Some(Err(e)),
            };

            if line.is_empty() {
                continue;
            }

            if line.starts_with('!') {
                self.comments += 1;
                continue;
            }

            if self.verbose {
                eprintln!("INFO VERBOSE: GAF line parsed: {line}");
            }

            return Some(Ok(GafRecord::parse(&line, self.delimiter)));
        }
    }
}
