use crate::annotations::models::{GafRecord, ASPECT_INDEX, DB_INDEX, QUALIFIER_INDEX};

/// Conjunctive equality filter over the DB, Qualifier and Aspect columns
/// of a GAF record.
#[derive(Debug, Clone)]
pub struct AnnotationFilter {
    db: String,
    qualifier: String,
    aspect: String,
}

impl AnnotationFilter {
    pub fn new(db: String, qualifier: String, aspect: String) -> Self {
        AnnotationFilter {
            db,
            qualifier,
            aspect,
        }
    }

    /// Lowest field count a record needs before the filter can be evaluated
    pub fn required_fields(&self) -> usize {
        ASPECT_INDEX + 1
    }

    /// A record too short to supply a tested column never matches.
    pub fn matches(&self, record: &GafRecord) -> bool {
        record.field(DB_INDEX) == Some(self.db.as_str())
            && record.field(QUALIFIER_INDEX) == Some(self.qualifier.as_str())
            && record.field(ASPECT_INDEX) == Some(self.aspect.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_filter() -> AnnotationFilter {
        AnnotationFilter::new(
            "UniProtKB".to_string(),
            "enables".to_string(),
            "F".to_string(),
        )
    }

    fn record(db: &str, qualifier: &str, aspect: &str) -> GafRecord {
        let line = format!("{db}\tP12345\tSYM\t{qualifier}\tGO:0003674\tREF\tREF1\tW\t{aspect}");
        GafRecord::parse(&line, '\t')
    }

    #[test]
    fn all_three_columns_must_match() {
        let filter = default_filter();

        assert!(filter.matches(&record("UniProtKB", "enables", "F")));
        assert!(!filter.matches(&record("PDB", "enables", "F")));
        assert!(!filter.matches(&record("UniProtKB", "involved_in", "F")));
        assert!(!filter.matches(&record("UniProtKB", "enables", "P")));
    }

    #[test]
    fn comparison_is_exact() {
        let filter = default_filter();

        assert!(!filter.matches(&record("uniprotkb", "enables", "F")));
        assert!(!filter.matches(&record("UniProtKB", "enables", "F ")));
    }

    #[test]
    fn short_records_never_match() {
        let filter = default_filter();
        let record = GafRecord::parse("UniProtKB\tP12345\tSYM\tenables", '\t');

        assert!(!filter.matches(&record));
    }

    #[test]
    fn required_fields_covers_the_aspect_column() {
        assert_eq!(default_filter().required_fields(), 9);
    }
}
