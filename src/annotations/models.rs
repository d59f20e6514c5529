/// Column names of the 17 GAF 2.x fields, by position
pub const GAF_COLUMNS: [&str; 17] = [
    "DB",
    "DB_Object_ID",
    "DB_Object_Symbol",
    "Qualifier",
    "GO_ID",
    "DB_Reference",
    "Evidence_Code",
    "With_or_From",
    "Aspect",
    "DB_Object_Name",
    "DB_Object_Synonym",
    "DB_Object_Type",
    "Taxon",
    "Date",
    "Assigned_By",
    "Annotation_Extension",
    "Gene_Product_Form_ID",
];

pub const DB_INDEX: usize = 0;
pub const QUALIFIER_INDEX: usize = 3;
pub const ASPECT_INDEX: usize = 8;

/// One annotation line, split into its fields.
///
/// The split is strict on the configured delimiter: fields containing
/// spaces (With_or_From, DB_Object_Synonym) stay intact, and empty
/// columns are preserved as empty fields.
#[derive(Debug)]
pub struct GafRecord {
    fields: Vec<String>,
}

impl GafRecord {
    pub fn parse(line: &str, delimiter: char) -> Self {
        GafRecord {
            fields: line.split(delimiter).map(String::from).collect(),
        }
    }

    /// Field at `index`, or None past the end of the record
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Copy of the fields at `indices`, in that order.
    /// None as soon as any index falls outside the record.
    pub fn project(&self, indices: &[usize]) -> Option<Vec<&str>> {
        indices.iter().map(|&i| self.field(i)).collect()
    }
}
