// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

/// Number of positional fields in every record.
pub const FIELD_COUNT: usize = 12;

/// Spreadsheet header, in record field order.
pub const COLUMN_HEADERS: [&str; FIELD_COUNT] = [
    "NAME",
    "ID",
    "NAMETYPE",
    "RECCLASS",
    "MASS (g)",
    "FALL",
    "YEAR",
    "RECLAT",
    "RECLONG",
    "GEOLOCATION",
    "STATES",
    "COUNTIES",
];

// ---------------------------------------------------------------------------
// Record – one row of the source file
// ---------------------------------------------------------------------------

/// A single meteorite landing entry.
///
/// Every field is kept as the text found in the file. Mass and year are
/// only interpreted as numbers by the filter, never stored back here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub id: String,
    pub name_type: String,
    pub rec_class: String,
    /// Mass in grams.
    pub mass: String,
    pub fall: String,
    pub year: String,
    pub rec_lat: String,
    pub rec_long: String,
    pub geo_location: String,
    pub states: String,
    pub counties: String,
}

impl Record {
    /// Build a record from its fields in file order.
    pub fn from_fields(fields: [String; FIELD_COUNT]) -> Self {
        let [
            name,
            id,
            name_type,
            rec_class,
            mass,
            fall,
            year,
            rec_lat,
            rec_long,
            geo_location,
            states,
            counties,
        ] = fields;
        Record {
            name,
            id,
            name_type,
            rec_class,
            mass,
            fall,
            year,
            rec_lat,
            rec_long,
            geo_location,
            states,
            counties,
        }
    }

    /// Borrow the fields in file order (matches [`COLUMN_HEADERS`]).
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            self.name.as_str(),
            self.id.as_str(),
            self.name_type.as_str(),
            self.rec_class.as_str(),
            self.mass.as_str(),
            self.fall.as_str(),
            self.year.as_str(),
            self.rec_lat.as_str(),
            self.rec_long.as_str(),
            self.geo_location.as_str(),
            self.states.as_str(),
            self.counties.as_str(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All records of one input file, in file order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// The skipped first line, if the file had one.
    pub header: Option<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_follow_header_order() {
        let fields: [String; FIELD_COUNT] = std::array::from_fn(|i| format!("f{i}"));
        let record = Record::from_fields(fields);

        assert_eq!(record.name, "f0");
        assert_eq!(record.mass, "f4");
        assert_eq!(record.year, "f6");
        assert_eq!(record.counties, "f11");

        let borrowed = record.fields();
        for (i, value) in borrowed.iter().enumerate() {
            assert_eq!(*value, format!("f{i}"));
        }
        assert_eq!(COLUMN_HEADERS[4], "MASS (g)");
        assert_eq!(COLUMN_HEADERS[6], "YEAR");
    }

    #[test]
    fn empty_dataset() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.len(), 0);
        assert!(ds.header.is_none());
    }
}
