use std::fmt;
use std::str::FromStr;

use crate::error::ParseFieldError;

use super::model::Record;

// ---------------------------------------------------------------------------
// Field selector
// ---------------------------------------------------------------------------

/// The record field a range filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Mass,
    Year,
}

impl FilterField {
    /// Map the interactive menu entry (`1` = mass, `2` = year).
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(FilterField::Mass),
            "2" => Some(FilterField::Year),
            _ => None,
        }
    }

    /// Unit label used in prompts.
    pub fn label(self) -> &'static str {
        match self {
            FilterField::Mass => "mass (g)",
            FilterField::Year => "year",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterField::Mass => write!(f, "mass"),
            FilterField::Year => write!(f, "year"),
        }
    }
}

impl FromStr for FilterField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mass" => Ok(FilterField::Mass),
            "year" => Ok(FilterField::Year),
            _ => Err(ParseFieldError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Range predicate
// ---------------------------------------------------------------------------

/// Inclusive numeric range on one field.
///
/// Bound ordering is not checked: `lower > upper` simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeFilter {
    Mass { lower: f64, upper: f64 },
    Year { lower: i64, upper: i64 },
}

impl RangeFilter {
    pub fn field(&self) -> FilterField {
        match self {
            RangeFilter::Mass { .. } => FilterField::Mass,
            RangeFilter::Year { .. } => FilterField::Year,
        }
    }

    /// Whether `lower` is above `upper`.
    pub fn is_inverted(&self) -> bool {
        match *self {
            RangeFilter::Mass { lower, upper } => lower > upper,
            RangeFilter::Year { lower, upper } => lower > upper,
        }
    }

    /// A record matches when its field is pure-digit text whose value lies
    /// in the range. Anything else is skipped, never an error.
    pub fn matches(&self, record: &Record) -> bool {
        match *self {
            RangeFilter::Mass { lower, upper } => parse_digits::<f64>(&record.mass)
                .is_some_and(|mass| lower <= mass && mass <= upper),
            // Digit strings beyond i64 fail to parse and exceed any bound anyway.
            RangeFilter::Year { lower, upper } => parse_digits::<i64>(&record.year)
                .is_some_and(|year| lower <= year && year <= upper),
        }
    }
}

/// Non-empty and ASCII digits only: no sign, decimal point or exponent.
pub fn is_pure_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if is_pure_digits(s) {
        s.parse().ok()
    } else {
        None
    }
}

/// Return the records that pass `filter`, in input order.
pub fn filter_records(records: &[Record], filter: &RangeFilter) -> Vec<Record> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_line;

    fn record(name: &str, mass: &str, year: &str) -> Record {
        Record {
            name: name.to_string(),
            mass: mass.to_string(),
            year: year.to_string(),
            ..Record::default()
        }
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn aachen_mass_range() {
        let aachen = parse_line("Aachen\t1\tValid\tL6\t21\tFell\t1880\t50.775\t6.08333\t\t\t");
        let records = vec![aachen];

        let hit = filter_records(&records, &RangeFilter::Mass { lower: 10.0, upper: 30.0 });
        assert_eq!(names(&hit), ["Aachen"]);

        let miss = filter_records(&records, &RangeFilter::Mass { lower: 100.0, upper: 200.0 });
        assert!(miss.is_empty());
    }

    #[test]
    fn mass_bounds_are_inclusive() {
        let records = vec![
            record("low", "10", ""),
            record("high", "30", ""),
            record("out", "31", ""),
        ];
        let hit = filter_records(&records, &RangeFilter::Mass { lower: 10.0, upper: 30.0 });
        assert_eq!(names(&hit), ["low", "high"]);
    }

    #[test]
    fn non_digit_mass_is_skipped() {
        let records = vec![
            record("decimal", "1500.5", ""),
            record("unknown", "Unknown", ""),
            record("empty", "", ""),
            record("negative", "-5", ""),
            record("exp", "1e3", ""),
            record("spaced", " 12", ""),
        ];
        let hit = filter_records(
            &records,
            &RangeFilter::Mass {
                lower: f64::NEG_INFINITY,
                upper: f64::INFINITY,
            },
        );
        assert!(hit.is_empty());
    }

    #[test]
    fn year_filter_uses_integers() {
        let records = vec![
            record("a", "", "1880"),
            record("b", "", ""),
            record("c", "", "1951"),
            record("d", "", "1990.0"),
            record("e", "", "2001"),
        ];
        let hit = filter_records(&records, &RangeFilter::Year { lower: 1800, upper: 2000 });
        assert_eq!(names(&hit), ["a", "c"]);
    }

    #[test]
    fn huge_year_is_excluded() {
        let records = vec![record("big", "", "99999999999999999999999")];
        let hit = filter_records(
            &records,
            &RangeFilter::Year {
                lower: 0,
                upper: i64::MAX,
            },
        );
        assert!(hit.is_empty());
    }

    #[test]
    fn preserves_order_without_duplicates() {
        let records: Vec<Record> = (0..20)
            .map(|i| record(&format!("r{i}"), &(i * 10).to_string(), ""))
            .collect();
        let hit = filter_records(&records, &RangeFilter::Mass { lower: 35.0, upper: 125.0 });
        assert_eq!(names(&hit), ["r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11", "r12"]);
    }

    #[test]
    fn inverted_bounds_match_nothing() {
        let filter = RangeFilter::Year { lower: 2000, upper: 1900 };
        assert!(filter.is_inverted());
        assert!(filter_records(&[record("x", "", "1950")], &filter).is_empty());
    }

    #[test]
    fn pure_digit_check() {
        assert!(is_pure_digits("0"));
        assert!(is_pure_digits("007"));
        assert!(!is_pure_digits(""));
        assert!(!is_pure_digits("+1"));
        assert!(!is_pure_digits("1,000"));
        assert!(!is_pure_digits("١٢"));
    }

    #[test]
    fn field_names_and_menu() {
        assert_eq!("mass".parse::<FilterField>(), Ok(FilterField::Mass));
        assert_eq!(" YEAR ".parse::<FilterField>(), Ok(FilterField::Year));
        assert_eq!(
            "fall".parse::<FilterField>(),
            Err(ParseFieldError("fall".to_string()))
        );

        assert_eq!(FilterField::from_menu_choice("1"), Some(FilterField::Mass));
        assert_eq!(FilterField::from_menu_choice("2\n"), Some(FilterField::Year));
        assert_eq!(FilterField::from_menu_choice("3"), None);
        assert_eq!(RangeFilter::Year { lower: 0, upper: 1 }.field(), FilterField::Year);
        assert_eq!(FilterField::Mass.to_string(), "mass");
    }
}
