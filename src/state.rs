use crate::data::filter::{filter_records, RangeFilter};
use crate::data::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Everything one run holds in memory, independent of the terminal.
#[derive(Debug, Default)]
pub struct AppState {
    /// Loaded dataset (None until a file is read).
    pub dataset: Option<Dataset>,

    /// The active range filter.
    pub filter: Option<RangeFilter>,

    /// Records passing `filter`, in file order (cached).
    pub filtered: Vec<Record>,
}

impl AppState {
    /// Ingest a newly loaded dataset, clearing any previous filter.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.filter = None;
        self.filtered.clear();
        self.dataset = Some(dataset);
    }

    /// Apply `filter` to the loaded dataset and cache the result.
    pub fn apply_filter(&mut self, filter: RangeFilter) -> &[Record] {
        if filter.is_inverted() {
            log::warn!("Lower bound is above upper bound for {}, nothing can match", filter.field());
        }

        self.filtered = match &self.dataset {
            Some(ds) => filter_records(&ds.records, &filter),
            None => Vec::new(),
        };
        self.filter = Some(filter);

        log::info!(
            "{} of {} records match the {} range",
            self.filtered.len(),
            self.dataset.as_ref().map_or(0, Dataset::len),
            filter.field()
        );
        &self.filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_line;

    #[test]
    fn filter_without_dataset_is_empty() {
        let mut state = AppState::default();
        assert!(state.apply_filter(RangeFilter::Year { lower: 0, upper: 3000 }).is_empty());
        assert!(state.filter.is_some());
    }

    #[test]
    fn new_dataset_resets_filter() {
        let mut state = AppState::default();
        state.set_dataset(Dataset {
            header: Some("h".into()),
            records: vec![parse_line("A\t1\tValid\tL6\t21\tFell\t1880")],
        });
        assert_eq!(state.apply_filter(RangeFilter::Mass { lower: 0.0, upper: 50.0 }).len(), 1);

        state.set_dataset(Dataset::default());
        assert!(state.filter.is_none());
        assert!(state.filtered.is_empty());
    }
}
