//! Free-text search filtering applied to loaded collections.
//!
//! A list view narrows its collection by matching the query against a fixed
//! set of string-valued fields, OR-combined. Matching is case-insensitive
//! substring by default; individual fields can opt into prefix matching
//! (invoice amounts do, so searching "45" finds 4500 but not 1450).

/// How a single field is compared against the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Substring,
    Prefix,
}

/// One searchable field: an accessor producing the field's display string
/// plus the comparison mode for it.
pub struct SearchField<T> {
    pub accessor: fn(&T) -> String,
    pub mode: MatchMode,
}

impl<T> SearchField<T> {
    pub fn substring(accessor: fn(&T) -> String) -> Self {
        Self {
            accessor,
            mode: MatchMode::Substring,
        }
    }

    pub fn prefix(accessor: fn(&T) -> String) -> Self {
        Self {
            accessor,
            mode: MatchMode::Prefix,
        }
    }
}

/// Returns true when at least one field of `item` matches `query`.
///
/// The empty query matches every item, so an untouched search box is the
/// identity filter.
pub fn matches<T>(item: &T, query: &str, fields: &[SearchField<T>]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields.iter().any(|field| {
        let value = (field.accessor)(item).to_lowercase();
        match field.mode {
            MatchMode::Substring => value.contains(&needle),
            MatchMode::Prefix => value.starts_with(&needle),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Record {
        name: String,
        amount: f64,
    }

    fn fields() -> Vec<SearchField<Record>> {
        vec![
            SearchField::substring(|r: &Record| r.name.clone()),
            SearchField::prefix(|r: &Record| r.amount.to_string()),
        ]
    }

    fn record(name: &str, amount: f64) -> Record {
        Record {
            name: name.to_string(),
            amount,
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches(&record("Acme", 1.0), "", &fields()));
        assert!(matches(&record("", 0.0), "", &fields()));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let item = record("Acme Corp", 1.0);
        assert!(matches(&item, "ACME", &fields()));
        assert!(matches(&item, "acme", &fields()));
        assert!(matches(&item, "cOrP", &fields()));
    }

    #[test]
    fn substring_matches_in_the_middle() {
        assert!(matches(&record("Jean Dupont", 1.0), "dup", &fields()));
    }

    #[test]
    fn amount_matches_by_prefix_only() {
        assert!(matches(&record("x", 4500.0), "45", &fields()));
        assert!(matches(&record("x", 4500.0), "4500", &fields()));
        // "45" appears inside 1450 but not at the start.
        assert!(!matches(&record("x", 1450.0), "45", &fields()));
        assert!(!matches(&record("x", 4500.0), "501", &fields()));
        assert!(!matches(&record("x", 4500.0), "500", &fields()));
    }

    #[test]
    fn fields_are_or_combined() {
        let item = record("Acme", 4500.0);
        assert!(matches(&item, "acme", &fields()));
        assert!(matches(&item, "45", &fields()));
        assert!(!matches(&item, "zzz", &fields()));
    }
}
