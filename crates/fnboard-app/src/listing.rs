// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{FunctionRecord, RowKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow<'a> {
    pub key: RowKey,
    pub record: &'a FunctionRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderResult<'a> {
    Loading,
    Empty,
    Rows(Vec<ListRow<'a>>),
}

impl<'a> RenderResult<'a> {
    pub fn rows(&self) -> &[ListRow<'a>] {
        match self {
            Self::Rows(rows) => rows.as_slice(),
            Self::Loading | Self::Empty => &[],
        }
    }
}

/// Projects the record list into what the function table shows.
///
/// Loading wins over everything; an empty source list is `Empty` even while a
/// filter is active. A filter that excludes every record yields `Rows([])`.
pub fn render_listing<'a, P>(
    records: &'a [FunctionRecord],
    is_loading: bool,
    predicate: P,
) -> RenderResult<'a>
where
    P: Fn(&str) -> bool,
{
    if is_loading {
        return RenderResult::Loading;
    }
    if records.is_empty() {
        return RenderResult::Empty;
    }

    RenderResult::Rows(
        records
            .iter()
            .filter(|record| predicate(&record.git_owner))
            .map(|record| ListRow {
                key: record.row_key(),
                record,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::{RenderResult, render_listing};
    use crate::{FunctionRecord, OwnerFilter};

    fn record(name: &str, sha: &str, owner: &str) -> FunctionRecord {
        FunctionRecord {
            name: name.to_owned(),
            short_sha: sha.to_owned(),
            git_owner: owner.to_owned(),
            git_repo: String::new(),
            deployed_at: None,
            invocation_count: 0,
            replicas: 1,
            available_replicas: 1,
        }
    }

    #[test]
    fn empty_list_renders_empty() {
        assert_eq!(render_listing(&[], false, |_| true), RenderResult::Empty);
        assert_eq!(render_listing(&[], false, |_| false), RenderResult::Empty);
    }

    #[test]
    fn loading_wins_over_records() {
        let records = vec![record("a", "1", "acme"), record("b", "2", "globex")];
        assert_eq!(render_listing(&records, true, |_| true), RenderResult::Loading);
        assert_eq!(render_listing(&[], true, |_| true), RenderResult::Loading);
    }

    #[test]
    fn predicate_selects_rows_in_order() {
        let records = vec![
            record("r1", "1", "A"),
            record("r2", "2", "B"),
            record("r3", "3", "A"),
        ];
        let result = render_listing(&records, false, |owner| owner == "A");
        let names = result
            .rows()
            .iter()
            .map(|row| row.record.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["r1", "r3"]);
        assert_eq!(result.rows()[0].key.to_string(), "1r1");
    }

    #[test]
    fn filter_excluding_everything_is_not_empty() {
        let records = vec![record("r1", "1", "A")];
        let filter = OwnerFilter::restore("B", "B", None);
        let result = render_listing(&records, false, |owner| filter.matches(owner));
        assert_eq!(result, RenderResult::Rows(Vec::new()));
    }

    #[test]
    fn duplicate_keys_are_kept() {
        let records = vec![record("same", "1", "A"), record("same", "1", "A")];
        let result = render_listing(&records, false, |_| true);
        assert_eq!(result.rows().len(), 2);
        assert_eq!(result.rows()[0].key, result.rows()[1].key);
    }
}
