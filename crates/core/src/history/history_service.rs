//! Predicate filtering, substring search, and pagination over history
//! records.
//!
//! Callers compose `filter -> search -> sort_by_timestamp_desc -> paginate`
//! in that order for stable, deterministic result pages;
//! [`query_history`] applies the full chain.

use super::history_model::FilterCriteria;
use super::history_traits::HistoryRecord;

/// Keeps records matching every present criterion (AND combination).
pub fn filter<R>(records: &[R], criteria: &FilterCriteria<R::Kind, R::Status>) -> Vec<R>
where
    R: HistoryRecord + Clone,
{
    records
        .iter()
        .filter(|record| matches_criteria(*record, criteria))
        .cloned()
        .collect()
}

fn matches_criteria<R: HistoryRecord>(
    record: &R,
    criteria: &FilterCriteria<R::Kind, R::Status>,
) -> bool {
    if let Some(kinds) = &criteria.kinds {
        if !kinds.contains(&record.kind()) {
            return false;
        }
    }
    if let Some(statuses) = &criteria.statuses {
        if !statuses.contains(&record.status()) {
            return false;
        }
    }
    if let Some(from_date) = criteria.from_date {
        if record.timestamp() < from_date.timestamp() {
            return false;
        }
    }
    if let Some(to_date) = criteria.to_date {
        if record.timestamp() > to_date.timestamp() {
            return false;
        }
    }
    if let Some(addresses) = &criteria.addresses {
        let matches_endpoint = addresses.iter().any(|address| {
            address.eq_ignore_ascii_case(record.from_address())
                || address.eq_ignore_ascii_case(record.to_address())
        });
        if !matches_endpoint {
            return false;
        }
    }
    true
}

/// Case-insensitive substring match against endpoint addresses and each
/// record's searchable fields. A blank query returns the input unchanged.
pub fn search<R>(records: &[R], query: &str) -> Vec<R>
where
    R: HistoryRecord + Clone,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            let endpoints = [record.from_address(), record.to_address()];
            endpoints
                .into_iter()
                .chain(record.searchable_fields())
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Stable sort, newest first.
pub fn sort_by_timestamp_desc<R: HistoryRecord>(records: &mut [R]) {
    records.sort_by_key(|record| std::cmp::Reverse(record.timestamp()));
}

/// 1-indexed pagination. A page beyond the data, a zero page number, or a
/// zero page size all yield an empty slice; pagination never errors.
pub fn paginate<R>(records: &[R], page: usize, page_size: usize) -> &[R] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// Applies the full query chain: filter, search, newest-first sort, then
/// pagination.
pub fn query_history<R>(
    records: &[R],
    criteria: &FilterCriteria<R::Kind, R::Status>,
    query: &str,
    page: usize,
    page_size: usize,
) -> Vec<R>
where
    R: HistoryRecord + Clone,
{
    let filtered = filter(records, criteria);
    let mut matched = search(&filtered, query);
    sort_by_timestamp_desc(&mut matched);
    paginate(&matched, page, page_size).to_vec()
}
