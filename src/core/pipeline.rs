//! List filter/sort pipeline
//!
//! Produces a filtered, ordered view of a fetched record snapshot without
//! mutating the input. The pipeline is a pure, total function: records come
//! from a partially loaded view model, so absent or malformed optional
//! inputs degrade to no-ops instead of errors.

use std::cmp::Ordering;

use crate::core::record::GroupRecord;
use crate::core::sort::{SortDirection, SortDirective, SortField};

/// Filter and order one record snapshot
///
/// Filtering first drops records whose group bag is still unmaterialized,
/// then (for a non-empty `query`) keeps records whose group name contains
/// the query case-insensitively, preserving input order. When `order`
/// parses to a known directive the surviving records are sorted stably;
/// an unknown field leaves the filtered order untouched.
pub fn filter_and_sort(
    records: &[GroupRecord],
    query: Option<&str>,
    order: Option<&str>,
) -> Vec<GroupRecord> {
    let needle = query.map(str::to_lowercase).filter(|q| !q.is_empty());

    let mut view: Vec<GroupRecord> = records
        .iter()
        .filter(|record| {
            let Some(group) = &record.group else {
                return false;
            };
            match &needle {
                Some(q) => group.name.to_lowercase().contains(q.as_str()),
                None => true,
            }
        })
        .cloned()
        .collect();

    if let Some(directive) = order.and_then(SortDirective::parse) {
        // sort_by is stable; equal keys keep their filtered order
        view.sort_by(|a, b| compare(a, b, directive));
    }

    view
}

fn compare(a: &GroupRecord, b: &GroupRecord, directive: SortDirective) -> Ordering {
    let ordering = match directive.field {
        SortField::Name => a
            .group_name()
            .to_lowercase()
            .cmp(&b.group_name().to_lowercase()),
        SortField::Customers => a.customer_count().cmp(&b.customer_count()),
    };

    match directive.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{CustomerRef, GroupInfo};
    use uuid::Uuid;

    fn named(name: &str) -> GroupRecord {
        GroupRecord::new(Some(GroupInfo::new(name)))
    }

    fn with_members(name: &str, count: usize) -> GroupRecord {
        let customers = (0..count).map(|_| CustomerRef::new(Uuid::new_v4())).collect();
        GroupRecord::new(Some(GroupInfo::with_customers(name, customers)))
    }

    fn names(view: &[GroupRecord]) -> Vec<&str> {
        view.iter().map(|r| r.group_name()).collect()
    }

    #[test]
    fn test_unmaterialized_records_always_excluded() {
        let records = vec![named("Alpha"), GroupRecord::new(None), named("Beta")];

        let view = filter_and_sort(&records, None, None);
        assert_eq!(names(&view), vec!["Alpha", "Beta"]);

        let view = filter_and_sort(&records, Some("a"), Some("-name"));
        assert!(view.iter().all(|r| r.group.is_some()));
    }

    #[test]
    fn test_filter_case_insensitive_substring() {
        let records = vec![named("Alpha"), named("beta"), named("ALPHAbet")];
        let view = filter_and_sort(&records, Some("alpha"), None);
        // Survivors keep their input relative order
        assert_eq!(names(&view), vec!["Alpha", "ALPHAbet"]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let records = vec![named("Alpha"), named("Beta")];
        let view = filter_and_sort(&records, Some(""), None);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let records = vec![named("Charlie"), named("alice"), named("Bob")];
        let view = filter_and_sort(&records, None, Some("name"));
        assert_eq!(names(&view), vec!["alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_sort_by_name_descending() {
        let records = vec![named("Charlie"), named("alice"), named("Bob")];
        let view = filter_and_sort(&records, None, Some("-name"));
        assert_eq!(names(&view), vec!["Charlie", "Bob", "alice"]);
    }

    #[test]
    fn test_sort_by_customer_count() {
        let records = vec![
            with_members("three", 3),
            with_members("one", 1),
            with_members("two", 2),
        ];

        let view = filter_and_sort(&records, None, Some("customers"));
        assert_eq!(names(&view), vec!["one", "two", "three"]);

        let view = filter_and_sort(&records, None, Some("-customers"));
        assert_eq!(names(&view), vec!["three", "two", "one"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let records = vec![
            with_members("first", 1),
            with_members("second", 1),
            with_members("third", 1),
        ];

        let view = filter_and_sort(&records, None, Some("customers"));
        assert_eq!(names(&view), vec!["first", "second", "third"]);

        let view = filter_and_sort(&records, None, Some("-customers"));
        assert_eq!(names(&view), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unknown_sort_field_keeps_filtered_order() {
        let records = vec![named("Charlie"), named("alice"), named("Bob")];
        let view = filter_and_sort(&records, None, Some("unknown_field"));
        assert_eq!(names(&view), vec!["Charlie", "alice", "Bob"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let records = vec![named("Charlie"), named("alice"), named("Bob")];
        let snapshot = records.clone();
        let _ = filter_and_sort(&records, Some("a"), Some("-name"));
        assert_eq!(records, snapshot);
    }

    #[test]
    fn test_identical_inputs_produce_identical_output() {
        let records = vec![with_members("a", 2), with_members("b", 1), named("c")];
        let first = filter_and_sort(&records, Some("a"), Some("customers"));
        let second = filter_and_sort(&records, Some("a"), Some("customers"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_yields_empty_view() {
        let view = filter_and_sort(&[], Some("x"), Some("name"));
        assert!(view.is_empty());
    }
}
