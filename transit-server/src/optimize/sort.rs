//! Stable presentation ordering for station listings.

use std::cmp::Ordering;

use crate::domain::Station;

/// Sort stations by display name, ignoring case.
///
/// Top-down merge sort: O(n log n) time, O(n) extra space. Stations whose
/// names compare equal keep their input order.
pub fn sort_by_name(stations: Vec<Station>) -> Vec<Station> {
    merge_sort_by(stations, &mut |a: &Station, b: &Station| {
        compare_ignore_case(a.name(), b.name())
    })
}

/// Case-insensitive comparison on lowercased characters.
fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn merge_sort_by<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len().div_ceil(2));
    let left = merge_sort_by(items, compare);
    let right = merge_sort_by(right, compare);
    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // ties go left, which is what keeps the sort stable
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }

    merged
}
