use crate::summary::mode_of;
use crate::types::{Column, FrequencyRow, View};
use crate::util::{format_number, percent};
use std::collections::HashMap;

/// Presentation order for a frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Largest count first (channel chart).
    Descending,
    /// Smallest count first (horizontal category bars, top issue last).
    Ascending,
}

/// Counts of each distinct non-null value, in first-seen order.
pub fn tally<'a>(view: &View<'a>, column: Column) -> Vec<(&'a str, usize)> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for value in view.values(column) {
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }
    counts
}

/// One row per distinct non-null value of `column`. Equal counts keep
/// first-seen order when descending; ascending is the exact reverse, so the
/// top value is always the last row.
pub fn frequency_by(view: &View<'_>, column: Column, order: SortOrder) -> Vec<FrequencyRow> {
    let mut counts = tally(view, column);
    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    if order == SortOrder::Ascending {
        counts.reverse();
    }
    let non_null: usize = counts.iter().map(|(_, c)| c).sum();
    counts
        .into_iter()
        .map(|(value, count)| FrequencyRow {
            value: value.to_string(),
            count,
            share: format!("{}%", format_number(percent(count, non_null), 1)),
        })
        .collect()
}

/// Highest-count value of `column`, same tie rule as `mode_of`.
pub fn top_value<'a>(view: &View<'a>, column: Column) -> Option<&'a str> {
    mode_of(view, column)
}
