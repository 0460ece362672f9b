use crate::category::tally;
use crate::types::{Column, Scorecard, TrendPoint, View};
use crate::util::period_label;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Shown in place of a scalar metric when the view has no rows.
pub const EMPTY_SENTINEL: &str = "-";

pub fn total_count(view: &View<'_>) -> usize {
    view.len()
}

/// Most frequent non-null value of `column`. Ties go to the value that
/// appears first in row order.
pub fn mode_of<'a>(view: &View<'a>, column: Column) -> Option<&'a str> {
    let mut best: Option<(&'a str, usize)> = None;
    for (value, count) in tally(view, column) {
        match best {
            Some((_, top)) if top >= count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

/// `mode_of` rendered for display, with the empty-state sentinel.
pub fn mode_or_sentinel(view: &View<'_>, column: Column) -> String {
    mode_of(view, column)
        .unwrap_or(EMPTY_SENTINEL)
        .to_string()
}

/// Report counts per calendar month, oldest first. Undated rows are left out
/// and months without reports are not filled in.
pub fn monthly_trend(view: &View<'_>) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for date in view.iter().filter_map(|r| r.date) {
        *buckets.entry((date.year(), date.month())).or_default() += 1;
    }
    buckets
        .into_iter()
        .map(|((year, month), count)| TrendPoint {
            period: period_label(year, month),
            count,
        })
        .collect()
}

pub fn scorecard(view: &View<'_>) -> Scorecard {
    Scorecard {
        total_reports: total_count(view),
        top_category: mode_or_sentinel(view, Column::Category),
        top_media: mode_or_sentinel(view, Column::Media),
        busiest_month: mode_or_sentinel(view, Column::MonthName),
    }
}
