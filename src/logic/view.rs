//! Filter/sort stage: derive the visible rows from the dataset and the controls.

use crate::models::{FilterState, PlayerRecord};

/// Compute the view for the given controls.
///
/// 1. Keep records whose country is selected (an empty selection keeps nothing).
/// 2. If the search text is non-empty, keep names containing it (case-sensitive).
/// 3. Sort descending by the sort key; the sort is stable so ties keep dataset order.
pub fn compute_view(players: &[PlayerRecord], filter: &FilterState) -> Vec<PlayerRecord> {
    let query = filter.search_query.as_str();
    let mut view: Vec<PlayerRecord> = players
        .iter()
        .filter(|p| filter.is_country_selected(p.country))
        .filter(|p| query.is_empty() || p.name.contains(query))
        .copied()
        .collect();

    let key = filter.sort_key;
    view.sort_by(|a, b| key.value(b).total_cmp(&key.value(a)));
    view
}
