//! CSV download of the current view.

use crate::logic::render::COLUMNS;
use crate::models::{DashboardError, PlayerRecord};

/// Write `view` as CSV with the table headers, in view order.
pub fn export_csv(view: &[PlayerRecord]) -> Result<String, DashboardError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(COLUMNS).map_err(export_err)?;
    for p in view {
        wtr.write_record([
            p.name.to_string(),
            p.country.to_string(),
            p.age.to_string(),
            p.grand_slam_wins.to_string(),
            p.matches_played.to_string(),
            p.win_rate_percent.to_string(),
            p.best_ranking.to_string(),
        ])
        .map_err(export_err)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DashboardError::Export(e.to_string()))
}

fn export_err(e: csv::Error) -> DashboardError {
    DashboardError::Export(e.to_string())
}
