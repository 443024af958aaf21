//! Render stage: table and chart description for a computed view.

use crate::logic::chart::{build_chart, ChartSpec};
use crate::models::{all_players, FilterState, PlayerRecord};
use serde::Serialize;

/// Table column headers, one per PlayerRecord field.
pub const COLUMNS: [&str; 7] = [
    "선수명",
    "국가",
    "나이",
    "대满贯 우승",
    "경기 출전 수",
    "승률(%)",
    "최고 랭킹",
];

/// A table row: the record and its position in the dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow {
    /// None for a record that is not part of the dataset.
    pub index: Option<usize>,
    pub record: PlayerRecord,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableView {
    pub columns: Vec<&'static str>,
    /// Rows in view order.
    pub rows: Vec<TableRow>,
}

impl TableView {
    pub fn new(view: &[PlayerRecord]) -> Self {
        let rows = view
            .iter()
            .map(|record| TableRow {
                index: dataset_index(record),
                record: *record,
            })
            .collect();
        Self {
            columns: COLUMNS.to_vec(),
            rows,
        }
    }
}

/// Output of one render pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rendered {
    /// Present only when the table toggle is on.
    pub table: Option<TableView>,
    pub chart: ChartSpec,
}

/// Produce the table (if shown) and the selected chart for `view`.
pub fn render(view: &[PlayerRecord], filter: &FilterState) -> Rendered {
    Rendered {
        table: filter.show_table.then(|| TableView::new(view)),
        chart: build_chart(view, filter.chart_type),
    }
}

/// Position of an identical record in the dataset.
fn dataset_index(record: &PlayerRecord) -> Option<usize> {
    all_players().iter().position(|p| p == record)
}
