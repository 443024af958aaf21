//! Dashboard logic: filtering/sorting, chart construction, table rendering, export.

mod chart;
mod export;
mod render;
mod view;

pub use chart::{build_chart, ChartSpec, DataPoint, Mark, Series, PALETTE};
pub use export::export_csv;
pub use render::{render, Rendered, TableRow, TableView, COLUMNS};
pub use view::compute_view;
