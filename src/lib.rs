//! Tennis player statistics dashboard: library with the dataset, filtering and rendering.

pub mod config;
pub mod logic;
pub mod models;
pub mod page;

pub use config::ServerConfig;
pub use logic::{
    build_chart, compute_view, export_csv, render, ChartSpec, DataPoint, Mark, Rendered, Series,
    TableRow, TableView, COLUMNS, PALETTE,
};
pub use models::{
    all_players, countries, ChartType, DashboardError, FilterState, PlayerRecord, SortKey,
    APPLIED_KEY,
};
pub use page::{chart_svg, render_page};
