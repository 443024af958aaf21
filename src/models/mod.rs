//! Data structures for the dashboard: player records, control values, errors.

mod error;
mod filter;
mod player;

pub use error::DashboardError;
pub use filter::{ChartType, FilterState, SortKey, APPLIED_KEY};
pub use player::{all_players, countries, PlayerRecord};
