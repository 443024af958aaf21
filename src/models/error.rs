//! Errors surfaced by the dashboard library.

/// Errors that can occur while reading control values or producing output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DashboardError {
    /// `sort` query value is not one of the four sort keys.
    UnknownSortKey(String),
    /// `chart` query value is not one of the four chart types.
    UnknownChartType(String),
    /// A selected country does not occur in the dataset.
    UnknownCountry(String),
    /// A checkbox value that is neither on nor off.
    InvalidToggle { field: &'static str, value: String },
    /// Writing the CSV export failed.
    Export(String),
    /// Drawing the chart SVG failed.
    Chart(String),
    /// Rendering the HTML template failed.
    Template(String),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::UnknownSortKey(v) => write!(f, "Unknown sort key: {}", v),
            DashboardError::UnknownChartType(v) => write!(f, "Unknown chart type: {}", v),
            DashboardError::UnknownCountry(v) => write!(f, "Country not in dataset: {}", v),
            DashboardError::InvalidToggle { field, value } => {
                write!(f, "Invalid value for {}: {}", field, value)
            }
            DashboardError::Export(msg) => write!(f, "CSV export failed: {}", msg),
            DashboardError::Chart(msg) => write!(f, "Chart drawing failed: {}", msg),
            DashboardError::Template(msg) => write!(f, "Page rendering failed: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {}
