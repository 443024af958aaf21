//! ChartSpec: which mark, which fields and which colour groups to plot.

use crate::models::{ChartType, PlayerRecord};
use serde::Serialize;

/// Plotly's default qualitative palette, assigned to groups in order of first appearance.
pub const PALETTE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Bar,
    Line,
    Pie,
}

/// One plotted value: an x category (or pie slice name) and its magnitude.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

/// Points sharing one colour (one legend entry).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub color: &'static str,
    pub points: Vec<DataPoint>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    pub chart_type: ChartType,
    pub mark: Mark,
    /// Title drawn inside the chart (only the pie chart has one).
    pub title: Option<String>,
    pub x_field: Option<&'static str>,
    pub y_field: Option<&'static str>,
    /// Legend heading: the field the colours are grouped by.
    pub color_field: &'static str,
    /// X axis categories in view order. Empty for the pie chart.
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    /// Print each bar's value on the bar.
    pub text_labels: bool,
    /// Draw a marker at every line point.
    pub markers: bool,
}

impl ChartSpec {
    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }

    /// Largest plotted value, 0 for an empty chart.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.value)
            .fold(0.0, f64::max)
    }
}

/// Build the chart selected by `chart_type` over `view`.
pub fn build_chart(view: &[PlayerRecord], chart_type: ChartType) -> ChartSpec {
    let categories: Vec<String> = view.iter().map(|p| p.name.to_string()).collect();
    match chart_type {
        ChartType::GrandSlamComparison => ChartSpec {
            chart_type,
            mark: Mark::Bar,
            title: None,
            x_field: Some("선수명"),
            y_field: Some("대满贯 우승"),
            color_field: "국가",
            categories,
            series: grouped_series(view, |p| p.country, |p| f64::from(p.grand_slam_wins)),
            text_labels: true,
            markers: false,
        },
        ChartType::WinRateComparison => ChartSpec {
            chart_type,
            mark: Mark::Line,
            title: None,
            x_field: Some("선수명"),
            y_field: Some("승률(%)"),
            color_field: "국가",
            categories,
            series: grouped_series(view, |p| p.country, |p| p.win_rate_percent),
            text_labels: false,
            markers: true,
        },
        ChartType::MatchesComparison => ChartSpec {
            chart_type,
            mark: Mark::Bar,
            title: None,
            x_field: Some("선수명"),
            y_field: Some("경기 출전 수"),
            color_field: "선수명",
            categories,
            series: grouped_series(view, |p| p.name, |p| f64::from(p.matches_played)),
            text_labels: false,
            markers: false,
        },
        ChartType::CountryDistribution => ChartSpec {
            chart_type,
            mark: Mark::Pie,
            title: Some("선수 국적 분포".to_string()),
            x_field: None,
            y_field: None,
            color_field: "국가",
            categories: Vec::new(),
            series: country_slices(view),
            text_labels: false,
            markers: false,
        },
    }
}

/// Group records by `group`, keeping first-appearance order; each point is (name, value).
fn grouped_series(
    view: &[PlayerRecord],
    group: impl Fn(&PlayerRecord) -> &'static str,
    value: impl Fn(&PlayerRecord) -> f64,
) -> Vec<Series> {
    let mut series: Vec<Series> = Vec::new();
    for p in view {
        let key = group(p);
        let point = DataPoint {
            label: p.name.to_string(),
            value: value(p),
        };
        match series.iter_mut().find(|s| s.name == key) {
            Some(s) => s.points.push(point),
            None => {
                let color = PALETTE[series.len() % PALETTE.len()];
                series.push(Series {
                    name: key.to_string(),
                    color,
                    points: vec![point],
                });
            }
        }
    }
    series
}

/// One slice per country with its record count, largest first. Numeric fields are ignored.
///
/// Colours follow first appearance in the view; only the slice order follows the counts.
fn country_slices(view: &[PlayerRecord]) -> Vec<Series> {
    let mut slices: Vec<Series> = Vec::new();
    for p in view {
        match slices.iter_mut().find(|s| s.name == p.country) {
            Some(s) => s.points[0].value += 1.0,
            None => {
                let color = PALETTE[slices.len() % PALETTE.len()];
                slices.push(Series {
                    name: p.country.to_string(),
                    color,
                    points: vec![DataPoint {
                        label: p.country.to_string(),
                        value: 1.0,
                    }],
                });
            }
        }
    }
    slices.sort_by(|a, b| b.points[0].value.total_cmp(&a.points[0].value));
    slices
}
