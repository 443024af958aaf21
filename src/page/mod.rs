//! Server-side HTML for the dashboard: control sidebar, data table and chart.

mod svg;

pub use svg::chart_svg;

use crate::logic::{Rendered, TableView};
use crate::models::{countries, ChartType, DashboardError, FilterState, SortKey, APPLIED_KEY};
use askama::Template;

pub const PAGE_TITLE: &str = "테니스 선수 경력 통계 분석";
const HEADING: &str = "🎾 테니스 선수의 직업 경력 통계 분석";
const DESCRIPTION: &str =
    "프로 테니스 선수들의 출전 수, 승률, 대满贯 우승 등을 시각화하여 한눈에 분석할 수 있는 대시보드입니다.";

/// Integers without a decimal point, other values with one decimal.
pub fn format_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

/// One checkbox, select option or radio button.
pub struct ControlOption {
    pub value: String,
    pub label: String,
    pub checked: bool,
}

impl ControlOption {
    fn new(value: &str, label: &str, checked: bool) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            checked,
        }
    }
}

/// A table row with its cells already formatted.
pub struct TableLine {
    pub index: String,
    pub name: &'static str,
    pub country: &'static str,
    /// Age, grand slams, matches, win rate, best ranking.
    pub numbers: [String; 5],
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub title: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    pub applied_key: &'static str,
    pub countries: Vec<ControlOption>,
    pub search_query: String,
    pub sort_options: Vec<ControlOption>,
    pub show_table: bool,
    pub chart_options: Vec<ControlOption>,
    pub columns: Vec<&'static str>,
    pub colspan: usize,
    pub rows: Vec<TableLine>,
    pub chart_subtitle: &'static str,
    /// Trusted markup from plotters; the only unescaped value in the page.
    pub chart_svg: String,
}

impl DashboardPage {
    pub fn new(filter: &FilterState, rendered: &Rendered) -> Result<Self, DashboardError> {
        let (columns, rows) = match &rendered.table {
            Some(table) => (table.columns.clone(), table_lines(table)),
            None => (Vec::new(), Vec::new()),
        };
        Ok(Self {
            title: PAGE_TITLE,
            heading: HEADING,
            description: DESCRIPTION,
            applied_key: APPLIED_KEY,
            countries: countries()
                .into_iter()
                .map(|c| ControlOption::new(c, c, filter.is_country_selected(c)))
                .collect(),
            search_query: filter.search_query.clone(),
            sort_options: SortKey::ALL
                .into_iter()
                .map(|k| ControlOption::new(k.token(), k.label(), k == filter.sort_key))
                .collect(),
            show_table: rendered.table.is_some(),
            chart_options: ChartType::ALL
                .into_iter()
                .map(|c| ControlOption::new(c.token(), c.label(), c == filter.chart_type))
                .collect(),
            colspan: columns.len() + 1,
            columns,
            rows,
            chart_subtitle: rendered.chart.chart_type.subtitle(),
            chart_svg: chart_svg(&rendered.chart)?,
        })
    }
}

fn table_lines(table: &TableView) -> Vec<TableLine> {
    table
        .rows
        .iter()
        .map(|row| {
            let p = &row.record;
            TableLine {
                index: row.index.map(|i| i.to_string()).unwrap_or_default(),
                name: p.name,
                country: p.country,
                numbers: [
                    p.age.to_string(),
                    p.grand_slam_wins.to_string(),
                    p.matches_played.to_string(),
                    format_number(p.win_rate_percent),
                    p.best_ranking.to_string(),
                ],
            }
        })
        .collect()
}

/// Render the whole dashboard document for one request.
pub fn render_page(filter: &FilterState, rendered: &Rendered) -> Result<String, DashboardError> {
    DashboardPage::new(filter, rendered)?
        .render()
        .map_err(|e| DashboardError::Template(e.to_string()))
}
