//! SVG drawing of a ChartSpec with plotters: bars and lines over a segmented
//! x axis of player names, or a pie of per-country counts.

use crate::logic::{ChartSpec, Mark};
use crate::models::DashboardError;
use crate::page::format_number;
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const SIZE: (u32, u32) = (800, 420);
const FONT: &str = "sans-serif";
const EMPTY_CAPTION: &str = "데이터 없음";
const MUTED: RGBColor = RGBColor(153, 153, 153);

/// Draw `chart` as a standalone `<svg>` document. An empty chart still draws its frame.
pub fn chart_svg(chart: &ChartSpec) -> Result<String, DashboardError> {
    let mut svg = String::new();
    draw_chart(chart, &mut svg).map_err(|e| DashboardError::Chart(e.to_string()))?;
    Ok(svg)
}

fn draw_chart<'a>(chart: &ChartSpec, svg: &'a mut String) -> DrawResult<(), SVGBackend<'a>> {
    let root = SVGBackend::with_string(svg, SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    match chart.mark {
        Mark::Bar | Mark::Line => draw_cartesian(&root, chart)?,
        Mark::Pie => draw_pie(&root, chart)?,
    }
    if chart.is_empty() {
        let (w, h) = root.dim_in_pixel();
        let style = TextStyle::from((FONT, 18).into_font())
            .color(&MUTED)
            .pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new(EMPTY_CAPTION, (w as i32 / 2, h as i32 / 2), style))?;
    }
    root.present()?;
    Ok(())
}

/// Parse a `#rrggbb` palette entry.
fn series_color(hex: &str) -> RGBColor {
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
            .unwrap_or(0)
    };
    RGBColor(channel(1), channel(3), channel(5))
}

fn draw_cartesian<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartSpec,
) -> DrawResult<(), DB> {
    let n = chart.categories.len().max(1);
    let y_max = chart.max_value().max(1.0) * 1.1;

    let mut ctx = ChartBuilder::on(root)
        .margin(20)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d((0..n).into_segmented(), 0f64..y_max)?;

    let x_label = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
            chart.categories.get(*i).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    };
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(n * 2 + 2)
        .x_label_formatter(&x_label)
        .y_label_formatter(&|v: &f64| format_number(*v))
        .x_desc(chart.x_field.unwrap_or_default())
        .y_desc(chart.y_field.unwrap_or_default())
        .label_style((FONT, 12))
        .draw()?;

    let value_style =
        TextStyle::from((FONT, 12).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));

    for series in &chart.series {
        let color = series_color(series.color);
        let cells: Vec<(usize, f64)> = series
            .points
            .iter()
            .filter_map(|p| {
                chart
                    .categories
                    .iter()
                    .position(|c| *c == p.label)
                    .map(|i| (i, p.value))
            })
            .collect();

        match chart.mark {
            Mark::Bar => {
                ctx.draw_series(cells.iter().map(|&(i, v)| {
                    let mut bar = Rectangle::new(
                        [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), v)],
                        color.filled(),
                    );
                    bar.set_margin(0, 0, 12, 12);
                    bar
                }))?
                .label(series.name.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
                if chart.text_labels {
                    ctx.draw_series(cells.iter().map(|&(i, v)| {
                        Text::new(
                            format_number(v),
                            (SegmentValue::CenterOf(i), v),
                            value_style.clone(),
                        )
                    }))?;
                }
            }
            Mark::Line => {
                ctx.draw_series(LineSeries::new(
                    cells.iter().map(|&(i, v)| (SegmentValue::CenterOf(i), v)),
                    color.stroke_width(2),
                ))?
                .label(series.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
                if chart.markers {
                    ctx.draw_series(
                        cells
                            .iter()
                            .map(|&(i, v)| Circle::new((SegmentValue::CenterOf(i), v), 5, color.filled())),
                    )?;
                }
            }
            Mark::Pie => {}
        }
    }

    if !chart.series.is_empty() {
        ctx.configure_series_labels()
            .label_font((FONT, 12))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }
    Ok(())
}

fn draw_pie<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartSpec,
) -> DrawResult<(), DB> {
    let area = match &chart.title {
        Some(title) => root.titled(title, (FONT, 20))?,
        None => root.clone(),
    };
    let (w, h) = area.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = f64::from(w.min(h)) * 0.4;

    let sizes: Vec<f64> = chart
        .series
        .iter()
        .map(|s| s.points.iter().map(|p| p.value).sum())
        .collect();
    if sizes.iter().sum::<f64>() <= 0.0 {
        return area.draw(&Circle::new(center, radius as i32, MUTED.stroke_width(1)));
    }

    let colors: Vec<RGBColor> = chart.series.iter().map(|s| series_color(s.color)).collect();
    let labels: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style((FONT, 14).into_font().color(&BLACK));
    pie.percentages((FONT, radius * 0.08).into_font().color(&WHITE));
    area.draw(&pie)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_hex_parses() {
        assert_eq!(series_color("#636efa"), RGBColor(0x63, 0x6e, 0xfa));
        assert_eq!(series_color("#FECB52"), RGBColor(0xfe, 0xcb, 0x52));
    }
}
