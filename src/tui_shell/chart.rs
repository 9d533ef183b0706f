//! Paints a recorded [`Canvas`] with ratatui charts.
//!
//! Summary boxes and legends carry pad coordinates in `[0, 1]` with the
//! origin at the bottom left; they are mapped onto the pad's cells.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph};

use crate::model::{ColorIndex, Histogram};
use crate::render::{Canvas, Pad, StatBox};
use crate::style::format_sig;

pub(super) fn render_canvas(frame: &mut ratatui::Frame, area: Rect, canvas: &Canvas) {
    let n = canvas.pads.len().max(1) as u32;
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, n); n as usize])
        .split(area);
    for (pad, slot) in canvas.pads.iter().zip(slots.iter()) {
        render_pad(frame, *slot, pad);
    }
}

fn term_color(c: ColorIndex) -> Color {
    let (r, g, b) = c.rgb();
    Color::Rgb(r, g, b)
}

/// Histogram outline as a polyline: a flat segment per visible bin.
pub(super) fn step_points(h: &Histogram) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(h.bins() * 2);
    for (lo, hi, v) in h.visible_points() {
        out.push((lo, v));
        out.push((hi, v));
    }
    out
}

/// Shared axis bounds of every series on a pad.
pub(super) fn pad_bounds(pad: &Pad) -> ([f64; 2], [f64; 2]) {
    let mut x = [f64::INFINITY, f64::NEG_INFINITY];
    let mut y = [f64::INFINITY, f64::NEG_INFINITY];
    for s in &pad.series {
        let (x_lo, x_hi) = s.histogram.x_extent();
        let (y_lo, y_hi) = s.histogram.y_extent();
        x = [x[0].min(x_lo), x[1].max(x_hi)];
        y = [y[0].min(y_lo), y[1].max(y_hi)];
    }
    if !x[0].is_finite() || !x[1].is_finite() || x[0] >= x[1] {
        x = [0.0, 1.0];
    }
    if !y[0].is_finite() || !y[1].is_finite() || y[0] >= y[1] {
        y = [0.0, 1.0];
    }
    (x, y)
}

/// Cells covered by `placement` inside `area`, at least `min_height` tall.
pub(super) fn ndc_rect(area: Rect, placement: StatBox, min_height: u16) -> Rect {
    let w = f64::from(area.width);
    let h = f64::from(area.height);
    let left = (placement.x_min.clamp(0.0, 1.0) * w).round() as u16;
    let right = (placement.x_max.clamp(0.0, 1.0) * w).round() as u16;
    let top = ((1.0 - placement.y_max.clamp(0.0, 1.0)) * h).round() as u16;
    let bottom = ((1.0 - placement.y_min.clamp(0.0, 1.0)) * h).round() as u16;

    let rect = Rect {
        x: area.x + left,
        y: area.y + top,
        width: right.saturating_sub(left).max(4),
        height: bottom.saturating_sub(top).max(min_height),
    };
    rect.intersection(area)
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Line<'static>> {
    let mid = 0.5 * (bounds[0] + bounds[1]);
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| Line::from(format_sig(*v, 4)))
        .collect()
}

fn render_pad(frame: &mut ratatui::Frame, area: Rect, pad: &Pad) {
    let points: Vec<Vec<(f64, f64)>> = pad
        .series
        .iter()
        .map(|s| step_points(&s.histogram))
        .collect();
    let datasets: Vec<Dataset> = pad
        .series
        .iter()
        .zip(&points)
        .map(|(s, pts)| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(term_color(s.color)))
                .data(pts)
        })
        .collect();

    let (x, y) = pad_bounds(pad);
    let title = pad
        .series
        .first()
        .map(|s| s.histogram.title().to_string())
        .unwrap_or_default();
    let chart = Chart::new(datasets)
        .block(Block::default().title(title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(x)
                .labels(axis_labels(x)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(y)
                .labels(axis_labels(y)),
        );
    frame.render_widget(chart, area);

    for b in &pad.stat_boxes {
        let color = b.color.map(term_color).unwrap_or(Color::White);
        let rect = ndc_rect(area, b.placement, b.lines.len() as u16 + 2);
        let lines: Vec<Line> = b
            .lines
            .iter()
            .map(|l| Line::from(Span::styled(l.as_str(), Style::default().fg(color))))
            .collect();
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
            rect,
        );
    }

    if let Some(legend) = &pad.legend {
        let rect = ndc_rect(area, legend.placement, legend.entries.len() as u16 + 2);
        let lines: Vec<Line> = legend
            .entries
            .iter()
            .map(|e| {
                Line::from(vec![
                    Span::styled("── ", Style::default().fg(term_color(e.color))),
                    Span::raw(e.label.as_str()),
                ])
            })
            .collect();
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
            rect,
        );
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/chart_tests.rs"]
mod tests;
