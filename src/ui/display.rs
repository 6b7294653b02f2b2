//! Chart drawing

use std::time::Instant;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use crate::chart::colors::Rgb;
use crate::chart::format::format_population;
use crate::chart::projector::DATASET_LABEL;
use crate::ui::state::ViewState;

pub const TITLE: &str = "Population Growth per Country";

fn rgb_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Draw the header, the bar chart and the key hint
pub fn draw(frame: &mut Frame<'_>, view: &ViewState, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    draw_header(frame, view, chunks[0]);
    draw_chart(frame, view, now, chunks[1]);

    let hint = Paragraph::new(Line::from(Span::styled(
        "q / Esc to quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hint, chunks[2]);
}

fn draw_header(frame: &mut Frame<'_>, view: &ViewState, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Year: {}", view.year)),
        Line::from(format!(
            "Total Population: {}",
            format_population(view.total_population)
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_chart(frame: &mut Frame<'_>, view: &ViewState, now: Instant, area: Rect) {
    let values = view.bar_values(now);
    let bars: Vec<Bar<'_>> = view
        .chart
        .labels
        .iter()
        .zip(&values)
        .zip(&view.chart.rgbs)
        .map(|((label, &value), &rgb)| {
            Bar::default()
                .value(value)
                .label(Line::from(label.as_str()))
                .text_value(format_population(value))
                .style(Style::default().fg(rgb_color(rgb)))
                .value_style(Style::default().fg(Color::Black).bg(rgb_color(rgb)))
        })
        .collect();

    // Scale to the target maximum so growing bars do not rescale mid-transition
    let max_value = view.chart.values.iter().copied().max().unwrap_or(0).max(1);

    let direction = if view.options.is_horizontal() {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(DATASET_LABEL))
        .data(BarGroup::default().bars(&bars))
        .direction(direction)
        .max(max_value)
        .bar_width(1)
        .bar_gap(0);

    frame.render_widget(chart, area);
}
