//! Dashboard view: metric cards, price panel, level ladder, annotations.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::types::{Interval, MarketSnapshot, PriceSeries};

use super::{Theme, View};

/// Render the dashboard view.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&MarketSnapshot>,
    view: View,
    show_bands: bool,
    theme: &Theme,
) {
    let Some(snap) = snapshot else {
        render_placeholder(frame, area, theme);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Metric cards
            Constraint::Min(0),    // Price panel & side panels
        ])
        .split(area);

    render_metric_cards(frame, chunks[0], snap, theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(chunks[1]);

    render_price_panel(frame, body[0], snap, view, theme);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(10)])
        .split(body[1]);

    render_level_ladder(frame, side[0], snap, theme);
    render_annotations(frame, side[1], snap, show_bands, theme);
}

/// Shown before the first snapshot arrives.
fn render_placeholder(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No data loaded", theme.muted())),
        Line::from(""),
        Line::from(vec![
            Span::raw("Type a Taiwan ticker (e.g. "),
            Span::styled("2330", theme.title()),
            Span::raw(") and press "),
            Span::styled("Enter", theme.title()),
        ]),
    ];
    let block = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border()));
    frame.render_widget(block, area);
}

/// Five CDP level cards across the top, resistance to support.
fn render_metric_cards(frame: &mut Frame, area: Rect, snap: &MarketSnapshot, theme: &Theme) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(area);

    for (slot, (name, value)) in cards.iter().zip(snap.pivots.entries()) {
        let style = match name {
            "AH" | "NH" => theme.up(),
            "NL" | "AL" => theme.down(),
            _ => theme.value(),
        };
        let body = vec![
            Line::from(""),
            Line::from(Span::styled(format!("{:.2}", value), style)),
        ];
        let card = Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(name)
                    .border_style(theme.border()),
            );
        frame.render_widget(card, *slot);
    }
}

/// Pick the series the price panel shows. The intraday feed can be empty
/// for thin names; fall back to the daily series rather than a blank panel.
fn panel_series<'a>(snap: &'a MarketSnapshot, view: View) -> &'a PriceSeries {
    match view {
        View::Intraday if !snap.intraday.is_empty() => &snap.intraday,
        _ => &snap.daily,
    }
}

/// Recent bars, newest first, colored by direction.
fn render_price_panel(frame: &mut Frame, area: Rect, snap: &MarketSnapshot, view: View, theme: &Theme) {
    let series = panel_series(snap, view);
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = series
        .bars()
        .iter()
        .rev()
        .take(visible)
        .map(|bar| {
            let direction = if bar.is_rising() { "▲" } else { "▼" };
            let style = theme.for_change(bar.is_rising());
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<12}", format_bar_time(bar.time, series.interval)), theme.muted()),
                Span::styled(format!("{} {:>9.2}", direction, bar.close), style),
                Span::raw("  "),
                Span::styled(
                    format!("H {:>8.2}  L {:>8.2}", bar.high, bar.low),
                    theme.muted(),
                ),
                Span::raw("  "),
                Span::styled(format!("V {:>12.0}", bar.volume), theme.muted()),
            ]))
        })
        .collect();

    let title = format!(
        " {} · {} · {} bars ",
        series.instrument,
        series.interval,
        series.len()
    );
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.border()),
    );
    frame.render_widget(list, area);
}

/// The five levels as a ladder with the last trade slotted in place.
fn render_level_ladder(frame: &mut Frame, area: Rect, snap: &MarketSnapshot, theme: &Theme) {
    let last = snap.last_price();
    let mut rows: Vec<(String, f64, bool)> = snap
        .pivots
        .entries()
        .iter()
        .map(|(name, value)| (name.to_string(), *value, false))
        .collect();
    if let Some(price) = last {
        rows.push(("Last".to_string(), price, true));
    }
    // Ladder reads top-down from resistance to support.
    rows.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let lines: Vec<Line> = rows
        .iter()
        .map(|(name, value, is_last)| {
            if *is_last {
                Line::from(vec![
                    Span::styled("► ", theme.warning()),
                    Span::styled(format!("{:<5}", name), theme.warning()),
                    Span::styled(format!("{:>10.2}", value), theme.value()),
                ])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{:<5}", name), theme.muted()),
                    Span::raw(format!("{:>10.2}", value)),
                ])
            }
        })
        .collect();

    let block = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Levels ")
            .border_style(theme.border()),
    );
    frame.render_widget(block, area);
}

/// Breakout target, deduction points, optional band readout.
fn render_annotations(frame: &mut Frame, area: Rect, snap: &MarketSnapshot, show_bands: bool, theme: &Theme) {
    let mut lines = vec![Line::from(vec![
        Span::styled("Reference  ", theme.muted()),
        Span::raw(format_bar_time(snap.reference.time, Interval::OneDay)),
        Span::styled(
            format!("  H {:.2} L {:.2} C {:.2}", snap.reference.high, snap.reference.low, snap.reference.close),
            theme.muted(),
        ),
    ])];

    match snap.breakout_target {
        Some(target) => lines.push(Line::from(vec![
            Span::styled("Breakout   ", theme.muted()),
            Span::styled(format!("{:.2}", target), theme.warning()),
        ])),
        None => lines.push(Line::from(Span::styled("Breakout   n/a", theme.muted()))),
    }

    for point in &snap.deductions {
        lines.push(Line::from(vec![
            Span::styled(format!("Deduct {:>3} ", point.offset), theme.muted()),
            Span::raw(format!("{:.2}", point.close)),
            Span::styled(
                format!("  ({})", format_bar_time(point.time, Interval::OneDay)),
                theme.muted(),
            ),
        ]));
    }

    if show_bands {
        match snap.bands.last() {
            Some(band) => {
                lines.push(Line::from(vec![
                    Span::styled("Boll upper ", theme.muted()),
                    Span::raw(format!("{:.2}", band.upper)),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Boll mid   ", theme.muted()),
                    Span::raw(format!("{:.2}", band.middle)),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Boll lower ", theme.muted()),
                    Span::raw(format!("{:.2}", band.lower)),
                ]));
            }
            None => lines.push(Line::from(Span::styled(
                "Bollinger  needs 20 daily bars",
                theme.muted(),
            ))),
        }
    }

    let block = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Annotations ")
            .border_style(theme.border()),
    );
    frame.render_widget(block, area);
}

/// Format a bar timestamp for display: date for daily bars, date and
/// minute for intraday ones.
fn format_bar_time(millis: i64, interval: Interval) -> String {
    let pattern = match interval {
        Interval::OneDay => "%Y-%m-%d",
        Interval::OneMinute => "%m-%d %H:%M",
    };
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format(pattern).to_string())
        .unwrap_or_else(|| "--".to_string())
}
