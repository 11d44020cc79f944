//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  [`draw`] is a pure projection of
//! the app: it never mutates anything, so it can run every tick.
//!
//! ## For contributors
//!
//! * `Loading` and `Error` each own the whole screen; nothing else is drawn.
//! * `Ready` is a four-row split: heading, search box, card grid, and a
//!   one-line status bar.
//! * The grid is responsive: [`grid_columns`] picks how many cards fit side
//!   by side, and rows scroll so the selected card stays on screen.
//! * [`ratatui`] is the TUI framework; see its docs for widget details.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, Status};
use crate::source::Product;

/// Rows taken by one card, borders included.
pub const CARD_HEIGHT: u16 = 6;

const SEARCH_PLACEHOLDER: &str = "Search products by title...";

/// How many cards fit side by side in `width` terminal columns.
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..=47 => 1,
        48..=95 => 2,
        96..=127 => 3,
        _ => 4,
    }
}

/// Shorten `text` to at most `max` terminal cells, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    // Leave one cell for the ellipsis.
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// The longest suffix of `text` that fits in `max` terminal cells.
pub fn tail_fitting(text: &str, max: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        start = i;
    }
    &text[start..]
}

/// Draw the complete UI for one frame.
pub fn draw(app: &App, frame: &mut Frame) {
    match app.status() {
        Status::Loading => draw_loading(frame),
        Status::Error(message) => draw_error(message, frame),
        Status::Ready => draw_ready(app, frame),
    }
}

fn draw_loading(frame: &mut Frame) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(frame.area());

    let text = Paragraph::new("Loading products...")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(text, middle);
}

fn draw_error(message: &str, frame: &mut Frame) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(frame.area());

    let text = Paragraph::new(format!("Error: {message}"))
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, middle);
}

fn draw_ready(app: &App, frame: &mut Frame) {
    let [heading_area, search_area, grid_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let heading = Paragraph::new(Span::styled(
        "Products Page",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(heading, heading_area);

    draw_search(app, frame, search_area);

    if app.visible().is_empty() {
        draw_no_results(frame, grid_area);
    } else {
        draw_grid(app, frame, grid_area);
    }

    draw_status_bar(app, frame, status_area);
}

/// The search box, with the cursor parked after the query.
fn draw_search(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);

    // Scroll so the end of the query and the cursor cell stay in view.
    let shown = tail_fitting(app.query(), usize::from(inner.width.saturating_sub(1)));
    let content = if app.query().is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(shown, Style::default().fg(Color::Red))
    };
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);

    let typed = u16::try_from(shown.width()).unwrap_or(u16::MAX);
    let x = inner.x + typed.min(inner.width.saturating_sub(1));
    frame.set_cursor_position((x, inner.y));
}

fn draw_no_results(frame: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new("No products found.")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    let [_, line] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
    frame.render_widget(placeholder, line);
}

fn draw_grid(app: &App, frame: &mut Frame, area: Rect) {
    let columns = grid_columns(area.width);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));

    // Scroll just far enough to keep the selected row in view.
    let selected_row = app.selected_index().map_or(0, |i| i / columns);
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(area);
    let products = app.visible();

    for (r, row_area) in rows.iter().enumerate() {
        let start = (first_row + r) * columns;
        if start >= products.len() {
            break;
        }
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (product, cell) in products[start..].iter().zip(cells.iter()) {
            let selected = app.selected_id() == Some(product.id);
            draw_card(product, selected, frame, *cell);
        }
    }
}

fn draw_card(product: &Product, selected: bool, frame: &mut Frame, area: Rect) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let width = usize::from(block.inner(area).width);

    let lines = vec![
        Line::from(Span::styled(
            truncate(&product.title, width),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            product.display_price(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate(&format!("Category: {}", product.category), width),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            truncate(&product.image, width),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("Showing {} of {} products", app.visible().len(), app.catalog().len()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  arrows: move  Home/End: jump  Ctrl-U: clear  Esc: quit"),
    ]));
    frame.render_widget(status, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
