//! TUI rendering for Toss using ratatui.

pub mod bell;
pub mod coin;
mod input;
mod theme;

pub use bell::TerminalBell;
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use toss_engine::App;

use self::coin::coin_lines;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Coin
            Constraint::Length(1), // Result line
            Constraint::Length(1), // Breathing room
            Constraint::Length(3), // Flip button
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Credit line
        ])
        .split(frame.area());

    draw_coin(frame, app, chunks[0], &palette, &glyphs);
    draw_result(frame, app, chunks[1], &palette);
    draw_button(frame, app, chunks[3], &palette);
    draw_status_bar(frame, app, chunks[4], &palette, &glyphs);
    draw_credit(frame, chunks[5], &palette);
}

fn draw_coin(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let lines = coin_lines(
        app.coin_face(),
        app.rotation_degrees(),
        app.is_flipping(),
        palette,
        glyphs,
        app.ui_options(),
    );

    // Center the art vertically; each line is already padded to a fixed
    // width, so centered alignment keeps the block rigid.
    let art_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let y_offset = area.height.saturating_sub(art_height) / 2;
    let art_area = Rect {
        x: area.x,
        y: area.y.saturating_add(y_offset),
        width: area.width,
        height: art_height.min(area.height),
    };
    let coin = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(coin, art_area);
}

fn draw_result(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let style = if app.is_flipping() {
        Style::default().fg(palette.text_muted)
    } else {
        styles::result_line(palette)
    };
    let result = Paragraph::new(Line::from(Span::styled(app.result_label(), style)))
        .alignment(Alignment::Center);
    frame.render_widget(result, area);
}

fn draw_button(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let (style, border_style) = if app.is_flipping() {
        (
            styles::button_disabled(palette),
            Style::default().fg(palette.text_disabled),
        )
    } else {
        (
            styles::button_active(palette),
            Style::default().fg(palette.accent),
        )
    };

    let width = 24.min(area.width);
    let button_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y,
        width,
        height: area.height.min(3),
    };
    let button = Paragraph::new(Line::from("Flip Coin"))
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        );
    frame.render_widget(button, button_area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let options = app.ui_options();

    let mut spans = vec![Span::raw(" ")];
    if app.is_flipping() {
        spans.push(Span::styled(
            format!("{} Flipping", spinner_frame(app.tick_count(), options)),
            Style::default().fg(palette.accent),
        ));
    } else {
        spans.push(Span::styled(
            format!("{} Ready", glyphs.status_on),
            Style::default().fg(palette.success),
        ));
    }

    let stats = app.stats();
    if stats.flips > 0 {
        spans.push(Span::styled(
            format!(
                "  {} {} flips: {} heads, {} tails",
                glyphs.bullet, stats.flips, stats.heads, stats.tails
            ),
            Style::default().fg(palette.text_muted),
        ));
    }

    let (bell_glyph, bell_style) = if app.bell_enabled() {
        (glyphs.status_on, Style::default().fg(palette.success))
    } else {
        (glyphs.status_off, Style::default().fg(palette.text_muted))
    };
    spans.push(Span::styled(format!("  {bell_glyph} bell"), bell_style));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    // Key hints, right-aligned over the same row.
    let keys = Line::from(vec![
        Span::styled("space", styles::key_highlight(palette)),
        Span::styled(" flip  ", styles::key_hint(palette)),
        Span::styled("b", styles::key_highlight(palette)),
        Span::styled(" bell  ", styles::key_hint(palette)),
        Span::styled("q", styles::key_highlight(palette)),
        Span::styled(" quit ", styles::key_hint(palette)),
    ]);
    frame.render_widget(Paragraph::new(keys).alignment(Alignment::Right), area);
}

fn draw_credit(frame: &mut Frame, area: Rect, palette: &Palette) {
    let credit = format!("toss v{}", env!("CARGO_PKG_VERSION"));
    let line = Paragraph::new(Span::styled(credit, styles::credit(palette)))
        .alignment(Alignment::Center);
    frame.render_widget(line, area);
}
