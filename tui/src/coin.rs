//! The coin itself.
//!
//! The coin spins about its vertical axis. Rather than animating a texture,
//! we draw an ellipse whose horizontal radius is squeezed by |cos| of the
//! cumulative rotation, which reads as a 3D spin at terminal resolution.
//! While airborne the visible face alternates every half turn; at rest the
//! face label is stamped across the middle row.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use toss_types::{Outcome, UiOptions};

use crate::theme::{Glyphs, Palette};

/// Horizontal radius in cells. Terminal cells are roughly twice as tall as
/// they are wide, so the x radius is double the y radius to look round.
const RADIUS_X: i32 = 16;
/// Vertical radius in rows.
const RADIUS_Y: i32 = 8;

/// Width of the rendered art in cells. Every line is padded to this width
/// so alignment treats the art as one rigid block.
pub const ART_WIDTH: u16 = RADIUS_X as u16 * 2 + 1;
/// Height of the rendered art in rows.
pub const ART_HEIGHT: u16 = RADIUS_Y as u16 * 2 + 1;

/// Render the coin for one frame.
///
/// `face` is the face to show at rest, `rotation_degrees` the cumulative
/// rotation of the current flight (zero when idle). With reduced motion the
/// coin stays face-on and the spinner elsewhere carries the activity cue.
#[must_use]
pub fn coin_lines(
    face: Outcome,
    rotation_degrees: f32,
    flipping: bool,
    palette: &Palette,
    glyphs: &Glyphs,
    options: UiOptions,
) -> Vec<Line<'static>> {
    let squeeze = if flipping && !options.reduced_motion {
        rotation_degrees.to_radians().cos().abs()
    } else {
        1.0
    };

    let visible = if flipping && !options.reduced_motion {
        let half_turns = (rotation_degrees / 180.0).floor() as i64;
        if half_turns % 2 == 0 {
            face
        } else {
            face.reverse()
        }
    } else {
        face
    };

    let (bright, dim) = match visible {
        Outcome::Head => (palette.coin_head, palette.coin_head_dim),
        Outcome::Tail => (palette.coin_tail, palette.coin_tail_dim),
    };
    let coin_style = Style::default().fg(if flipping { dim } else { bright });
    let label_style = Style::default()
        .fg(palette.bg_dark)
        .bg(bright)
        .add_modifier(Modifier::BOLD);

    let total = ART_WIDTH as usize;
    let mut lines = Vec::with_capacity(ART_HEIGHT as usize);
    for dy in -RADIUS_Y..=RADIUS_Y {
        let ry = dy as f32 / RADIUS_Y as f32;
        let extent = (1.0 - ry * ry).max(0.0).sqrt();
        let half_width = (squeeze * RADIUS_X as f32 * extent).round() as i32;
        // The center column is always filled so an edge-on coin stays a
        // visible sliver instead of vanishing.
        let width = (2 * half_width + 1) as usize;
        let left = (total - width) / 2;
        let right = total - width - left;

        if !flipping && dy == 0 {
            let label = format!(" {} ", face.label());
            if width > label.len() + 4 {
                let fill_left = (width - label.len()) / 2;
                let fill_right = width - label.len() - fill_left;
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(left)),
                    Span::styled(glyphs.coin_fill.repeat(fill_left), coin_style),
                    Span::styled(label, label_style),
                    Span::styled(glyphs.coin_fill.repeat(fill_right), coin_style),
                    Span::raw(" ".repeat(right)),
                ]));
                continue;
            }
        }

        lines.push(Line::from(vec![
            Span::raw(" ".repeat(left)),
            Span::styled(glyphs.coin_fill.repeat(width), coin_style),
            Span::raw(" ".repeat(right)),
        ]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::glyphs;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn render(
        face: Outcome,
        rotation: f32,
        flipping: bool,
        options: UiOptions,
    ) -> Vec<Line<'static>> {
        let palette = Palette::standard();
        let glyph_set = glyphs(options);
        coin_lines(face, rotation, flipping, &palette, &glyph_set, options)
    }

    #[test]
    fn face_on_coin_fills_the_middle_row() {
        let lines = render(Outcome::Head, 0.0, false, UiOptions::default());
        assert_eq!(lines.len(), ART_HEIGHT as usize);
        let middle = text_of(&lines[RADIUS_Y as usize]);
        assert_eq!(middle.trim().chars().count(), ART_WIDTH as usize);
    }

    #[test]
    fn every_line_is_padded_to_art_width() {
        let lines = render(Outcome::Tail, 137.0, true, UiOptions::default());
        for line in &lines {
            assert_eq!(text_of(line).chars().count(), ART_WIDTH as usize);
        }
    }

    #[test]
    fn edge_on_coin_is_a_sliver() {
        let lines = render(Outcome::Head, 90.0, true, UiOptions::default());
        let middle = text_of(&lines[RADIUS_Y as usize]);
        assert_eq!(middle.trim().chars().count(), 1);
    }

    #[test]
    fn resting_coin_stamps_the_face_label() {
        let lines = render(Outcome::Tail, 0.0, false, UiOptions::default());
        let middle = text_of(&lines[RADIUS_Y as usize]);
        assert!(middle.contains("TAIL"));
    }

    #[test]
    fn airborne_coin_hides_the_label() {
        let lines = render(Outcome::Head, 10.0, true, UiOptions::default());
        for line in &lines {
            let text = text_of(line);
            assert!(!text.contains("HEAD"));
            assert!(!text.contains("TAIL"));
        }
    }

    #[test]
    fn second_half_turn_shows_the_reverse_face() {
        let palette = Palette::standard();
        let lines = render(Outcome::Head, 200.0, true, UiOptions::default());
        let middle = &lines[RADIUS_Y as usize];
        assert_eq!(middle.spans[1].style.fg, Some(palette.coin_tail_dim));
    }

    #[test]
    fn reduced_motion_keeps_the_coin_face_on() {
        let options = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        let lines = render(Outcome::Head, 90.0, true, options);
        let middle = text_of(&lines[RADIUS_Y as usize]);
        assert_eq!(middle.trim().chars().count(), ART_WIDTH as usize);
    }

    #[test]
    fn ascii_mode_renders_without_unicode() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let lines = render(Outcome::Head, 0.0, false, options);
        for line in &lines {
            assert!(text_of(line).is_ascii());
        }
    }
}
