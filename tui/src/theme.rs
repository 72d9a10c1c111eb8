//! Color theme and glyphs for the Toss TUI.
//!
//! The default palette keeps the original look of the app: a near-black
//! backdrop, an orangered flip button, and a violet credit line. High
//! contrast mode swaps the RGB palette for pure ANSI colors so terminal
//! themes aimed at low vision keep control of the rendering.

use ratatui::style::{Color, Modifier, Style};

use toss_types::UiOptions;

mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(18, 18, 18);
    pub const BG_PANEL: Color = Color::Rgb(28, 28, 30);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(235, 235, 235);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 130, 130);
    pub const TEXT_DISABLED: Color = Color::Rgb(85, 85, 85);

    // === Accents ===
    pub const ACCENT: Color = Color::Rgb(255, 69, 0); // orangered
    pub const CREDIT: Color = Color::Rgb(187, 134, 252); // violet
    pub const SUCCESS: Color = Color::Rgb(152, 187, 108);

    // === Coin Faces ===
    pub const COIN_HEAD: Color = Color::Rgb(255, 200, 60); // minted gold
    pub const COIN_HEAD_DIM: Color = Color::Rgb(180, 140, 40);
    pub const COIN_TAIL: Color = Color::Rgb(190, 195, 205); // worn silver
    pub const COIN_TAIL_DIM: Color = Color::Rgb(130, 135, 145);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub accent: Color,
    pub credit: Color,
    pub success: Color,
    pub coin_head: Color,
    pub coin_head_dim: Color,
    pub coin_tail: Color,
    pub coin_tail_dim: Color,
}

impl Palette {
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            accent: colors::ACCENT,
            credit: colors::CREDIT,
            success: colors::SUCCESS,
            coin_head: colors::COIN_HEAD,
            coin_head_dim: colors::COIN_HEAD_DIM,
            coin_tail: colors::COIN_TAIL,
            coin_tail_dim: colors::COIN_TAIL_DIM,
        }
    }

    /// Pure ANSI palette so terminal themes keep control of rendering.
    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            text_primary: Color::White,
            text_muted: Color::Gray,
            text_disabled: Color::DarkGray,
            accent: Color::Red,
            credit: Color::Magenta,
            success: Color::Green,
            coin_head: Color::Yellow,
            coin_head_dim: Color::LightYellow,
            coin_tail: Color::White,
            coin_tail_dim: Color::Gray,
        }
    }
}

/// Pick the palette for the current UI options.
#[must_use]
pub const fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// Glyph set, switching between Unicode and plain ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub coin_fill: &'static str,
    pub bullet: &'static str,
    pub status_on: &'static str,
    pub status_off: &'static str,
}

const UNICODE_GLYPHS: Glyphs = Glyphs {
    coin_fill: "█",
    bullet: "•",
    status_on: "●",
    status_off: "○",
};

const ASCII_GLYPHS: Glyphs = Glyphs {
    coin_fill: "#",
    bullet: "*",
    status_on: "*",
    status_off: "o",
};

/// Pick the glyph set for the current UI options.
#[must_use]
pub const fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        ASCII_GLYPHS
    } else {
        UNICODE_GLYPHS
    }
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

/// Current spinner frame for an animation tick.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = if options.ascii_only {
        SPINNER_FRAMES_ASCII
    } else {
        SPINNER_FRAMES
    };
    if options.reduced_motion {
        return frames[0];
    }
    frames[tick % frames.len()]
}

/// Reusable style constructors.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn button_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_disabled(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_muted)
            .bg(palette.text_disabled)
    }

    #[must_use]
    pub fn result_line(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn credit(palette: &Palette) -> Style {
        Style::default().fg(palette.credit)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}
