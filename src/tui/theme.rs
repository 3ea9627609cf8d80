use ratatui::style::{Color, Modifier, Style};

// Palette lifted from the web schedule this replaces: teal #3C6E71 panels,
// gold #F1B234 headings, yellow highlight for today's row.
pub const BG: Color = Color::Rgb(15, 23, 25);
pub const SURFACE: Color = Color::Rgb(23, 34, 37);
pub const BORDER: Color = Color::Rgb(45, 66, 70);
pub const TEAL: Color = Color::Rgb(60, 110, 113);
pub const GOLD: Color = Color::Rgb(241, 178, 52);
pub const HIGHLIGHT: Color = Color::Rgb(250, 204, 21);
pub const TEXT: Color = Color::Rgb(214, 222, 220);
pub const TEXT_DIM: Color = Color::Rgb(116, 132, 130);
pub const RED: Color = Color::Rgb(190, 84, 62);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn teal() -> Style {
    Style::default().fg(TEAL)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Yellow-on-black emphasis for "this is today / this is next".
pub fn highlight() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}
