use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::tui::theme;
use crate::utils::format::{indonesian_weekday, short_date};

pub fn render(frame: &mut Frame, area: Rect, city: &str, hijri_str: &str) {
    let today = Local::now().date_naive();
    let weekday_en = today.format("%A").to_string();
    let gregorian_str = format!("{}, {}", indonesian_weekday(&weekday_en), short_date(today));

    let title_line = Line::from(vec![
        Span::styled("  جدول  ", theme::gold().add_modifier(Modifier::BOLD)),
        Span::styled("jadwal sholat", theme::gold()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(format!("Kota {}", city), theme::bold()),
    ]);

    let date_line = Line::from(vec![
        Span::styled(hijri_str.to_string(), theme::teal()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(gregorian_str, theme::dim()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold())
        .style(theme::base());

    let paragraph = Paragraph::new(vec![title_line, Line::from(""), date_line])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
