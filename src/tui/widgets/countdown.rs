use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tui_big_text::{BigText, PixelSize};

use crate::models::Countdown;
use crate::tui::theme;

/// The "Menuju waktu Sholat ..." panel with the remaining time rendered big.
pub fn render(frame: &mut Frame, area: Rect, countdown: Option<&Countdown>, city: &str, loading: bool) {
    let block = Block::default()
        .title(Span::styled(" Menuju Waktu Sholat ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(countdown) = countdown else {
        let message = if loading {
            format!("  Memuat jadwal sholat untuk {}...", city)
        } else {
            "  Belum ada jadwal".to_string()
        };
        frame.render_widget(
            Paragraph::new(vec![Line::from(""), Line::from(Span::styled(message, theme::dim()))]),
            inner,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let label_line = Line::from(vec![
        Span::styled("  Sholat ", theme::dim()),
        Span::styled(
            countdown.prayer.display_name(),
            theme::gold().add_modifier(Modifier::BOLD),
        ),
        Span::styled("  di Kota ", theme::dim()),
        Span::styled(city.to_string(), theme::bold()),
    ]);
    frame.render_widget(Paragraph::new(label_line), chunks[0]);

    let big = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(theme::gold().add_modifier(Modifier::BOLD))
        .lines(vec![Line::from(countdown.remaining.to_string())])
        .alignment(Alignment::Center)
        .build();
    frame.render_widget(big, chunks[1]);
}
