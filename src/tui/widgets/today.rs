use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::models::{DaySchedule, PrayerKey};
use crate::tui::theme;

/// One-line strip of today's seven times, the upcoming prayer highlighted.
pub fn render(frame: &mut Frame, area: Rect, today: Option<&DaySchedule>, next: Option<PrayerKey>) {
    let block = Block::default()
        .title(Span::styled(" Hari Ini ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(today) = today else {
        frame.render_widget(
            Paragraph::new(Span::styled("  --", theme::dim())),
            inner,
        );
        return;
    };

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7])
        .split(inner);

    for (key, cell) in PrayerKey::DAILY_ORDER.into_iter().zip(cells.iter()) {
        let time = today.timing(key).unwrap_or("--:--");
        let is_next = next == Some(key);

        let (label_style, time_style) = if is_next {
            (theme::highlight(), theme::highlight())
        } else {
            (theme::dim(), theme::bold())
        };

        let text = vec![
            Line::from(Span::styled(key.display_name(), label_style)),
            Line::from(Span::styled(time.to_string(), time_style)),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), *cell);
    }
}
