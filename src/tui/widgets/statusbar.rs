use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, loading: bool, error: Option<&str>) {
    if let Some(err) = error {
        let line = Line::from(vec![
            Span::styled(format!("  ✗ {}", err), theme::red()),
            Span::styled("   [r]", theme::gold()),
            Span::styled(" coba lagi", theme::dim()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let mut spans = Vec::new();
    for (key, label) in [
        ("[c]", " kota  "),
        ("[r]", " muat ulang  "),
        ("[↑↓]", " gulir  "),
        ("[?]", " bantuan  "),
        ("[Esc]", " keluar"),
    ] {
        spans.push(Span::styled(key, theme::gold()));
        spans.push(Span::styled(label, theme::dim()));
    }

    if loading {
        spans.push(Span::styled("   memuat...", theme::teal()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
