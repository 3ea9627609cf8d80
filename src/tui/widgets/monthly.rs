use chrono::NaiveDate;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};

use crate::models::{MonthlySchedule, PrayerKey};
use crate::tui::theme;
use crate::utils::format::{indonesian_month, indonesian_weekday, short_date};

/// Scrollable month table, one row per day, today's row highlighted.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    monthly: Option<&MonthlySchedule>,
    today: NaiveDate,
    offset: usize,
) {
    let title = match monthly {
        Some(m) => format!(" Jadwal Bulanan — {} {} ", indonesian_month(m.month), m.year),
        None => " Jadwal Bulanan ".to_string(),
    };

    let block = Block::default()
        .title(Span::styled(title, theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let Some(monthly) = monthly else {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Span::styled("  Belum ada data bulan ini", theme::dim())),
            inner,
        );
        return;
    };

    let header = Row::new(
        std::iter::once("Tanggal")
            .chain(PrayerKey::DAILY_ORDER.iter().map(|k| k.display_name()))
            .map(|h| Cell::from(Span::styled(h, theme::gold())))
            .collect::<Vec<_>>(),
    )
    .bottom_margin(1);

    let offset = offset.min(monthly.days.len().saturating_sub(1));
    let rows: Vec<Row> = monthly
        .days
        .iter()
        .skip(offset)
        .map(|day| {
            let date_label = format!(
                "{}, {}",
                indonesian_weekday(&day.weekday_en),
                short_date(day.date)
            );
            let mut cells = vec![Cell::from(date_label)];
            for key in PrayerKey::DAILY_ORDER {
                cells.push(Cell::from(day.timing(key).unwrap_or("--:--").to_string()));
            }

            let row = Row::new(cells);
            if day.date == today {
                row.style(theme::highlight())
            } else {
                row
            }
        })
        .collect();

    let mut widths = vec![Constraint::Length(18)];
    widths.extend(std::iter::repeat(Constraint::Length(8)).take(7));

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
