use crate::app::state::{HomeControl, HomeScreen};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, home: &HomeScreen) {
    let panel = centered(area, 46, 12);

    let block = Block::default()
        .title(" recibo ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    if inner.height < 8 || inner.width < 30 {
        return;
    }

    let tagline = Paragraph::new(Line::from(Span::styled(
        "Digitize and manage your receipts",
        Theme::control_hint(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(tagline, Rect::new(inner.x, inner.y + 1, inner.width, 1));

    let controls = [
        (HomeControl::AddItems, "  Add items  ", "edit your product list"),
        (HomeControl::ScanQr, " Scan QR code ", "capture a receipt code"),
    ];

    let mut y = inner.y + 3;
    for (control, label, hint) in controls {
        let style = if home.selected == control {
            Theme::control_selected()
        } else {
            Theme::control_normal()
        };
        let line = Line::from(vec![
            Span::styled(format!("[{}]", label), style),
            Span::raw("  "),
            Span::styled(hint, Theme::control_hint()),
        ]);
        let row = Paragraph::new(line).alignment(Alignment::Center);
        frame.render_widget(row, Rect::new(inner.x, y, inner.width, 1));
        y += 2;
    }

    let help = Line::from(vec![
        Span::styled("↑↓", Theme::key_hint()),
        Span::styled(" Select  ", Theme::key_hint_label()),
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" Open  ", Theme::key_hint_label()),
        Span::styled("q", Theme::key_hint()),
        Span::styled(" Quit", Theme::key_hint_label()),
    ]);
    let help_row = Paragraph::new(help).alignment(Alignment::Center);
    frame.render_widget(
        help_row,
        Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1),
    );
}
