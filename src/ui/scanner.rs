use crate::app::state::ScannerScreen;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, scanner: &ScannerScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Notice
            Constraint::Length(3), // Code entry
            Constraint::Min(3),    // Captured codes
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let notice = Paragraph::new(vec![
        Line::from(Span::styled(
            "No camera in a terminal — type the code printed",
            Theme::control_hint(),
        )),
        Line::from(Span::styled(
            "under the QR square on your receipt.",
            Theme::control_hint(),
        )),
    ])
    .block(
        Block::default()
            .title(" QR Scanner ")
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );
    frame.render_widget(notice, chunks[0]);

    let entry_block = Block::default()
        .title(" Receipt code ")
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());
    let entry_inner = entry_block.inner(chunks[1]);
    frame.render_widget(entry_block, chunks[1]);
    frame.render_widget(
        Paragraph::new(Span::styled(scanner.input.text.clone(), Theme::input_text())),
        entry_inner,
    );
    frame.set_cursor_position((entry_inner.x + scanner.input.cursor as u16, entry_inner.y));

    let captured_block = Block::default()
        .title(format!(" Captured this session ({}) ", scanner.captured.len()))
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let captured_inner = captured_block.inner(chunks[2]);
    frame.render_widget(captured_block, chunks[2]);

    let visible = captured_inner.height as usize;
    let lines: Vec<Line> = scanner
        .captured
        .iter()
        .rev()
        .take(visible)
        .map(|c| {
            Line::from(vec![
                Span::styled(format!("[{}] ", c.captured_at), Theme::timestamp()),
                Span::styled(c.code.clone(), Theme::item_name()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), captured_inner);

    let hints = Line::from(vec![
        Span::styled(" Enter", Theme::key_hint()),
        Span::styled(" Capture ", Theme::key_hint_label()),
        Span::styled(" Esc", Theme::key_hint()),
        Span::styled(" Back ", Theme::key_hint_label()),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[3]);
}
