use crate::app::state::{ProductListMode, ProductListScreen};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    list: &ProductListScreen,
    currency_symbol: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Items
            Constraint::Length(3), // Entry box
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_items(frame, chunks[0], list, currency_symbol);
    render_entry_box(frame, chunks[1], list);
    render_hints(frame, chunks[2], list);
}

fn render_items(frame: &mut Frame, area: Rect, list: &ProductListScreen, currency_symbol: &str) {
    let title = format!(
        " Product List — {} items, total {}{:.2} ",
        list.items.len(),
        currency_symbol,
        list.total()
    );
    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if list.items.is_empty() {
        let empty = Paragraph::new(Span::styled(
            " No items yet — press 'a' to add one",
            Theme::control_hint(),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    let visible = inner.height as usize;
    let start = list.selected.saturating_sub(visible.saturating_sub(1));
    let mut lines: Vec<Line> = Vec::new();
    for (i, item) in list.items.iter().enumerate().skip(start).take(visible) {
        let marker = if i == list.selected { "> " } else { "  " };
        let name_style = if i == list.selected {
            Theme::item_selected()
        } else {
            Theme::item_name()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<30}", marker, item.name), name_style),
            Span::styled(format!(" x{:<4}", item.quantity), Theme::control_hint()),
            Span::styled(
                format!(
                    "{}{:.2}",
                    currency_symbol,
                    f64::from(item.quantity) * item.price
                ),
                Theme::amount(),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_entry_box(frame: &mut Frame, area: Rect, list: &ProductListScreen) {
    let inserting = list.mode == ProductListMode::Insert;
    let block = Block::default()
        .title(" New item (name [qty] [price]) ")
        .borders(Borders::ALL)
        .border_style(if inserting {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = if inserting {
        Span::styled(list.input.text.clone(), Theme::input_text())
    } else {
        Span::styled("press 'a' to add", Theme::control_hint())
    };
    frame.render_widget(Paragraph::new(Line::from(text)), inner);

    if inserting {
        frame.set_cursor_position((inner.x + list.input.cursor as u16, inner.y));
    }
}

fn render_hints(frame: &mut Frame, area: Rect, list: &ProductListScreen) {
    let hints: &[(&str, &str)] = if list.mode == ProductListMode::Insert {
        &[("Enter", "Add"), ("Esc", "Cancel")]
    } else {
        &[
            ("a", "Add"),
            ("d", "Delete"),
            ("+/-", "Quantity"),
            ("Esc", "Back"),
        ]
    };
    let mut spans: Vec<Span> = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {}", key), Theme::key_hint()));
        spans.push(Span::styled(format!(" {} ", label), Theme::key_hint_label()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
