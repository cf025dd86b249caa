mod home;
mod layout;
mod product_list;
mod scanner;
mod status_bar;
mod theme;

use crate::app::state::{AppState, ScreenState};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_header(frame, app_layout.header, state);

    match state.router.current() {
        Some(ScreenState::Home(home)) => home::render(frame, app_layout.body, home),
        Some(ScreenState::ProductList(list)) => product_list::render(
            frame,
            app_layout.body,
            list,
            &state.config.ui.currency_symbol,
        ),
        Some(ScreenState::Scanner(scanner)) => scanner::render(frame, app_layout.body, scanner),
        None => {}
    }

    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = state
        .router
        .current()
        .map(|s| s.title())
        .unwrap_or_default();
    let line = Line::from(vec![
        Span::styled(" recibo ", Theme::title().bg(Color::DarkGray)),
        Span::styled(format!("— {}", title), Theme::header_bar()),
        Span::styled(
            " ".repeat((area.width as usize).saturating_sub(title.len() + 11)),
            Theme::header_bar(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
