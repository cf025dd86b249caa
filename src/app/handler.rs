use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => match cevent {
            CEvent::Key(key) if key.kind == KeyEventKind::Press => {
                state.dirty = true;
                handle_key(state, key)
            }
            CEvent::Resize(_, _) => {
                state.dirty = true;
                vec![]
            }
            _ => vec![],
        },
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            state.expire_status();
            vec![]
        }
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![Action::Quit];
    }

    let timestamp_format = state.config.ui.timestamp_format.clone();
    let (actions, status) = match state.router.current_mut() {
        Some(ScreenState::Home(home)) => (handle_home_key(home, key), None),
        Some(ScreenState::ProductList(list)) => handle_product_list_key(list, key),
        Some(ScreenState::Scanner(scanner)) => {
            handle_scanner_key(scanner, key, &timestamp_format)
        }
        None => (vec![], None),
    };

    if let Some(text) = status {
        state.set_status(text);
    }
    actions
}

fn handle_home_key(home: &mut HomeScreen, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
            home.toggle_selection();
            vec![]
        }
        KeyCode::Enter => vec![Action::Navigate(home.dispatch_selected())],
        KeyCode::Char('a') => vec![Action::Navigate(home.dispatch_to_product_list())],
        KeyCode::Char('s') => vec![Action::Navigate(home.dispatch_to_scanner())],
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_product_list_key(
    list: &mut ProductListScreen,
    key: KeyEvent,
) -> (Vec<Action>, Option<String>) {
    if list.mode == ProductListMode::Insert {
        return match key.code {
            KeyCode::Enter => match list.commit_insert() {
                Some(name) => (
                    vec![Action::LogActivity {
                        screen: "productlist",
                        detail: format!("added \"{}\"", name),
                    }],
                    Some(format!("Added \"{}\"", name)),
                ),
                None => (
                    vec![],
                    Some("Could not parse entry (expected: name [qty] [price])".to_string()),
                ),
            },
            KeyCode::Esc => {
                list.cancel_insert();
                (vec![], None)
            }
            KeyCode::Backspace => {
                list.input.delete_back();
                (vec![], None)
            }
            KeyCode::Left => {
                list.input.move_left();
                (vec![], None)
            }
            KeyCode::Right => {
                list.input.move_right();
                (vec![], None)
            }
            KeyCode::Home => {
                list.input.move_home();
                (vec![], None)
            }
            KeyCode::End => {
                list.input.move_end();
                (vec![], None)
            }
            KeyCode::Char(c) => {
                list.input.insert_char(c);
                (vec![], None)
            }
            _ => (vec![], None),
        };
    }

    match key.code {
        KeyCode::Up => {
            list.select_prev();
            (vec![], None)
        }
        KeyCode::Down => {
            list.select_next();
            (vec![], None)
        }
        KeyCode::Char('a') | KeyCode::Char('i') => {
            list.begin_insert();
            (vec![], None)
        }
        KeyCode::Char('d') | KeyCode::Delete => match list.delete_selected() {
            Some(name) => (
                vec![Action::LogActivity {
                    screen: "productlist",
                    detail: format!("removed \"{}\"", name),
                }],
                Some(format!("Removed \"{}\"", name)),
            ),
            None => (vec![], None),
        },
        KeyCode::Char('+') => {
            list.adjust_quantity(1);
            (vec![], None)
        }
        KeyCode::Char('-') => {
            list.adjust_quantity(-1);
            (vec![], None)
        }
        KeyCode::Esc | KeyCode::Char('q') => (vec![Action::NavigateBack], None),
        _ => (vec![], None),
    }
}

fn handle_scanner_key(
    scanner: &mut ScannerScreen,
    key: KeyEvent,
    timestamp_format: &str,
) -> (Vec<Action>, Option<String>) {
    match key.code {
        KeyCode::Enter => match scanner.capture(timestamp_format) {
            Some(code) => (
                vec![Action::LogActivity {
                    screen: "QRscanner",
                    detail: format!("captured \"{}\"", code),
                }],
                Some(format!("Captured code \"{}\"", code)),
            ),
            None => (vec![], None),
        },
        KeyCode::Esc => (vec![Action::NavigateBack], None),
        KeyCode::Backspace => {
            scanner.input.delete_back();
            (vec![], None)
        }
        KeyCode::Left => {
            scanner.input.move_left();
            (vec![], None)
        }
        KeyCode::Right => {
            scanner.input.move_right();
            (vec![], None)
        }
        KeyCode::Home => {
            scanner.input.move_home();
            (vec![], None)
        }
        KeyCode::End => {
            scanner.input.move_end();
            (vec![], None)
        }
        KeyCode::Char(c) => {
            scanner.input.insert_char(c);
            (vec![], None)
        }
        _ => (vec![], None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::nav::router::Router;
    use crate::nav::{Destination, NavRequest};
    use crossterm::event::KeyEvent;

    fn test_state() -> AppState {
        let mut router = Router::new();
        router.route(Destination::Home, || ScreenState::Home(HomeScreen::new()));
        router.route(Destination::ProductList, || {
            ScreenState::ProductList(ProductListScreen::new())
        });
        router.route(Destination::QrScanner, || {
            ScreenState::Scanner(ScannerScreen::new())
        });
        router
            .dispatch(NavRequest::to(Destination::Home))
            .expect("home is registered");
        AppState::new(AppConfig::default(), router)
    }

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_add_items_control_dispatches_product_list() {
        let mut state = test_state();
        let actions = handle_event(&mut state, press(KeyCode::Char('a')));
        assert_eq!(
            actions,
            vec![Action::Navigate(NavRequest::to(Destination::ProductList))]
        );
    }

    #[test]
    fn test_scan_qr_control_dispatches_scanner() {
        let mut state = test_state();
        let actions = handle_event(&mut state, press(KeyCode::Char('s')));
        assert_eq!(
            actions,
            vec![Action::Navigate(NavRequest::to(Destination::QrScanner))]
        );
    }

    #[test]
    fn test_enter_dispatches_highlighted_control() {
        let mut state = test_state();
        handle_event(&mut state, press(KeyCode::Down));
        let actions = handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(
            actions,
            vec![Action::Navigate(NavRequest::to(Destination::QrScanner))]
        );
    }

    #[test]
    fn test_esc_on_child_screen_navigates_back() {
        let mut state = test_state();
        state
            .router
            .dispatch(NavRequest::to(Destination::ProductList))
            .unwrap();
        let actions = handle_event(&mut state, press(KeyCode::Esc));
        assert_eq!(actions, vec![Action::NavigateBack]);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut state = test_state();
        let event = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, event), vec![Action::Quit]);
    }
}
