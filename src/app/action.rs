use crate::nav::NavRequest;

/// Commands produced by input handling and executed by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(NavRequest),
    NavigateBack,
    LogActivity {
        screen: &'static str,
        detail: String,
    },
    Quit,
}
