use crate::config::AppConfig;
use crate::nav::router::Router;
use crate::nav::{Destination, NavRequest};
use chrono::Local;
use std::time::{Duration, Instant};

/// How long a transient status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn take_text(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// The two controls on the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeControl {
    AddItems,
    ScanQr,
}

#[derive(Debug)]
pub struct HomeScreen {
    pub selected: HomeControl,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            selected: HomeControl::AddItems,
        }
    }

    pub fn toggle_selection(&mut self) {
        self.selected = match self.selected {
            HomeControl::AddItems => HomeControl::ScanQr,
            HomeControl::ScanQr => HomeControl::AddItems,
        };
    }

    /// "Add items" tapped: route to the product-list editor.
    pub fn dispatch_to_product_list(&self) -> NavRequest {
        NavRequest::to(Destination::ProductList)
    }

    /// "Scan QR code" tapped: route to the scanner.
    pub fn dispatch_to_scanner(&self) -> NavRequest {
        NavRequest::to(Destination::QrScanner)
    }

    pub fn dispatch_selected(&self) -> NavRequest {
        match self.selected {
            HomeControl::AddItems => self.dispatch_to_product_list(),
            HomeControl::ScanQr => self.dispatch_to_scanner(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// Parse a product entry line: `<name> [quantity] [price]`.
///
/// The trailing tokens are peeled off the right: a token with a decimal
/// point is the unit price, an integer before it is the quantity. Whatever
/// remains is the name, which must be non-empty.
pub fn parse_entry(text: &str) -> Option<ProductItem> {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();

    let mut price = 0.0;
    if let Some(&last) = tokens.last() {
        if last.contains('.') {
            if let Ok(p) = last.parse::<f64>() {
                price = p;
                tokens.pop();
            }
        }
    }

    let mut quantity = 1;
    if let Some(&last) = tokens.last() {
        if let Ok(q) = last.parse::<u32>() {
            quantity = q;
            tokens.pop();
        }
    }

    if tokens.is_empty() {
        return None;
    }

    Some(ProductItem {
        name: tokens.join(" "),
        quantity,
        price,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductListMode {
    Browse,
    Insert,
}

#[derive(Debug)]
pub struct ProductListScreen {
    pub items: Vec<ProductItem>,
    pub selected: usize,
    pub input: InputState,
    pub mode: ProductListMode,
}

impl ProductListScreen {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            input: InputState::new(),
            mode: ProductListMode::Browse,
        }
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.items.is_empty() {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.items.len() - 1);
        }
    }

    pub fn begin_insert(&mut self) {
        self.mode = ProductListMode::Insert;
    }

    pub fn cancel_insert(&mut self) {
        self.input.clear();
        self.mode = ProductListMode::Browse;
    }

    /// Commit the entry line as a new item. Returns the added item's name,
    /// or `None` if the line did not parse.
    pub fn commit_insert(&mut self) -> Option<String> {
        let text = self.input.take_text();
        self.mode = ProductListMode::Browse;
        let item = parse_entry(&text)?;
        let name = item.name.clone();
        self.items.push(item);
        self.selected = self.items.len() - 1;
        Some(name)
    }

    /// Remove the selected item, returning its name.
    pub fn delete_selected(&mut self) -> Option<String> {
        if self.items.is_empty() {
            return None;
        }
        let item = self.items.remove(self.selected);
        if self.selected >= self.items.len() && self.selected > 0 {
            self.selected -= 1;
        }
        Some(item.name)
    }

    pub fn adjust_quantity(&mut self, delta: i32) {
        if let Some(item) = self.items.get_mut(self.selected) {
            item.quantity = item.quantity.saturating_add_signed(delta).max(1);
        }
    }

    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| f64::from(i.quantity) * i.price)
            .sum()
    }
}

#[derive(Debug, Clone)]
pub struct CapturedCode {
    pub code: String,
    pub captured_at: String,
}

#[derive(Debug)]
pub struct ScannerScreen {
    pub input: InputState,
    pub captured: Vec<CapturedCode>,
}

impl ScannerScreen {
    pub fn new() -> Self {
        Self {
            input: InputState::new(),
            captured: Vec::new(),
        }
    }

    /// Record the typed receipt code. Empty input is ignored. Returns the
    /// captured code for logging.
    pub fn capture(&mut self, timestamp_format: &str) -> Option<String> {
        let code = self.input.take_text();
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.captured.push(CapturedCode {
            code: code.to_string(),
            captured_at: Local::now().format(timestamp_format).to_string(),
        });
        Some(code.to_string())
    }
}

/// State of one live screen on the navigation stack.
#[derive(Debug)]
pub enum ScreenState {
    Home(HomeScreen),
    ProductList(ProductListScreen),
    Scanner(ScannerScreen),
}

impl ScreenState {
    pub fn destination(&self) -> Destination {
        match self {
            ScreenState::Home(_) => Destination::Home,
            ScreenState::ProductList(_) => Destination::ProductList,
            ScreenState::Scanner(_) => Destination::QrScanner,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScreenState::Home(_) => "Home",
            ScreenState::ProductList(_) => "Product List",
            ScreenState::Scanner(_) => "QR Scanner",
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub router: Router<ScreenState>,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    status_set_at: Option<Instant>,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig, router: Router<ScreenState>) -> Self {
        Self {
            config,
            router,
            should_quit: false,
            dirty: true,
            status_message: None,
            status_set_at: None,
            tick_count: 0,
        }
    }

    pub fn set_status(&mut self, text: String) {
        self.status_message = Some(text);
        self.status_set_at = Some(Instant::now());
        self.dirty = true;
    }

    /// Drop the status message once it has been on screen long enough.
    pub fn expire_status(&mut self) {
        if let Some(set_at) = self.status_set_at {
            if set_at.elapsed() > STATUS_TTL {
                self.status_message = None;
                self.status_set_at = None;
                self.dirty = true;
            }
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match self.router.current() {
            Some(ScreenState::ProductList(list)) => {
                format!(
                    "{} items | total {}{:.2}",
                    list.items.len(),
                    self.config.ui.currency_symbol,
                    list.total()
                )
            }
            Some(ScreenState::Scanner(scanner)) => {
                format!("{} codes captured this session", scanner.captured.len())
            }
            Some(ScreenState::Home(_)) => "Welcome to recibo".to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_triggers_map_to_fixed_names() {
        let home = HomeScreen::new();
        assert_eq!(home.dispatch_to_product_list().symbolic_name(), "productlist");
        assert_eq!(home.dispatch_to_scanner().symbolic_name(), "QRscanner");
        // Repeated dispatch produces the same request every time.
        for _ in 0..3 {
            assert_eq!(home.dispatch_to_product_list().symbolic_name(), "productlist");
        }
    }

    #[test]
    fn test_dispatch_selected_follows_highlight() {
        let mut home = HomeScreen::new();
        assert_eq!(home.dispatch_selected().destination(), Destination::ProductList);
        home.toggle_selection();
        assert_eq!(home.dispatch_selected().destination(), Destination::QrScanner);
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            parse_entry("milk 2 1.50"),
            Some(ProductItem {
                name: "milk".into(),
                quantity: 2,
                price: 1.50
            })
        );
        assert_eq!(
            parse_entry("rye bread"),
            Some(ProductItem {
                name: "rye bread".into(),
                quantity: 1,
                price: 0.0
            })
        );
        assert_eq!(
            parse_entry("eggs 12"),
            Some(ProductItem {
                name: "eggs".into(),
                quantity: 12,
                price: 0.0
            })
        );
        assert_eq!(parse_entry(""), None);
        assert_eq!(parse_entry("   "), None);
        assert_eq!(parse_entry("2 1.50"), None);
    }

    #[test]
    fn test_product_list_editing() {
        let mut list = ProductListScreen::new();
        list.begin_insert();
        for c in "butter 1 3.20".chars() {
            list.input.insert_char(c);
        }
        assert_eq!(list.commit_insert(), Some("butter".to_string()));
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.mode, ProductListMode::Browse);

        list.adjust_quantity(2);
        assert_eq!(list.items[0].quantity, 3);
        list.adjust_quantity(-10);
        assert_eq!(list.items[0].quantity, 1);

        assert_eq!(list.delete_selected(), Some("butter".to_string()));
        assert!(list.items.is_empty());
        assert_eq!(list.delete_selected(), None);
    }

    #[test]
    fn test_scanner_ignores_empty_capture() {
        let mut scanner = ScannerScreen::new();
        assert_eq!(scanner.capture("%H:%M"), None);
        for c in "t=20180909T1532&s=120.00".chars() {
            scanner.input.insert_char(c);
        }
        assert_eq!(
            scanner.capture("%H:%M"),
            Some("t=20180909T1532&s=120.00".to_string())
        );
        assert_eq!(scanner.captured.len(), 1);
    }
}
