use crate::catalog::{Catalog, Product};
use crate::config::{Config, TimingConfig};
use crate::host::{HostBridge, HostReadiness};
use crate::ui::cart::{CartIntent, CartReducer, CartState};
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{NavIntent, NavReducer, NavigationState, ReturnScreen, Screen, Selection};
use crate::ui::orders::{OrderRecord, OrdersIntent, OrdersReducer, OrdersState};
use crate::ui::scheduler::{Scheduler, TimerEvent, TimerSlot};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Screen navigation state (MVI pattern).
    navigation: NavigationState,
    /// Cart contents (MVI pattern).
    cart: CartState,
    /// Session order history and new-order signal (MVI pattern).
    orders: OrdersState,
    /// Profile overlay, drawn above whichever screen is current.
    show_profile: bool,
    /// Highlighted row of the current screen's list.
    cursor: usize,
    /// Quantity picker on the product screen.
    quantity: u32,
    catalog: Catalog,
    timing: TimingConfig,
    scheduler: Box<dyn Scheduler>,
    host: Box<dyn HostBridge>,
    host_readiness: HostReadiness,
}

impl App {
    pub fn new(config: &Config, scheduler: Box<dyn Scheduler>, host: Box<dyn HostBridge>) -> Self {
        Self {
            should_quit: false,
            navigation: NavigationState::default(),
            cart: CartState::default(),
            orders: OrdersState::default(),
            show_profile: false,
            cursor: 0,
            quantity: 1,
            catalog: config.menu.clone(),
            timing: config.timing.clone(),
            scheduler,
            host,
            host_readiness: HostReadiness::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn orders(&self) -> &OrdersState {
        &self.orders
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_screen(&self) -> Screen {
        self.navigation.current()
    }

    pub fn is_transitioning(&self) -> bool {
        self.navigation.is_transitioning()
    }

    pub fn show_profile(&self) -> bool {
        self.show_profile
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Whether the cart affordance is shown at all.
    pub fn cart_visible(&self) -> bool {
        !self.cart.is_empty()
    }

    pub fn cart_total(&self) -> u32 {
        self.catalog.cart_total(&self.cart)
    }

    pub fn new_order_number(&self) -> Option<&str> {
        self.orders.new_order()
    }

    pub fn host_readiness(&self) -> HostReadiness {
        self.host_readiness
    }

    /// Rows reserved above the storefront for the host header.
    pub fn header_inset(&self) -> u16 {
        if self.host.full_screen_enabled() {
            self.host.header_padding()
        } else {
            0
        }
    }

    // --- Host handshake ---

    /// Initialize the host, or schedule the one retry if it is not there yet.
    pub fn mount(&mut self) {
        if self.host.is_present() {
            self.initialize_host();
        } else {
            tracing::debug!("Host not present at mount, retrying once");
            self.host_readiness = HostReadiness::AwaitingRetry;
            self.scheduler
                .schedule(self.timing.host_retry(), TimerEvent::HostRetry);
        }
    }

    /// Suppress every pending timer. The app is inert afterwards.
    pub fn unmount(&mut self) {
        self.scheduler.cancel_all();
    }

    fn initialize_host(&mut self) {
        self.host_readiness = match self.host.initialize() {
            Ok(()) => {
                tracing::info!("Host initialized");
                HostReadiness::Ready
            }
            Err(err) => {
                tracing::warn!(error = %err, "Host initialization failed");
                HostReadiness::Unavailable
            }
        };
    }

    // --- Navigation ---

    /// Start the fade-out → swap → fade-in sequence towards `target`.
    ///
    /// Any transition still in flight is superseded: its timers are replaced
    /// and its selection is never applied.
    pub fn request_transition(&mut self, target: Screen, selection: Option<Selection>) {
        tracing::debug!(from = %self.navigation.current(), to = %target, "Transition requested");
        dispatch_mvi!(self, navigation, NavReducer, NavIntent::Begin { target, selection });
        let generation = self.navigation.generation();
        self.scheduler.schedule(
            self.timing.fade_out(),
            TimerEvent::TransitionSwap { generation },
        );
    }

    pub fn go_home(&mut self) {
        self.request_transition(Screen::Home, None);
    }

    /// Open the category listing. `None` lists the whole menu.
    pub fn go_to_categories(&mut self, category: Option<&str>) {
        let category = category.unwrap_or_default().to_string();
        self.request_transition(Screen::Categories, Some(Selection::Category(category)));
    }

    pub fn go_to_product(&mut self, product: &str) {
        self.request_transition(
            Screen::Product,
            Some(Selection::Product(product.to_string())),
        );
    }

    pub fn go_to_cart(&mut self) {
        self.request_transition(Screen::Cart, None);
    }

    pub fn go_to_orders(&mut self) {
        self.request_transition(Screen::Orders, None);
    }

    /// Return from the cart or the order history to where the shopper came
    /// from, restoring the sticky selection. No-op on other screens.
    pub fn go_back(&mut self) {
        if !self.navigation.current().is_detour() {
            return;
        }
        match self.navigation.previous() {
            ReturnScreen::Product => {
                let product = self.navigation.selected_product().to_string();
                self.go_to_product(&product);
            }
            ReturnScreen::Categories => {
                let category = self.navigation.selected_category().to_string();
                self.go_to_categories(Some(&category));
            }
            ReturnScreen::Home => self.go_home(),
        }
    }

    pub fn toggle_profile(&mut self) {
        self.show_profile = !self.show_profile;
    }

    pub fn close_profile(&mut self) {
        self.show_profile = false;
    }

    // --- Cart ---

    /// Merge `quantity` of a product into the cart. Zero is a no-op.
    pub fn add_to_cart(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        tracing::info!(product_id, quantity, "Added to cart");
        dispatch_mvi!(
            self,
            cart,
            CartReducer,
            CartIntent::Add {
                product_id: product_id.to_string(),
                quantity,
            }
        );
    }

    /// Empty the cart. With an order number, also announce it to the orders
    /// screen; without one, an earlier announcement is left alone.
    pub fn reset_cart(&mut self, order_number: Option<String>) {
        dispatch_mvi!(self, cart, CartReducer, CartIntent::Reset);
        if let Some(number) = order_number {
            dispatch_mvi!(self, orders, OrdersReducer, OrdersIntent::Signal { number });
        }
    }

    /// Product screen handler: add the picked quantity, then show the cart.
    pub fn add_selected_to_cart(&mut self) {
        let product = self.navigation.selected_product().to_string();
        if product.is_empty() {
            return;
        }
        self.add_to_cart(&product, self.quantity);
        self.go_to_cart();
    }

    /// Cart screen handler: record the order, empty the cart and go home.
    ///
    /// Returns the new order number, or `None` when the cart is empty.
    pub fn complete_order(&mut self) -> Option<String> {
        if self.cart.is_empty() {
            return None;
        }
        let number = new_order_number();
        let record = OrderRecord {
            number: number.clone(),
            items: self.cart.items().to_vec(),
            total: self.cart_total(),
        };
        tracing::info!(
            order = %number,
            items = record.item_count(),
            total = record.total,
            "Order placed"
        );
        dispatch_mvi!(self, orders, OrdersReducer, OrdersIntent::Record { record });
        self.reset_cart(Some(number.clone()));
        self.go_home();
        Some(number)
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrement_quantity(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    // --- Lists ---

    /// Products shown on the category screen for the sticky category.
    pub fn listed_products(&self) -> Vec<&Product> {
        self.catalog.products_in(self.navigation.selected_category())
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.catalog.product(self.navigation.selected_product())
    }

    fn list_len(&self) -> usize {
        match self.navigation.current() {
            Screen::Home => self.catalog.categories().len(),
            Screen::Categories => self.listed_products().len(),
            Screen::Cart => self.cart.items().len(),
            Screen::Orders => self.orders.history().len(),
            Screen::Product => 0,
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.list_len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    /// Activate the highlighted row (or the main action) of the current screen.
    pub fn activate(&mut self) {
        match self.navigation.current() {
            Screen::Home => {
                let category = self
                    .catalog
                    .categories()
                    .get(self.cursor)
                    .map(|c| c.id.clone());
                if let Some(category) = category {
                    self.go_to_categories(Some(&category));
                }
            }
            Screen::Categories => {
                let product = self.listed_products().get(self.cursor).map(|p| p.id.clone());
                if let Some(product) = product {
                    self.go_to_product(&product);
                }
            }
            Screen::Product => self.add_selected_to_cart(),
            Screen::Cart => {
                self.complete_order();
            }
            Screen::Orders => {}
        }
    }

    // --- Timers ---

    pub fn on_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::TransitionSwap { generation } => {
                let fresh = self
                    .navigation
                    .pending()
                    .is_some_and(|pending| pending.generation == generation);
                if !fresh {
                    tracing::trace!(generation, "Ignoring stale transition swap");
                    return;
                }
                dispatch_mvi!(self, navigation, NavReducer, NavIntent::Swap { generation });
                self.on_screen_swapped();
                self.scheduler.schedule(
                    self.timing.fade_in(),
                    TimerEvent::TransitionSettle { generation },
                );
            }
            TimerEvent::TransitionSettle { generation } => {
                dispatch_mvi!(self, navigation, NavReducer, NavIntent::Settle { generation });
                if !self.navigation.is_transitioning() {
                    tracing::debug!(screen = %self.navigation.current(), "Transition settled");
                }
            }
            TimerEvent::OrderSignalExpire { number } => {
                if self.navigation.current() == Screen::Orders {
                    dispatch_mvi!(self, orders, OrdersReducer, OrdersIntent::Expire { number });
                }
            }
            TimerEvent::HostRetry => {
                if self.host_readiness == HostReadiness::AwaitingRetry {
                    self.initialize_host();
                }
            }
        }
    }

    fn on_screen_swapped(&mut self) {
        self.cursor = 0;
        match self.navigation.current() {
            Screen::Product => self.quantity = 1,
            Screen::Orders => {
                if let Some(number) = self.orders.new_order() {
                    let number = number.to_string();
                    self.scheduler.schedule(
                        self.timing.order_confirmation(),
                        TimerEvent::OrderSignalExpire { number },
                    );
                }
                return;
            }
            _ => {}
        }
        self.scheduler.cancel(TimerSlot::OrderSignal);
    }
}

/// `ORD-` followed by eight upper-case hex digits.
fn new_order_number() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("ORD-{}", id[..8].to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::app;
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;

    /// In-memory sink for the fmt subscriber.
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged(f: impl FnOnce()) -> String {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = log.0.lock().clone();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[test]
    fn zero_quantity_add_is_silent_noop() {
        let mut app = app();
        let output = logged(|| app.add_to_cart("latte", 0));
        assert!(!output.contains("Added to cart"), "unexpected log: {output}");
        assert!(app.cart().is_empty());
        assert!(!app.cart_visible());
    }

    #[test]
    fn positive_add_is_logged() {
        let mut app = app();
        let output = logged(|| app.add_to_cart("latte", 2));
        assert!(output.contains("Added to cart"));
        assert_eq!(app.item_count(), 2);
    }

    #[test]
    fn order_numbers_are_prefixed_hex() {
        let number = new_order_number();
        assert!(number.starts_with("ORD-"));
        let digits = &number[4..];
        assert_eq!(digits.len(), 8);
        assert!(digits
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn order_numbers_differ() {
        assert_ne!(new_order_number(), new_order_number());
    }
}
