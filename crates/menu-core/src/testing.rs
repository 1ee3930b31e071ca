//! In-memory page fakes for unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use menu_observability::{LogLevel, MemorySink, StructuredLogger};

use crate::cart::{CartPanel, CartSurface, Navigator};
use crate::catalog::{CardContainer, CategoryButton, Extent, ProductCard, SearchBox};
use crate::error::MenuError;
use crate::slider::{SlideDeck, Ticker};

/// Logger that records everything and prints nothing.
pub fn quiet_logger() -> StructuredLogger {
    StructuredLogger::with_sink(Rc::new(MemorySink::new())).with_min_level(LogLevel::Trace)
}

#[derive(Debug)]
struct CardState {
    category: String,
    title: String,
    shown: bool,
    gap: String,
    extent: Extent,
}

/// A product card handle. Clones share state, like element references.
#[derive(Debug, Clone)]
pub struct FakeCard(Rc<RefCell<CardState>>);

impl FakeCard {
    pub fn new(category: &str, title: &str) -> Self {
        Self(Rc::new(RefCell::new(CardState {
            category: category.to_string(),
            title: title.to_string(),
            shown: true,
            gap: String::new(),
            extent: Extent::default(),
        })))
    }

    pub fn gap(&self) -> String {
        self.0.borrow().gap.clone()
    }

    pub fn place(&self, extent: Extent) {
        self.0.borrow_mut().extent = extent;
    }

    fn same(&self, other: &FakeCard) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ProductCard for FakeCard {
    fn category(&self) -> String {
        self.0.borrow().category.clone()
    }

    fn title(&self) -> String {
        self.0.borrow().title.clone()
    }

    fn is_shown(&self) -> bool {
        self.0.borrow().shown
    }

    fn set_shown(&self, shown: bool) {
        self.0.borrow_mut().shown = shown;
    }

    fn set_trailing_gap(&self, gap: &str) {
        self.0.borrow_mut().gap = gap.to_string();
    }

    fn extent(&self) -> Extent {
        self.0.borrow().extent
    }
}

/// A product grid holding cards in display order.
#[derive(Debug, Default)]
pub struct FakeGrid {
    cards: RefCell<Vec<FakeCard>>,
}

impl FakeGrid {
    /// Build a grid from `(category, title)` pairs.
    pub fn new(cards: &[(&str, &str)]) -> Self {
        Self {
            cards: RefCell::new(cards.iter().map(|(c, t)| FakeCard::new(c, t)).collect()),
        }
    }

    /// The card titled `title`.
    pub fn card(&self, title: &str) -> FakeCard {
        self.cards
            .borrow()
            .iter()
            .find(|c| c.title() == title)
            .cloned()
            .unwrap_or_else(|| panic!("no card titled {}", title))
    }

    pub fn cards_snapshot(&self) -> Vec<FakeCard> {
        self.cards.borrow().clone()
    }

    pub fn shown_cards(&self) -> Vec<FakeCard> {
        self.cards.borrow().iter().filter(|c| c.is_shown()).cloned().collect()
    }

    /// Every title in display order, hidden cards included.
    pub fn titles(&self) -> Vec<String> {
        self.cards.borrow().iter().map(ProductCard::title).collect()
    }

    pub fn shown_titles(&self) -> Vec<String> {
        self.shown_cards().iter().map(ProductCard::title).collect()
    }

    pub fn shown_categories(&self) -> Vec<String> {
        self.shown_cards().iter().map(ProductCard::category).collect()
    }
}

impl CardContainer for FakeGrid {
    type Card = FakeCard;

    fn cards(&self) -> Vec<FakeCard> {
        self.cards_snapshot()
    }

    fn append(&self, card: &FakeCard) {
        let mut cards = self.cards.borrow_mut();
        cards.retain(|c| !c.same(card));
        cards.push(card.clone());
    }
}

/// A category button.
#[derive(Debug, Clone)]
pub struct FakeButton {
    label: String,
    active: Rc<Cell<bool>>,
}

impl FakeButton {
    /// One button per label, none active.
    pub fn row(labels: &[&str]) -> Vec<FakeButton> {
        labels
            .iter()
            .map(|label| FakeButton {
                label: label.to_string(),
                active: Rc::new(Cell::new(false)),
            })
            .collect()
    }

    /// Labels of the active buttons, in order.
    pub fn active_labels(buttons: &[FakeButton]) -> Vec<String> {
        buttons
            .iter()
            .filter(|b| b.active.get())
            .map(|b| b.label.clone())
            .collect()
    }
}

impl CategoryButton for FakeButton {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}

#[derive(Debug, Default)]
struct SearchState {
    query: String,
    open: bool,
    focused: bool,
}

/// The collapsible search input.
#[derive(Debug, Clone, Default)]
pub struct FakeSearchBox(Rc<RefCell<SearchState>>);

impl FakeSearchBox {
    pub fn type_query(&self, query: &str) {
        self.0.borrow_mut().query = query.to_string();
    }

    pub fn focused(&self) -> bool {
        self.0.borrow().focused
    }
}

impl SearchBox for FakeSearchBox {
    fn query(&self) -> String {
        self.0.borrow().query.clone()
    }

    fn clear(&self) {
        self.0.borrow_mut().query.clear();
    }

    fn is_open(&self) -> bool {
        self.0.borrow().open
    }

    fn set_open(&self, open: bool) {
        let mut state = self.0.borrow_mut();
        state.open = open;
        if !open {
            state.focused = false;
        }
    }

    fn focus(&self) {
        self.0.borrow_mut().focused = true;
    }
}

#[derive(Debug, Default)]
struct SurfaceState {
    detached: bool,
    badge: Option<u64>,
    panel: Option<CartPanel>,
    renders: usize,
}

/// Cart badge and panel. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct FakeCartSurface(Rc<RefCell<SurfaceState>>);

impl FakeCartSurface {
    /// A page with neither a badge nor a panel.
    pub fn detached() -> Self {
        let surface = Self::default();
        surface.0.borrow_mut().detached = true;
        surface
    }

    pub fn badge(&self) -> Option<u64> {
        self.0.borrow().badge
    }

    pub fn panel(&self) -> Option<CartPanel> {
        self.0.borrow().panel.clone()
    }

    /// Render calls so far, successful or not.
    pub fn render_count(&self) -> usize {
        self.0.borrow().renders
    }
}

impl CartSurface for FakeCartSurface {
    fn render_badge(&self, count: u64) -> Result<(), MenuError> {
        let mut state = self.0.borrow_mut();
        state.renders += 1;
        if state.detached {
            return Err(MenuError::MissingTarget("badge"));
        }
        state.badge = Some(count);
        Ok(())
    }

    fn render_panel(&self, panel: &CartPanel) -> Result<(), MenuError> {
        let mut state = self.0.borrow_mut();
        state.renders += 1;
        if state.detached {
            return Err(MenuError::MissingTarget("panel"));
        }
        state.panel = Some(panel.clone());
        Ok(())
    }
}

/// Records navigations instead of leaving the page.
#[derive(Debug, Clone, Default)]
pub struct FakeNavigator(Rc<RefCell<Vec<String>>>);

impl FakeNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Navigator for FakeNavigator {
    fn navigate(&self, url: &str) {
        self.0.borrow_mut().push(url.to_string());
    }
}

/// Slides that remember every index shown.
#[derive(Debug)]
pub struct FakeDeck {
    count: usize,
    history: RefCell<Vec<usize>>,
}

impl FakeDeck {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            history: RefCell::new(Vec::new()),
        }
    }

    pub fn history(&self) -> Vec<usize> {
        self.history.borrow().clone()
    }

    pub fn active(&self) -> Option<usize> {
        self.history.borrow().last().copied()
    }
}

impl SlideDeck for FakeDeck {
    fn slide_count(&self) -> usize {
        self.count
    }

    fn show(&self, index: usize) {
        self.history.borrow_mut().push(index);
    }
}

/// Counts armed intervals the way a page would: every start adds one and
/// every stop clears one.
#[derive(Debug, Default)]
pub struct FakeTicker {
    starts: u32,
    live: u32,
    interval: Option<u32>,
}

impl FakeTicker {
    pub fn starts(&self) -> u32 {
        self.starts
    }

    pub fn live(&self) -> u32 {
        self.live
    }

    pub fn interval(&self) -> Option<u32> {
        self.interval
    }
}

impl Ticker for FakeTicker {
    fn start(&mut self, interval_ms: u32) {
        self.starts += 1;
        self.live += 1;
        self.interval = Some(interval_ms);
    }

    fn stop(&mut self) {
        self.live = self.live.saturating_sub(1);
    }

    fn is_running(&self) -> bool {
        self.live > 0
    }
}
