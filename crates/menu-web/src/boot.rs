//! Page-ready boot: read configuration, build the widget, wire listeners.

use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use menu_core::prelude::*;
use menu_observability::StructuredLogger;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, PageTransitionEvent, StorageEvent, Window};

use crate::app::{self, with_app, MenuApp, PageStore};
use crate::config::{PageConfig, CONFIG_ATTRIBUTE};
use crate::dom::{
    cart_action, find, CartAction, DomButton, DomCartSurface, DomGrid, DomSearchBox, DomSlideDeck,
    IntervalTimer, LocationNavigator,
};
use crate::exports;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = schedule() {
        report(&e);
    }
}

fn report(error: &anyhow::Error) {
    web_sys::console::error_1(&format!("menu widget failed to start: {:#}", error).into());
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

/// Boot now if the page has finished loading, otherwise on `load`.
fn schedule() -> Result<()> {
    let window = web_sys::window().context("no window")?;
    let document = window.document().context("no document")?;

    if document.ready_state() == "complete" {
        return boot(&window, &document);
    }

    let on_load = {
        let window = window.clone();
        Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let result = window
                .document()
                .context("no document")
                .and_then(|document| boot(&window, &document));
            if let Err(e) = result {
                report(&e);
            }
        }))
    };
    window
        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
        .map_err(js_error)
        .context("listen for load")?;
    on_load.forget();
    Ok(())
}

struct Page {
    window: Window,
    document: Document,
    config: PageConfig,
    selectors: Rc<crate::config::Selectors>,
    logger: StructuredLogger,
}

impl Page {
    fn read(window: &Window, document: &Document) -> Self {
        let attribute = document
            .body()
            .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
        let (config, problem) = PageConfig::resolve(attribute.as_deref());

        let page_path = window.location().pathname().unwrap_or_default();
        let logger = StructuredLogger::new()
            .with_min_level(config.widget.log_level)
            .with_format(config.widget.log_format)
            .with_page(page_path);

        if let Some(problem) = problem {
            logger
                .warn_builder("invalid page configuration, using defaults")
                .field("error", problem.to_string())
                .emit();
        }

        Self {
            window: window.clone(),
            document: document.clone(),
            selectors: Rc::new(config.selectors.clone()),
            config,
            logger,
        }
    }

    fn has(&self, selector: &str) -> bool {
        matches!(find(&self.document, selector), Ok(Some(_)))
    }

    /// Build a fresh widget from the current page.
    fn build(&self) -> Result<MenuApp> {
        let widget = &self.config.widget;

        let grid = DomGrid::find(&self.document, self.selectors.clone())?;
        let buttons = DomButton::all(&self.document, self.selectors.clone())?;
        let catalog =
            grid.map(|grid| CatalogView::new(grid, buttons, widget, self.logger.clone()));
        let search = DomSearchBox::find(&self.document, self.selectors.clone())?;

        let cart = CartStore::init(
            PageStore::open(&self.logger),
            DomCartSurface::new(&self.document, self.selectors.clone()),
            LocationNavigator::new(&self.window, &self.logger),
            widget,
            self.logger.clone(),
        );

        let slider = if self.has(&self.selectors.hero_slider) {
            let deck = DomSlideDeck::find(&self.document, &self.selectors)?;
            let timer = IntervalTimer::new(&self.window, || {
                with_app(MenuApp::tick_slider);
            });
            Some(SliderController::new(deck, timer, widget, self.logger.clone()))
        } else {
            None
        };

        Ok(MenuApp::new(
            self.logger.clone(),
            catalog,
            search,
            cart,
            slider,
        ))
    }
}

fn boot(window: &Window, document: &Document) -> Result<()> {
    let page = Rc::new(Page::read(window, document));

    app::init(page.build()?);
    exports::install_globals(window).map_err(js_error).context("install globals")?;
    listen_cart_panel(&page)?;
    listen_storage(&page)?;
    listen_page_restore(&page)?;
    if page.has(&page.selectors.hero_slider) {
        listen_slider_hover(&page)?;
        listen_scroll(&page)?;
        listen_category_buttons(&page)?;
    }

    with_app(MenuApp::start);
    Ok(())
}

fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(E) + 'static,
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::<dyn FnMut(E)>::wrap(Box::new(handler));
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)
        .with_context(|| format!("listen for {}", event))?;
    closure.forget();
    Ok(())
}

/// Panel controls are rebuilt on every render, so one listener on the
/// container handles them all.
fn listen_cart_panel(page: &Page) -> Result<()> {
    let Some(panel) = find(&page.document, &page.selectors.cart_items)? else {
        return Ok(());
    };

    listen(&panel, "click", |event: Event| {
        let Some((action, name)) = cart_action(&event) else {
            return;
        };
        with_app(|app| match action {
            CartAction::Increment => app.update_quantity(&name, 1),
            CartAction::Decrement => app.update_quantity(&name, -1),
            CartAction::Remove => app.remove_from_cart(&name),
        });
    })
}

/// Follow cart changes made in other tabs of the same origin.
fn listen_storage(page: &Page) -> Result<()> {
    let key = page.config.widget.storage_key.clone();
    listen(&page.window, "storage", move |event: StorageEvent| {
        // A null key means the whole store was cleared.
        let touched = event.key().map_or(true, |changed| changed == key);
        if touched {
            with_app(MenuApp::reload_cart);
        }
    })
}

/// A page restored from the back/forward cache still shows the state it
/// was left in; rebuild it from storage.
fn listen_page_restore(page: &Rc<Page>) -> Result<()> {
    let restored = Rc::clone(page);
    listen(&page.window, "pageshow", move |event: PageTransitionEvent| {
        if !event.persisted() {
            return;
        }
        app::reset();
        match restored.build() {
            Ok(fresh) => {
                app::init(fresh);
                with_app(MenuApp::start);
            }
            Err(e) => report(&e),
        }
    })
}

fn listen_slider_hover(page: &Page) -> Result<()> {
    let Some(region) = find(&page.document, &page.selectors.slider_container)? else {
        return Ok(());
    };

    listen(&region, "mouseenter", |_: Event| {
        with_app(|app| app.hover_slider(true));
    })?;
    listen(&region, "mouseleave", |_: Event| {
        with_app(|app| app.hover_slider(false));
    })
}

fn listen_scroll(page: &Page) -> Result<()> {
    let window = page.window.clone();
    listen(&page.window, "scroll", move |_: Event| {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        with_app(|app| app.scrolled(Viewport::new(scroll_y, height)));
    })
}

fn listen_category_buttons(page: &Page) -> Result<()> {
    let buttons = DomButton::all(&page.document, page.selectors.clone())?;
    for (index, button) in buttons.iter().enumerate() {
        listen(button.element(), "click", move |_: Event| {
            with_app(|app| app.select_button(index));
        })?;
    }
    Ok(())
}
