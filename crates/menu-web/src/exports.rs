//! Operations callable from page markup.
//!
//! Each is exported from the wasm module and also installed on `window`
//! under the same name, so inline `onclick="addToCart('Tea', 50)"` handlers
//! keep working. All are fire-and-forget: before boot they do nothing.

use js_sys::Reflect;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::app::{with_app, MenuApp};

/// Show one category, or every card for `"All"`.
#[wasm_bindgen(js_name = filterMenu)]
pub fn filter_menu(category: &str) {
    with_app(|app| app.filter(category));
}

/// Open or close the search input.
#[wasm_bindgen(js_name = toggleSearch)]
pub fn toggle_search() {
    with_app(MenuApp::toggle_search);
}

/// Filter cards by the search input's current text.
#[wasm_bindgen(js_name = searchMenu)]
pub fn search_menu() {
    with_app(MenuApp::search);
}

/// Add one unit of `name`.
#[wasm_bindgen(js_name = addToCart)]
pub fn add_to_cart(name: &str, price: f64) {
    with_app(|app| app.add_to_cart(name, price));
}

/// Change the quantity of `name` by `delta`.
#[wasm_bindgen(js_name = updateQty)]
pub fn update_qty(name: &str, delta: i32) {
    with_app(|app| app.update_quantity(name, i64::from(delta)));
}

#[wasm_bindgen(js_name = removeFromCart)]
pub fn remove_from_cart(name: &str) {
    with_app(|app| app.remove_from_cart(name));
}

#[wasm_bindgen]
pub fn checkout() {
    with_app(MenuApp::checkout);
}

/// Move `direction` slides (the arrow controls pass `1` or `-1`).
#[wasm_bindgen(js_name = changeSlide)]
pub fn change_slide(direction: i32) {
    with_app(|app| app.change_slide(direction as isize));
}

/// Jump to a slide (the dot controls).
#[wasm_bindgen(js_name = currentSlide)]
pub fn current_slide(index: i32) {
    with_app(|app| app.goto_slide(index as isize));
}

fn expose<T>(window: &Window, name: &str, closure: Closure<T>) -> Result<(), JsValue>
where
    T: ?Sized + WasmClosure,
{
    Reflect::set(window, &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}

/// Put every operation on `window`.
pub(crate) fn install_globals(window: &Window) -> Result<(), JsValue> {
    expose(
        window,
        "filterMenu",
        Closure::<dyn Fn(String)>::wrap(Box::new(|category: String| filter_menu(&category))),
    )?;
    expose(
        window,
        "toggleSearch",
        Closure::<dyn Fn()>::wrap(Box::new(toggle_search)),
    )?;
    expose(
        window,
        "searchMenu",
        Closure::<dyn Fn()>::wrap(Box::new(search_menu)),
    )?;
    expose(
        window,
        "addToCart",
        Closure::<dyn Fn(String, f64)>::wrap(Box::new(|name: String, price: f64| {
            add_to_cart(&name, price)
        })),
    )?;
    expose(
        window,
        "updateQty",
        Closure::<dyn Fn(String, i32)>::wrap(Box::new(|name: String, delta: i32| {
            update_qty(&name, delta)
        })),
    )?;
    expose(
        window,
        "removeFromCart",
        Closure::<dyn Fn(String)>::wrap(Box::new(|name: String| remove_from_cart(&name))),
    )?;
    expose(window, "checkout", Closure::<dyn Fn()>::wrap(Box::new(checkout)))?;
    expose(
        window,
        "changeSlide",
        Closure::<dyn Fn(i32)>::wrap(Box::new(change_slide)),
    )?;
    expose(
        window,
        "currentSlide",
        Closure::<dyn Fn(i32)>::wrap(Box::new(current_slide)),
    )?;
    Ok(())
}
