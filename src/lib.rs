//! Presentational UI primitives (button, card, input, label, text) for Leptos.
//!
//! Every primitive composes its class string from closed style axes via
//! [`style::compose`] and exposes the same result twice: as a Leptos
//! component, and as a pure view whose `describe()` returns a
//! [`element::DescribedElement`].

mod app;
pub mod components;
pub mod element;
pub mod error;
pub mod style;

pub use app::App;
pub use components::ui::*;
pub use element::{AttributeBag, DescribedElement, Node};
pub use error::{UiError, UiErrorKind, UiResult};
pub use style::{compose, ComposedClass, Conditional, StyleAxis};

use leptos::mount::mount_to_body;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;


// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
