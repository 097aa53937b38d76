//! Browser host for the resizable behavior.
//!
//! [`attach_web`] turns an `HtmlElement` into a resizable element: zones are
//! real `div`s appended to it, pointer-down is wired per zone and
//! pointer-move/up are listened for on the window only while a gesture is
//! in progress.
//!
//! Only available on `wasm32` targets.

#[cfg(target_arch = "wasm32")]
mod element;

#[cfg(target_arch = "wasm32")]
pub use element::{WebElement, WebError, WebResizable, attach_web};
