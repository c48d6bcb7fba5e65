//! Platform abstraction layer
//!
//! Native builds drive the library from `main.rs`. Browser builds load levels
//! through the wasm-bindgen exports in `web`.

#[cfg(target_arch = "wasm32")]
pub mod web;
