//! Shared Dioxus components and D3.js bridge for the Velora dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js forecast chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals, including query dispatch
//! - `components`: RSX components for the chat panel and the dashboard cards

pub mod js_bridge;
pub mod state;
pub mod components;
