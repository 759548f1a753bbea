//! Dark Elixir — a minimal desktop shell that wraps the Dark Elixir web app
//! in a WebView and mirrors its downloads into a native file-list screen.
//!
//! This library crate exposes all modules for use by the binary and
//! integration tests.

pub mod app;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
