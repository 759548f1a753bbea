// Dark Elixir UI layer (wry/tao), compiled behind the `gui` feature.

pub mod webview_app;
