//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the shell controller, the webview event sink, native
//! dialogs, the menu, and the tokio runtime that runs readiness polls and
//! deferred bridge commands.

mod core;
mod dialogs;
mod event_handler;
mod init;
mod menu_actions;
mod polling;
mod shutdown;
mod types;

pub use self::core::StudioApp;
