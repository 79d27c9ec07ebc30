//! Terminal front end: drives the list controller from stdin and renders it as text.
mod app;
mod config;
mod effects;
mod input;
mod logging;
mod render;

pub use app::run_app;
