//! Hire-Purchase Accounts Frontend Entry Point

mod models;
mod error;
mod config;
mod cache;
mod forms;
mod format;
mod api;
mod store;
mod context;
mod toast;
mod components;
mod sections;
mod navbar;
mod app;

fn main() {
    console_error_panic_hook::set_once();
    app::mount();
}
