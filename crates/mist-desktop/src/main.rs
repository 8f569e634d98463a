//! Mist Desktop
//!
//! A simulated desktop environment: boot animation, login screen, and a
//! guest desktop hosting a markdown notes app.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod screens;
mod services;
mod state;
mod theme;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mist=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Mist...");

    let window = WindowBuilder::new()
        .with_title("Mist")
        .with_inner_size(LogicalSize::new(1280.0, 800.0));
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
