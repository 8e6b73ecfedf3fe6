//! Early Warning System
//!
//! Landing page for the Early Warning System built with Leptos (WASM).
//!
//! # Features
//!
//! - Light/dark theme toggle
//! - Rotating decorative 3D "data sphere" on a canvas
//! - Chart carousel (dropout reasons, counselor ratios, intervention impact)
//! - Scroll-triggered entrance animations
//! - Teacher/counsellor feature tabs
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All content, chart geometry and scene math come from the
//! `early-warning` crate; this crate only wires them to the DOM.

use leptos::*;

mod app;
mod browser;
mod components;
mod sections;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let (config, config_error) = state::site::load_site_config();
    state::site::init_logging(&config.logging.level);
    if let Some(err) = config_error {
        tracing::warn!("Invalid site.toml, using defaults: {}", err);
    }

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App config=config /> });
}
