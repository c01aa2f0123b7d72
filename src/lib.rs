//! Proposal Card WASM Module
//!
//! Renders the markup for one voting proposal card: question, destination,
//! value, data, yes/no tallies and the three vote controls. Storage, vote
//! counting and click handling belong to the host application.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod renderers;

// Re-export commonly used types
pub use config::{CardConfig, ClassNames, Labels};
pub use error::RenderError;
pub use models::{ControlIds, DisplayValue, Identifier, ProposalViewModel};
pub use renderers::{render, render_list, render_with_config};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            crate::wasm_warn!("console logger already initialized");
        }
    }

    log::info!("Proposal card WASM module initialized");
}
