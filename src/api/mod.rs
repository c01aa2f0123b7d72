//! Proposal Card WASM API
//!
//! This module provides the JavaScript-facing API for the proposal widget.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `render`: Card rendering and control-id lookup

pub mod helpers;
pub mod render;

// Re-export all public functions to keep a flat API
pub use render::{
    default_card_config, proposal_control_ids, render_proposal_card,
    render_proposal_card_with_config,
};
