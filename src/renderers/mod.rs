//! Renderers module for the proposal widget
//!
//! This module contains the markup generation for proposal cards.

pub mod proposal_card;
pub mod templates;

// Re-export commonly used functions
pub use proposal_card::{render, render_list, render_with_config};
pub use templates::{MarkupTemplate, render_markup};
