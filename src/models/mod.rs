//! Data models for the proposal card
//!
//! The view model is owned by the caller; the renderer only borrows it.

pub mod identifier;
pub mod proposal;

// Re-export commonly used types
pub use identifier::{ControlIds, Identifier};
pub use proposal::{DisplayValue, ProposalViewModel, RawProposal};
