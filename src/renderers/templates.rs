//! Markup template rendering system
//!
//! Provides Mustache-based templates for card markup generation.
//!
//! All interpolations use the escaped `{{name}}` form, so caller-supplied
//! text (question, destination, value, data) and configured class names
//! and labels are HTML-escaped. Templates must never use `{{{name}}}`.

use serde::Serialize;

use crate::config::{ClassNames, Labels};
use crate::error::RenderError;
use crate::models::ControlIds;

/// Template selection for markup output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupTemplate {
    /// One proposal card with counts and vote controls
    ProposalCard,
}

/// Context data for the proposal card template
#[derive(Debug, Clone, Serialize)]
pub struct CardContext<'a> {
    pub classes: &'a ClassNames,
    pub labels: &'a Labels,
    pub ids: ControlIds,
    pub question: &'a str,
    pub destination: &'a str,
    /// Empty string when the proposal carries no value
    pub value: String,
    pub data: String,
    /// Counts are pre-formatted so the template prints plain decimals
    pub yes_count: String,
    pub no_count: String,
}

/// Get template content by type
pub fn get_template_content(template_type: MarkupTemplate) -> &'static str {
    match template_type {
        MarkupTemplate::ProposalCard => include_str!("templates/proposal_card.html.mustache"),
    }
}

/// Render a markup fragment using a template
pub fn render_markup<T: Serialize>(
    template_type: MarkupTemplate,
    context: &T,
) -> Result<String, RenderError> {
    let template = mustache::compile_str(get_template_content(template_type))?;
    Ok(template.render_to_string(context)?)
}
