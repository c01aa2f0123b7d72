//! Proposal card rendering for the WASM API
//!
//! JavaScript hands over a plain proposal object and an id (string or
//! number); these functions validate both and return the card markup.
//! Mounting the markup and wiring click handlers stay in JavaScript.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, identifier_from_js, render_error, serialize};
use crate::config::{CardConfig, DEFAULT_CONFIG};
use crate::error::RenderError;
use crate::models::{ProposalViewModel, RawProposal};
use crate::renderers::render_with_config;
use crate::wasm_log;

/// Strictly decode a proposal object coming from JavaScript
fn view_model_from_js(value: JsValue) -> Result<ProposalViewModel, RenderError> {
    let raw: RawProposal = serde_wasm_bindgen::from_value(value)
        .map_err(|e| RenderError::InvalidInput(e.to_string()))?;
    ProposalViewModel::try_from(raw)
}

fn render_js(view_model: JsValue, id: JsValue, config: &CardConfig) -> Result<String, JsValue> {
    let id = identifier_from_js(&id).map_err(render_error)?;
    wasm_log!("renderProposalCard called for id '{}'", id);

    let view_model = view_model_from_js(view_model).map_err(render_error)?;

    render_with_config(&view_model, &id, config).map_err(render_error)
}

/// Render a proposal card with the default class names and labels
///
/// # Parameters
/// * `view_model` - `{ question, destination, value?, data, yesCount, noCount }`
/// * `id` - string or non-negative integer scoping the control ids
///
/// # Returns
/// Card markup; controls carry `yes-<id>`, `no-<id>` and `remove-<id>`
#[wasm_bindgen(js_name = renderProposalCard)]
pub fn render_proposal_card(view_model: JsValue, id: JsValue) -> Result<String, JsValue> {
    render_js(view_model, id, &DEFAULT_CONFIG)
}

/// Render a proposal card with caller-supplied class names and labels
///
/// `config` is a partial `{ classes, labels }` object; omitted keys keep
/// their defaults.
#[wasm_bindgen(js_name = renderProposalCardWithConfig)]
pub fn render_proposal_card_with_config(
    view_model: JsValue,
    id: JsValue,
    config: JsValue,
) -> Result<String, JsValue> {
    let config: CardConfig = deserialize(config, "Failed to deserialize card config")?;
    render_js(view_model, id, &config)
}

/// Control ids for a card, for JavaScript event wiring
///
/// # Returns
/// `{ yes, no, remove }`
#[wasm_bindgen(js_name = proposalControlIds)]
pub fn proposal_control_ids(id: JsValue) -> Result<JsValue, JsValue> {
    let id = identifier_from_js(&id).map_err(render_error)?;
    serialize(&id.control_ids(), "Failed to serialize control ids")
}

/// Default class-name contract and labels
#[wasm_bindgen(js_name = defaultCardConfig)]
pub fn default_card_config() -> Result<JsValue, JsValue> {
    serialize(&*DEFAULT_CONFIG, "Failed to serialize card config")
}
