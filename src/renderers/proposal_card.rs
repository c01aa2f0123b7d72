//! Proposal card renderer
//!
//! Maps a `ProposalViewModel` and an `Identifier` to a markup fragment.
//! Rendering is a pure function of its inputs plus the explicit
//! `CardConfig`; nothing is cached or mutated between calls.

use std::collections::HashSet;

use crate::config::{CardConfig, DEFAULT_CONFIG};
use crate::error::RenderError;
use crate::models::{Identifier, ProposalViewModel};

use super::templates::{render_markup, CardContext, MarkupTemplate};

/// Render one card with the default class names and labels
pub fn render(view_model: &ProposalViewModel, id: &Identifier) -> Result<String, RenderError> {
    render_with_config(view_model, id, &DEFAULT_CONFIG)
}

/// Render one card with a caller-supplied configuration.
///
/// Region order: question, destination, value, data, counts, vote actions.
/// The vote controls carry `yes-<id>`, `no-<id>` and `remove-<id>`.
pub fn render_with_config(
    view_model: &ProposalViewModel,
    id: &Identifier,
    config: &CardConfig,
) -> Result<String, RenderError> {
    log::debug!("Rendering proposal card {}", id);

    let context = CardContext {
        classes: &config.classes,
        labels: &config.labels,
        ids: id.control_ids(),
        question: &view_model.question,
        destination: &view_model.destination,
        value: view_model
            .value
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_default(),
        data: view_model.data.to_string(),
        yes_count: view_model.yes_count.to_string(),
        no_count: view_model.no_count.to_string(),
    };

    render_markup(MarkupTemplate::ProposalCard, &context)
}

/// Render several cards in order into one fragment.
///
/// Fails before rendering anything if two cards share an identifier,
/// since their controls would collide in the document.
pub fn render_list(
    cards: &[(ProposalViewModel, Identifier)],
    config: &CardConfig,
) -> Result<String, RenderError> {
    let mut seen = HashSet::with_capacity(cards.len());
    for (_, id) in cards {
        if !seen.insert(id.as_str()) {
            return Err(RenderError::DuplicateIdentifier(id.to_string()));
        }
    }

    let mut markup = String::new();
    for (view_model, id) in cards {
        markup.push_str(&render_with_config(view_model, id, config)?);
    }

    log::debug!("Rendered {} proposal cards", cards.len());
    Ok(markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DisplayValue;

    fn beach() -> ProposalViewModel {
        ProposalViewModel::new("Go to beach?", "Malibu", "sunny", 3, 1)
    }

    fn id(s: &str) -> Identifier {
        Identifier::new(s).unwrap()
    }

    #[test]
    fn test_render_example_card() {
        let html = render(&beach(), &id("42")).unwrap();
        assert!(html.contains("Yes: 3 "));
        assert!(html.contains("No: 1 "));
        assert!(html.contains("id=\"yes-42\""));
        assert!(html.contains("id=\"no-42\""));
        assert!(html.contains("id=\"remove-42\""));
        assert!(html.contains("<div class=\"question\"> Go to beach? </div>"));
        assert!(html.contains("<div class=\"destination\"> Malibu </div>"));
        assert!(html.contains("<div class=\"data\"> sunny </div>"));
    }

    #[test]
    fn test_zero_counts_rendered() {
        let vm = ProposalViewModel::new("Q", "D", "x", 0, 0);
        let html = render(&vm, &id("1")).unwrap();
        assert!(html.contains("Yes: 0 "));
        assert!(html.contains("No: 0 "));
    }

    #[test]
    fn test_region_order() {
        let html = render(&beach().with_value("v"), &id("9")).unwrap();
        let positions: Vec<usize> = [
            "class=\"question\"",
            "class=\"destination\"",
            "class=\"value\"",
            "class=\"data\"",
            "class=\"counts\"",
            "class=\"yes-count\"",
            "class=\"no-count\"",
            "class=\"vote-actions\"",
            "id=\"yes-9\"",
            "id=\"no-9\"",
            "id=\"remove-9\"",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    }

    #[test]
    fn test_value_region_empty_when_absent() {
        let html = render(&beach(), &id("1")).unwrap();
        assert!(html.contains("<div class=\"value\">  </div>"));

        let html = render(&beach().with_value(DisplayValue::Integer(12)), &id("1")).unwrap();
        assert!(html.contains("<div class=\"value\"> 12 </div>"));
    }

    #[test]
    fn test_control_classes() {
        let html = render(&beach(), &id("1")).unwrap();
        assert!(html.contains("class=\"button vote-yes\"> Vote Yes </div>"));
        assert!(html.contains("class=\"button vote-no\"> Vote No </div>"));
        assert!(html.contains("class=\"button vote-remove\"> Remove Vote </div>"));
    }

    #[test]
    fn test_escapes_untrusted_text() {
        let vm = ProposalViewModel::new(
            "<script>alert(1)</script>",
            "Tom & Jerry",
            "a \"quoted\" value",
            0,
            0,
        );
        let html = render(&vm, &id("1")).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(!html.contains("\"quoted\""));
    }

    #[test]
    fn test_custom_config() {
        let mut config = CardConfig::default();
        config.classes.proposal = "card".to_string();
        config.labels.yes_count = "Aye:".to_string();
        let html = render_with_config(&beach(), &id("5"), &config).unwrap();
        assert!(html.starts_with("<div class=\"card\">"));
        assert!(html.contains("Aye: 3 "));
    }

    #[test]
    fn test_render_list_in_order() {
        let cards = vec![
            (beach(), id("a")),
            (ProposalViewModel::new("Hike?", "Tahoe", 1i64, 0, 2), id("b")),
        ];
        let html = render_list(&cards, &CardConfig::default()).unwrap();
        let first = html.find("yes-a").unwrap();
        let second = html.find("yes-b").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("class=\"proposal\"").count(), 2);
    }

    #[test]
    fn test_render_list_rejects_duplicate_ids() {
        let cards = vec![(beach(), id("a")), (beach(), id("a"))];
        assert_eq!(
            render_list(&cards, &CardConfig::default()),
            Err(RenderError::DuplicateIdentifier("a".to_string()))
        );
    }

    #[test]
    fn test_render_list_empty() {
        assert_eq!(render_list(&[], &CardConfig::default()).unwrap(), "");
    }
}
