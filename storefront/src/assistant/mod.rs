//! Assistant panel contract
//!
//! The voice/chat assistant is an external widget. The storefront only hands
//! it a read-only context (reduced catalog plus an optional selected product)
//! and a fixed set of display props; nothing flows back.

use serde::{Deserialize, Serialize};
use shared::models::{Product, ProductSummary};

use crate::catalog::Catalog;

pub const AGENT_ID: &str = "pharmacy-concierge";
pub const SESSION_ID: &str = "pharmacy-session";
pub const PANEL_TITLE: &str = "רוקח מייעץ";
pub const AVATAR: &str = "/avatars/pharmacist.png";
pub const WELCOME_MESSAGE: &str = "שלום! אני הרוקח המייעץ. איך אוכל לעזור?";
pub const SUGGESTIONS: [&str; 3] = [
    "מה מומלץ לשינה?",
    "זנים עם CBD גבוה",
    "זנים לכאבים כרוניים",
];

/// Product the user asked the assistant about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedProduct {
    pub id: String,
    pub name: String,
}

impl From<&Product> for SelectedProduct {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
        }
    }
}

/// Context data handed to the widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantContext {
    pub products: Vec<ProductSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_product: Option<SelectedProduct>,
}

impl AssistantContext {
    pub fn from_catalog(catalog: &Catalog, selected: Option<SelectedProduct>) -> Self {
        Self {
            products: catalog.summaries(),
            selected_product: selected,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelVariant {
    #[default]
    Light,
}

/// Full props object for the assistant widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantPanelProps {
    pub agent_id: String,
    pub session_id: String,
    /// Agent id of the external voice service, from the environment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eleven_labs_agent_id: Option<String>,
    pub title: String,
    pub avatar: String,
    pub welcome_message: String,
    pub suggestions: Vec<String>,
    pub context_data: AssistantContext,
    pub variant: PanelVariant,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_start: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_enabled: Option<bool>,
}

impl AssistantPanelProps {
    pub fn new(context: AssistantContext, external_agent_id: Option<String>) -> Self {
        Self {
            agent_id: AGENT_ID.to_string(),
            session_id: SESSION_ID.to_string(),
            eleven_labs_agent_id: external_agent_id,
            title: PANEL_TITLE.to_string(),
            avatar: AVATAR.to_string(),
            welcome_message: WELCOME_MESSAGE.to_string(),
            suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            context_data: context,
            variant: PanelVariant::Light,
            language: "he".to_string(),
            auto_start: None,
            speaker_enabled: None,
        }
    }

    pub fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = Some(auto_start);
        self
    }

    pub fn with_speaker(mut self, enabled: bool) -> Self {
        self.speaker_enabled = Some(enabled);
        self
    }
}

/// Open/closed state of the side panel and the product it was opened for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssistantPanel {
    open: bool,
    selected: Option<SelectedProduct>,
}

impl AssistantPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// "Ask about this product": opens the panel focused on `product`
    pub fn ask_about(&mut self, product: &Product) {
        tracing::debug!(product_id = %product.id, "Assistant asked about product");
        self.selected = Some(SelectedProduct::from(product));
        self.open = true;
    }

    /// Props for the current state, or `None` while the panel is closed
    pub fn props(
        &self,
        catalog: &Catalog,
        external_agent_id: Option<String>,
    ) -> Option<AssistantPanelProps> {
        self.open.then(|| {
            AssistantPanelProps::new(
                AssistantContext::from_catalog(catalog, self.selected.clone()),
                external_agent_id,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_serialize_camel_case() {
        let catalog = Catalog::builtin().unwrap();
        let props = AssistantPanelProps::new(
            AssistantContext::from_catalog(&catalog, None),
            Some("agent-123".to_string()),
        );
        let json = serde_json::to_value(&props).unwrap();

        assert_eq!(json["agentId"], "pharmacy-concierge");
        assert_eq!(json["sessionId"], "pharmacy-session");
        assert_eq!(json["elevenLabsAgentId"], "agent-123");
        assert_eq!(json["title"], "רוקח מייעץ");
        assert_eq!(json["avatar"], "/avatars/pharmacist.png");
        assert_eq!(json["variant"], "light");
        assert_eq!(json["language"], "he");
        assert_eq!(json["suggestions"].as_array().unwrap().len(), 3);
        assert!(json.get("autoStart").is_none());
        assert!(json["contextData"].get("selectedProduct").is_none());

        let first = &json["contextData"]["products"][0];
        assert_eq!(first["id"], "alaska-a5");
        assert_eq!(first["strainType"], "אינדיקה דומיננטי");
        assert_eq!(first["inStock"], true);
        assert!(first.get("packPrice").is_none());
    }

    #[test]
    fn test_optional_flags() {
        let catalog = Catalog::builtin().unwrap();
        let props = AssistantPanelProps::new(AssistantContext::from_catalog(&catalog, None), None)
            .with_auto_start(true)
            .with_speaker(false);
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["autoStart"], true);
        assert_eq!(json["speakerEnabled"], false);
        assert!(json.get("elevenLabsAgentId").is_none());
    }

    #[test]
    fn test_panel_starts_closed_and_toggles() {
        let catalog = Catalog::builtin().unwrap();
        let mut panel = AssistantPanel::new();
        assert!(!panel.is_open());
        assert!(panel.props(&catalog, None).is_none());

        panel.toggle();
        assert!(panel.is_open());
        panel.toggle();
        assert!(!panel.is_open());
    }

    #[test]
    fn test_ask_about_opens_with_selected_product() {
        let catalog = Catalog::builtin().unwrap();
        let mut panel = AssistantPanel::new();
        panel.ask_about(catalog.get("og-kush-k1").unwrap());

        assert!(panel.is_open());
        let props = panel.props(&catalog, None).unwrap();
        assert_eq!(
            props.context_data.selected_product,
            Some(SelectedProduct {
                id: "og-kush-k1".to_string(),
                name: "OG Kush K1".to_string(),
            })
        );
        assert_eq!(props.context_data.products.len(), 4);
    }
}
