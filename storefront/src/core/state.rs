use std::sync::Arc;
use std::time::Duration;

use shared::error::{AppError, AppResult};
use shared::models::{Product, Profile};
use shared::order::OrderSummary;

use crate::assistant::{AssistantPanel, AssistantPanelProps};
use crate::basket::{BasketStore, Clock, KeyValueStore, RedbKeyValueStore, SystemClock};
use crate::card::{CardModel, ProductCard};
use crate::catalog::Catalog;
use crate::core::Config;
use crate::filter::{FilterOptions, FilterSelection, apply_filters};
use crate::order;

/// Storefront page state - everything one session of the page holds
///
/// | Field | Lifetime |
/// |-------|----------|
/// | catalog | loaded once, immutable |
/// | filters | session, cleared on restart |
/// | cards | rebuilt whenever the visible set changes |
/// | basket | restored from the local key-value store |
/// | assistant | session, closed initially |
///
/// # Example
///
/// ```ignore
/// let mut state = StorefrontState::initialize(&Config::from_env())?;
/// state.toggle_profile(Profile::ThcRich);
/// for card in state.card_models() {
///     println!("{}", card.name);
/// }
/// ```
pub struct StorefrontState {
    pub config: Config,
    catalog: Catalog,
    filters: FilterSelection,
    cards: Vec<ProductCard>,
    basket: BasketStore,
    assistant: AssistantPanel,
}

impl StorefrontState {
    /// Build the state from explicit parts
    pub fn new(
        config: Config,
        catalog: Catalog,
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let window = Duration::from_millis(config.basket_animation_ms);
        let basket = BasketStore::restore_with(storage, clock, window);
        let mut state = Self {
            config,
            catalog,
            filters: FilterSelection::new(),
            cards: Vec::new(),
            basket,
            assistant: AssistantPanel::new(),
        };
        state.rebuild_cards();
        state
    }

    /// Load the catalog and open the local store named by `config`
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let catalog = Catalog::load(config.catalog_path.as_deref())?;
        let storage = RedbKeyValueStore::open(config.local_store_path())?;

        let state = Self::new(
            config.clone(),
            catalog,
            Arc::new(storage),
            Arc::new(SystemClock),
        );
        let stale = state.basket.stale_ids(&state.catalog);
        if !stale.is_empty() {
            tracing::warn!(stale = ?stale, "Basket holds ids missing from the catalog");
        }
        Ok(state)
    }

    // ========== Catalog & filters ==========

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_catalog(&self.catalog)
    }

    /// Header product count label
    pub fn header_count(&self) -> String {
        format!("{} מוצרים", self.catalog.len())
    }

    pub fn toggle_strain(&mut self, strain: &str) {
        self.filters.toggle_strain(strain);
        self.rebuild_cards();
    }

    pub fn toggle_serving_type(&mut self, serving_type: &str) {
        self.filters.toggle_serving_type(serving_type);
        self.rebuild_cards();
    }

    pub fn toggle_profile(&mut self, profile: Profile) {
        self.filters.toggle_profile(profile);
        self.rebuild_cards();
    }

    /// Replace the whole selection at once
    pub fn set_filters(&mut self, filters: FilterSelection) {
        self.filters = filters;
        self.rebuild_cards();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
        self.rebuild_cards();
    }

    pub fn visible_products(&self) -> Vec<&Product> {
        apply_filters(&self.catalog, &self.filters)
    }

    // ========== Cards ==========

    /// Cards for the visible products; every card restarts on the image view
    fn rebuild_cards(&mut self) {
        self.cards = self
            .visible_products()
            .into_iter()
            .map(|p| ProductCard::new(p.id.as_str()))
            .collect();
        tracing::debug!(visible = self.cards.len(), "Cards rebuilt");
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    fn card_mut(&mut self, product_id: &str) -> AppResult<&mut ProductCard> {
        self.cards
            .iter_mut()
            .find(|c| c.product_id() == product_id)
            .ok_or_else(|| AppError::product_not_found(product_id))
    }

    /// Flip a visible card to its details view
    pub fn show_details(&mut self, product_id: &str) -> AppResult<()> {
        self.card_mut(product_id)?.show_details();
        Ok(())
    }

    /// Display models of the visible cards, in catalog order
    pub fn card_models(&self) -> Vec<CardModel> {
        self.cards
            .iter()
            .filter_map(|card| {
                self.catalog
                    .get(card.product_id())
                    .map(|p| card.model(p, self.basket.quantity(&p.id)))
            })
            .collect()
    }

    pub fn card_model(&self, product_id: &str) -> AppResult<CardModel> {
        let card = self
            .cards
            .iter()
            .find(|c| c.product_id() == product_id)
            .ok_or_else(|| AppError::product_not_found(product_id))?;
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| AppError::product_not_found(product_id))?;
        Ok(card.model(product, self.basket.quantity(product_id)))
    }

    // ========== Basket ==========

    pub fn basket(&self) -> &BasketStore {
        &self.basket
    }

    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> AppResult<()> {
        Ok(self.basket.set_quantity(product_id, quantity)?)
    }

    pub fn increment(&mut self, product_id: &str) -> AppResult<u32> {
        Ok(self.basket.increment(product_id)?)
    }

    pub fn decrement(&mut self, product_id: &str) -> AppResult<u32> {
        Ok(self.basket.decrement(product_id)?)
    }

    pub fn clear_basket(&mut self) -> AppResult<()> {
        Ok(self.basket.clear()?)
    }

    /// Card "add to order" action
    pub fn order_product(&mut self, product_id: &str, quantity: i64) -> AppResult<String> {
        Ok(order::order_product(
            &mut self.basket,
            &self.catalog,
            product_id,
            quantity,
        )?)
    }

    pub fn submit_order(&mut self) -> AppResult<OrderSummary> {
        Ok(order::submit_order(&mut self.basket, &self.catalog)?)
    }

    // ========== Assistant ==========

    pub fn assistant(&self) -> &AssistantPanel {
        &self.assistant
    }

    pub fn toggle_assistant(&mut self) {
        self.assistant.toggle();
    }

    /// "Ask about this product" from a card
    pub fn ask_about(&mut self, product_id: &str) -> AppResult<()> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| AppError::product_not_found(product_id))?;
        self.assistant.ask_about(product);
        Ok(())
    }

    /// Widget props while the panel is open
    pub fn assistant_props(&self) -> Option<AssistantPanelProps> {
        self.assistant
            .props(&self.catalog, self.config.assistant_agent_id.clone())
    }
}
