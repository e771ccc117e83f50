//! Product card
//!
//! Each card owns a two-state view (`Image` / `Details`). The state is never
//! shared or persisted: a recreated card starts on `Image` again.
//! [`ProductCard::model`] turns a product plus its basket quantity into the
//! display strings the card shows.

mod render;

pub use render::render_card;

use serde::Serialize;
use shared::models::{Badge, Product};
use shared::util::{format_cbd, format_percent, format_shekels};

/// Terpene bar width reached at 2% (percentage × 50, capped at 100)
const TERPENE_BAR_SCALE: f64 = 50.0;
const TERPENE_BAR_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardView {
    #[default]
    Image,
    Details,
}

/// Per-card view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    product_id: String,
    view: CardView,
}

impl ProductCard {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            view: CardView::Image,
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn view(&self) -> CardView {
        self.view
    }

    /// "More info": image → details
    pub fn show_details(&mut self) {
        if self.view == CardView::Image {
            self.view = CardView::Details;
        }
    }

    /// "Back": details → image
    pub fn show_image(&mut self) {
        if self.view == CardView::Details {
            self.view = CardView::Image;
        }
    }

    /// Build the display model for `product`
    pub fn model(&self, product: &Product, basket_quantity: u32) -> CardModel {
        let details = match self.view {
            CardView::Image => None,
            CardView::Details => Some(DetailsSection::from_product(product)),
        };

        CardModel {
            product_id: product.id.clone(),
            view: self.view,
            name: product.name.clone(),
            image: product.image.clone(),
            strain_type: product.strain_type.clone(),
            badge: product.badge.map(badge_label),
            gmp_certified: product.gmp_certified,
            stock_label: if product.in_stock { "במלאי" } else { "אזל" },
            cbd: format_cbd(product.cbd),
            thc: format_percent(product.thc),
            attributes: vec![
                LabeledValue::new("יצרן:", &product.manufacturer),
                LabeledValue::new("זן:", &product.strain_type),
                LabeledValue::new("גנטיקה:", &product.genetics),
                LabeledValue::new("שיטת גידול:", &product.growing_method),
                LabeledValue::new("צורת הגשה:", &product.serving_type),
            ],
            prices: price_labels(product),
            order_button: ButtonModel {
                label: if product.in_stock {
                    "הוספה להזמנה"
                } else {
                    "אזל מהמלאי"
                },
                enabled: product.in_stock,
            },
            flip_label: match self.view {
                CardView::Image => "לגב המוצר",
                CardView::Details => "לחזית המוצר",
            },
            basket_quantity,
            details,
        }
    }
}

fn badge_label(badge: Badge) -> &'static str {
    match badge {
        Badge::Sale => "מבצע",
        Badge::New => "חדש",
    }
}

fn price_labels(product: &Product) -> Vec<LabeledValue> {
    let mut prices = vec![LabeledValue {
        label: format!("מחיר יחידה ({}g)", product.pack_grams),
        value: format_shekels(product.pack_price),
    }];
    if let Some(price) = product.wholesale_price {
        let min_units = product
            .wholesale_min_units
            .map(|n| n.to_string())
            .unwrap_or_default();
        prices.push(LabeledValue {
            label: format!("מחיר סיטונאי ({}+ יח')", min_units),
            value: format_shekels(price),
        });
    }
    prices
}

/// Bar width (percent of the track) for a terpene percentage
pub fn terpene_bar_width(percentage: f64) -> f64 {
    (percentage * TERPENE_BAR_SCALE).min(TERPENE_BAR_MAX)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

impl LabeledValue {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonModel {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerpeneBar {
    pub name: String,
    pub percentage: String,
    pub bar_width: f64,
}

/// Extra content of the details (back) view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailsSection {
    /// CBD, THC, CBN, CBG
    pub cannabinoids: Vec<LabeledValue>,
    pub terpenes: Vec<TerpeneBar>,
    /// Manufacturer, batch, production date, expiry
    pub info: Vec<LabeledValue>,
}

impl DetailsSection {
    fn from_product(product: &Product) -> Self {
        Self {
            cannabinoids: vec![
                LabeledValue::new("CBD", &format_cbd(product.cbd)),
                LabeledValue::new("THC", &format_percent(product.thc)),
                LabeledValue::new("CBN", &format_percent(product.cbn_or_zero())),
                LabeledValue::new("CBG", &format_percent(product.cbg_or_zero())),
            ],
            terpenes: product
                .terpenes
                .iter()
                .map(|t| TerpeneBar {
                    name: t.name.clone(),
                    percentage: format_percent(t.percentage),
                    bar_width: terpene_bar_width(t.percentage),
                })
                .collect(),
            info: vec![
                LabeledValue::new("יצרן:", &product.manufacturer),
                LabeledValue::new("מספר אצווה:", &product.batch_number),
                LabeledValue::new("תאריך ייצור:", &product.production_date),
                LabeledValue::new("תוקף:", &product.expiry_date),
            ],
        }
    }
}

/// Everything a card displays, as ready-made strings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardModel {
    pub product_id: String,
    pub view: CardView,
    pub name: String,
    pub image: String,
    pub strain_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    pub gmp_certified: bool,
    pub stock_label: &'static str,
    pub cbd: String,
    pub thc: String,
    pub attributes: Vec<LabeledValue>,
    /// Pack price first, wholesale tier second when present
    pub prices: Vec<LabeledValue>,
    pub order_button: ButtonModel,
    pub flip_label: &'static str,
    pub basket_quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<DetailsSection>,
}
