//! Command line front end
//!
//! Every invocation restores the basket from the local store, applies one
//! action and prints the result. `--json` switches output to an
//! [`ApiResponse`] envelope.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shared::models::Profile;
use shared::util::format_shekels;

use crate::card::render_card;
use crate::core::{Config, StorefrontState};
use crate::filter::FilterSelection;
use crate::order::DEFAULT_ORDER_QUANTITY;
use crate::pages::InfoPage;
use crate::utils::{ApiResponse, AppError};

/// Separator width for rendered cards
const CARD_WIDTH: usize = 48;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "B2B medical cannabis ordering storefront")]
pub struct Cli {
    /// Print machine-readable JSON
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the products matching the given filters
    Catalog {
        #[arg(long)]
        strain: Option<String>,
        #[arg(long)]
        serving: Option<String>,
        /// "THC Rich", "CBD Rich" or "Balanced"
        #[arg(long)]
        profile: Option<Profile>,
    },
    /// List the values each filter accepts
    Filters,
    /// Render one product card
    Show {
        id: String,
        /// Show the back of the card
        #[arg(long, default_value_t = false)]
        details: bool,
    },
    /// Add one unit to the basket
    Add { id: String },
    /// Remove one unit from the basket
    Remove { id: String },
    /// Set the exact basket quantity (0 or less removes the line)
    Set {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Card order action
    Order {
        id: String,
        #[arg(long, default_value_t = i64::from(DEFAULT_ORDER_QUANTITY))]
        quantity: i64,
    },
    /// Show basket lines and totals
    Basket,
    /// Empty the basket
    Clear,
    /// Submit the basket as an order
    Submit,
    /// Print the assistant panel props
    Assistant {
        /// Open the panel focused on this product
        #[arg(long)]
        product: Option<String>,
    },
    /// Show an informational page (privacy, terms)
    Page { name: String },
}

/// Basket view printed by the basket commands
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BasketView {
    lines: Vec<BasketLineView>,
    total_units: u64,
    total_price: rust_decimal::Decimal,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    stale_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BasketLineView {
    product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    quantity: u32,
}

impl BasketView {
    fn from_state(state: &StorefrontState) -> Self {
        let basket = state.basket();
        let catalog = state.catalog();
        Self {
            lines: basket
                .lines()
                .map(|(id, quantity)| BasketLineView {
                    product_id: id.to_string(),
                    name: catalog.get(id).map(|p| p.name.clone()),
                    quantity,
                })
                .collect(),
            total_units: basket.total_units(),
            total_price: basket.total_price(catalog),
            stale_ids: basket
                .stale_ids(catalog)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    fn print(&self) {
        for line in &self.lines {
            let name = line.name.as_deref().unwrap_or("?");
            println!("{:>5} x {} [{}]", line.quantity, name, line.product_id);
        }
        println!("סה\"כ יחידות: {}", self.total_units);
        println!("סה\"כ לתשלום: {}", format_shekels(self.total_price));
        if !self.stale_ids.is_empty() {
            println!("לא בקטלוג: {}", self.stale_ids.join(", "));
        }
    }
}

fn print_json<T: Serialize>(data: T) -> Result<()> {
    print_response(ApiResponse::success(data))
}

fn print_response<T: Serialize>(response: ApiResponse<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Execute one command against the storefront named by `config`
pub fn run(cli: Cli, config: &Config) -> Result<()> {
    // Static pages need no catalog or store
    if let Commands::Page { name } = &cli.command {
        let page = InfoPage::find(name)?;
        if cli.json {
            return print_json(page);
        }
        print!("{}", page.render(chrono::Local::now().date_naive()));
        return Ok(());
    }

    let mut state = StorefrontState::initialize(config).with_context(|| {
        format!(
            "failed to open storefront in {}",
            config.work_dir.display()
        )
    })?;
    let json = cli.json;

    match cli.command {
        Commands::Catalog {
            strain,
            serving,
            profile,
        } => {
            state.set_filters(FilterSelection {
                strain,
                serving_type: serving,
                profile,
            });
            let cards = state.card_models();
            if json {
                return print_json(cards);
            }
            println!("{}", state.header_count());
            for card in &cards {
                print!("{}", render_card(card, CARD_WIDTH));
            }
        }
        Commands::Filters => {
            let options = state.filter_options();
            if json {
                return print_json(options);
            }
            println!("strain:  {}", options.strains.join(" | "));
            println!("serving: {}", options.serving_types.join(" | "));
            let profiles: Vec<&str> = options.profiles.iter().map(|p| p.label()).collect();
            println!("profile: {}", profiles.join(" | "));
        }
        Commands::Show { id, details } => {
            if details {
                state.show_details(&id)?;
            }
            let card = state.card_model(&id)?;
            if json {
                return print_json(card);
            }
            print!("{}", render_card(&card, CARD_WIDTH));
        }
        Commands::Add { id } => {
            let quantity = state.increment(&id)?;
            report_quantity(&state, &id, quantity, json)?;
        }
        Commands::Remove { id } => {
            let quantity = state.decrement(&id)?;
            report_quantity(&state, &id, quantity, json)?;
        }
        Commands::Set { id, quantity } => {
            state.set_quantity(&id, quantity)?;
            let quantity = state.basket().quantity(&id);
            report_quantity(&state, &id, quantity, json)?;
        }
        Commands::Order { id, quantity } => {
            let message = state.order_product(&id, quantity)?;
            if json {
                return print_response(ApiResponse::success_with_message(
                    message,
                    BasketView::from_state(&state),
                ));
            }
            println!("{}", message);
        }
        Commands::Basket => {
            let view = BasketView::from_state(&state);
            if json {
                return print_json(view);
            }
            view.print();
        }
        Commands::Clear => {
            state.clear_basket()?;
            if json {
                return print_json(BasketView::from_state(&state));
            }
            println!("הסל רוקן");
        }
        Commands::Submit => {
            let summary = state.submit_order()?;
            if json {
                return print_json(summary);
            }
            println!("הזמנה {}", summary.reference);
            for line in &summary.lines {
                let name = line.name.as_deref().unwrap_or(&line.product_id);
                println!(
                    "{:>5} x {} @ {} = {}",
                    line.quantity,
                    name,
                    format_shekels(line.unit_price),
                    format_shekels(line.line_total)
                );
            }
            println!("סה\"כ יחידות: {}", summary.total_units);
            println!("סה\"כ לתשלום: {}", format_shekels(summary.total_price));
        }
        Commands::Assistant { product } => {
            match product {
                Some(id) => state.ask_about(&id)?,
                None => state.toggle_assistant(),
            }
            let props = state
                .assistant_props()
                .ok_or_else(|| AppError::internal("assistant panel did not open"))?;
            if json {
                return print_json(props);
            }
            println!("{}", serde_json::to_string_pretty(&props)?);
        }
        Commands::Page { .. } => {}
    }
    Ok(())
}

fn report_quantity(state: &StorefrontState, id: &str, quantity: u32, json: bool) -> Result<()> {
    let view = BasketView::from_state(state);
    if json {
        return print_json(view);
    }
    println!("{}: {}", id, quantity);
    println!(
        "סה\"כ יחידות: {} | {}",
        view.total_units,
        format_shekels(view.total_price)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_quantity_defaults_to_ten() {
        let cli = Cli::try_parse_from(["storefront", "order", "alaska-a5"]).unwrap();
        match cli.command {
            Commands::Order { id, quantity } => {
                assert_eq!(id, "alaska-a5");
                assert_eq!(quantity, 10);
            }
            _ => panic!("expected order command"),
        }
    }

    #[test]
    fn test_catalog_profile_parses_label() {
        let cli =
            Cli::try_parse_from(["storefront", "catalog", "--profile", "THC Rich"]).unwrap();
        match cli.command {
            Commands::Catalog { profile, .. } => assert_eq!(profile, Some(Profile::ThcRich)),
            _ => panic!("expected catalog command"),
        }
        assert!(Cli::try_parse_from(["storefront", "catalog", "--profile", "sweet"]).is_err());
    }

    #[test]
    fn test_set_accepts_negative_quantity() {
        let cli = Cli::try_parse_from(["storefront", "--json", "set", "og-kush-k1", "-2"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Set { quantity: -2, .. }));
    }
}
