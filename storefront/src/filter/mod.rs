//! Filter engine
//!
//! Up to three independent single-value criteria (strain type, serving type,
//! derived profile), combined with logical AND. An unset criterion imposes no
//! constraint, so an empty selection returns the whole catalog in order.

use serde::{Deserialize, Serialize};
use shared::models::{Product, Profile};

use crate::catalog::Catalog;

/// Active filter values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no criterion is set
    pub fn is_empty(&self) -> bool {
        self.strain.is_none() && self.serving_type.is_none() && self.profile.is_none()
    }

    /// Select a strain type; selecting the active value clears it
    pub fn toggle_strain(&mut self, strain: &str) {
        toggle(&mut self.strain, strain.to_string());
    }

    /// Select a serving type; selecting the active value clears it
    pub fn toggle_serving_type(&mut self, serving_type: &str) {
        toggle(&mut self.serving_type, serving_type.to_string());
    }

    /// Select a profile; selecting the active value clears it
    pub fn toggle_profile(&mut self, profile: Profile) {
        toggle(&mut self.profile, profile);
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Whether `product` satisfies every set criterion
    pub fn matches(&self, product: &Product) -> bool {
        self.strain
            .as_deref()
            .is_none_or(|strain| product.strain_type == strain)
            && self
                .serving_type
                .as_deref()
                .is_none_or(|serving| product.serving_type == serving)
            && self
                .profile
                .is_none_or(|profile| product.profile() == profile)
    }
}

fn toggle<T: PartialEq>(slot: &mut Option<T>, value: T) {
    if slot.as_ref() == Some(&value) {
        *slot = None;
    } else {
        *slot = Some(value);
    }
}

/// Products matching `selection`, in catalog order
pub fn apply_filters<'a>(catalog: &'a Catalog, selection: &FilterSelection) -> Vec<&'a Product> {
    catalog.iter().filter(|p| selection.matches(p)).collect()
}

/// Values offered by each filter control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub strains: Vec<String>,
    pub serving_types: Vec<String>,
    pub profiles: Vec<Profile>,
}

impl FilterOptions {
    /// Distinct catalog values of each criterion, in order of first appearance
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut options = Self::default();
        for product in catalog {
            push_unique(&mut options.strains, &product.strain_type);
            push_unique(&mut options.serving_types, &product.serving_type);
            let profile = product.profile();
            if !options.profiles.contains(&profile) {
                options.profiles.push(profile);
            }
        }
        options
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}
