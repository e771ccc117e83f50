//! THC/CBD dominance classification
//!
//! A profile is never stored on a product record; it is derived from the two
//! cannabinoid percentages every time a filter is evaluated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// THC level above which a low-CBD product counts as THC-dominant
pub const THC_RICH_MIN_THC: f64 = 15.0;
/// CBD level below which a high-THC product counts as THC-dominant
pub const THC_RICH_MAX_CBD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    #[serde(rename = "CBD Rich")]
    CbdRich,
    #[serde(rename = "THC Rich")]
    ThcRich,
    #[serde(rename = "Balanced")]
    Balanced,
}

impl Profile {
    /// Classify a product by its cannabinoid percentages
    ///
    /// - `CBD Rich` when cbd > thc
    /// - otherwise `THC Rich` when thc > 15 and cbd < 5
    /// - otherwise `Balanced`
    pub fn classify(thc: f64, cbd: f64) -> Self {
        if cbd > thc {
            Profile::CbdRich
        } else if thc > THC_RICH_MIN_THC && cbd < THC_RICH_MAX_CBD {
            Profile::ThcRich
        } else {
            Profile::Balanced
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Profile::CbdRich => "CBD Rich",
            Profile::ThcRich => "THC Rich",
            Profile::Balanced => "Balanced",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a profile label is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown profile: {0}")]
pub struct UnknownProfile(pub String);

impl FromStr for Profile {
    type Err = UnknownProfile;

    /// Accepts the display label or a compact form (`cbd-rich`, `thc_rich`, `balanced`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "cbdrich" => Ok(Profile::CbdRich),
            "thcrich" => Ok(Profile::ThcRich),
            "balanced" => Ok(Profile::Balanced),
            _ => Err(UnknownProfile(s.to_string())),
        }
    }
}
