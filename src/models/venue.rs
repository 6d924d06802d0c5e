use serde::{Deserialize, Serialize};

use crate::models::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueCategory {
    Restaurant,
    Activity,
    Event,
    Attraction,
}

impl VenueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueCategory::Restaurant => "restaurant",
            VenueCategory::Activity => "activity",
            VenueCategory::Event => "event",
            VenueCategory::Attraction => "attraction",
        }
    }
}

/// Coarse per-visit pricing. Keeping this an enum (rather than a raw
/// string) makes the cost table exhaustive: a venue with an unknown tier
/// fails deserialization at creation time instead of at estimation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceTier {
    /// Estimated cost of a single visit, in whole dollars.
    pub fn visit_cost(&self) -> u32 {
        match self {
            PriceTier::Budget => 25,
            PriceTier::Moderate => 50,
            PriceTier::Upscale => 100,
            PriceTier::Luxury => 150,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            PriceTier::Budget => "$",
            PriceTier::Moderate => "$$",
            PriceTier::Upscale => "$$$",
            PriceTier::Luxury => "$$$$",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub category: VenueCategory,
    pub location: Location,
    pub price_range: PriceTier,
    pub rating: f32,
    pub description: String,
    #[serde(default)]
    pub popular_items: Vec<String>,
    pub opening_hours: String,
    /// Estimated visit duration in minutes. Always > 0 in seed data.
    pub estimated_duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
}
