use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::location::Location;
use crate::models::venue::Venue;
use crate::models::weather::WeatherReading;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationClass {
    #[serde(rename = "half-day")]
    HalfDay,
    #[serde(rename = "full-day")]
    FullDay,
}

impl DurationClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationClass::HalfDay => "half-day",
            DurationClass::FullDay => "full-day",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub location: Location,
    pub budget: u32,
    pub interests: Vec<String>,
    pub duration: DurationClass,
    #[serde(default = "default_group_size")]
    pub group_size: u32,
}

fn default_group_size() -> u32 {
    1
}

impl PlanRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.interests.is_empty() {
            return Err("At least one interest is required".to_string());
        }
        if self.group_size < 1 {
            return Err("Group size must be at least 1".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub venue: Venue,
    /// Wall-clock "HH:MM".
    pub start_time: String,
    pub end_time: String,
    /// Reserved for a future routing integration; nothing populates it yet.
    #[serde(default)]
    pub travel_time_to_next: u32,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub id: String,
    pub location: Location,
    /// "YYYY-MM-DD".
    pub date: String,
    pub weather: WeatherReading,
    pub total_budget: u32,
    pub estimated_cost: u32,
    pub itinerary: Vec<ItineraryItem>,
    pub created_at: DateTime<Utc>,
}
