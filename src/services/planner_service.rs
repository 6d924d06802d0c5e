use chrono::{Duration, NaiveTime};
use serde::Deserialize;

use crate::models::plan::{ItineraryItem, PlanRequest};
use crate::models::venue::{Venue, VenueCategory};
use crate::models::weather::WeatherReading;
use crate::services::openai_service::{CompletionError, OpenAiService};

// Hard cap on prompt context: only the first 15 catalog venues are
// summarized for the model.
const MAX_PROMPT_VENUES: usize = 15;
const MAX_FALLBACK_VENUES: usize = 6;
const TRAVEL_BUFFER_MINUTES: i64 = 30;
const WARM_TEMPERATURE_C: f64 = 25.0;

const SYSTEM_MESSAGE: &str = "You are an expert day planner. Create optimized itineraries \
     based on user preferences, weather, and available venues.";

/// Seam for the text-completion collaborator so the planner can be
/// exercised with canned responses in tests.
pub trait CompletionClient {
    async fn complete_text(
        &self,
        system_instruction: &str,
        user_prompt: &str,
    ) -> Result<String, CompletionError>;
}

impl CompletionClient for OpenAiService {
    async fn complete_text(
        &self,
        system_instruction: &str,
        user_prompt: &str,
    ) -> Result<String, CompletionError> {
        OpenAiService::complete_text(self, system_instruction, user_prompt).await
    }
}

#[derive(Debug, Deserialize)]
struct AiItinerary {
    #[serde(default)]
    itinerary: Vec<AiItineraryEntry>,
}

#[derive(Debug, Deserialize)]
struct AiItineraryEntry {
    venue_name: String,
    start_time: String,
    end_time: String,
    #[serde(default)]
    notes: String,
}

pub struct ItineraryPlanner<C> {
    completion: C,
}

impl<C: CompletionClient> ItineraryPlanner<C> {
    pub fn new(completion: C) -> Self {
        Self { completion }
    }

    /// Produce an ordered itinerary for the request. Never fails outward:
    /// every AI-path problem (completion error, unparseable output) lands
    /// on the deterministic fallback, which always succeeds.
    pub async fn plan(
        &self,
        request: &PlanRequest,
        weather: &WeatherReading,
        venues: &[Venue],
    ) -> Vec<ItineraryItem> {
        match self.plan_with_ai(request, weather, venues).await {
            Ok(items) => items,
            Err(e) => {
                eprintln!("AI planning failed: {}. Using fallback planning.", e);
                fallback_plan(request, weather, venues)
            }
        }
    }

    async fn plan_with_ai(
        &self,
        request: &PlanRequest,
        weather: &WeatherReading,
        venues: &[Venue],
    ) -> Result<Vec<ItineraryItem>, CompletionError> {
        let prompt = build_prompt(request, weather, venues);
        let response = self.completion.complete_text(SYSTEM_MESSAGE, &prompt).await?;

        let parsed: AiItinerary = match serde_json::from_str(&response) {
            Ok(parsed) => parsed,
            Err(e) => {
                // No retry on malformed output; one completion per plan.
                eprintln!("Unparseable completion response: {}. Using fallback planning.", e);
                return Ok(fallback_plan(request, weather, venues));
            }
        };

        Ok(resolve_entries(parsed.itinerary, venues))
    }
}

fn build_prompt(request: &PlanRequest, weather: &WeatherReading, venues: &[Venue]) -> String {
    let venue_summary = venues
        .iter()
        .take(MAX_PROMPT_VENUES)
        .map(|v| {
            format!(
                "- {} ({}): {} - {} - Duration: {}min",
                v.name,
                v.category.as_str(),
                v.description,
                v.price_range.symbol(),
                v.estimated_duration
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut weather_context = format!(
        "Weather: {}°C, {}",
        weather.temperature, weather.description
    );
    if weather.is_wet() {
        weather_context.push_str(" (favor indoor activities)");
    } else if weather.temperature > WARM_TEMPERATURE_C {
        weather_context.push_str(" (favor outdoor activities)");
    }

    format!(
        "Create a detailed day plan with the following requirements:\n\n\
         Location: {}\n\
         Budget: ${}\n\
         Duration: {}\n\
         Interests: {}\n\
         Group Size: {}\n\
         {}\n\n\
         Available venues:\n{}\n\n\
         Please provide a JSON response with this exact structure:\n\
         {{\n\
             \"itinerary\": [\n\
                 {{\n\
                     \"venue_name\": \"venue name\",\n\
                     \"start_time\": \"HH:MM\",\n\
                     \"end_time\": \"HH:MM\",\n\
                     \"notes\": \"why this fits the plan\"\n\
                 }}\n\
             ]\n\
         }}\n\n\
         Rules:\n\
         - Start no earlier than 08:00, consider venue opening hours\n\
         - Include 2-3 restaurants and 3-5 activities/attractions\n\
         - Factor in travel time between locations\n\
         - Stay within budget\n\
         - Consider weather for indoor/outdoor balance\n\
         - Optimize for user interests",
        request.location.address,
        request.budget,
        request.duration.as_str(),
        request.interests.join(", "),
        request.group_size,
        weather_context,
        venue_summary
    )
}

/// Map model output back onto catalog venues. A catalog venue matches when
/// its name appears (case-insensitively) inside the returned name; ties go
/// to the first match in catalog order, and unmatched entries are dropped.
/// The model's ordering and times are kept as-is.
fn resolve_entries(entries: Vec<AiItineraryEntry>, venues: &[Venue]) -> Vec<ItineraryItem> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let returned_name = entry.venue_name.to_lowercase();
            venues
                .iter()
                .find(|v| returned_name.contains(&v.name.to_lowercase()))
                .map(|venue| ItineraryItem {
                    venue: venue.clone(),
                    start_time: entry.start_time,
                    end_time: entry.end_time,
                    travel_time_to_next: 0,
                    notes: entry.notes,
                })
        })
        .collect()
}

/// Deterministic planning: weather filter, rating sort, greedy slotting
/// from 09:00 with a fixed 30-minute buffer between venues. Always
/// succeeds; an empty catalog yields an empty itinerary.
pub fn fallback_plan(
    request: &PlanRequest,
    weather: &WeatherReading,
    venues: &[Venue],
) -> Vec<ItineraryItem> {
    let mut suitable: Vec<&Venue> = venues
        .iter()
        .filter(|v| {
            if weather.is_wet() {
                matches!(
                    v.category,
                    VenueCategory::Restaurant | VenueCategory::Activity
                ) || v.name.to_lowercase().contains("museum")
            } else {
                true
            }
        })
        .collect();

    // Stable sort: equal ratings keep catalog order.
    suitable.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut itinerary = Vec::new();
    let mut current_time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

    for venue in suitable.into_iter().take(MAX_FALLBACK_VENUES) {
        let end_time = current_time + Duration::minutes(venue.estimated_duration as i64);

        itinerary.push(ItineraryItem {
            venue: venue.clone(),
            start_time: current_time.format("%H:%M").to_string(),
            end_time: end_time.format("%H:%M").to_string(),
            travel_time_to_next: 0,
            notes: format!("Perfect for {}", request.interests.join(", ")),
        });

        current_time = end_time + Duration::minutes(TRAVEL_BUFFER_MINUTES);
    }

    itinerary
}
