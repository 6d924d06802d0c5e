use chrono::Utc;
use uuid::Uuid;

use crate::models::plan::{DayPlan, ItineraryItem, PlanRequest};
use crate::models::weather::WeatherReading;

pub struct PlanAssembler;

impl PlanAssembler {
    /// Combine the request, weather snapshot, itinerary, and estimated
    /// cost into an immutable DayPlan with a fresh id and timestamps.
    /// The assembled record is stored and returned verbatim.
    pub fn assemble(
        request: &PlanRequest,
        weather: WeatherReading,
        itinerary: Vec<ItineraryItem>,
        estimated_cost: u32,
    ) -> DayPlan {
        let now = Utc::now();

        DayPlan {
            id: Uuid::new_v4().to_string(),
            location: request.location.clone(),
            date: now.format("%Y-%m-%d").to_string(),
            weather,
            total_budget: request.budget,
            estimated_cost,
            itinerary,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::Location;
    use crate::models::plan::DurationClass;
    use crate::models::venue::{PriceTier, Venue, VenueCategory};

    fn request() -> PlanRequest {
        PlanRequest {
            location: Location {
                lat: 40.7128,
                lng: -74.006,
                address: "Manhattan, NYC".to_string(),
            },
            budget: 250,
            interests: vec!["food".to_string()],
            duration: DurationClass::HalfDay,
            group_size: 3,
        }
    }

    fn itinerary() -> Vec<ItineraryItem> {
        vec![ItineraryItem {
            venue: Venue {
                id: "venue-1".to_string(),
                name: "Joe's Pizza".to_string(),
                category: VenueCategory::Restaurant,
                location: Location {
                    lat: 40.7505,
                    lng: -73.9934,
                    address: "456 8th Ave, NYC".to_string(),
                },
                price_range: PriceTier::Budget,
                rating: 4.3,
                description: "Pizza joint".to_string(),
                popular_items: vec!["Cheese Pizza".to_string()],
                opening_hours: "11:00 AM - 11:00 PM".to_string(),
                estimated_duration: 30,
                booking_url: None,
            },
            start_time: "12:00".to_string(),
            end_time: "12:30".to_string(),
            travel_time_to_next: 0,
            notes: "lunch".to_string(),
        }]
    }

    #[test]
    fn copies_request_and_computed_fields_verbatim() {
        let req = request();
        let items = itinerary();
        let plan = PlanAssembler::assemble(&req, WeatherReading::fallback(), items.clone(), 25);

        assert_eq!(plan.location, req.location);
        assert_eq!(plan.total_budget, 250);
        assert_eq!(plan.estimated_cost, 25);
        assert_eq!(plan.itinerary, items);
        assert_eq!(plan.weather, WeatherReading::fallback());
    }

    #[test]
    fn generates_fresh_ids() {
        let req = request();
        let a = PlanAssembler::assemble(&req, WeatherReading::fallback(), vec![], 0);
        let b = PlanAssembler::assemble(&req, WeatherReading::fallback(), vec![], 0);
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn stamps_the_plan_date_from_creation_time() {
        let plan = PlanAssembler::assemble(&request(), WeatherReading::fallback(), vec![], 0);
        assert_eq!(plan.date, plan.created_at.format("%Y-%m-%d").to_string());
    }

    #[test]
    fn day_plan_round_trips_through_bson() {
        let plan = PlanAssembler::assemble(&request(), WeatherReading::fallback(), itinerary(), 25);

        let doc = bson::to_document(&plan).unwrap();
        let restored: DayPlan = bson::from_document(doc).unwrap();

        assert_eq!(restored, plan);
    }
}
