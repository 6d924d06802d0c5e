use crate::models::plan::ItineraryItem;

pub struct CostEstimator;

impl CostEstimator {
    /// Total estimated cost of an itinerary: the sum of each venue's
    /// per-visit tier cost. Pure, and exhaustive over the four tiers.
    pub fn estimate(itinerary: &[ItineraryItem]) -> u32 {
        itinerary
            .iter()
            .map(|item| item.venue.price_range.visit_cost())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::Location;
    use crate::models::venue::{PriceTier, Venue, VenueCategory};

    fn item(tier: PriceTier) -> ItineraryItem {
        ItineraryItem {
            venue: Venue {
                id: "v1".to_string(),
                name: "Test Venue".to_string(),
                category: VenueCategory::Restaurant,
                location: Location {
                    lat: 40.7,
                    lng: -74.0,
                    address: "NYC".to_string(),
                },
                price_range: tier,
                rating: 4.0,
                description: String::new(),
                popular_items: vec![],
                opening_hours: String::new(),
                estimated_duration: 60,
                booking_url: None,
            },
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            travel_time_to_next: 0,
            notes: String::new(),
        }
    }

    #[test]
    fn tier_costs_match_the_table() {
        assert_eq!(PriceTier::Budget.visit_cost(), 25);
        assert_eq!(PriceTier::Moderate.visit_cost(), 50);
        assert_eq!(PriceTier::Upscale.visit_cost(), 100);
        assert_eq!(PriceTier::Luxury.visit_cost(), 150);
    }

    #[test]
    fn sums_per_tier_constants() {
        let itinerary = vec![item(PriceTier::Budget), item(PriceTier::Upscale)];
        assert_eq!(CostEstimator::estimate(&itinerary), 125);
    }

    #[test]
    fn empty_itinerary_costs_nothing() {
        assert_eq!(CostEstimator::estimate(&[]), 0);
    }

    #[test]
    fn estimate_is_deterministic() {
        let itinerary = vec![
            item(PriceTier::Moderate),
            item(PriceTier::Luxury),
            item(PriceTier::Budget),
        ];
        assert_eq!(
            CostEstimator::estimate(&itinerary),
            CostEstimator::estimate(&itinerary)
        );
        assert_eq!(CostEstimator::estimate(&itinerary), 225);
    }
}
