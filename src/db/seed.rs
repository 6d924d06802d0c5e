use mongodb::{bson::doc, Client, Collection};
use uuid::Uuid;

use crate::db::mongo::DB_NAME;
use crate::models::location::Location;
use crate::models::venue::{PriceTier, Venue, VenueCategory};

/// Seed the catalog with sample NYC venues when it is empty. Seeding
/// failures are logged and ignored; the API can still serve requests
/// against whatever the collection holds.
pub async fn init_sample_venues(client: &Client) {
    let collection: Collection<Venue> = client.database(DB_NAME).collection("venues");

    match collection.count_documents(doc! {}).await {
        Ok(0) => match collection.insert_many(sample_venues()).await {
            Ok(result) => println!("Seeded {} sample venues", result.inserted_ids.len()),
            Err(err) => eprintln!("Failed to seed sample venues: {:?}", err),
        },
        Ok(count) => println!("Venue catalog already has {} venues, skipping seed", count),
        Err(err) => eprintln!("Failed to count venues for seeding: {:?}", err),
    }
}

pub fn sample_venues() -> Vec<Venue> {
    vec![
        Venue {
            id: Uuid::new_v4().to_string(),
            name: "The Coffee Corner".to_string(),
            category: VenueCategory::Restaurant,
            location: Location {
                lat: 40.7589,
                lng: -73.9851,
                address: "123 Broadway, NYC".to_string(),
            },
            price_range: PriceTier::Moderate,
            rating: 4.5,
            description: "Cozy coffee shop with artisanal pastries and light breakfast"
                .to_string(),
            popular_items: vec![
                "Cappuccino".to_string(),
                "Croissant".to_string(),
                "Avocado Toast".to_string(),
            ],
            opening_hours: "7:00 AM - 6:00 PM".to_string(),
            estimated_duration: 45,
            booking_url: Some("https://example.com/book".to_string()),
        },
        Venue {
            id: Uuid::new_v4().to_string(),
            name: "Central Park".to_string(),
            category: VenueCategory::Attraction,
            location: Location {
                lat: 40.7821,
                lng: -73.9654,
                address: "Central Park, NYC".to_string(),
            },
            price_range: PriceTier::Budget,
            rating: 4.8,
            description: "Iconic urban park perfect for walking, picnics, and recreation"
                .to_string(),
            popular_items: vec![
                "Walking paths".to_string(),
                "Bethesda Fountain".to_string(),
                "Strawberry Fields".to_string(),
            ],
            opening_hours: "6:00 AM - 1:00 AM".to_string(),
            estimated_duration: 120,
            booking_url: None,
        },
        Venue {
            id: Uuid::new_v4().to_string(),
            name: "Metropolitan Museum".to_string(),
            category: VenueCategory::Attraction,
            location: Location {
                lat: 40.7794,
                lng: -73.9632,
                address: "1000 5th Ave, NYC".to_string(),
            },
            price_range: PriceTier::Upscale,
            rating: 4.7,
            description: "World-class art museum with extensive collections".to_string(),
            popular_items: vec![
                "Egyptian Art".to_string(),
                "European Paintings".to_string(),
                "Arms & Armor".to_string(),
            ],
            opening_hours: "10:00 AM - 5:00 PM".to_string(),
            estimated_duration: 180,
            booking_url: Some("https://metmuseum.org/visit".to_string()),
        },
        Venue {
            id: Uuid::new_v4().to_string(),
            name: "Joe's Pizza".to_string(),
            category: VenueCategory::Restaurant,
            location: Location {
                lat: 40.7505,
                lng: -73.9934,
                address: "456 8th Ave, NYC".to_string(),
            },
            price_range: PriceTier::Budget,
            rating: 4.3,
            description: "Authentic NYC pizza joint with classic thin crust slices".to_string(),
            popular_items: vec![
                "Cheese Pizza".to_string(),
                "Pepperoni".to_string(),
                "Sicilian Slice".to_string(),
            ],
            opening_hours: "11:00 AM - 11:00 PM".to_string(),
            estimated_duration: 30,
            booking_url: None,
        },
        Venue {
            id: Uuid::new_v4().to_string(),
            name: "Broadway Theater District".to_string(),
            category: VenueCategory::Activity,
            location: Location {
                lat: 40.759,
                lng: -73.9845,
                address: "Times Square, NYC".to_string(),
            },
            price_range: PriceTier::Luxury,
            rating: 4.6,
            description: "Catch a world-class Broadway show in the theater district".to_string(),
            popular_items: vec![
                "Lion King".to_string(),
                "Hamilton".to_string(),
                "Phantom of the Opera".to_string(),
            ],
            opening_hours: "Various show times".to_string(),
            estimated_duration: 180,
            booking_url: Some("https://broadway.com".to_string()),
        },
        Venue {
            id: Uuid::new_v4().to_string(),
            name: "High Line Park".to_string(),
            category: VenueCategory::Attraction,
            location: Location {
                lat: 40.748,
                lng: -74.0048,
                address: "High Line, NYC".to_string(),
            },
            price_range: PriceTier::Budget,
            rating: 4.5,
            description: "Elevated linear park built on former railway tracks".to_string(),
            popular_items: vec![
                "Walking trail".to_string(),
                "City views".to_string(),
                "Art installations".to_string(),
            ],
            opening_hours: "7:00 AM - 7:00 PM".to_string(),
            estimated_duration: 90,
            booking_url: None,
        },
        Venue {
            id: Uuid::new_v4().to_string(),
            name: "Eataly NYC".to_string(),
            category: VenueCategory::Restaurant,
            location: Location {
                lat: 40.7424,
                lng: -73.9899,
                address: "200 5th Ave, NYC".to_string(),
            },
            price_range: PriceTier::Upscale,
            rating: 4.4,
            description: "Italian marketplace with restaurants, cafes, and gourmet products"
                .to_string(),
            popular_items: vec![
                "Fresh Pasta".to_string(),
                "Gelato".to_string(),
                "Italian Wine".to_string(),
            ],
            opening_hours: "10:00 AM - 11:00 PM".to_string(),
            estimated_duration: 75,
            booking_url: Some("https://eataly.com".to_string()),
        },
        Venue {
            id: Uuid::new_v4().to_string(),
            name: "Brooklyn Bridge".to_string(),
            category: VenueCategory::Attraction,
            location: Location {
                lat: 40.7061,
                lng: -73.9969,
                address: "Brooklyn Bridge, NYC".to_string(),
            },
            price_range: PriceTier::Budget,
            rating: 4.6,
            description: "Historic suspension bridge with stunning city views".to_string(),
            popular_items: vec![
                "Walking path".to_string(),
                "Photography spots".to_string(),
                "City skyline views".to_string(),
            ],
            opening_hours: "24 hours".to_string(),
            estimated_duration: 60,
            booking_url: None,
        },
    ]
}
