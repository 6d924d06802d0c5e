use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, Client};
use serde_json::json;
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::venue::Venue;

/*
    /api/venues
*/
pub async fn get_venues(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Venue> =
        client.database(DB_NAME).collection("venues");

    match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Venue>>().await {
            Ok(venues) => HttpResponse::Ok().json(json!({ "venues": venues })),
            Err(err) => {
                eprintln!("Failed to collect venues: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect venues.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find venues: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find venues.")
        }
    }
}
