use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::services::weather_service::WeatherService;

#[derive(Deserialize)]
pub struct WeatherQuery {
    lat: f64,
    lng: f64,
}

/*
    /api/weather?lat=..&lng=..
*/
pub async fn get_weather(
    query: web::Query<WeatherQuery>,
    weather_service: web::Data<WeatherService>,
) -> impl Responder {
    let reading = weather_service
        .get_current_weather(query.lat, query.lng)
        .await;

    HttpResponse::Ok().json(reading)
}
