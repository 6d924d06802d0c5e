use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::plan::{DayPlan, PlanRequest};
use crate::models::venue::Venue;
use crate::services::cost_service::CostEstimator;
use crate::services::openai_service::OpenAiService;
use crate::services::plan_service::PlanAssembler;
use crate::services::planner_service::ItineraryPlanner;
use crate::services::weather_service::WeatherService;

/*
    POST /api/plan

    The only 500s here are unexpected DB faults; planning itself always
    produces some itinerary (the planner falls back internally).
*/
pub async fn create_day_plan(
    body: web::Json<PlanRequest>,
    data: web::Data<Arc<Client>>,
    weather_service: web::Data<WeatherService>,
    planner: web::Data<ItineraryPlanner<OpenAiService>>,
) -> impl Responder {
    let request = body.into_inner();
    if let Err(msg) = request.validate() {
        return HttpResponse::BadRequest().body(msg);
    }

    let client = data.into_inner();

    let weather = weather_service
        .get_current_weather(request.location.lat, request.location.lng)
        .await;

    let collection: Collection<Venue> = client.database(DB_NAME).collection("venues");
    let venues: Vec<Venue> = match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect().await {
            Ok(venues) => venues,
            Err(err) => {
                eprintln!("Failed to collect venue catalog: {:?}", err);
                return HttpResponse::InternalServerError()
                    .body("Failed to create day plan: venue catalog unavailable");
            }
        },
        Err(err) => {
            eprintln!("Failed to query venue catalog: {:?}", err);
            return HttpResponse::InternalServerError()
                .body("Failed to create day plan: venue catalog unavailable");
        }
    };

    let itinerary = planner.plan(&request, &weather, &venues).await;
    let estimated_cost = CostEstimator::estimate(&itinerary);
    let day_plan = PlanAssembler::assemble(&request, weather, itinerary, estimated_cost);

    let plans: Collection<DayPlan> = client.database(DB_NAME).collection("day_plans");
    match plans.insert_one(&day_plan).await {
        Ok(_) => HttpResponse::Ok().json(day_plan),
        Err(err) => {
            eprintln!("Failed to store day plan: {:?}", err);
            HttpResponse::InternalServerError()
                .body(format!("Failed to create day plan: {}", err))
        }
    }
}

/*
    GET /api/plans/{id}
*/
pub async fn get_plan(path: web::Path<String>, data: web::Data<Arc<Client>>) -> impl Responder {
    let plan_id = path.into_inner();
    let client = data.into_inner();
    let collection: Collection<DayPlan> = client.database(DB_NAME).collection("day_plans");

    match collection.find_one(doc! { "id": &plan_id }).await {
        Ok(Some(plan)) => HttpResponse::Ok().json(plan),
        Ok(None) => HttpResponse::NotFound().body("Plan not found"),
        Err(err) => {
            eprintln!("Failed to retrieve plan {}: {:?}", plan_id, err);
            HttpResponse::InternalServerError().body("Failed to retrieve plan")
        }
    }
}
