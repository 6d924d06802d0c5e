use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use planmyday_api::services::openai_service::OpenAiService;
use planmyday_api::services::planner_service::ItineraryPlanner;
use planmyday_api::services::weather_service::WeatherService;
use planmyday_api::{db, routes};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8001;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let mongo_uri = std::env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let client = db::mongo::create_mongo_client(&mongo_uri).await;
    db::seed::init_sample_venues(&client).await;

    // One reqwest client each for the weather and completion services,
    // shared across workers.
    let weather_service = web::Data::new(WeatherService::new());
    let planner = web::Data::new(ItineraryPlanner::new(OpenAiService::new()));

    println!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(web::Data::new(client.clone()))
            .app_data(weather_service.clone())
            .app_data(planner.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(routes::health::health_check))
                    .route("/venues", web::get().to(routes::venue::get_venues))
                    .route("/weather", web::get().to(routes::weather::get_weather))
                    .route("/plan", web::post().to(routes::plan::create_day_plan))
                    .route("/plans/{id}", web::get().to(routes::plan::get_plan)),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
