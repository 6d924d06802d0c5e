use reqwest::Client;
use serde::Deserialize;
use std::{env, error::Error, time::Duration};

use crate::models::weather::WeatherReading;

const WEATHER_API_URL: &str = "http://api.openweathermap.org/data/2.5/weather";
const WEATHER_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: OwmMain,
    weather: Vec<OwmCondition>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    main: String,
    description: String,
}

pub struct WeatherService {
    client: Client,
}

impl WeatherService {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Current conditions at the given coordinates. Never fails outward:
    /// any lookup problem (missing key, timeout, bad payload) yields the
    /// fixed fallback reading so planning can proceed.
    pub async fn get_current_weather(&self, lat: f64, lng: f64) -> WeatherReading {
        match self.fetch_weather(lat, lng).await {
            Ok(reading) => reading,
            Err(e) => {
                eprintln!("Weather lookup failed: {}. Using fallback reading.", e);
                WeatherReading::fallback()
            }
        }
    }

    async fn fetch_weather(&self, lat: f64, lng: f64) -> Result<WeatherReading, Box<dyn Error>> {
        let api_key = env::var("WEATHER_API_KEY")?;

        let response = self
            .client
            .get(WEATHER_API_URL)
            .timeout(Duration::from_secs(WEATHER_TIMEOUT_SECS))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lng.to_string()),
                ("appid", api_key),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data: OwmResponse = response.json().await?;
        let condition = data
            .weather
            .into_iter()
            .next()
            .ok_or("weather response contained no conditions")?;

        Ok(WeatherReading {
            temperature: data.main.temp,
            description: condition.description,
            feels_like: data.main.feels_like,
            humidity: data.main.humidity,
            weather_main: condition.main,
        })
    }
}

impl Default for WeatherService {
    fn default() -> Self {
        Self::new()
    }
}
