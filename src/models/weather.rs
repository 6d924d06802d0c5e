use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature: f64,
    pub description: String,
    pub feels_like: f64,
    pub humidity: u8,
    /// Coarse condition category from the provider ("Clouds", "Rain",
    /// "Thunderstorm", ...), used for indoor/outdoor decisions.
    pub weather_main: String,
}

impl WeatherReading {
    /// Fixed reading used whenever the weather lookup fails.
    pub fn fallback() -> Self {
        Self {
            temperature: 22.0,
            description: "partly cloudy".to_string(),
            feels_like: 24.0,
            humidity: 65,
            weather_main: "Clouds".to_string(),
        }
    }

    /// Rain or thunderstorm conditions push the plan toward indoor venues.
    pub fn is_wet(&self) -> bool {
        matches!(
            self.weather_main.to_lowercase().as_str(),
            "rain" | "thunderstorm"
        )
    }
}
