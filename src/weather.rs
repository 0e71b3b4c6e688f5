//! Mock weather source
//!
//! Returns one of a fixed set of readings after a simulated delay. No
//! geolocation or network call is made.

use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// Simulated network delay of the weather lookup
pub const WEATHER_DELAY: Duration = Duration::from_millis(1000);

/// Icon category for a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    Sunny,
    Cloudy,
    PartlyCloudy,
    Rainy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Degrees Celsius
    pub temperature: i32,
    pub condition: String,
    pub icon: WeatherIcon,
    pub location: String,
}

/// A value that a real backend would deliver after `delay`
#[derive(Debug, Clone, PartialEq)]
pub struct Delayed<T> {
    pub value: T,
    pub delay: Duration,
}

/// Anything that can produce a weather reading
pub trait WeatherSource {
    fn current(&mut self) -> Delayed<WeatherReading>;
}

/// Picks uniformly from the canned readings
#[derive(Debug, Clone)]
pub struct MockWeather<R> {
    rng: R,
    readings: Vec<WeatherReading>,
}

impl<R: Rng> MockWeather<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            readings: mock_readings(),
        }
    }
}

impl<R: Rng> WeatherSource for MockWeather<R> {
    fn current(&mut self) -> Delayed<WeatherReading> {
        let value = self
            .readings
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| mock_readings().remove(0));
        log::debug!("Mock weather: {} ({}°C)", value.condition, value.temperature);
        Delayed {
            value,
            delay: WEATHER_DELAY,
        }
    }
}

fn reading(temperature: i32, condition: &str, icon: WeatherIcon) -> WeatherReading {
    WeatherReading {
        temperature,
        condition: condition.to_string(),
        icon,
        location: "London, UK".to_string(),
    }
}

/// The canned readings
pub fn mock_readings() -> Vec<WeatherReading> {
    vec![
        reading(5, "Chilly & Clear", WeatherIcon::Sunny),
        reading(28, "Hot & Sunny", WeatherIcon::Sunny),
        reading(12, "Rainy Day", WeatherIcon::Rainy),
        reading(18, "Partly Cloudy", WeatherIcon::PartlyCloudy),
        reading(15, "Cloudy & Overcast", WeatherIcon::Cloudy),
    ]
}
