//! Synthetic weather reports.

use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const CONDITIONS: [&str; 7] = ["맑음", "흐림", "비", "눈", "안개", "구름 많음", "천둥번개"];
pub const TEMPERATURE_RANGE: RangeInclusive<i32> = -10..=30;
pub const HUMIDITY_RANGE: RangeInclusive<u8> = 0..=100;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetWeatherParams {
    /// City name
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub condition: &'static str,
    /// Degrees Celsius.
    pub temperature: i32,
    /// Relative humidity in percent.
    pub humidity: u8,
}

impl WeatherReport {
    /// Draw every field uniformly from its fixed set or range.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            condition: CONDITIONS[rng.gen_range(0..CONDITIONS.len())],
            temperature: rng.gen_range(TEMPERATURE_RANGE),
            humidity: rng.gen_range(HUMIDITY_RANGE),
        }
    }

    pub fn for_city<'a>(&'a self, city: &'a str) -> CityWeather<'a> {
        CityWeather { city, report: self }
    }
}

/// A report rendered for a particular city.
pub struct CityWeather<'a> {
    city: &'a str,
    report: &'a WeatherReport,
}

impl fmt::Display for CityWeather<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}의 현재 날씨: {}, 기온: {}°C, 습도: {}%",
            self.city, self.report.condition, self.report.temperature, self.report.humidity
        )
    }
}

pub fn current_weather<R: Rng + ?Sized>(city: &str, rng: &mut R) -> String {
    WeatherReport::random(rng).for_city(city).to_string()
}
