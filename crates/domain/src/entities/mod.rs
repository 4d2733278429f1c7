//! Domain entities - weather observations, forecasts and alerts

mod current_conditions;
mod period_forecast;
mod weather_alert;
mod weather_forecast;

pub use current_conditions::CurrentConditions;
pub use period_forecast::PeriodForecast;
pub use weather_alert::{AlertSeverity, WeatherAlert};
pub use weather_forecast::{ForecastType, WeatherForecast};
