//! Command execution against a [`WeatherClient`]

use anyhow::bail;
use integration_weather_gov::WeatherClient;
use tracing::info;

use crate::{
    cli::{Command, Location},
    render::{self, OutputFormat},
};

/// Run `command` and return what should be printed
pub async fn run(
    client: &dyn WeatherClient,
    command: &Command,
    output: OutputFormat,
) -> anyhow::Result<String> {
    match command {
        Command::Point(Location {
            latitude,
            longitude,
        }) => {
            let point = client.fetch_point(*latitude, *longitude).await?;
            output.render(&point, render::point)
        },
        Command::Forecast { location, hourly } => {
            let forecast = if *hourly {
                client
                    .fetch_hourly_forecast(location.latitude, location.longitude)
                    .await?
            } else {
                client
                    .fetch_forecast(location.latitude, location.longitude)
                    .await?
            };
            info!(periods = forecast.periods().len(), hourly, "Forecast received");
            output.render(&forecast, render::forecast)
        },
        Command::Alerts(Location {
            latitude,
            longitude,
        }) => {
            let alerts = client.fetch_active_alerts(*latitude, *longitude).await?;
            output.render(&alerts, render::alerts)
        },
        Command::Health => {
            if client.is_healthy().await {
                Ok("✅ weather.gov is reachable".to_string())
            } else {
                bail!("weather.gov is not reachable")
            }
        },
    }
}
