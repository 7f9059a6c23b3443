//! HTTP side of `wxreport`: the NWS client, one module per resolver stage,
//! and the pipeline that chains them into a [`wxreport_core::WeatherReport`].

pub mod alerts;
pub mod client;
pub mod error;
pub mod forecast;
pub mod grid;
pub mod location;
pub mod pipeline;
pub mod station;
pub(crate) mod types;

pub use alerts::fetch_active_alerts;
pub use client::NwsClient;
pub use error::WeatherError;
pub use forecast::fetch_hourly_forecast;
pub use grid::{extract_zone_id, resolve_grid};
pub use location::resolve_location;
pub use pipeline::{build_report, LocationSource, PipelineError, Stage, StageFailure};
pub use station::{fetch_observation, resolve_station};
