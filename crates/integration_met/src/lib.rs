//! Met.no weather integration
//!
//! Exposes the Norwegian Meteorological Institute's forecast data through
//! the host's generic weather entity abstraction. The network polling is
//! done by an external coordinator; this crate only translates the
//! coordinator's cached provider fields onto the host schema and reacts to
//! refresh notifications.

pub mod condition;
pub mod config;
pub mod consts;
pub mod data;
pub mod weather;

pub use condition::normalize_condition;
pub use config::MetConfig;
pub use data::MetWeatherData;
pub use weather::{MetWeather, calculate_unique_id, setup_entry};
