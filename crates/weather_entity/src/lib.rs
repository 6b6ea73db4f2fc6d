//! Generic weather entity abstraction
//!
//! Defines the host-side vocabulary and interfaces every weather provider
//! integration plugs into: the attribute and forecast-field schema, sparse
//! forecast records, the entity trait with its per-attribute queries, the
//! update-coordinator observer surface, and the entity registry.
//!
//! Provider integrations (e.g. `integration_met`) translate their native
//! field names onto this schema; the polling engine that actually fetches
//! provider data lives outside this crate and is consumed through
//! [`coordinator::UpdateCoordinator`].

pub mod attributes;
pub mod config;
pub mod coordinator;
pub mod entity;
pub mod forecast;
pub mod location;
pub mod registry;

pub use config::{HostConfig, UnitSystem};
pub use coordinator::{ListenerHandle, UpdateCoordinator};
pub use entity::{
    DeviceEntryType, DeviceInfo, WeatherEntity, WeatherEntityFeature, WeatherUnits,
};
pub use forecast::{ForecastHorizon, ForecastRecord};
pub use location::{Coordinates, InvalidCoordinates};
pub use registry::EntityRegistry;
