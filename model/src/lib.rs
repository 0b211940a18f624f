mod config;
mod error;
mod highway;
mod station;

pub use config::Config;
pub use error::StoreError;
pub use highway::Highway;
pub use station::Station;

/// A distance along the highway, in the caller's chosen unit.
pub type Distance = u32;

/// A car's maximum fuel autonomy, in the same unit as [`Distance`].
pub type Fuel = u32;
