use crate::{Distance, Fuel};

/// Internal failure modes of the highway store.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("a station already exists at distance {0}")]
    DuplicateDistance(Distance),

    #[error("no station exists at distance {0}")]
    StationAbsent(Distance),

    #[error("no car with fuel {fuel} at distance {distance}")]
    NoSuchCar { distance: Distance, fuel: Fuel },

    #[error("range endpoint is not a station")]
    RangeEndpointMissing,
}
