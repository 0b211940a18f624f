use crate::{Config, Distance, Fuel, Station, StoreError};

/// The whole highway: stations kept strictly ascending by distance.
///
/// Lookups and ordered insertion use binary search over the station vector.
/// Insertion and removal are O(n) worst case due to the shift.
#[derive(Debug, Clone)]
pub struct Highway {
    stations: Vec<Station>,
    station_capacity_hint: usize,
}

impl Highway {
    pub fn new(config: &Config) -> Self {
        Highway {
            stations: Vec::with_capacity(config.highway_capacity_hint),
            station_capacity_hint: config.station_capacity_hint,
        }
    }

    fn index_of(&self, distance: Distance) -> Result<usize, usize> {
        self.stations.binary_search_by_key(&distance, |s| s.distance())
    }

    pub fn station(&self, distance: Distance) -> Option<&Station> {
        self.index_of(distance).ok().map(|i| &self.stations[i])
    }

    pub fn add_station(
        &mut self,
        distance: Distance,
        initial_fuels: Vec<Fuel>,
    ) -> Result<(), StoreError> {
        match self.index_of(distance) {
            Ok(_) => Err(StoreError::DuplicateDistance(distance)),
            Err(insert_at) => {
                let mut cars = Vec::with_capacity(self.station_capacity_hint.max(initial_fuels.len()));
                cars.extend(initial_fuels);
                self.stations.insert(insert_at, Station::new(distance, cars));
                Ok(())
            }
        }
    }

    pub fn remove_station(&mut self, distance: Distance) -> Result<(), StoreError> {
        match self.index_of(distance) {
            Ok(index) => {
                self.stations.remove(index);
                Ok(())
            }
            Err(_) => Err(StoreError::StationAbsent(distance)),
        }
    }

    pub fn add_car(&mut self, distance: Distance, fuel: Fuel) -> Result<(), StoreError> {
        let index = self
            .index_of(distance)
            .map_err(|_| StoreError::StationAbsent(distance))?;
        self.stations[index].add_car(fuel);
        Ok(())
    }

    pub fn remove_car(&mut self, distance: Distance, fuel: Fuel) -> Result<(), StoreError> {
        let index = self
            .index_of(distance)
            .map_err(|_| StoreError::StationAbsent(distance))?;
        if self.stations[index].remove_car(fuel) {
            Ok(())
        } else {
            Err(StoreError::NoSuchCar { distance, fuel })
        }
    }

    /// Returns ascending parallel arrays `(distances, max_fuels)` over every
    /// station with `a <= distance <= b`. Both endpoints must themselves be
    /// stations, or the whole range is rejected.
    pub fn extract_range(
        &self,
        a: Distance,
        b: Distance,
    ) -> Result<(Vec<Distance>, Vec<Fuel>), StoreError> {
        let start = self.index_of(a).map_err(|_| StoreError::RangeEndpointMissing)?;
        let end = self.index_of(b).map_err(|_| StoreError::RangeEndpointMissing)?;

        let slice = &self.stations[start..=end];
        let distances = slice.iter().map(Station::distance).collect();
        let max_fuels = slice.iter().map(Station::max_fuel).collect();
        Ok((distances, max_fuels))
    }
}
