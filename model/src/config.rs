use serde::Deserialize;

/// Optional static configuration, loaded from a JSON file if one is given.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial capacity hint for the station sequence.
    pub highway_capacity_hint: usize,
    /// Initial capacity hint for a newly created station's car list.
    pub station_capacity_hint: usize,
    /// Maximum accepted input line length, in bytes; exceeding it is fatal.
    pub max_line_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            highway_capacity_hint: 256,
            station_capacity_hint: 32,
            max_line_length: 8096,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_max_line_length_is_8096() {
        assert_eq!(Config::default().max_line_length, 8096);
    }

    #[test]
    fn missing_fields_fall_back_to_their_default() {
        // ARRANGE: only override the line-length threshold
        let json = r#"{"max_line_length": 100}"#;

        // ACT
        let config: Config = serde_json::from_str(json).unwrap();

        // ASSERT
        assert_eq!(config.max_line_length, 100);
        assert_eq!(config.highway_capacity_hint, 256);
        assert_eq!(config.station_capacity_hint, 32);
    }

    #[test]
    fn empty_object_yields_the_full_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.highway_capacity_hint, Config::default().highway_capacity_hint);
        assert_eq!(config.station_capacity_hint, Config::default().station_capacity_hint);
        assert_eq!(config.max_line_length, Config::default().max_line_length);
    }
}
