//! Trip Type
//!
//! Each trip type scopes its own persisted packing list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TripType {
    #[default]
    #[serde(rename = "Through Hiking PCT Trail")]
    ThroughHikingPct,
    #[serde(rename = "Climbing Mt Shasta")]
    ClimbingMtShasta,
    #[serde(rename = "Weekend Camping")]
    WeekendCamping,
    #[serde(rename = "Day Hike")]
    DayHike,
    #[serde(rename = "Winter Mountaineering")]
    WinterMountaineering,
    #[serde(rename = "Beach Vacation")]
    BeachVacation,
}

impl TripType {
    /// All trip types in selector order
    pub const ALL: [TripType; 6] = [
        TripType::ThroughHikingPct,
        TripType::ClimbingMtShasta,
        TripType::WeekendCamping,
        TripType::DayHike,
        TripType::WinterMountaineering,
        TripType::BeachVacation,
    ];

    /// Human readable label, also used in the storage key
    pub fn label(&self) -> &'static str {
        match self {
            TripType::ThroughHikingPct => "Through Hiking PCT Trail",
            TripType::ClimbingMtShasta => "Climbing Mt Shasta",
            TripType::WeekendCamping => "Weekend Camping",
            TripType::DayHike => "Day Hike",
            TripType::WinterMountaineering => "Winter Mountaineering",
            TripType::BeachVacation => "Beach Vacation",
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TripType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TripType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| ValidationError::UnknownTrip(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_labels_parse() {
        assert_eq!("Day Hike".parse::<TripType>(), Ok(TripType::DayHike));
        assert_eq!(
            "Moon Landing".parse::<TripType>(),
            Err(ValidationError::UnknownTrip("Moon Landing".to_string()))
        );
    }

    #[test]
    fn test_trip_serde_matches_label() {
        for trip in TripType::ALL {
            let json = serde_json::to_string(&trip).unwrap();
            assert_eq!(json, format!("\"{}\"", trip.label()));
        }
    }

    #[test]
    fn test_default_trip_is_first() {
        assert_eq!(TripType::default(), TripType::ALL[0]);
    }
}
