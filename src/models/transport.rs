use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TravelMode {
    Bus,
    Train,
    Flight,
}

impl TravelMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Bus => "bus",
            TravelMode::Train => "train",
            TravelMode::Flight => "flight",
        }
    }
}

/// Fare class. Each class belongs to exactly one travel mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum TravelClass {
    Standard,
    Sleeper,
    ChairCar,
    ThirdAc,
    SecondAc,
    FirstAc,
    Economy,
    Business,
    First,
}

impl TravelClass {
    pub fn mode(self) -> TravelMode {
        match self {
            TravelClass::Standard => TravelMode::Bus,
            TravelClass::Sleeper
            | TravelClass::ChairCar
            | TravelClass::ThirdAc
            | TravelClass::SecondAc
            | TravelClass::FirstAc => TravelMode::Train,
            TravelClass::Economy | TravelClass::Business | TravelClass::First => TravelMode::Flight,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            TravelClass::Standard => 1.0,
            TravelClass::Sleeper => 1.0,
            TravelClass::ChairCar => 1.2,
            TravelClass::ThirdAc => 1.8,
            TravelClass::SecondAc => 2.6,
            TravelClass::FirstAc => 4.0,
            TravelClass::Economy => 1.0,
            TravelClass::Business => 2.5,
            TravelClass::First => 4.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusService {
    pub id: String,
    pub operator: String,
    pub from: String,
    pub to: String,
    pub departure: String,
    pub arrival: String,
    pub bus_type: String,
    pub fare: f64,
    pub total_seats: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainService {
    pub id: String,
    pub number: String,
    pub name: String,
    pub from: String,
    pub to: String,
    pub departure: String,
    pub arrival: String,
    pub base_fare: f64,
    pub classes: Vec<TravelClass>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightService {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub from: String,
    pub to: String,
    pub departure: String,
    pub arrival: String,
    pub base_price: f64,
}

/// What pricing and seat checks need to know about a bookable service.
#[derive(Debug, Clone, PartialEq)]
pub struct Fare {
    pub mode: TravelMode,
    pub base: f64,
    pub classes: Vec<TravelClass>,
    pub total_seats: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    pub mode: TravelMode,
    pub service_id: String,
    pub class: TravelClass,
    pub passengers: u32,
}
