//! Mock bus, train and flight inventory loaded from seed data.

use serde::Deserialize;

use crate::models::transport::{
    BusService, Fare, FlightService, TrainService, TravelClass, TravelMode,
};

const TRANSPORT_JSON: &str = include_str!("../data/transport.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Transport {
    buses: Vec<BusService>,
    trains: Vec<TrainService>,
    flights: Vec<FlightService>,
}

fn same_city(filter: Option<&str>, city: &str) -> bool {
    filter.map_or(true, |f| f.trim().eq_ignore_ascii_case(city))
}

impl Transport {
    pub fn load() -> Result<Self, serde_json::Error> {
        serde_json::from_str(TRANSPORT_JSON)
    }

    pub fn search_buses(&self, from: Option<&str>, to: Option<&str>) -> Vec<&BusService> {
        self.buses
            .iter()
            .filter(|s| same_city(from, &s.from) && same_city(to, &s.to))
            .collect()
    }

    pub fn search_trains(&self, from: Option<&str>, to: Option<&str>) -> Vec<&TrainService> {
        self.trains
            .iter()
            .filter(|s| same_city(from, &s.from) && same_city(to, &s.to))
            .collect()
    }

    pub fn search_flights(&self, from: Option<&str>, to: Option<&str>) -> Vec<&FlightService> {
        self.flights
            .iter()
            .filter(|s| same_city(from, &s.from) && same_city(to, &s.to))
            .collect()
    }

    pub fn flight(&self, id: &str) -> Option<&FlightService> {
        self.flights.iter().find(|f| f.id == id)
    }

    pub fn fare(&self, mode: TravelMode, service_id: &str) -> Option<Fare> {
        match mode {
            TravelMode::Bus => self.buses.iter().find(|b| b.id == service_id).map(|b| Fare {
                mode,
                base: b.fare,
                classes: vec![TravelClass::Standard],
                total_seats: Some(b.total_seats),
            }),
            TravelMode::Train => self.trains.iter().find(|t| t.id == service_id).map(|t| Fare {
                mode,
                base: t.base_fare,
                classes: t.classes.clone(),
                total_seats: None,
            }),
            TravelMode::Flight => self.flight(service_id).map(|f| Fare {
                mode,
                base: f.base_price,
                classes: vec![TravelClass::Economy, TravelClass::Business, TravelClass::First],
                total_seats: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_inventory_loads() {
        let transport = Transport::load().unwrap();
        assert!(!transport.search_buses(None, None).is_empty());
        assert!(!transport.search_trains(None, None).is_empty());
        assert!(!transport.search_flights(None, None).is_empty());
    }

    #[test]
    fn route_filter_is_case_insensitive() {
        let transport = Transport::load().unwrap();
        let buses = transport.search_buses(Some("ranchi"), Some("JAMSHEDPUR"));
        assert_eq!(buses.len(), 2);
        assert!(transport.search_flights(Some("Ranchi"), Some("Atlantis")).is_empty());
    }

    #[test]
    fn fare_lookup_respects_mode() {
        let transport = Transport::load().unwrap();
        let bus = transport.fare(TravelMode::Bus, "BUS-RNC-JSR-01").unwrap();
        assert_eq!(bus.total_seats, Some(40));
        assert_eq!(bus.base, 350.0);

        let train = transport.fare(TravelMode::Train, "TRN-12019").unwrap();
        assert_eq!(train.classes, vec![TravelClass::ChairCar]);

        assert!(transport.fare(TravelMode::Flight, "BUS-RNC-JSR-01").is_none());
    }
}
