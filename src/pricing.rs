use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::transport::{Fare, TravelClass, TravelMode};

/// Train bookings only.
pub const CONVENIENCE_FEE_RATE: f64 = 0.02;
/// Train bookings only.
pub const GST_RATE: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_fare: f64,
    pub passengers: u32,
    pub class_multiplier: f64,
    pub subtotal: f64,
    pub convenience_fee: f64,
    pub gst: f64,
    pub total: f64,
}

fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Prices `passengers` seats of `class` on a service with the given fare.
pub fn quote(fare: &Fare, class: TravelClass, passengers: u32) -> Result<PriceBreakdown, ApiError> {
    if passengers == 0 {
        return Err(ApiError::validation("passengers must be at least 1"));
    }
    if class.mode() != fare.mode {
        return Err(ApiError::validation(format!(
            "class {class:?} is not available for {} bookings",
            fare.mode.as_str()
        )));
    }
    if !fare.classes.contains(&class) {
        return Err(ApiError::validation(format!(
            "class {class:?} is not offered on this service"
        )));
    }

    let multiplier = class.multiplier();
    let subtotal = round2(fare.base * f64::from(passengers) * multiplier);
    let (convenience_fee, gst) = match fare.mode {
        TravelMode::Train => (
            round2(subtotal * CONVENIENCE_FEE_RATE),
            round2(subtotal * GST_RATE),
        ),
        TravelMode::Bus | TravelMode::Flight => (0.0, 0.0),
    };

    Ok(PriceBreakdown {
        base_fare: fare.base,
        passengers,
        class_multiplier: multiplier,
        subtotal,
        convenience_fee,
        gst,
        total: round2(subtotal + convenience_fee + gst),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(base: f64) -> Fare {
        Fare {
            mode: TravelMode::Flight,
            base,
            classes: vec![TravelClass::Economy, TravelClass::Business, TravelClass::First],
            total_seats: None,
        }
    }

    #[test]
    fn flight_classes_scale_the_base_price() {
        let fare = flight(5000.0);
        for (class, multiplier) in [
            (TravelClass::Economy, 1.0),
            (TravelClass::Business, 2.5),
            (TravelClass::First, 4.0),
        ] {
            let price = quote(&fare, class, 2).unwrap();
            assert_eq!(price.total, 5000.0 * 2.0 * multiplier);
            assert_eq!(price.gst, 0.0);
        }
    }

    #[test]
    fn train_adds_convenience_fee_and_gst() {
        let fare = Fare {
            mode: TravelMode::Train,
            base: 500.0,
            classes: vec![TravelClass::Sleeper, TravelClass::ThirdAc],
            total_seats: None,
        };
        let price = quote(&fare, TravelClass::ThirdAc, 3).unwrap();
        assert_eq!(price.subtotal, 2700.0);
        assert_eq!(price.convenience_fee, 54.0);
        assert_eq!(price.gst, 135.0);
        assert_eq!(price.total, 2889.0);
    }

    #[test]
    fn bus_is_fare_times_passengers() {
        let fare = Fare {
            mode: TravelMode::Bus,
            base: 350.0,
            classes: vec![TravelClass::Standard],
            total_seats: Some(40),
        };
        assert_eq!(quote(&fare, TravelClass::Standard, 4).unwrap().total, 1400.0);
    }

    #[test]
    fn rejects_foreign_or_unoffered_class() {
        assert!(quote(&flight(100.0), TravelClass::Sleeper, 1).is_err());

        let fare = Fare {
            mode: TravelMode::Train,
            base: 100.0,
            classes: vec![TravelClass::ChairCar],
            total_seats: None,
        };
        assert!(quote(&fare, TravelClass::FirstAc, 1).is_err());
        assert!(quote(&fare, TravelClass::ChairCar, 0).is_err());
    }

    #[test]
    fn money_is_rounded_to_paise() {
        let fare = Fare {
            mode: TravelMode::Train,
            base: 333.33,
            classes: vec![TravelClass::ChairCar],
            total_seats: None,
        };
        let price = quote(&fare, TravelClass::ChairCar, 1).unwrap();
        assert_eq!(price.subtotal, 400.0);
        assert_eq!(price.total, 428.0);
    }
}
