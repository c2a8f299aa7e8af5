use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use super::transport::{TravelClass, TravelMode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub name: String,
    pub age: u32,
    pub gender: Option<String>,
}

/// Mock payment details. Nothing is charged; the fields only have to look plausible.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Payment {
    Upi {
        upi_id: String,
    },
    Card {
        holder_name: String,
        card_number: String,
        cvv: String,
    },
    NetBanking {
        bank: String,
    },
}

impl Payment {
    pub fn method(&self) -> &'static str {
        match self {
            Payment::Upi { .. } => "upi",
            Payment::Card { .. } => "card",
            Payment::NetBanking { .. } => "net_banking",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub reference: String,
    pub mode: TravelMode,
    pub service_id: String,
    pub travel_date: chrono::NaiveDate,
    pub travel_class: TravelClass,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub passengers: Json<Vec<Passenger>>,
    pub seats: Json<Vec<u32>>,
    pub total_price: f64,
    pub payment_method: String,
    pub status: BookingStatus,
    pub created_at: chrono::NaiveDateTime,
}

/// Everything needed to insert a confirmed booking.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub mode: TravelMode,
    pub service_id: String,
    pub travel_date: chrono::NaiveDate,
    pub travel_class: TravelClass,
    pub contact: ContactInfo,
    pub passengers: Vec<Passenger>,
    pub seats: Vec<u32>,
    pub total_price: f64,
    pub payment_method: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct CreateFlightBooking {
    pub flight_id: String,
    pub travel_date: chrono::NaiveDate,
    pub travel_class: TravelClass,
    pub contact: ContactInfo,
    pub passengers: Vec<Passenger>,
    pub payment: Payment,
}

#[derive(Debug, Deserialize)]
pub struct BookingFilter {
    pub email: Option<String>,
}

pub fn new_reference() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("JH{}", id[..8].to_uppercase())
}
