use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use super::booking::{ContactInfo, Passenger};
use super::transport::{TravelClass, TravelMode};
use crate::pricing::PriceBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Step {
    Details,
    TravelInfo,
    Payment,
    Completed,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::Details => 1,
            Step::TravelInfo => 2,
            Step::Payment => 3,
            Step::Completed => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelInfo {
    pub travel_date: chrono::NaiveDate,
    pub travel_class: TravelClass,
    #[serde(default)]
    pub seats: Vec<u32>,
}

/// The mutable part of a draft, stored as one JSON column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftPayload {
    pub contact: Option<ContactInfo>,
    #[serde(default)]
    pub passengers: Vec<Passenger>,
    pub travel: Option<TravelInfo>,
    pub price: Option<PriceBreakdown>,
    pub booking_reference: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BookingDraft {
    pub id: String,
    pub mode: TravelMode,
    pub service_id: String,
    pub step: Step,
    pub payload: Json<DraftPayload>,
    /// Bumped on every save. A save against an older version is rejected.
    pub version: i64,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct StartDraft {
    pub mode: TravelMode,
    pub service_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailsForm {
    pub contact: ContactInfo,
    pub passengers: Vec<Passenger>,
}
