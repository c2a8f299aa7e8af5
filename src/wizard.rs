//! Booking wizard: details, then travel info, then payment.
//!
//! A draft only moves forward when the current step validates. Editing the
//! details again throws away the travel selection and price, since both
//! depend on the passenger count.

use std::collections::HashSet;

use chrono::NaiveDate;
use sqlx::types::Json;

use crate::error::ApiError;
use crate::models::booking::{ContactInfo, NewBooking, Passenger, Payment};
use crate::models::draft::{BookingDraft, DraftPayload, Step, TravelInfo};
use crate::models::transport::{Fare, TravelMode};
use crate::pricing::{self, PriceBreakdown};
use crate::validation;

impl BookingDraft {
    pub fn new(mode: TravelMode, service_id: impl Into<String>) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            mode,
            service_id: service_id.into(),
            step: Step::Details,
            payload: Json(DraftPayload::default()),
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    fn wrong_step(&self, action: &str) -> ApiError {
        ApiError::validation(format!(
            "cannot {action} while the booking is at step {} ({:?})",
            self.step.number(),
            self.step
        ))
    }

    fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().naive_utc();
    }

    pub fn submit_details(
        &mut self,
        contact: ContactInfo,
        passengers: Vec<Passenger>,
    ) -> Result<(), ApiError> {
        if self.step == Step::Completed {
            return Err(self.wrong_step("edit details"));
        }
        validation::validate_contact(&contact)?;
        validation::validate_passengers(&passengers)?;

        let payload = &mut self.payload.0;
        payload.contact = Some(contact);
        payload.passengers = passengers;
        payload.travel = None;
        payload.price = None;
        self.step = Step::TravelInfo;
        self.touch();
        Ok(())
    }

    /// `taken_seats` are seats already sold on this service and date.
    pub fn submit_travel(
        &mut self,
        fare: &Fare,
        travel: TravelInfo,
        today: NaiveDate,
        taken_seats: &[u32],
    ) -> Result<(), ApiError> {
        if !matches!(self.step, Step::TravelInfo | Step::Payment) {
            return Err(self.wrong_step("choose travel options"));
        }
        if travel.travel_date < today {
            return Err(ApiError::validation("travel_date cannot be in the past"));
        }

        let passengers = self.payload.passengers.len();
        let price = pricing::quote(fare, travel.travel_class, passengers as u32)?;

        let travel = match fare.total_seats {
            Some(total_seats) => {
                check_seats(&travel.seats, passengers, total_seats, taken_seats)?;
                travel
            }
            None => TravelInfo {
                seats: Vec::new(),
                ..travel
            },
        };

        let payload = &mut self.payload.0;
        payload.travel = Some(travel);
        payload.price = Some(price);
        self.step = Step::Payment;
        self.touch();
        Ok(())
    }

    pub fn back(&mut self) -> Result<(), ApiError> {
        self.step = match self.step {
            Step::Details => Step::Details,
            Step::TravelInfo => Step::Details,
            Step::Payment => Step::TravelInfo,
            Step::Completed => return Err(self.wrong_step("go back")),
        };
        self.touch();
        Ok(())
    }

    /// Validates the payment and builds the booking to insert. The draft
    /// itself only changes in [`BookingDraft::complete`].
    pub fn checkout(&self, payment: &Payment) -> Result<NewBooking, ApiError> {
        if self.step != Step::Payment {
            return Err(self.wrong_step("pay"));
        }
        validation::validate_payment(payment)?;

        let payload = &self.payload.0;
        let (Some(contact), Some(travel), Some(price)) =
            (&payload.contact, &payload.travel, &payload.price)
        else {
            return Err(ApiError::validation("booking details are incomplete"));
        };

        Ok(NewBooking {
            mode: self.mode,
            service_id: self.service_id.clone(),
            travel_date: travel.travel_date,
            travel_class: travel.travel_class,
            contact: contact.clone(),
            passengers: payload.passengers.clone(),
            seats: travel.seats.clone(),
            total_price: price.total,
            payment_method: payment.method(),
        })
    }

    pub fn complete(&mut self, reference: String) {
        self.payload.0.booking_reference = Some(reference);
        self.step = Step::Completed;
        self.touch();
    }

    pub fn price(&self) -> Option<&PriceBreakdown> {
        self.payload.price.as_ref()
    }
}

pub fn check_seats(
    seats: &[u32],
    passengers: usize,
    total_seats: u32,
    taken_seats: &[u32],
) -> Result<(), ApiError> {
    if seats.len() != passengers {
        return Err(ApiError::validation(format!(
            "select exactly {passengers} seat(s), got {}",
            seats.len()
        )));
    }

    let mut seen = HashSet::new();
    for &seat in seats {
        if seat == 0 || seat > total_seats {
            return Err(ApiError::validation(format!(
                "seat {seat} does not exist (1-{total_seats})"
            )));
        }
        if !seen.insert(seat) {
            return Err(ApiError::validation(format!("seat {seat} selected twice")));
        }
        if taken_seats.contains(&seat) {
            return Err(ApiError::Conflict(format!("Seat {seat} is already booked")));
        }
    }
    Ok(())
}
