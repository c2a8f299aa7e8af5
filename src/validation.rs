//! Field checks for the booking forms. Each check fails with a
//! `Validation` error naming the first offending field.

use crate::error::ApiError;
use crate::models::booking::{ContactInfo, Passenger, Payment};

pub const MAX_PASSENGERS: usize = 6;
const MIN_PHONE_LEN: usize = 10;

pub fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    phone.chars().count() >= MIN_PHONE_LEN
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-'))
}

pub fn validate_contact(contact: &ContactInfo) -> Result<(), ApiError> {
    require("contact.name", &contact.name)?;
    require("contact.email", &contact.email)?;
    require("contact.phone", &contact.phone)?;

    if !is_valid_email(contact.email.trim()) {
        return Err(ApiError::validation("contact.email is not a valid email address"));
    }
    if !is_valid_phone(&contact.phone) {
        return Err(ApiError::validation(
            "contact.phone must have at least 10 digits",
        ));
    }
    Ok(())
}

pub fn validate_passengers(passengers: &[Passenger]) -> Result<(), ApiError> {
    if passengers.is_empty() {
        return Err(ApiError::validation("at least one passenger is required"));
    }
    if passengers.len() > MAX_PASSENGERS {
        return Err(ApiError::validation(format!(
            "at most {MAX_PASSENGERS} passengers per booking"
        )));
    }

    for (i, passenger) in passengers.iter().enumerate() {
        require(&format!("passengers[{i}].name"), &passenger.name)?;
        if !(1..=120).contains(&passenger.age) {
            return Err(ApiError::validation(format!(
                "passengers[{i}].age must be between 1 and 120"
            )));
        }
    }
    Ok(())
}

pub fn validate_payment(payment: &Payment) -> Result<(), ApiError> {
    match payment {
        Payment::Upi { upi_id } => {
            require("payment.upi_id", upi_id)?;
            if !upi_id.contains('@') {
                return Err(ApiError::validation("payment.upi_id must contain '@'"));
            }
        }
        Payment::Card {
            holder_name,
            card_number,
            cvv,
        } => {
            require("payment.holder_name", holder_name)?;
            let digits: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
            if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(ApiError::validation("payment.card_number must have 16 digits"));
            }
            if cvv.len() != 3 || !cvv.chars().all(|c| c.is_ascii_digit()) {
                return Err(ApiError::validation("payment.cvv must have 3 digits"));
            }
        }
        Payment::NetBanking { bank } => require("payment.bank", bank)?,
    }
    Ok(())
}
