use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::db;
use crate::error::ApiError;
use crate::models::booking::{new_reference, BookingFilter, BookingStatus, CreateFlightBooking};
use crate::models::draft::{BookingDraft, TravelInfo};
use crate::models::transport::TravelMode;
use crate::response::ApiResponse;
use crate::transport::Transport;

/// One-shot flight booking. Runs the same checks as the wizard, without
/// persisting a draft.
pub async fn create_flight_booking(
    pool: web::Data<SqlitePool>,
    transport: web::Data<Transport>,
    body: web::Json<CreateFlightBooking>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();

    let fare = transport
        .fare(TravelMode::Flight, &request.flight_id)
        .ok_or(ApiError::NotFound("Flight"))?;

    let mut draft = BookingDraft::new(TravelMode::Flight, request.flight_id);
    draft.submit_details(request.contact, request.passengers)?;
    draft.submit_travel(
        &fare,
        TravelInfo {
            travel_date: request.travel_date,
            travel_class: request.travel_class,
            seats: Vec::new(),
        },
        chrono::Utc::now().naive_utc().date(),
        &[],
    )?;
    let new_booking = draft.checkout(&request.payment)?;

    let booking = db::bookings::insert_booking(pool.get_ref(), &new_reference(), &new_booking).await?;
    log::info!(
        "Confirmed flight booking {} on {} for {:.2}",
        booking.reference,
        booking.service_id,
        booking.total_price
    );

    Ok(HttpResponse::Created().json(ApiResponse::with_message(
        booking,
        "Booking successful",
    )))
}

pub async fn list_bookings(
    pool: web::Data<SqlitePool>,
    params: web::Query<BookingFilter>,
) -> Result<HttpResponse, ApiError> {
    let email = params.email.as_deref().map(str::trim).filter(|e| !e.is_empty());
    let bookings = db::bookings::list_bookings(pool.get_ref(), email).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(bookings)))
}

pub async fn get_booking(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let booking = db::bookings::find_booking(pool.get_ref(), &path)
        .await?
        .ok_or(ApiError::NotFound("Booking"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(booking)))
}

pub async fn cancel_booking(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let reference = path.into_inner();

    let mut tx = db::begin_immediate(pool.get_ref()).await?;

    let booking = db::bookings::find_booking(&mut *tx, &reference)
        .await?
        .ok_or(ApiError::NotFound("Booking"))?;

    if booking.status == BookingStatus::Cancelled {
        return Err(ApiError::validation("Booking is already cancelled"));
    }

    let today = chrono::Utc::now().naive_utc().date();
    if booking.travel_date <= today {
        return Err(ApiError::validation(
            "Cannot cancel booking on or after the travel date",
        ));
    }

    if !db::bookings::cancel_booking(&mut *tx, &reference).await? {
        return Err(ApiError::validation("Booking is already cancelled"));
    }
    tx.commit().await?;

    log::info!("Cancelled booking {reference}");

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        serde_json::json!({
            "reference": reference,
            "status": BookingStatus::Cancelled,
            "refund_amount": booking.total_price
        }),
        "Booking cancelled successfully",
    )))
}
