use actix_web::{web, HttpResponse};
use sqlx::{SqliteConnection, SqlitePool};

use crate::db;
use crate::error::ApiError;
use crate::models::booking::{new_reference, Payment};
use crate::models::draft::{BookingDraft, DetailsForm, StartDraft, TravelInfo};
use crate::models::transport::TravelMode;
use crate::response::ApiResponse;
use crate::transport::Transport;

async fn load(conn: &mut SqliteConnection, id: &str) -> Result<BookingDraft, ApiError> {
    db::drafts::load_draft(conn, id)
        .await?
        .ok_or(ApiError::NotFound("Booking draft"))
}

async fn save(conn: &mut SqliteConnection, draft: &mut BookingDraft) -> Result<(), ApiError> {
    if !db::drafts::save_draft(conn, draft).await? {
        return Err(ApiError::Conflict(
            "Booking draft was changed by another request".to_string(),
        ));
    }
    Ok(())
}

fn today() -> chrono::NaiveDate {
    chrono::Utc::now().naive_utc().date()
}

pub async fn start_draft(
    pool: web::Data<SqlitePool>,
    transport: web::Data<Transport>,
    body: web::Json<StartDraft>,
) -> Result<HttpResponse, ApiError> {
    if transport.fare(body.mode, &body.service_id).is_none() {
        return Err(ApiError::NotFound("Service"));
    }

    let draft = BookingDraft::new(body.mode, body.service_id.clone());
    db::drafts::insert_draft(pool.get_ref(), &draft).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(draft)))
}

pub async fn get_draft(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let draft = db::drafts::load_draft(pool.get_ref(), &path)
        .await?
        .ok_or(ApiError::NotFound("Booking draft"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(draft)))
}

pub async fn submit_details(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    body: web::Json<DetailsForm>,
) -> Result<HttpResponse, ApiError> {
    let DetailsForm {
        contact,
        passengers,
    } = body.into_inner();

    let mut tx = db::begin_immediate(pool.get_ref()).await?;
    let mut draft = load(&mut tx, &path).await?;
    draft.submit_details(contact, passengers)?;
    save(&mut tx, &mut draft).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(draft)))
}

pub async fn submit_travel(
    pool: web::Data<SqlitePool>,
    transport: web::Data<Transport>,
    path: web::Path<String>,
    body: web::Json<TravelInfo>,
) -> Result<HttpResponse, ApiError> {
    let travel = body.into_inner();

    let mut tx = db::begin_immediate(pool.get_ref()).await?;
    let mut draft = load(&mut tx, &path).await?;

    let fare = transport
        .fare(draft.mode, &draft.service_id)
        .ok_or(ApiError::NotFound("Service"))?;
    let taken = match draft.mode {
        TravelMode::Bus => {
            db::bookings::taken_seats(&mut *tx, &draft.service_id, travel.travel_date).await?
        }
        TravelMode::Train | TravelMode::Flight => Vec::new(),
    };

    draft.submit_travel(&fare, travel, today(), &taken)?;
    save(&mut tx, &mut draft).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(draft)))
}

pub async fn go_back(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let mut tx = db::begin_immediate(pool.get_ref()).await?;
    let mut draft = load(&mut tx, &path).await?;
    draft.back()?;
    save(&mut tx, &mut draft).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(draft)))
}

/// Confirms the draft. Seat availability is checked again inside the
/// transaction that inserts the booking.
pub async fn pay(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    body: web::Json<Payment>,
) -> Result<HttpResponse, ApiError> {
    let mut tx = db::begin_immediate(pool.get_ref()).await?;

    let mut draft = load(&mut tx, &path).await?;
    let new_booking = draft.checkout(&body)?;

    if !new_booking.seats.is_empty() {
        let taken =
            db::bookings::taken_seats(&mut *tx, &new_booking.service_id, new_booking.travel_date)
                .await?;
        if let Some(seat) = new_booking.seats.iter().find(|s| taken.contains(s)) {
            return Err(ApiError::Conflict(format!("Seat {seat} is already booked")));
        }
    }

    let booking =
        db::bookings::insert_booking(&mut *tx, &new_reference(), &new_booking).await?;
    draft.complete(booking.reference.clone());
    save(&mut tx, &mut draft).await?;

    tx.commit().await?;

    log::info!(
        "Confirmed {} booking {} for {} ({} passenger(s), {:.2})",
        booking.mode.as_str(),
        booking.reference,
        booking.service_id,
        booking.passengers.len(),
        booking.total_price
    );

    Ok(HttpResponse::Created().json(ApiResponse::with_message(
        booking,
        "Booking successful",
    )))
}
