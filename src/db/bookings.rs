use sqlx::types::Json;
use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::booking::{Booking, NewBooking};

pub async fn insert_booking<'e, E>(
    executor: E,
    reference: &str,
    booking: &NewBooking,
) -> Result<Booking, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Booking>(
        r#"
        INSERT INTO bookings (reference, mode, service_id, travel_date, travel_class,
                              contact_name, contact_email, contact_phone, passengers, seats,
                              total_price, payment_method, status)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 'confirmed')
        RETURNING *
        "#,
    )
    .bind(reference)
    .bind(booking.mode)
    .bind(&booking.service_id)
    .bind(booking.travel_date)
    .bind(booking.travel_class)
    .bind(booking.contact.name.trim())
    .bind(booking.contact.email.trim())
    .bind(booking.contact.phone.trim())
    .bind(Json(&booking.passengers))
    .bind(Json(&booking.seats))
    .bind(booking.total_price)
    .bind(booking.payment_method)
    .fetch_one(executor)
    .await
}

pub async fn find_booking<'e, E>(executor: E, reference: &str) -> Result<Option<Booking>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE reference = ?")
        .bind(reference)
        .fetch_optional(executor)
        .await
}

/// Newest first, optionally only the bookings made with `email`.
pub async fn list_bookings(pool: &SqlitePool, email: Option<&str>) -> Result<Vec<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>(
        r#"
        SELECT * FROM bookings
        WHERE (? IS NULL OR LOWER(contact_email) = LOWER(?))
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(email)
    .bind(email)
    .fetch_all(pool)
    .await
}

/// Seats held by confirmed bookings on a service for one travel date.
pub async fn taken_seats<'e, E>(
    executor: E,
    service_id: &str,
    travel_date: chrono::NaiveDate,
) -> Result<Vec<u32>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let rows: Vec<Json<Vec<u32>>> = sqlx::query_scalar(
        r#"
        SELECT seats FROM bookings
        WHERE service_id = ?
        AND travel_date = ?
        AND status = 'confirmed'
        "#,
    )
    .bind(service_id)
    .bind(travel_date)
    .fetch_all(executor)
    .await?;

    Ok(rows.into_iter().flat_map(|Json(seats)| seats).collect())
}

pub async fn cancel_booking<'e, E>(executor: E, reference: &str) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "UPDATE bookings SET status = 'cancelled' WHERE reference = ? AND status = 'confirmed'",
    )
    .bind(reference)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}
