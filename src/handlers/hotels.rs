use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::db;
use crate::error::ApiError;
use crate::models::hotel::{CreateHotel, CreateRoom, Hotel, HotelDetails, HotelSearch, UpdateHotel};
use crate::response::ApiResponse;

pub async fn get_hotels(
    pool: web::Data<SqlitePool>,
    params: web::Query<HotelSearch>,
) -> Result<HttpResponse, ApiError> {
    let hotels: Vec<Hotel> = db::hotels::list_hotels(pool.get_ref(), &params)
        .await?
        .into_iter()
        .map(Hotel::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(hotels)))
}

pub async fn get_hotel_by_id(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let hotel = db::hotels::find_active_hotel(pool.get_ref(), id)
        .await?
        .ok_or(ApiError::NotFound("Hotel"))?;
    let rooms = db::hotels::active_rooms(pool.get_ref(), id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(HotelDetails {
        hotel: hotel.into(),
        rooms,
    })))
}

pub async fn create_hotel(
    pool: web::Data<SqlitePool>,
    body: web::Json<CreateHotel>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let row = db::hotels::insert_hotel(pool.get_ref(), &body).await?;
    log::info!("Created hotel {} ({})", row.id, row.name);

    Ok(HttpResponse::Created().json(ApiResponse::ok(Hotel::from(row))))
}

pub async fn update_hotel(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<UpdateHotel>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    body.validate()?;

    let row = db::hotels::update_hotel(pool.get_ref(), id, &body)
        .await?
        .ok_or(ApiError::NotFound("Hotel"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        Hotel::from(row),
        "Hotel updated successfully",
    )))
}

pub async fn delete_hotel(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if !db::hotels::soft_delete_hotel(pool.get_ref(), id).await? {
        return Err(ApiError::NotFound("Hotel"));
    }
    log::info!("Deactivated hotel {id}");

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        serde_json::json!({ "id": id }),
        "Hotel deleted successfully",
    )))
}

pub async fn add_room(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<CreateRoom>,
) -> Result<HttpResponse, ApiError> {
    let hotel_id = path.into_inner();
    body.validate()?;

    let mut tx = pool.begin().await?;
    if db::hotels::find_active_hotel(&mut *tx, hotel_id).await?.is_none() {
        return Err(ApiError::NotFound("Hotel"));
    }
    let room = db::hotels::insert_room(&mut *tx, hotel_id, &body).await?;
    tx.commit().await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(room)))
}
