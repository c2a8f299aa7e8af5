use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::transport::{QuoteQuery, RouteQuery};
use crate::pricing;
use crate::response::ApiResponse;
use crate::transport::Transport;

pub async fn get_buses(
    transport: web::Data<Transport>,
    params: web::Query<RouteQuery>,
) -> Result<HttpResponse, ApiError> {
    let buses = transport.search_buses(params.from.as_deref(), params.to.as_deref());
    Ok(HttpResponse::Ok().json(ApiResponse::ok(buses)))
}

pub async fn get_trains(
    transport: web::Data<Transport>,
    params: web::Query<RouteQuery>,
) -> Result<HttpResponse, ApiError> {
    let trains = transport.search_trains(params.from.as_deref(), params.to.as_deref());
    Ok(HttpResponse::Ok().json(ApiResponse::ok(trains)))
}

pub async fn get_flights(
    transport: web::Data<Transport>,
    params: web::Query<RouteQuery>,
) -> Result<HttpResponse, ApiError> {
    let flights = transport.search_flights(params.from.as_deref(), params.to.as_deref());
    Ok(HttpResponse::Ok().json(ApiResponse::ok(flights)))
}

pub async fn get_quote(
    transport: web::Data<Transport>,
    params: web::Query<QuoteQuery>,
) -> Result<HttpResponse, ApiError> {
    let fare = transport
        .fare(params.mode, &params.service_id)
        .ok_or(ApiError::NotFound("Service"))?;
    let price = pricing::quote(&fare, params.class, params.passengers)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(price)))
}
