use actix_web::{web, HttpResponse};

use crate::catalog::{Catalog, DEFAULT_SEARCH_LIMIT};
use crate::error::ApiError;
use crate::maps;
use crate::models::place::{PlaceDetails, PlaceFilter, SearchParams};
use crate::response::ApiResponse;

pub async fn list_places(
    catalog: web::Data<Catalog>,
    params: web::Query<PlaceFilter>,
) -> Result<HttpResponse, ApiError> {
    let places = match params.category {
        Some(category) => catalog.by_category(category),
        None => catalog.all().iter().collect(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(places)))
}

pub async fn get_place(
    catalog: web::Data<Catalog>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let place = catalog.get(&path).ok_or(ApiError::NotFound("Place"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PlaceDetails {
        place,
        map_embed_url: maps::embed_url(place.latitude, place.longitude, maps::DEFAULT_ZOOM),
        directions_url: maps::directions_url(place.latitude, place.longitude),
    })))
}

pub async fn search(
    catalog: web::Data<Catalog>,
    params: web::Query<SearchParams>,
) -> Result<HttpResponse, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let results = catalog.search(&params.q, params.category, limit);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(results)))
}

pub async fn emergency_contacts(catalog: web::Data<Catalog>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(catalog.emergency_contacts())))
}
