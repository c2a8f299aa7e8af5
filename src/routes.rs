use actix_web::web;

use crate::error::ApiError;
use crate::handlers;

/// Mounts every endpoint under `/api`. Shared by the server and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::validation(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::validation(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .service(
                web::scope("/hotels")
                    .route("", web::get().to(handlers::hotels::get_hotels))
                    .route("", web::post().to(handlers::hotels::create_hotel))
                    .route("/{id}", web::get().to(handlers::hotels::get_hotel_by_id))
                    .route("/{id}", web::put().to(handlers::hotels::update_hotel))
                    .route("/{id}", web::delete().to(handlers::hotels::delete_hotel))
                    .route("/{id}/rooms", web::post().to(handlers::hotels::add_room)),
            )
            .service(
                web::scope("/places")
                    .route("", web::get().to(handlers::places::list_places))
                    .route("/{id}", web::get().to(handlers::places::get_place)),
            )
            .route("/search", web::get().to(handlers::places::search))
            .route(
                "/emergency-contacts",
                web::get().to(handlers::places::emergency_contacts),
            )
            .route("/buses", web::get().to(handlers::transport::get_buses))
            .route("/trains", web::get().to(handlers::transport::get_trains))
            .route("/flights", web::get().to(handlers::transport::get_flights))
            .route("/quote", web::get().to(handlers::transport::get_quote))
            .service(
                web::scope("/drafts")
                    .route("", web::post().to(handlers::drafts::start_draft))
                    .route("/{id}", web::get().to(handlers::drafts::get_draft))
                    .route("/{id}/details", web::put().to(handlers::drafts::submit_details))
                    .route("/{id}/travel", web::put().to(handlers::drafts::submit_travel))
                    .route("/{id}/back", web::post().to(handlers::drafts::go_back))
                    .route("/{id}/payment", web::post().to(handlers::drafts::pay)),
            )
            .service(
                web::scope("/bookings")
                    .route("", web::get().to(handlers::bookings::list_bookings))
                    .route(
                        "/flights",
                        web::post().to(handlers::bookings::create_flight_booking),
                    )
                    .route("/{reference}", web::get().to(handlers::bookings::get_booking))
                    .route(
                        "/{reference}",
                        web::delete().to(handlers::bookings::cancel_booking),
                    ),
            ),
    );
}
