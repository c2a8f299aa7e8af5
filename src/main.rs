use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use std::io;

use jharkhand_tourism::catalog::Catalog;
use jharkhand_tourism::config::Config;
use jharkhand_tourism::transport::Transport;
use jharkhand_tourism::{db, routes};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(io::Error::other)?;

    log::info!("Loading catalog and transport inventory...");
    let catalog = Catalog::load().map_err(io::Error::other)?;
    let transport = Transport::load().map_err(io::Error::other)?;
    log::info!("Loaded {} places", catalog.all().len());

    log::info!("Connecting to database...");
    let pool = db::connect(&config.database_url, config.max_connections)
        .await
        .map_err(io::Error::other)?;

    log::info!("Running migrations...");
    db::migrate(&pool).await.map_err(io::Error::other)?;

    if config.seed_demo_hotels {
        let seeded = db::hotels::seed_demo_hotels(&pool)
            .await
            .map_err(io::Error::other)?;
        if seeded > 0 {
            log::info!("Seeded {seeded} demo hotels");
        }
    }

    let (host, port) = config.bind_addr();
    log::info!("Starting server at http://{host}:{port}");

    let pool_data = web::Data::new(pool);
    let catalog_data = web::Data::new(catalog);
    let transport_data = web::Data::new(transport);

    HttpServer::new(move || {
        App::new()
            .app_data(pool_data.clone())
            .app_data(catalog_data.clone())
            .app_data(transport_data.clone())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
