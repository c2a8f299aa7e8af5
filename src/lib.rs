pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod maps;
pub mod models;
pub mod pricing;
pub mod response;
pub mod routes;
pub mod transport;
pub mod validation;
pub mod wizard;
