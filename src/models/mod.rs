pub mod booking;
pub mod draft;
pub mod hotel;
pub mod place;
pub mod transport;
