pub mod bookings;
pub mod drafts;
pub mod hotels;
pub mod places;
pub mod transport;
