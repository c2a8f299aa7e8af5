use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::maps;

/// Row as stored. `images` and `amenities` hold JSON-encoded string arrays.
#[derive(Debug, Clone, FromRow)]
pub struct HotelRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub phone: String,
    pub email: String,
    pub rating: f64,
    pub images: String,
    pub amenities: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_active: bool,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub phone: String,
    pub email: String,
    pub rating: f64,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub map_embed_url: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        let map_embed_url = match (row.latitude, row.longitude) {
            (Some(lat), Some(lng)) => maps::embed_url(lat, lng, maps::DEFAULT_ZOOM),
            _ => None,
        };

        Self {
            id: row.id,
            images: decode_list(row.id, "images", &row.images),
            amenities: decode_list(row.id, "amenities", &row.amenities),
            name: row.name,
            description: row.description,
            address: row.address,
            city: row.city,
            state: row.state,
            pincode: row.pincode,
            phone: row.phone,
            email: row.email,
            rating: row.rating,
            latitude: row.latitude,
            longitude: row.longitude,
            map_embed_url,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn decode_list(hotel_id: i64, column: &str, raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        log::warn!("Hotel {hotel_id} has undecodable {column}: {e}");
        Vec::new()
    })
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: i64,
    pub hotel_id: i64,
    pub room_type: String,
    pub description: String,
    pub price_per_night: f64,
    pub capacity: i64,
    pub total_rooms: i64,
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct HotelDetails {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

#[derive(Debug, Deserialize)]
pub struct HotelSearch {
    pub city: Option<String>,
    pub min_rating: Option<f64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateHotel {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    pub state: Option<String>,
    #[serde(default)]
    #[validate(length(max = 10))]
    pub pincode: String,
    #[serde(default)]
    pub phone: String,
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

/// Partial update: only the fields present in the body change.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateHotel {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    pub state: Option<String>,
    #[validate(length(max = 10))]
    pub pincode: Option<String>,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoom {
    #[validate(length(min = 1, max = 100))]
    pub room_type: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price_per_night: f64,
    #[validate(range(min = 1))]
    pub capacity: i64,
    #[validate(range(min = 1))]
    pub total_rooms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(images: &str) -> HotelRow {
        let now = chrono::Utc::now().naive_utc();
        HotelRow {
            id: 7,
            name: "Radisson Blu".into(),
            description: String::new(),
            address: String::new(),
            city: "Ranchi".into(),
            state: "Jharkhand".into(),
            pincode: "834001".into(),
            phone: String::new(),
            email: String::new(),
            rating: 4.4,
            images: images.into(),
            amenities: r#"["wifi","pool"]"#.into(),
            latitude: Some(23.3441),
            longitude: Some(85.3096),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn json_columns_decode_to_lists() {
        let hotel = Hotel::from(row(r#"["a.jpg","b.jpg"]"#));
        assert_eq!(hotel.images, vec!["a.jpg", "b.jpg"]);
        assert_eq!(hotel.amenities, vec!["wifi", "pool"]);
        assert!(hotel.map_embed_url.is_some());
    }

    #[test]
    fn malformed_json_column_becomes_empty() {
        let hotel = Hotel::from(row("not json"));
        assert!(hotel.images.is_empty());
    }

    #[test]
    fn rating_out_of_range_fails_validation() {
        let update = UpdateHotel {
            rating: Some(7.5),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
