use sqlx::types::Json;
use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::hotel::{CreateHotel, CreateRoom, HotelRow, HotelSearch, Room, UpdateHotel};

pub async fn list_hotels(
    pool: &SqlitePool,
    filter: &HotelSearch,
) -> Result<Vec<HotelRow>, sqlx::Error> {
    let city = filter
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase);

    sqlx::query_as::<_, HotelRow>(
        r#"
        SELECT * FROM hotels
        WHERE is_active = 1
        AND (? IS NULL OR instr(LOWER(city), ?) > 0)
        AND (? IS NULL OR rating >= ?)
        ORDER BY rating DESC, name ASC
        "#,
    )
    .bind(&city)
    .bind(&city)
    .bind(filter.min_rating)
    .bind(filter.min_rating)
    .fetch_all(pool)
    .await
}

pub async fn find_active_hotel<'e, E>(executor: E, id: i64) -> Result<Option<HotelRow>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, HotelRow>("SELECT * FROM hotels WHERE id = ? AND is_active = 1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn active_rooms(pool: &SqlitePool, hotel_id: i64) -> Result<Vec<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        "SELECT * FROM rooms WHERE hotel_id = ? AND is_active = 1 ORDER BY price_per_night ASC",
    )
    .bind(hotel_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_hotel<'e, E>(executor: E, hotel: &CreateHotel) -> Result<HotelRow, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, HotelRow>(
        r#"
        INSERT INTO hotels (name, description, address, city, state, pincode, phone, email,
                            rating, images, amenities, latitude, longitude)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&hotel.name)
    .bind(&hotel.description)
    .bind(&hotel.address)
    .bind(&hotel.city)
    .bind(hotel.state.as_deref().unwrap_or("Jharkhand"))
    .bind(&hotel.pincode)
    .bind(&hotel.phone)
    .bind(hotel.email.as_deref().unwrap_or(""))
    .bind(hotel.rating)
    .bind(Json(&hotel.images))
    .bind(Json(&hotel.amenities))
    .bind(hotel.latitude)
    .bind(hotel.longitude)
    .fetch_one(executor)
    .await
}

/// Returns `None` when the hotel does not exist or has been deleted.
pub async fn update_hotel(
    pool: &SqlitePool,
    id: i64,
    changes: &UpdateHotel,
) -> Result<Option<HotelRow>, sqlx::Error> {
    sqlx::query_as::<_, HotelRow>(
        r#"
        UPDATE hotels SET
            name = COALESCE(?, name),
            description = COALESCE(?, description),
            address = COALESCE(?, address),
            city = COALESCE(?, city),
            state = COALESCE(?, state),
            pincode = COALESCE(?, pincode),
            phone = COALESCE(?, phone),
            email = COALESCE(?, email),
            rating = COALESCE(?, rating),
            images = COALESCE(?, images),
            amenities = COALESCE(?, amenities),
            latitude = COALESCE(?, latitude),
            longitude = COALESCE(?, longitude),
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ? AND is_active = 1
        RETURNING *
        "#,
    )
    .bind(&changes.name)
    .bind(&changes.description)
    .bind(&changes.address)
    .bind(&changes.city)
    .bind(&changes.state)
    .bind(&changes.pincode)
    .bind(&changes.phone)
    .bind(&changes.email)
    .bind(changes.rating)
    .bind(changes.images.as_ref().map(Json))
    .bind(changes.amenities.as_ref().map(Json))
    .bind(changes.latitude)
    .bind(changes.longitude)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Flips `is_active` off. Returns false when there was no active hotel to delete.
pub async fn soft_delete_hotel(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE hotels SET is_active = 0, updated_at = CURRENT_TIMESTAMP WHERE id = ? AND is_active = 1",
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn insert_room<'e, E>(executor: E, hotel_id: i64, room: &CreateRoom) -> Result<Room, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Room>(
        r#"
        INSERT INTO rooms (hotel_id, room_type, description, price_per_night, capacity, total_rooms)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(hotel_id)
    .bind(&room.room_type)
    .bind(&room.description)
    .bind(room.price_per_night)
    .bind(room.capacity)
    .bind(room.total_rooms)
    .fetch_one(executor)
    .await
}

fn demo_hotels() -> Vec<(CreateHotel, Vec<CreateRoom>)> {
    let hotel = |name: &str, city: &str, pincode: &str, rating: f64, lat: f64, lng: f64, amenities: &[&str]| {
        CreateHotel {
            name: name.to_string(),
            description: format!("{name} in {city}, Jharkhand."),
            address: format!("{city}, Jharkhand"),
            city: city.to_string(),
            state: None,
            pincode: pincode.to_string(),
            phone: String::new(),
            email: None,
            rating,
            images: Vec::new(),
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
            latitude: Some(lat),
            longitude: Some(lng),
        }
    };
    let room = |room_type: &str, price: f64, capacity: i64, total: i64| CreateRoom {
        room_type: room_type.to_string(),
        description: String::new(),
        price_per_night: price,
        capacity,
        total_rooms: total,
    };

    vec![
        (
            hotel("Radisson Blu Ranchi", "Ranchi", "834001", 4.5, 23.3629, 85.3346, &["wifi", "pool", "restaurant", "parking"]),
            vec![room("Deluxe", 6500.0, 2, 40), room("Suite", 12000.0, 4, 8)],
        ),
        (
            hotel("Prabhat Vihar Netarhat", "Netarhat", "835218", 3.8, 23.4833, 84.2667, &["restaurant", "sunrise view"]),
            vec![room("Standard", 1800.0, 2, 20), room("Cottage", 3200.0, 4, 6)],
        ),
        (
            hotel("The Sonnet Jamshedpur", "Jamshedpur", "831001", 4.2, 22.8046, 86.2029, &["wifi", "gym", "restaurant"]),
            vec![room("Executive", 5200.0, 2, 30)],
        ),
        (
            hotel("Baidyanath Residency", "Deoghar", "814112", 3.9, 24.4850, 86.6948, &["wifi", "temple shuttle"]),
            vec![room("Standard", 1500.0, 3, 25), room("Family", 2600.0, 5, 10)],
        ),
        (
            hotel("Van Vihar Betla", "Betla", "822111", 3.6, 23.8870, 84.1900, &["safari desk", "restaurant"]),
            vec![room("Forest Lodge", 2200.0, 2, 12)],
        ),
    ]
}

/// Inserts the demo hotels and their rooms when the table is empty.
/// Returns the number of hotels inserted.
pub async fn seed_demo_hotels(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hotels")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    let mut inserted = 0;
    for (hotel, rooms) in demo_hotels() {
        let row = insert_hotel(&mut *tx, &hotel).await?;
        for room in &rooms {
            insert_room(&mut *tx, row.id, room).await?;
        }
        inserted += 1;
    }
    tx.commit().await?;

    Ok(inserted)
}
