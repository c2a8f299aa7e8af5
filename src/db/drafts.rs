use sqlx::SqliteExecutor;

use crate::models::draft::BookingDraft;

pub async fn insert_draft<'e, E>(executor: E, draft: &BookingDraft) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO booking_drafts (id, mode, service_id, step, payload, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&draft.id)
    .bind(draft.mode)
    .bind(&draft.service_id)
    .bind(draft.step)
    .bind(&draft.payload)
    .bind(draft.created_at)
    .bind(draft.updated_at)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn load_draft<'e, E>(executor: E, id: &str) -> Result<Option<BookingDraft>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, BookingDraft>("SELECT * FROM booking_drafts WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Writes the draft back only if nobody saved it since it was loaded.
/// Returns false on a version mismatch; on success `draft.version` is bumped.
pub async fn save_draft<'e, E>(executor: E, draft: &mut BookingDraft) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        UPDATE booking_drafts SET step = ?, payload = ?, updated_at = ?, version = version + 1
        WHERE id = ? AND version = ?
        "#,
    )
    .bind(draft.step)
    .bind(&draft.payload)
    .bind(draft.updated_at)
    .bind(&draft.id)
    .bind(draft.version)
    .execute(executor)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(false);
    }
    draft.version += 1;
    Ok(true)
}
