use rusqlite::{params, OptionalExtension, Row};
use shared_types::{Certificate, CreateCertificateRequest};

use crate::database::{now_millis, AsyncDbConnection, DbError};

fn map_row_to_certificate(row: &Row) -> rusqlite::Result<Certificate> {
    Ok(Certificate {
        id: row.get(0)?,
        image_url: row.get(1)?,
        course_name: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub async fn list_certificates(conn: AsyncDbConnection) -> Result<Vec<Certificate>, DbError> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(
        "SELECT id, image_url, course_name, created_at FROM certificates ORDER BY created_at DESC, id DESC",
    )?;

    let certificates = stmt
        .query_map([], map_row_to_certificate)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(certificates)
}

pub async fn get_certificate(conn: AsyncDbConnection, id: i64) -> Result<Certificate, DbError> {
    let conn = conn.lock().await?;

    conn.query_row(
        "SELECT id, image_url, course_name, created_at FROM certificates WHERE id = ?",
        [id],
        map_row_to_certificate,
    )
    .optional()?
    .ok_or(DbError::NotFound("Certificate"))
}

pub async fn insert_certificate(
    conn: AsyncDbConnection,
    request: &CreateCertificateRequest,
) -> Result<Certificate, DbError> {
    let conn = conn.lock().await?;
    let now = now_millis();

    let certificate = conn.query_row(
        "INSERT INTO certificates (image_url, course_name, created_at)
         VALUES (?, ?, ?)
         RETURNING id, image_url, course_name, created_at",
        params![request.image_url.trim(), request.course_name.trim(), now],
        map_row_to_certificate,
    )?;

    Ok(certificate)
}

pub async fn delete_certificate(conn: AsyncDbConnection, id: i64) -> Result<(), DbError> {
    let conn = conn.lock().await?;

    let rows_affected = conn.execute("DELETE FROM certificates WHERE id = ?", [id])?;

    if rows_affected == 0 {
        return Err(DbError::NotFound("Certificate"));
    }

    Ok(())
}
