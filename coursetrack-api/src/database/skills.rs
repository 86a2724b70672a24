use rusqlite::{params, Connection, OptionalExtension, Row};
use shared_types::{CreateSkillRequest, Skill, UpdateSkillRequest};

use crate::database::{
    enum_column, is_unique_violation, now_millis, AsyncDbConnection, DbError, PartialUpdate,
};

const DUPLICATE_NAME: &str = "A skill with this name already exists";

fn map_row_to_skill(row: &Row) -> rusqlite::Result<Skill> {
    Ok(Skill {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        level: enum_column(row, 3)?,
        icon: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

fn fetch_skill(conn: &Connection, id: i64) -> Result<Skill, DbError> {
    conn.query_row(
        "SELECT id, name, description, level, icon, created_at, updated_at
         FROM skills WHERE id = ?",
        [id],
        map_row_to_skill,
    )
    .optional()?
    .ok_or(DbError::NotFound("Skill"))
}

fn map_write_error(e: rusqlite::Error) -> DbError {
    if is_unique_violation(&e) {
        DbError::Duplicate(DUPLICATE_NAME)
    } else {
        DbError::from(e)
    }
}

pub async fn list_skills(conn: AsyncDbConnection) -> Result<Vec<Skill>, DbError> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(
        "SELECT id, name, description, level, icon, created_at, updated_at
         FROM skills ORDER BY name COLLATE NOCASE",
    )?;

    let skills = stmt
        .query_map([], map_row_to_skill)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(skills)
}

pub async fn get_skill(conn: AsyncDbConnection, id: i64) -> Result<Skill, DbError> {
    let conn = conn.lock().await?;
    fetch_skill(&conn, id)
}

pub async fn insert_skill(
    conn: AsyncDbConnection,
    request: &CreateSkillRequest,
) -> Result<Skill, DbError> {
    let conn = conn.lock().await?;
    let now = now_millis();

    let id: i64 = conn
        .query_row(
            "INSERT INTO skills (name, description, level, icon, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id",
            params![
                request.name.trim(),
                request.description,
                request.level.as_str(),
                request.icon,
                now,
                now,
            ],
            |row| row.get(0),
        )
        .map_err(map_write_error)?;

    fetch_skill(&conn, id)
}

pub async fn update_skill(
    conn: AsyncDbConnection,
    id: i64,
    request: UpdateSkillRequest,
) -> Result<Skill, DbError> {
    let conn = conn.lock().await?;

    let mut update = PartialUpdate::new("skills", now_millis());
    update
        .set("name", request.name.map(|name| name.trim().to_string()))
        .set_nullable("description", request.description)
        .set("level", request.level.map(|level| level.as_str()))
        .set_nullable("icon", request.icon);

    if update.execute(&conn, "id = ?", &[id]).map_err(map_write_error)? == 0 {
        return Err(DbError::NotFound("Skill"));
    }

    fetch_skill(&conn, id)
}

pub async fn delete_skill(conn: AsyncDbConnection, id: i64) -> Result<(), DbError> {
    let conn = conn.lock().await?;

    let rows_affected = conn.execute("DELETE FROM skills WHERE id = ?", [id])?;

    if rows_affected == 0 {
        return Err(DbError::NotFound("Skill"));
    }

    Ok(())
}
