use rusqlite::{params, Connection, OptionalExtension, Row};
use shared_types::{CreateProjectRequest, Project, UpdateProjectRequest};

use crate::database::{
    now_millis, string_list_column, AsyncDbConnection, DbError, PartialUpdate,
};

const PROJECT_COLUMNS: &str = "id, title, description, tech, github_link, live_link,
    category, subcategory, created_at, updated_at";

fn map_row_to_project(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        tech: string_list_column(row, 3)?,
        github_link: row.get(4)?,
        live_link: row.get(5)?,
        category: row.get(6)?,
        subcategory: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

fn fetch_project(conn: &Connection, id: i64) -> Result<Project, DbError> {
    conn.query_row(
        &format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?"),
        [id],
        map_row_to_project,
    )
    .optional()?
    .ok_or(DbError::NotFound("Project"))
}

pub async fn list_projects(conn: AsyncDbConnection) -> Result<Vec<Project>, DbError> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(&format!(
        "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC, id DESC"
    ))?;

    let projects = stmt
        .query_map([], map_row_to_project)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(projects)
}

pub async fn get_project(conn: AsyncDbConnection, id: i64) -> Result<Project, DbError> {
    let conn = conn.lock().await?;
    fetch_project(&conn, id)
}

pub async fn insert_project(
    conn: AsyncDbConnection,
    request: &CreateProjectRequest,
) -> Result<Project, DbError> {
    let conn = conn.lock().await?;
    let now = now_millis();

    let id: i64 = conn.query_row(
        "INSERT INTO projects
         (title, description, tech, github_link, live_link, category, subcategory,
          created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
        params![
            request.title.trim(),
            request.description,
            serde_json::to_string(&request.tech)?,
            request.github_link,
            request.live_link,
            request.category,
            request.subcategory,
            now,
            now,
        ],
        |row| row.get(0),
    )?;

    fetch_project(&conn, id)
}

pub async fn update_project(
    conn: AsyncDbConnection,
    id: i64,
    request: UpdateProjectRequest,
) -> Result<Project, DbError> {
    let conn = conn.lock().await?;

    let tech = request
        .tech
        .map(|tech| serde_json::to_string(&tech))
        .transpose()?;

    let mut update = PartialUpdate::new("projects", now_millis());
    update
        .set("title", request.title.map(|title| title.trim().to_string()))
        .set_nullable("description", request.description)
        .set("tech", tech)
        .set_nullable("github_link", request.github_link)
        .set_nullable("live_link", request.live_link)
        .set_nullable("category", request.category)
        .set_nullable("subcategory", request.subcategory);

    if update.execute(&conn, "id = ?", &[id])? == 0 {
        return Err(DbError::NotFound("Project"));
    }

    fetch_project(&conn, id)
}

pub async fn delete_project(conn: AsyncDbConnection, id: i64) -> Result<(), DbError> {
    let conn = conn.lock().await?;

    let rows_affected = conn.execute("DELETE FROM projects WHERE id = ?", [id])?;

    if rows_affected == 0 {
        return Err(DbError::NotFound("Project"));
    }

    Ok(())
}
