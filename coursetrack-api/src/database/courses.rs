use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};
use shared_types::{Course, CourseStatus, CreateCourseRequest, UpdateCourseRequest};

use crate::database::{
    enum_column, notes, now_millis, string_list_column, AsyncDbConnection, DbError,
    PartialUpdate,
};

const COURSE_COLUMNS: &str = "id, number, name, category, subcategory, sub_subcategory,
    priority, importance, status, duration, skills, created_at, updated_at";

fn map_row_to_course(row: &Row) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        number: row.get(1)?,
        name: row.get(2)?,
        category: row.get(3)?,
        subcategory: row.get(4)?,
        sub_subcategory: row.get(5)?,
        priority: enum_column(row, 6)?,
        importance: enum_column(row, 7)?,
        status: enum_column(row, 8)?,
        duration: row.get(9)?,
        skills: string_list_column(row, 10)?,
        notes: Vec::new(),
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}

/// Loads a course together with its notes
pub(crate) fn fetch_course(conn: &Connection, id: i64) -> Result<Course, DbError> {
    let mut course = conn
        .query_row(
            &format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = ?"),
            [id],
            map_row_to_course,
        )
        .optional()?
        .ok_or(DbError::NotFound("Course"))?;

    course.notes = notes::fetch_notes(conn, id)?;
    Ok(course)
}

pub(crate) fn ensure_course(conn: &Connection, id: i64) -> Result<(), DbError> {
    conn.query_row("SELECT 1 FROM courses WHERE id = ?", [id], |_| Ok(()))
        .optional()?
        .ok_or(DbError::NotFound("Course"))
}

pub(crate) fn touch_course(conn: &Connection, id: i64, now: i64) -> Result<(), DbError> {
    conn.execute(
        "UPDATE courses SET updated_at = ? WHERE id = ?",
        params![now, id],
    )?;
    Ok(())
}

pub async fn list_courses(
    conn: AsyncDbConnection,
    category: Option<String>,
    subcategory: Option<String>,
    status: Option<CourseStatus>,
) -> Result<Vec<Course>, DbError> {
    let conn = conn.lock().await?;

    let mut query = format!("SELECT {COURSE_COLUMNS} FROM courses WHERE 1=1");
    let mut params: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(category) = category {
        query.push_str(" AND category = ?");
        params.push(Box::new(category));
    }
    if let Some(subcategory) = subcategory {
        query.push_str(" AND subcategory = ?");
        params.push(Box::new(subcategory));
    }
    if let Some(status) = status {
        query.push_str(" AND status = ?");
        params.push(Box::new(status.as_str()));
    }
    query.push_str(" ORDER BY number, id");

    let params_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();

    let mut stmt = conn.prepare(&query)?;
    let mut courses = stmt
        .query_map(params_refs.as_slice(), map_row_to_course)?
        .collect::<Result<Vec<_>, _>>()?;

    for course in courses.iter_mut() {
        course.notes = notes::fetch_notes(&conn, course.id)?;
    }

    Ok(courses)
}

pub async fn get_course(conn: AsyncDbConnection, id: i64) -> Result<Course, DbError> {
    let conn = conn.lock().await?;
    fetch_course(&conn, id)
}

/// Inserts one course row. A missing number is resolved inside the same
/// statement, so concurrent creates never share one.
fn insert_course_row(
    conn: &Connection,
    request: &CreateCourseRequest,
    now: i64,
) -> Result<i64, DbError> {
    let id = conn.query_row(
        "INSERT INTO courses
         (number, name, category, subcategory, sub_subcategory, priority, importance,
          status, duration, skills, created_at, updated_at)
         VALUES (
            COALESCE(?, (SELECT COALESCE(MAX(number), 0) + 1 FROM courses)),
            ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?
         )
         RETURNING id",
        params![
            request.number,
            request.name.trim(),
            request.category,
            request.subcategory,
            request.sub_subcategory,
            request.priority.as_str(),
            request.importance.as_str(),
            request.status.as_str(),
            request.duration,
            serde_json::to_string(&request.skills)?,
            now,
            now,
        ],
        |row| row.get(0),
    )?;

    Ok(id)
}

pub async fn insert_course(
    conn: AsyncDbConnection,
    request: &CreateCourseRequest,
) -> Result<Course, DbError> {
    let conn = conn.lock().await?;

    let id = insert_course_row(&conn, request, now_millis())?;

    fetch_course(&conn, id)
}

pub async fn update_course(
    conn: AsyncDbConnection,
    id: i64,
    request: UpdateCourseRequest,
) -> Result<Course, DbError> {
    let conn = conn.lock().await?;

    let skills = request
        .skills
        .map(|skills| serde_json::to_string(&skills))
        .transpose()?;

    let mut update = PartialUpdate::new("courses", now_millis());
    update
        .set("number", request.number)
        .set("name", request.name.map(|name| name.trim().to_string()))
        .set_nullable("category", request.category)
        .set_nullable("subcategory", request.subcategory)
        .set_nullable("sub_subcategory", request.sub_subcategory)
        .set("priority", request.priority.map(|p| p.as_str()))
        .set("importance", request.importance.map(|p| p.as_str()))
        .set("status", request.status.map(|s| s.as_str()))
        .set("duration", request.duration)
        .set("skills", skills);

    if update.execute(&conn, "id = ?", &[id])? == 0 {
        return Err(DbError::NotFound("Course"));
    }

    fetch_course(&conn, id)
}

/// Deletes a course; its notes go with it
pub async fn delete_course(conn: AsyncDbConnection, id: i64) -> Result<(), DbError> {
    let conn = conn.lock().await?;

    let rows_affected = conn.execute("DELETE FROM courses WHERE id = ?", [id])?;

    if rows_affected == 0 {
        return Err(DbError::NotFound("Course"));
    }

    Ok(())
}
