use rusqlite::{params, Connection, OptionalExtension, Row};
use shared_types::{CreateNoteRequest, Note, NoteWithCourse, UpdateNoteRequest};

use crate::database::courses::{ensure_course, touch_course};
use crate::database::{now_millis, AsyncDbConnection, DbError, PartialUpdate};

const NOTE_COLUMNS: &str =
    "id, question, answer, main_category, main_goal, sub_goal, created_at, updated_at";

fn map_row_to_note(row: &Row) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        main_category: row.get(3)?,
        main_goal: row.get(4)?,
        sub_goal: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

/// Notes of one course in the order they were added
pub(crate) fn fetch_notes(conn: &Connection, course_id: i64) -> Result<Vec<Note>, DbError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {NOTE_COLUMNS} FROM course_notes WHERE course_id = ? ORDER BY id"
    ))?;

    let notes = stmt
        .query_map([course_id], map_row_to_note)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(notes)
}

fn fetch_note(conn: &Connection, course_id: i64, note_id: i64) -> Result<Note, DbError> {
    conn.query_row(
        &format!("SELECT {NOTE_COLUMNS} FROM course_notes WHERE id = ? AND course_id = ?"),
        [note_id, course_id],
        map_row_to_note,
    )
    .optional()?
    .ok_or(DbError::NotFound("Note"))
}

pub async fn list_notes(conn: AsyncDbConnection, course_id: i64) -> Result<Vec<Note>, DbError> {
    let conn = conn.lock().await?;
    ensure_course(&conn, course_id)?;
    fetch_notes(&conn, course_id)
}

/// Every note across all courses, grouped by course number
pub async fn list_all_notes(conn: AsyncDbConnection) -> Result<Vec<NoteWithCourse>, DbError> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(
        "SELECT n.id, n.question, n.answer, n.main_category, n.main_goal, n.sub_goal,
                n.created_at, n.updated_at, c.id, c.name
         FROM course_notes n
         JOIN courses c ON c.id = n.course_id
         ORDER BY c.number, c.id, n.id",
    )?;

    let notes = stmt
        .query_map([], |row| {
            Ok(NoteWithCourse {
                note: map_row_to_note(row)?,
                course_id: row.get(8)?,
                course_name: row.get(9)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(notes)
}

pub async fn get_note(
    conn: AsyncDbConnection,
    course_id: i64,
    note_id: i64,
) -> Result<Note, DbError> {
    let conn = conn.lock().await?;
    ensure_course(&conn, course_id)?;
    fetch_note(&conn, course_id, note_id)
}

pub async fn insert_note(
    conn: AsyncDbConnection,
    course_id: i64,
    request: &CreateNoteRequest,
) -> Result<Note, DbError> {
    let conn = conn.lock().await?;
    let now = now_millis();

    let tx = conn.unchecked_transaction()?;
    ensure_course(&tx, course_id)?;

    let id: i64 = tx.query_row(
        "INSERT INTO course_notes
         (course_id, question, answer, main_category, main_goal, sub_goal, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
        params![
            course_id,
            request.question,
            request.answer,
            request.main_category,
            request.main_goal,
            request.sub_goal,
            now,
            now,
        ],
        |row| row.get(0),
    )?;
    touch_course(&tx, course_id, now)?;
    tx.commit()?;

    fetch_note(&conn, course_id, id)
}

pub async fn update_note(
    conn: AsyncDbConnection,
    course_id: i64,
    note_id: i64,
    request: UpdateNoteRequest,
) -> Result<Note, DbError> {
    let conn = conn.lock().await?;
    let now = now_millis();

    let tx = conn.unchecked_transaction()?;
    ensure_course(&tx, course_id)?;

    let mut update = PartialUpdate::new("course_notes", now);
    update
        .set("question", request.question)
        .set("answer", request.answer)
        .set_nullable("main_category", request.main_category)
        .set_nullable("main_goal", request.main_goal)
        .set_nullable("sub_goal", request.sub_goal);

    if update.execute(&tx, "id = ? AND course_id = ?", &[note_id, course_id])? == 0 {
        return Err(DbError::NotFound("Note"));
    }
    touch_course(&tx, course_id, now)?;
    tx.commit()?;

    fetch_note(&conn, course_id, note_id)
}

pub async fn delete_note(
    conn: AsyncDbConnection,
    course_id: i64,
    note_id: i64,
) -> Result<(), DbError> {
    let conn = conn.lock().await?;

    let tx = conn.unchecked_transaction()?;
    ensure_course(&tx, course_id)?;

    let rows_affected = tx.execute(
        "DELETE FROM course_notes WHERE id = ? AND course_id = ?",
        [note_id, course_id],
    )?;

    if rows_affected == 0 {
        return Err(DbError::NotFound("Note"));
    }
    touch_course(&tx, course_id, now_millis())?;
    tx.commit()?;

    Ok(())
}
