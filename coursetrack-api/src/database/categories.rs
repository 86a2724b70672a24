use rusqlite::{params, Connection, OptionalExtension};
use shared_types::{
    CreateMainCategoryRequest, CreateMainGoalRequest, CreateSubGoalRequest, MainCategory,
    MainGoal, SubGoal, UpdateMainCategoryRequest, UpdateMainGoalRequest, UpdateSubGoalRequest,
};

use crate::database::{now_millis, AsyncDbConnection, DbError, PartialUpdate};

/// Assembles a category with its goals and their sub goals
pub(crate) fn fetch_category(conn: &Connection, id: i64) -> Result<MainCategory, DbError> {
    let mut category = conn
        .query_row(
            "SELECT id, name, checked, created_at, updated_at FROM main_categories WHERE id = ?",
            [id],
            |row| {
                Ok(MainCategory {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    checked: row.get(2)?,
                    main_goals: Vec::new(),
                    created_at: row.get(3)?,
                    updated_at: row.get(4)?,
                })
            },
        )
        .optional()?
        .ok_or(DbError::NotFound("Main category"))?;

    let mut stmt = conn.prepare(
        "SELECT id, name, checked FROM main_goals WHERE category_id = ? ORDER BY id",
    )?;
    category.main_goals = stmt
        .query_map([id], |row| {
            Ok(MainGoal {
                id: row.get(0)?,
                name: row.get(1)?,
                checked: row.get(2)?,
                sub_goals: Vec::new(),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut stmt = conn.prepare(
        "SELECT s.main_goal_id, s.id, s.name, s.checked
         FROM sub_goals s
         JOIN main_goals g ON g.id = s.main_goal_id
         WHERE g.category_id = ?
         ORDER BY s.id",
    )?;
    let sub_goals = stmt
        .query_map([id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                SubGoal {
                    id: row.get(1)?,
                    name: row.get(2)?,
                    checked: row.get(3)?,
                },
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    for (goal_id, sub_goal) in sub_goals {
        if let Some(goal) = category.main_goals.iter_mut().find(|g| g.id == goal_id) {
            goal.sub_goals.push(sub_goal);
        }
    }

    Ok(category)
}

fn ensure_category(conn: &Connection, id: i64) -> Result<(), DbError> {
    conn.query_row("SELECT 1 FROM main_categories WHERE id = ?", [id], |_| Ok(()))
        .optional()?
        .ok_or(DbError::NotFound("Main category"))
}

fn ensure_goal(conn: &Connection, category_id: i64, goal_id: i64) -> Result<(), DbError> {
    conn.query_row(
        "SELECT 1 FROM main_goals WHERE id = ? AND category_id = ?",
        [goal_id, category_id],
        |_| Ok(()),
    )
    .optional()?
    .ok_or(DbError::NotFound("Main goal"))
}

fn touch_category(conn: &Connection, id: i64, now: i64) -> Result<(), DbError> {
    conn.execute(
        "UPDATE main_categories SET updated_at = ? WHERE id = ?",
        params![now, id],
    )?;
    Ok(())
}

pub async fn list_categories(conn: AsyncDbConnection) -> Result<Vec<MainCategory>, DbError> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare("SELECT id FROM main_categories ORDER BY id")?;
    let ids: Vec<i64> = stmt
        .query_map([], |row| row.get::<_, i64>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    drop(stmt);

    ids.into_iter().map(|id| fetch_category(&conn, id)).collect()
}

pub async fn get_category(conn: AsyncDbConnection, id: i64) -> Result<MainCategory, DbError> {
    let conn = conn.lock().await?;
    fetch_category(&conn, id)
}

pub async fn insert_category(
    conn: AsyncDbConnection,
    request: &CreateMainCategoryRequest,
) -> Result<MainCategory, DbError> {
    let conn = conn.lock().await?;
    let now = now_millis();

    let id: i64 = conn.query_row(
        "INSERT INTO main_categories (name, checked, created_at, updated_at)
         VALUES (?, ?, ?, ?)
         RETURNING id",
        params![request.name.trim(), request.checked, now, now],
        |row| row.get(0),
    )?;

    fetch_category(&conn, id)
}

pub async fn update_category(
    conn: AsyncDbConnection,
    id: i64,
    request: UpdateMainCategoryRequest,
) -> Result<MainCategory, DbError> {
    let conn = conn.lock().await?;

    let mut update = PartialUpdate::new("main_categories", now_millis());
    update
        .set("name", request.name.map(|name| name.trim().to_string()))
        .set("checked", request.checked);

    if update.execute(&conn, "id = ?", &[id])? == 0 {
        return Err(DbError::NotFound("Main category"));
    }

    fetch_category(&conn, id)
}

/// Deletes a category along with every goal and sub goal beneath it
pub async fn delete_category(conn: AsyncDbConnection, id: i64) -> Result<(), DbError> {
    let conn = conn.lock().await?;

    let rows_affected = conn.execute("DELETE FROM main_categories WHERE id = ?", [id])?;

    if rows_affected == 0 {
        return Err(DbError::NotFound("Main category"));
    }

    Ok(())
}

pub async fn insert_goal(
    conn: AsyncDbConnection,
    category_id: i64,
    request: &CreateMainGoalRequest,
) -> Result<MainCategory, DbError> {
    let conn = conn.lock().await?;
    let now = now_millis();

    let tx = conn.unchecked_transaction()?;
    ensure_category(&tx, category_id)?;

    tx.execute(
        "INSERT INTO main_goals (category_id, name, checked, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)",
        params![category_id, request.name.trim(), request.checked, now, now],
    )?;
    touch_category(&tx, category_id, now)?;
    tx.commit()?;

    fetch_category(&conn, category_id)
}

pub async fn update_goal(
    conn: AsyncDbConnection,
    category_id: i64,
    goal_id: i64,
    request: UpdateMainGoalRequest,
) -> Result<MainCategory, DbError> {
    let conn = conn.lock().await?;
    let now = now_millis();

    let tx = conn.unchecked_transaction()?;
    ensure_category(&tx, category_id)?;

    let mut update = PartialUpdate::new("main_goals", now);
    update
        .set("name", request.name.map(|name| name.trim().to_string()))
        .set("checked", request.checked);

    if update.execute(&tx, "id = ? AND category_id = ?", &[goal_id, category_id])? == 0 {
        return Err(DbError::NotFound("Main goal"));
    }
    touch_category(&tx, category_id, now)?;
    tx.commit()?;

    fetch_category(&conn, category_id)
}

pub async fn delete_goal(
    conn: AsyncDbConnection,
    category_id: i64,
    goal_id: i64,
) -> Result<MainCategory, DbError> {
    let conn = conn.lock().await?;

    let tx = conn.unchecked_transaction()?;
    ensure_category(&tx, category_id)?;

    let rows_affected = tx.execute(
        "DELETE FROM main_goals WHERE id = ? AND category_id = ?",
        [goal_id, category_id],
    )?;

    if rows_affected == 0 {
        return Err(DbError::NotFound("Main goal"));
    }
    touch_category(&tx, category_id, now_millis())?;
    tx.commit()?;

    fetch_category(&conn, category_id)
}

pub async fn insert_sub_goal(
    conn: AsyncDbConnection,
    category_id: i64,
    goal_id: i64,
    request: &CreateSubGoalRequest,
) -> Result<MainCategory, DbError> {
    let conn = conn.lock().await?;
    let now = now_millis();

    let tx = conn.unchecked_transaction()?;
    ensure_category(&tx, category_id)?;
    ensure_goal(&tx, category_id, goal_id)?;

    tx.execute(
        "INSERT INTO sub_goals (main_goal_id, name, checked, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)",
        params![goal_id, request.name.trim(), request.checked, now, now],
    )?;
    touch_category(&tx, category_id, now)?;
    tx.commit()?;

    fetch_category(&conn, category_id)
}

pub async fn update_sub_goal(
    conn: AsyncDbConnection,
    category_id: i64,
    goal_id: i64,
    sub_goal_id: i64,
    request: UpdateSubGoalRequest,
) -> Result<MainCategory, DbError> {
    let conn = conn.lock().await?;
    let now = now_millis();

    let tx = conn.unchecked_transaction()?;
    ensure_category(&tx, category_id)?;
    ensure_goal(&tx, category_id, goal_id)?;

    let mut update = PartialUpdate::new("sub_goals", now);
    update
        .set("name", request.name.map(|name| name.trim().to_string()))
        .set("checked", request.checked);

    if update.execute(&tx, "id = ? AND main_goal_id = ?", &[sub_goal_id, goal_id])? == 0 {
        return Err(DbError::NotFound("Sub goal"));
    }
    touch_category(&tx, category_id, now)?;
    tx.commit()?;

    fetch_category(&conn, category_id)
}

pub async fn delete_sub_goal(
    conn: AsyncDbConnection,
    category_id: i64,
    goal_id: i64,
    sub_goal_id: i64,
) -> Result<MainCategory, DbError> {
    let conn = conn.lock().await?;

    let tx = conn.unchecked_transaction()?;
    ensure_category(&tx, category_id)?;
    ensure_goal(&tx, category_id, goal_id)?;

    let rows_affected = tx.execute(
        "DELETE FROM sub_goals WHERE id = ? AND main_goal_id = ?",
        [sub_goal_id, goal_id],
    )?;

    if rows_affected == 0 {
        return Err(DbError::NotFound("Sub goal"));
    }
    touch_category(&tx, category_id, now_millis())?;
    tx.commit()?;

    fetch_category(&conn, category_id)
}
