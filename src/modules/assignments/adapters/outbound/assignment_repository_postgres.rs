// PostgreSQL implementation of the AssignmentRepository port.
//
// The table is created on connect when it does not exist yet. Reminder times
// stay in their comma separated form.

use crate::modules::assignments::adapters::outbound::assignment_repository::{
    AssignmentRepository, StoreError,
};
use crate::modules::assignments::core::assignment::{Assignment, AssignmentId};
use crate::shared::core::primitives::now_millis;
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const MIGRATION: &str = r#"
CREATE TABLE IF NOT EXISTS assignments (
    id            BIGSERIAL PRIMARY KEY,
    name          TEXT    NOT NULL,
    author        TEXT    NOT NULL,
    description   TEXT    NOT NULL DEFAULT '',
    due_date      BIGINT  NOT NULL DEFAULT 0,
    tag_id        INTEGER NOT NULL DEFAULT 0,
    reminder_time TEXT    NOT NULL DEFAULT ''
)
"#;

const COLUMNS: &str = "id, name, author, description, due_date, tag_id, reminder_time";

#[derive(sqlx::FromRow)]
struct AssignmentRow {
    id: i64,
    name: String,
    author: String,
    description: String,
    due_date: i64,
    tag_id: i32,
    reminder_time: String,
}

impl From<AssignmentRow> for Assignment {
    fn from(row: AssignmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            author: row.author,
            description: row.description,
            due_date: row.due_date,
            tag_id: row.tag_id,
            reminder_time: row.reminder_time,
        }
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

pub struct PostgresAssignmentRepository {
    pool: PgPool,
}

impl PostgresAssignmentRepository {
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(backend)?;
        let repository = Self { pool };
        repository.migrate().await?;
        Ok(repository)
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(MIGRATION)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        tracing::info!("assignments table is ready");
        Ok(())
    }
}

#[async_trait]
impl AssignmentRepository for PostgresAssignmentRepository {
    async fn create(&self, assignment: &Assignment) -> Result<Assignment, StoreError> {
        let row: AssignmentRow = sqlx::query_as(&format!(
            "INSERT INTO assignments (name, author, description, due_date, tag_id, reminder_time) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        ))
        .bind(&assignment.name)
        .bind(&assignment.author)
        .bind(&assignment.description)
        .bind(assignment.due_date)
        .bind(assignment.tag_id)
        .bind(&assignment.reminder_time)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;
        Ok(row.into())
    }

    async fn get_all(&self, from_present: bool) -> Result<Vec<Assignment>, StoreError> {
        let rows: Vec<AssignmentRow> = if from_present {
            sqlx::query_as(&format!(
                "SELECT {COLUMNS} FROM assignments WHERE due_date >= $1 ORDER BY id"
            ))
            .bind(now_millis())
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM assignments ORDER BY id"))
                .fetch_all(&self.pool)
                .await
        }
        .map_err(backend)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: AssignmentId) -> Result<Assignment, StoreError> {
        let row: Option<AssignmentRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM assignments WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(backend)?;
        row.map(Into::into).ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, assignment: &Assignment) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE assignments SET name = $2, author = $3, description = $4, due_date = $5, \
             tag_id = $6, reminder_time = $7 WHERE id = $1",
        )
        .bind(assignment.id)
        .bind(&assignment.name)
        .bind(&assignment.author)
        .bind(&assignment.description)
        .bind(assignment.due_date)
        .bind(assignment.tag_id)
        .bind(&assignment.reminder_time)
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(assignment.id));
        }
        Ok(())
    }

    async fn delete(&self, id: AssignmentId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM assignments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
