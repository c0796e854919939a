//! Feedback database operations.

use rusqlite::{params, Connection, OptionalExtension};

use super::{Database, DbError, DbResult};
use crate::models::{timestamp_now, Feedback};

impl Database {
    /// Record feedback for a submission.
    ///
    /// Creates the feedback row on first call and overwrites `is_accurate`
    /// and `comments` on later calls, so a submission never has more than
    /// one feedback record. Fails with `NotFound` for an unknown submission.
    pub fn upsert_feedback(
        &mut self,
        submission_id: &str,
        is_accurate: bool,
        comments: Option<&str>,
    ) -> DbResult<Feedback> {
        let tx = self.conn.transaction()?;

        let exists = tx
            .query_row(
                "SELECT 1 FROM submissions WHERE id = ?",
                [submission_id],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if !exists {
            return Err(DbError::NotFound(format!("Submission {}", submission_id)));
        }

        let now = timestamp_now();
        tx.execute(
            r#"
            INSERT INTO feedback (id, submission_id, is_accurate, comments, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            ON CONFLICT(submission_id) DO UPDATE SET
                is_accurate = excluded.is_accurate,
                comments = excluded.comments,
                updated_at = excluded.updated_at
            "#,
            params![
                uuid::Uuid::new_v4().to_string(),
                submission_id,
                is_accurate,
                comments,
                now,
            ],
        )?;

        let feedback = query_feedback(&tx, submission_id)?
            .ok_or_else(|| DbError::NotFound(format!("Feedback for {}", submission_id)))?;

        tx.commit()?;
        Ok(feedback)
    }

    /// Get the feedback recorded for a submission.
    pub fn get_feedback_for_submission(&self, submission_id: &str) -> DbResult<Option<Feedback>> {
        query_feedback(&self.conn, submission_id)
    }
}

fn query_feedback(conn: &Connection, submission_id: &str) -> DbResult<Option<Feedback>> {
    conn.query_row(
        r#"
        SELECT id, submission_id, is_accurate, comments, created_at, updated_at
        FROM feedback
        WHERE submission_id = ?
        "#,
        [submission_id],
        |row| {
            Ok(Feedback {
                id: row.get(0)?,
                submission_id: row.get(1)?,
                is_accurate: row.get(2)?,
                comments: row.get(3)?,
                created_at: row.get(4)?,
                updated_at: row.get(5)?,
            })
        },
    )
    .optional()
    .map_err(Into::into)
}
