//! Submission database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbError, DbResult};
use crate::models::{DiagnosisResult, Feedback, Submission, Submitter, MAX_AGE};

/// Submissions joined with their (optional) feedback row.
const SELECT_SUBMISSIONS: &str = r#"
    SELECT s.id, s.name, s.age, s.gender, s.location,
           s.symptoms_selected, s.symptoms_text, s.diagnosis, s.created_at,
           f.id, f.is_accurate, f.comments, f.created_at, f.updated_at
    FROM submissions s
    LEFT JOIN feedback f ON f.submission_id = s.id
"#;

impl Database {
    /// Insert a new submission.
    pub fn insert_submission(&self, submission: &Submission) -> DbResult<()> {
        if let Some(age) = submission.submitter.age {
            if age > MAX_AGE {
                return Err(DbError::Constraint(format!("Age out of range: {}", age)));
            }
        }

        let symptoms_json = serde_json::to_string(&submission.symptoms_selected)?;
        let diagnosis_json = serde_json::to_string(&submission.diagnosis)?;

        self.conn.execute(
            r#"
            INSERT INTO submissions (
                id, name, age, gender, location,
                symptoms_selected, symptoms_text, diagnosis, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                submission.id,
                submission.submitter.name,
                submission.submitter.age,
                submission.submitter.gender,
                submission.submitter.location,
                symptoms_json,
                submission.symptoms_text,
                diagnosis_json,
                submission.created_at,
            ],
        )?;
        Ok(())
    }

    /// Get a submission by ID, with its feedback if any.
    pub fn get_submission(&self, id: &str) -> DbResult<Option<Submission>> {
        self.conn
            .query_row(
                &format!("{} WHERE s.id = ?1", SELECT_SUBMISSIONS),
                [id],
                read_row,
            )
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// List all submissions, newest first.
    pub fn list_submissions(&self) -> DbResult<Vec<Submission>> {
        let mut stmt = self.conn.prepare(&format!(
            "{} ORDER BY s.created_at DESC, s.rowid DESC",
            SELECT_SUBMISSIONS
        ))?;

        let rows = stmt.query_map([], read_row)?;

        let mut submissions = Vec::new();
        for row in rows {
            submissions.push(row?.try_into()?);
        }
        Ok(submissions)
    }

    /// Count stored submissions.
    pub fn count_submissions(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM submissions", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Delete a submission (and its feedback).
    pub fn delete_submission(&self, id: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM submissions WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}

/// Intermediate row struct for database mapping.
struct SubmissionRow {
    id: String,
    name: Option<String>,
    age: Option<u8>,
    gender: Option<String>,
    location: Option<String>,
    symptoms_selected: String,
    symptoms_text: Option<String>,
    diagnosis: String,
    created_at: String,
    feedback_id: Option<String>,
    feedback_is_accurate: Option<bool>,
    feedback_comments: Option<String>,
    feedback_created_at: Option<String>,
    feedback_updated_at: Option<String>,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<SubmissionRow> {
    Ok(SubmissionRow {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        gender: row.get(3)?,
        location: row.get(4)?,
        symptoms_selected: row.get(5)?,
        symptoms_text: row.get(6)?,
        diagnosis: row.get(7)?,
        created_at: row.get(8)?,
        feedback_id: row.get(9)?,
        feedback_is_accurate: row.get(10)?,
        feedback_comments: row.get(11)?,
        feedback_created_at: row.get(12)?,
        feedback_updated_at: row.get(13)?,
    })
}

impl TryFrom<SubmissionRow> for Submission {
    type Error = DbError;

    fn try_from(row: SubmissionRow) -> Result<Self, Self::Error> {
        let symptoms_selected: Vec<String> = serde_json::from_str(&row.symptoms_selected)?;
        let diagnosis: DiagnosisResult = serde_json::from_str(&row.diagnosis)?;

        let feedback = match (
            row.feedback_id,
            row.feedback_is_accurate,
            row.feedback_created_at,
            row.feedback_updated_at,
        ) {
            (Some(id), Some(is_accurate), Some(created_at), Some(updated_at)) => Some(Feedback {
                id,
                submission_id: row.id.clone(),
                is_accurate,
                comments: row.feedback_comments,
                created_at,
                updated_at,
            }),
            _ => None,
        };

        Ok(Submission {
            id: row.id,
            submitter: Submitter {
                name: row.name,
                age: row.age,
                gender: row.gender,
                location: row.location,
            },
            symptoms_selected,
            symptoms_text: row.symptoms_text,
            diagnosis,
            created_at: row.created_at,
            feedback,
        })
    }
}
