//! SQLite schema definition.

/// Written to `PRAGMA user_version` on open.
pub const SCHEMA_VERSION: i32 = 1;

/// Tables and indexes, idempotent.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Submissions (one per diagnosis request)
-- ============================================================================

CREATE TABLE IF NOT EXISTS submissions (
    id TEXT PRIMARY KEY,
    name TEXT,
    age INTEGER CHECK (age IS NULL OR (age >= 0 AND age <= 150)),
    gender TEXT,
    location TEXT,
    symptoms_selected TEXT NOT NULL DEFAULT '[]',  -- JSON array of symptom codes
    symptoms_text TEXT,
    diagnosis TEXT NOT NULL,                       -- JSON DiagnosisResult
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_submissions_created_at ON submissions(created_at);

-- ============================================================================
-- Feedback (at most one per submission)
-- ============================================================================

CREATE TABLE IF NOT EXISTS feedback (
    id TEXT PRIMARY KEY,
    submission_id TEXT NOT NULL UNIQUE REFERENCES submissions(id) ON DELETE CASCADE,
    is_accurate INTEGER NOT NULL CHECK (is_accurate IN (0, 1)),
    comments TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        conn.execute(
            "INSERT INTO submissions (id, diagnosis) VALUES ('s1', '{}')",
            [],
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);

        // Applying twice is harmless
        assert!(conn.execute_batch(SCHEMA).is_ok());
    }

    #[test]
    fn test_age_constraint() {
        let conn = setup();

        let result = conn.execute(
            "INSERT INTO submissions (id, age, diagnosis) VALUES ('s2', 151, '{}')",
            [],
        );
        assert!(result.is_err());

        let result = conn.execute(
            "INSERT INTO submissions (id, age, diagnosis) VALUES ('s3', 150, '{}')",
            [],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_one_feedback_per_submission() {
        let conn = setup();

        let insert = |id: &str| {
            conn.execute(
                "INSERT INTO feedback (id, submission_id, is_accurate, created_at, updated_at)
                 VALUES (?1, 's1', 1, 'now', 'now')",
                [id],
            )
        };
        assert!(insert("f1").is_ok());
        assert!(insert("f2").is_err());
    }

    #[test]
    fn test_feedback_requires_submission() {
        let conn = setup();
        let result = conn.execute(
            "INSERT INTO feedback (id, submission_id, is_accurate, created_at, updated_at)
             VALUES ('f1', 'missing', 0, 'now', 'now')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_feedback_cascades() {
        let conn = setup();
        conn.execute(
            "INSERT INTO feedback (id, submission_id, is_accurate, created_at, updated_at)
             VALUES ('f1', 's1', 1, 'now', 'now')",
            [],
        )
        .unwrap();

        conn.execute("DELETE FROM submissions WHERE id = 's1'", []).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM feedback", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
