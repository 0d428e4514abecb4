//! Job CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, OptionalExtension};

use super::utils::{optional_date_column, status_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result, SchedulerError},
    models::{Job, JobStatus},
};

const INSERT_JOB_SQL: &str = "INSERT INTO jobs (client_id, title, scheduled_for, crew, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_JOB_SQL: &str = "SELECT id, client_id, title, scheduled_for, crew, status, created_at, updated_at FROM jobs WHERE id = ?1";
const UPDATE_JOB_STATUS_SQL: &str = "UPDATE jobs SET status = ?1, updated_at = ?2 WHERE id = ?3";
const CHECK_JOB_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM jobs WHERE id = ?1)";

impl super::Database {
    fn build_job_from_row(row: &rusqlite::Row) -> rusqlite::Result<Job> {
        Ok(Job {
            id: row.get::<_, i64>(0)? as u64,
            client_id: row.get::<_, i64>(1)? as u64,
            title: row.get(2)?,
            scheduled_for: optional_date_column(row, 3)?,
            crew: row.get(4)?,
            status: status_column::<JobStatus>(row, 5)?,
            created_at: timestamp_column(row, 6)?,
            updated_at: timestamp_column(row, 7)?,
        })
    }

    /// Creates a new job for a client.
    pub fn create_job(
        &mut self,
        client_id: u64,
        title: &str,
        scheduled_for: Option<Date>,
        crew: Option<&str>,
    ) -> Result<Job> {
        if !self.client_exists(client_id)? {
            return Err(SchedulerError::ClientNotFound { id: client_id });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_JOB_SQL,
                params![
                    client_id as i64,
                    title,
                    scheduled_for.map(|d| d.to_string()),
                    crew,
                    JobStatus::Scheduled.as_str(),
                    &now_str,
                    &now_str
                ],
            )
            .map_err(|e| SchedulerError::database_error("Failed to insert job", e))?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(Job {
            id,
            client_id,
            title: title.into(),
            scheduled_for,
            crew: crew.map(String::from),
            status: JobStatus::Scheduled,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a job by its ID.
    pub fn get_job(&self, id: u64) -> Result<Option<Job>> {
        self.connection
            .query_row(SELECT_JOB_SQL, params![id as i64], Self::build_job_from_row)
            .optional()
            .map_err(|e| SchedulerError::database_error("Failed to query job", e))
    }

    /// Marks a job completed.
    pub fn complete_job(&mut self, id: u64) -> Result<Job> {
        if self.get_job(id)?.is_none() {
            return Err(SchedulerError::JobNotFound { id });
        }

        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                UPDATE_JOB_STATUS_SQL,
                params![JobStatus::Completed.as_str(), &now, id as i64],
            )
            .map_err(|e| SchedulerError::database_error("Failed to complete job", e))?;

        self.get_job(id)?.ok_or(SchedulerError::JobNotFound { id })
    }

    /// Whether a job row exists for the given ID.
    pub(crate) fn job_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_JOB_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check job existence")
    }
}
