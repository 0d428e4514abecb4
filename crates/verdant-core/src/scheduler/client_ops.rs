//! Client and job operations for the Scheduler.

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{Result, SchedulerError},
    models::{Client, Job},
    params::{CreateClient, CreateJob, Id},
};

impl Scheduler {
    /// Creates a new client.
    pub async fn create_client(&self, params: &CreateClient) -> Result<Client> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_client(
                &params.name,
                params.address.as_deref(),
                params.gate_code.as_deref(),
                params.monthly_rate_cents,
                params.notes.as_deref(),
            )
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a client by its ID.
    pub async fn get_client(&self, params: &Id) -> Result<Option<Client>> {
        let db_path = self.db_path.clone();
        let client_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_client(client_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all clients ordered by name.
    pub async fn list_clients(&self) -> Result<Vec<Client>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_clients()
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Creates a new job for a client.
    pub async fn create_job(&self, params: &CreateJob) -> Result<Job> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_job(
                params.client_id,
                &params.title,
                params.scheduled_for,
                params.crew.as_deref(),
            )
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a job by its ID.
    pub async fn get_job(&self, params: &Id) -> Result<Option<Job>> {
        let db_path = self.db_path.clone();
        let job_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_job(job_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Marks a job completed.
    pub async fn complete_job(&self, params: &Id) -> Result<Job> {
        let db_path = self.db_path.clone();
        let job_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.complete_job(job_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
