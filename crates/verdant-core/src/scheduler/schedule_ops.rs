//! Settings-level treatment schedule operations for the Scheduler.

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{Result, SchedulerError},
    models::{ScheduleEntry, TreatmentProgram},
    params::{AddScheduleEntry, CreateTreatmentProgram, Id},
};

impl Scheduler {
    /// Creates a new settings-level treatment program.
    pub async fn create_treatment_program(
        &self,
        params: &CreateTreatmentProgram,
    ) -> Result<TreatmentProgram> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_treatment_program(&params.name, params.description.as_deref())
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a treatment program by its ID, with entries loaded.
    pub async fn get_treatment_program(&self, params: &Id) -> Result<Option<TreatmentProgram>> {
        let db_path = self.db_path.clone();
        let program_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_treatment_program(program_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all treatment programs with their entries.
    pub async fn list_treatment_programs(&self) -> Result<Vec<TreatmentProgram>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_treatment_programs()
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Adds an entry to a treatment program schedule.
    ///
    /// Exactly one of `month` / `is_flexible` must be provided; anything
    /// else fails with a validation error.
    pub async fn add_schedule_entry(&self, params: &AddScheduleEntry) -> Result<ScheduleEntry> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_schedule_entry(
                params.treatment_program_id,
                params.treatment_type_id,
                params.month,
                params.is_flexible,
                params.visit_number,
                params.instructions.as_deref(),
            )
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
