//! Program assignment and instance operations for the Scheduler.

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{Result, SchedulerError},
    models::{
        ClientProgram, ClientProgramService, ClientProgramTreatment, ProgramFilter, ProgramStatus,
        ProgramSummary,
    },
    params::{
        AddProgramTreatment, AddService, AssignProgram, CompleteService, CompleteTreatment, Id,
        ScheduleService,
    },
};

impl Scheduler {
    /// Assigns a program template to a client.
    ///
    /// The new program starts `active` with an empty instance set; both
    /// the client and the template must exist.
    pub async fn assign_program(&self, params: &AssignProgram) -> Result<ClientProgram> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.assign_program(
                params.client_id,
                params.template_id,
                params.start_date,
                params.cadence,
                params.custom_name.as_deref(),
            )
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a program by its ID, with instances eagerly loaded.
    pub async fn get_program(&self, params: &Id) -> Result<Option<ClientProgram>> {
        let db_path = self.db_path.clone();
        let program_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_program(program_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists program summaries with instance counts.
    pub async fn list_programs(&self, filter: ProgramFilter) -> Result<Vec<ProgramSummary>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_program_summaries(&filter)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Moves a program to a new status, enforcing the transition graph.
    pub async fn update_program_status(
        &self,
        params: &Id,
        next: ProgramStatus,
    ) -> Result<ClientProgram> {
        let db_path = self.db_path.clone();
        let program_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_program_status(program_id, next)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Adds a planned service instance to a program.
    pub async fn add_service(&self, params: &AddService) -> Result<ClientProgramService> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_service(params.program_id, params.target_month, params.target_year)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Places a service instance on the calendar.
    pub async fn schedule_service(&self, params: &ScheduleService) -> Result<ClientProgramService> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.schedule_service(params.id, params.date)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Marks a service instance completed, linking the fulfilling job
    /// when one is given.
    pub async fn complete_service(
        &self,
        params: &CompleteService,
    ) -> Result<ClientProgramService> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.complete_service(params.id, params.job_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Marks a service instance deliberately skipped.
    pub async fn skip_service(&self, params: &Id) -> Result<ClientProgramService> {
        let db_path = self.db_path.clone();
        let service_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.skip_service(service_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Adds a planned treatment instance to a program.
    pub async fn add_program_treatment(
        &self,
        params: &AddProgramTreatment,
    ) -> Result<ClientProgramTreatment> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_program_treatment(
                params.program_id,
                params.treatment_type_id,
                params.target_month,
                params.target_year,
                params.due_date,
            )
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Marks a treatment instance completed, recording who performed it.
    pub async fn complete_treatment(
        &self,
        params: &CompleteTreatment,
    ) -> Result<ClientProgramTreatment> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.complete_treatment(params.id, &params.completed_by, params.job_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
