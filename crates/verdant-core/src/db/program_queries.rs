//! Client program CRUD operations and instance queries.
//!
//! Covers the assignment rows themselves plus their generated service and
//! treatment instances. Assignment creates no instances; instance rows
//! are inserted explicitly and advance through status transitions as jobs
//! complete.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, OptionalExtension};

use super::utils::{
    date_column, optional_date_column, optional_id_column, optional_status_column,
    optional_timestamp_column, status_column, timestamp_column,
};
use crate::{
    error::{DatabaseResultExt, Result, SchedulerError},
    models::{
        Cadence, ClientProgram, ClientProgramService, ClientProgramTreatment, ProgramFilter,
        ProgramStatus, ProgramSummary, ServiceStatus,
    },
};

const INSERT_PROGRAM_SQL: &str = "INSERT INTO client_programs (client_id, template_id, start_date, cadence, status, custom_name, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_PROGRAM_SQL: &str = "SELECT id, client_id, template_id, start_date, cadence, status, custom_name, created_at, updated_at FROM client_programs WHERE id = ?1";
const SELECT_PROGRAM_STATUS_SQL: &str = "SELECT status FROM client_programs WHERE id = ?1";
const UPDATE_PROGRAM_STATUS_SQL: &str =
    "UPDATE client_programs SET status = ?1, updated_at = ?2 WHERE id = ?3";
const CHECK_PROGRAM_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM client_programs WHERE id = ?1)";

const PROGRAM_SUMMARY_COLUMNS: &str = "id, client_id, client_name, template_id, name, start_date, cadence, status, created_at, updated_at, total_services, completed_services, pending_services";

const INSERT_SERVICE_SQL: &str = "INSERT INTO client_program_services (program_id, target_month, target_year, scheduled_date, job_id, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_SERVICE_SQL: &str = "SELECT id, program_id, target_month, target_year, scheduled_date, job_id, status, created_at, updated_at FROM client_program_services WHERE id = ?1";
const SELECT_PROGRAM_SERVICES_SQL: &str = "SELECT id, program_id, target_month, target_year, scheduled_date, job_id, status, created_at, updated_at FROM client_program_services WHERE program_id = ?1 ORDER BY target_year, target_month, id";
const UPDATE_SERVICE_SCHEDULE_SQL: &str = "UPDATE client_program_services SET status = ?1, scheduled_date = ?2, updated_at = ?3 WHERE id = ?4";
const UPDATE_SERVICE_COMPLETE_SQL: &str = "UPDATE client_program_services SET status = ?1, job_id = ?2, updated_at = ?3 WHERE id = ?4";
const UPDATE_SERVICE_STATUS_SQL: &str =
    "UPDATE client_program_services SET status = ?1, updated_at = ?2 WHERE id = ?3";

const INSERT_PROGRAM_TREATMENT_SQL: &str = "INSERT INTO client_program_treatments (program_id, treatment_type_id, target_month, target_year, due_date, job_id, status, completed_by, completed_at, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const SELECT_PROGRAM_TREATMENT_SQL: &str = "SELECT id, program_id, treatment_type_id, target_month, target_year, due_date, job_id, status, completed_by, completed_at, created_at, updated_at FROM client_program_treatments WHERE id = ?1";
const SELECT_PROGRAM_TREATMENTS_SQL: &str = "SELECT id, program_id, treatment_type_id, target_month, target_year, due_date, job_id, status, completed_by, completed_at, created_at, updated_at FROM client_program_treatments WHERE program_id = ?1 ORDER BY target_year, target_month, id";
const UPDATE_TREATMENT_COMPLETE_SQL: &str = "UPDATE client_program_treatments SET status = ?1, completed_by = ?2, completed_at = ?3, job_id = ?4, updated_at = ?5 WHERE id = ?6";

impl super::Database {
    fn build_program_from_row(row: &rusqlite::Row) -> rusqlite::Result<ClientProgram> {
        Ok(ClientProgram {
            id: row.get::<_, i64>(0)? as u64,
            client_id: row.get::<_, i64>(1)? as u64,
            template_id: row.get::<_, i64>(2)? as u64,
            start_date: date_column(row, 3)?,
            cadence: optional_status_column::<Cadence>(row, 4)?,
            status: status_column::<ProgramStatus>(row, 5)?,
            custom_name: row.get(6)?,
            created_at: timestamp_column(row, 7)?,
            updated_at: timestamp_column(row, 8)?,
            services: Vec::new(),
            treatments: Vec::new(),
        })
    }

    fn build_service_from_row(row: &rusqlite::Row) -> rusqlite::Result<ClientProgramService> {
        Ok(ClientProgramService {
            id: row.get::<_, i64>(0)? as u64,
            program_id: row.get::<_, i64>(1)? as u64,
            target_month: row.get::<_, i64>(2)? as i8,
            target_year: row.get::<_, i64>(3)? as i16,
            scheduled_date: optional_date_column(row, 4)?,
            job_id: optional_id_column(row, 5)?,
            status: status_column::<ServiceStatus>(row, 6)?,
            created_at: timestamp_column(row, 7)?,
            updated_at: timestamp_column(row, 8)?,
        })
    }

    fn build_program_treatment_from_row(
        row: &rusqlite::Row,
    ) -> rusqlite::Result<ClientProgramTreatment> {
        Ok(ClientProgramTreatment {
            id: row.get::<_, i64>(0)? as u64,
            program_id: row.get::<_, i64>(1)? as u64,
            treatment_type_id: row.get::<_, i64>(2)? as u64,
            target_month: row.get::<_, i64>(3)? as i8,
            target_year: row.get::<_, i64>(4)? as i16,
            due_date: optional_date_column(row, 5)?,
            job_id: optional_id_column(row, 6)?,
            status: status_column::<ServiceStatus>(row, 7)?,
            completed_by: row.get(8)?,
            completed_at: optional_timestamp_column(row, 9)?,
            created_at: timestamp_column(row, 10)?,
            updated_at: timestamp_column(row, 11)?,
        })
    }

    fn build_summary_from_row(row: &rusqlite::Row) -> rusqlite::Result<ProgramSummary> {
        Ok(ProgramSummary {
            id: row.get::<_, i64>(0)? as u64,
            client_id: row.get::<_, i64>(1)? as u64,
            client_name: row.get(2)?,
            template_id: row.get::<_, i64>(3)? as u64,
            name: row.get(4)?,
            start_date: date_column(row, 5)?,
            cadence: optional_status_column::<Cadence>(row, 6)?,
            status: status_column::<ProgramStatus>(row, 7)?,
            created_at: timestamp_column(row, 8)?,
            updated_at: timestamp_column(row, 9)?,
            total_services: row.get::<_, i64>(10)? as u32,
            completed_services: row.get::<_, i64>(11)? as u32,
            pending_services: row.get::<_, i64>(12)? as u32,
        })
    }

    /// Assigns a program template to a client.
    ///
    /// Both the client and the template must exist. No service or
    /// treatment instances are created; an empty instance set is valid
    /// immediately after assignment.
    pub fn assign_program(
        &mut self,
        client_id: u64,
        template_id: u64,
        start_date: Date,
        cadence: Option<Cadence>,
        custom_name: Option<&str>,
    ) -> Result<ClientProgram> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let client_exists: bool = tx
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM clients WHERE id = ?1)",
                params![client_id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check client existence")?;
        if !client_exists {
            return Err(SchedulerError::ClientNotFound { id: client_id });
        }

        let template_exists: bool = tx
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM program_templates WHERE id = ?1)",
                params![template_id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check template existence")?;
        if !template_exists {
            return Err(SchedulerError::TemplateNotFound { id: template_id });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_PROGRAM_SQL,
            params![
                client_id as i64,
                template_id as i64,
                start_date.to_string(),
                cadence.map(|c| c.as_str()),
                ProgramStatus::Active.as_str(),
                custom_name,
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| SchedulerError::database_error("Failed to insert client program", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(ClientProgram {
            id,
            client_id,
            template_id,
            start_date,
            cadence,
            status: ProgramStatus::Active,
            custom_name: custom_name.map(String::from),
            created_at: now,
            updated_at: now,
            services: Vec::new(),
            treatments: Vec::new(),
        })
    }

    /// Retrieves a program by its ID, with instances eagerly loaded.
    pub fn get_program(&self, id: u64) -> Result<Option<ClientProgram>> {
        let mut program = self
            .connection
            .query_row(SELECT_PROGRAM_SQL, params![id as i64], Self::build_program_from_row)
            .optional()
            .map_err(|e| SchedulerError::database_error("Failed to query program", e))?;

        if let Some(ref mut program) = program {
            program.services = self.get_program_services(program.id)?;
            program.treatments = self.get_program_treatments(program.id)?;
        }

        Ok(program)
    }

    /// Lists program summaries with instance counts from the
    /// `program_summaries` view, newest first.
    pub fn list_program_summaries(&self, filter: &ProgramFilter) -> Result<Vec<ProgramSummary>> {
        let mut query = format!("SELECT {PROGRAM_SUMMARY_COLUMNS} FROM program_summaries");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(client_id) = filter.client_id {
            conditions.push("client_id = ?");
            params_vec.push(Box::new(client_id as i64));
        }

        if let Some(status) = filter.status {
            conditions.push("status = ?");
            params_vec.push(Box::new(status.as_str().to_string()));
        } else if !filter.include_all {
            conditions.push("status = ?");
            params_vec.push(Box::new(ProgramStatus::Active.as_str().to_string()));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY created_at DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let summaries = stmt
            .query_map(&params_refs[..], Self::build_summary_from_row)
            .map_err(|e| SchedulerError::database_error("Failed to query program summaries", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch program summaries")?;

        Ok(summaries)
    }

    /// Moves a program to a new status, enforcing the transition graph.
    pub fn update_program_status(
        &mut self,
        id: u64,
        next: ProgramStatus,
    ) -> Result<ClientProgram> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current: Option<String> = tx
            .query_row(SELECT_PROGRAM_STATUS_SQL, params![id as i64], |row| row.get(0))
            .optional()
            .map_err(|e| SchedulerError::database_error("Failed to query program status", e))?;

        let Some(current) = current else {
            return Err(SchedulerError::ProgramNotFound { id });
        };

        let current: ProgramStatus = current
            .parse()
            .map_err(|reason| SchedulerError::validation("status").with_reason(reason))?;

        if !current.can_transition_to(next) {
            return Err(SchedulerError::validation("status").with_reason(format!(
                "cannot move program from '{}' to '{}'",
                current.as_str(),
                next.as_str()
            )));
        }

        let now = Timestamp::now().to_string();
        tx.execute(
            UPDATE_PROGRAM_STATUS_SQL,
            params![next.as_str(), &now, id as i64],
        )
        .map_err(|e| SchedulerError::database_error("Failed to update program status", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_program(id)?
            .ok_or(SchedulerError::ProgramNotFound { id })
    }

    /// Adds a planned service instance to a program.
    pub fn add_service(
        &mut self,
        program_id: u64,
        target_month: i8,
        target_year: i16,
    ) -> Result<ClientProgramService> {
        if !(1..=12).contains(&target_month) {
            return Err(SchedulerError::validation("target_month")
                .with_reason(format!("month must be between 1 and 12, got {target_month}")));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let program_exists: bool = tx
            .query_row(CHECK_PROGRAM_EXISTS_SQL, params![program_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check program existence")?;
        if !program_exists {
            return Err(SchedulerError::ProgramNotFound { id: program_id });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_SERVICE_SQL,
            params![
                program_id as i64,
                i64::from(target_month),
                i64::from(target_year),
                Option::<String>::None,
                Option::<i64>::None,
                ServiceStatus::Pending.as_str(),
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| SchedulerError::database_error("Failed to insert program service", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(ClientProgramService {
            id,
            program_id,
            target_month,
            target_year,
            scheduled_date: None,
            job_id: None,
            status: ServiceStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a service instance by its ID.
    pub fn get_service(&self, id: u64) -> Result<Option<ClientProgramService>> {
        self.connection
            .query_row(SELECT_SERVICE_SQL, params![id as i64], Self::build_service_from_row)
            .optional()
            .map_err(|e| SchedulerError::database_error("Failed to query program service", e))
    }

    /// Places a service instance on the calendar.
    pub fn schedule_service(&mut self, id: u64, date: Date) -> Result<ClientProgramService> {
        if self.get_service(id)?.is_none() {
            return Err(SchedulerError::ServiceNotFound { id });
        }

        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                UPDATE_SERVICE_SCHEDULE_SQL,
                params![
                    ServiceStatus::Scheduled.as_str(),
                    date.to_string(),
                    &now,
                    id as i64
                ],
            )
            .map_err(|e| SchedulerError::database_error("Failed to schedule service", e))?;

        self.get_service(id)?
            .ok_or(SchedulerError::ServiceNotFound { id })
    }

    /// Marks a service instance completed, optionally linking the job
    /// that fulfilled it.
    pub fn complete_service(
        &mut self,
        id: u64,
        job_id: Option<u64>,
    ) -> Result<ClientProgramService> {
        let service = self
            .get_service(id)?
            .ok_or(SchedulerError::ServiceNotFound { id })?;

        if let Some(job_id) = job_id {
            if !self.job_exists(job_id)? {
                return Err(SchedulerError::JobNotFound { id: job_id });
            }
        }

        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                UPDATE_SERVICE_COMPLETE_SQL,
                params![
                    ServiceStatus::Completed.as_str(),
                    job_id.map(|j| j as i64).or(service.job_id.map(|j| j as i64)),
                    &now,
                    id as i64
                ],
            )
            .map_err(|e| SchedulerError::database_error("Failed to complete service", e))?;

        self.get_service(id)?
            .ok_or(SchedulerError::ServiceNotFound { id })
    }

    /// Marks a service instance deliberately skipped.
    pub fn skip_service(&mut self, id: u64) -> Result<ClientProgramService> {
        if self.get_service(id)?.is_none() {
            return Err(SchedulerError::ServiceNotFound { id });
        }

        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                UPDATE_SERVICE_STATUS_SQL,
                params![ServiceStatus::Skipped.as_str(), &now, id as i64],
            )
            .map_err(|e| SchedulerError::database_error("Failed to skip service", e))?;

        self.get_service(id)?
            .ok_or(SchedulerError::ServiceNotFound { id })
    }

    /// Adds a planned treatment instance to a program.
    pub fn add_program_treatment(
        &mut self,
        program_id: u64,
        treatment_type_id: u64,
        target_month: i8,
        target_year: i16,
        due_date: Option<Date>,
    ) -> Result<ClientProgramTreatment> {
        if !(1..=12).contains(&target_month) {
            return Err(SchedulerError::validation("target_month")
                .with_reason(format!("month must be between 1 and 12, got {target_month}")));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let program_exists: bool = tx
            .query_row(CHECK_PROGRAM_EXISTS_SQL, params![program_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check program existence")?;
        if !program_exists {
            return Err(SchedulerError::ProgramNotFound { id: program_id });
        }

        let treatment_exists: bool = tx
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM treatment_types WHERE id = ?1)",
                params![treatment_type_id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check treatment type existence")?;
        if !treatment_exists {
            return Err(SchedulerError::TreatmentTypeNotFound {
                id: treatment_type_id,
            });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_PROGRAM_TREATMENT_SQL,
            params![
                program_id as i64,
                treatment_type_id as i64,
                i64::from(target_month),
                i64::from(target_year),
                due_date.map(|d| d.to_string()),
                Option::<i64>::None,
                ServiceStatus::Pending.as_str(),
                Option::<String>::None,
                Option::<String>::None,
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| SchedulerError::database_error("Failed to insert program treatment", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(ClientProgramTreatment {
            id,
            program_id,
            treatment_type_id,
            target_month,
            target_year,
            due_date,
            job_id: None,
            status: ServiceStatus::Pending,
            completed_by: None,
            completed_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a treatment instance by its ID.
    pub fn get_program_treatment(&self, id: u64) -> Result<Option<ClientProgramTreatment>> {
        self.connection
            .query_row(
                SELECT_PROGRAM_TREATMENT_SQL,
                params![id as i64],
                Self::build_program_treatment_from_row,
            )
            .optional()
            .map_err(|e| SchedulerError::database_error("Failed to query program treatment", e))
    }

    /// Marks a treatment instance completed, recording who performed it.
    pub fn complete_treatment(
        &mut self,
        id: u64,
        completed_by: &str,
        job_id: Option<u64>,
    ) -> Result<ClientProgramTreatment> {
        let treatment = self
            .get_program_treatment(id)?
            .ok_or(SchedulerError::TreatmentNotFound { id })?;

        if let Some(job_id) = job_id {
            if !self.job_exists(job_id)? {
                return Err(SchedulerError::JobNotFound { id: job_id });
            }
        }

        let now = Timestamp::now();
        self.connection
            .execute(
                UPDATE_TREATMENT_COMPLETE_SQL,
                params![
                    ServiceStatus::Completed.as_str(),
                    completed_by,
                    now.to_string(),
                    job_id.map(|j| j as i64).or(treatment.job_id.map(|j| j as i64)),
                    now.to_string(),
                    id as i64
                ],
            )
            .map_err(|e| SchedulerError::database_error("Failed to complete treatment", e))?;

        self.get_program_treatment(id)?
            .ok_or(SchedulerError::TreatmentNotFound { id })
    }

    /// Loads the service instances for a program in target order.
    pub fn get_program_services(&self, program_id: u64) -> Result<Vec<ClientProgramService>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PROGRAM_SERVICES_SQL)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let services = stmt
            .query_map(params![program_id as i64], Self::build_service_from_row)
            .map_err(|e| SchedulerError::database_error("Failed to query program services", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch program services")?;

        Ok(services)
    }

    /// Loads the treatment instances for a program in target order.
    pub fn get_program_treatments(&self, program_id: u64) -> Result<Vec<ClientProgramTreatment>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PROGRAM_TREATMENTS_SQL)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let treatments = stmt
            .query_map(params![program_id as i64], Self::build_program_treatment_from_row)
            .map_err(|e| SchedulerError::database_error("Failed to query program treatments", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch program treatments")?;

        Ok(treatments)
    }
}
