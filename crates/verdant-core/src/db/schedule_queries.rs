//! Treatment program schedule operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::timestamp_column;
use crate::{
    error::{DatabaseResultExt, Result, SchedulerError},
    models::{ScheduleEntry, TreatmentProgram},
};

const INSERT_TREATMENT_PROGRAM_SQL: &str = "INSERT INTO treatment_programs (name, description, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TREATMENT_PROGRAM_SQL: &str = "SELECT id, name, description, created_at, updated_at FROM treatment_programs WHERE id = ?1";
const SELECT_TREATMENT_PROGRAMS_SQL: &str = "SELECT id, name, description, created_at, updated_at FROM treatment_programs ORDER BY name";
const CHECK_TREATMENT_PROGRAM_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM treatment_programs WHERE id = ?1)";
const INSERT_SCHEDULE_ENTRY_SQL: &str = "INSERT INTO schedule_entries (treatment_program_id, treatment_type_id, month, is_flexible, visit_number, instructions, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
// Flexible entries sort after month-anchored ones within a visit group.
const SELECT_SCHEDULE_ENTRIES_SQL: &str = "SELECT id, treatment_program_id, treatment_type_id, month, is_flexible, visit_number, instructions, created_at, updated_at FROM schedule_entries WHERE treatment_program_id = ?1 ORDER BY visit_number IS NULL, visit_number, is_flexible, month, id";

impl super::Database {
    fn build_treatment_program_from_row(row: &rusqlite::Row) -> rusqlite::Result<TreatmentProgram> {
        Ok(TreatmentProgram {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            description: row.get(2)?,
            created_at: timestamp_column(row, 3)?,
            updated_at: timestamp_column(row, 4)?,
            entries: Vec::new(),
        })
    }

    fn build_schedule_entry_from_row(row: &rusqlite::Row) -> rusqlite::Result<ScheduleEntry> {
        Ok(ScheduleEntry {
            id: row.get::<_, i64>(0)? as u64,
            treatment_program_id: row.get::<_, i64>(1)? as u64,
            treatment_type_id: row.get::<_, i64>(2)? as u64,
            month: row.get::<_, Option<i64>>(3)?.map(|m| m as i8),
            is_flexible: row.get(4)?,
            visit_number: row.get::<_, Option<i64>>(5)?.map(|v| v as u32),
            instructions: row.get(6)?,
            created_at: timestamp_column(row, 7)?,
            updated_at: timestamp_column(row, 8)?,
        })
    }

    /// Creates a new settings-level treatment program.
    pub fn create_treatment_program(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<TreatmentProgram> {
        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_TREATMENT_PROGRAM_SQL,
                params![name, description, &now_str, &now_str],
            )
            .map_err(|e| SchedulerError::database_error("Failed to insert treatment program", e))?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(TreatmentProgram {
            id,
            name: name.into(),
            description: description.map(String::from),
            created_at: now,
            updated_at: now,
            entries: Vec::new(),
        })
    }

    /// Retrieves a treatment program by its ID, with entries eagerly
    /// loaded.
    pub fn get_treatment_program(&self, id: u64) -> Result<Option<TreatmentProgram>> {
        let mut program = self
            .connection
            .query_row(
                SELECT_TREATMENT_PROGRAM_SQL,
                params![id as i64],
                Self::build_treatment_program_from_row,
            )
            .optional()
            .map_err(|e| SchedulerError::database_error("Failed to query treatment program", e))?;

        if let Some(ref mut program) = program {
            program.entries = self.get_schedule_entries(program.id)?;
        }

        Ok(program)
    }

    /// Lists all treatment programs ordered by name.
    pub fn list_treatment_programs(&self) -> Result<Vec<TreatmentProgram>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TREATMENT_PROGRAMS_SQL)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let mut programs = stmt
            .query_map([], Self::build_treatment_program_from_row)
            .map_err(|e| SchedulerError::database_error("Failed to query treatment programs", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch treatment programs")?;

        for program in &mut programs {
            program.entries = self.get_schedule_entries(program.id)?;
        }

        Ok(programs)
    }

    /// Adds an entry to a treatment program schedule.
    ///
    /// An entry must be either month-anchored or explicitly flexible,
    /// never both and never neither.
    pub fn add_schedule_entry(
        &mut self,
        treatment_program_id: u64,
        treatment_type_id: u64,
        month: Option<i8>,
        is_flexible: bool,
        visit_number: Option<u32>,
        instructions: Option<&str>,
    ) -> Result<ScheduleEntry> {
        match (month, is_flexible) {
            (None, false) => {
                return Err(SchedulerError::validation("month").with_reason(
                    "a schedule entry must either be anchored to a month or marked flexible",
                ));
            }
            (Some(_), true) => {
                return Err(SchedulerError::validation("month").with_reason(
                    "a schedule entry cannot be both anchored to a month and marked flexible",
                ));
            }
            (Some(month), false) if !(1..=12).contains(&month) => {
                return Err(SchedulerError::validation("month")
                    .with_reason(format!("month must be between 1 and 12, got {month}")));
            }
            _ => {}
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let program_exists: bool = tx
            .query_row(
                CHECK_TREATMENT_PROGRAM_EXISTS_SQL,
                params![treatment_program_id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check treatment program existence")?;
        if !program_exists {
            return Err(SchedulerError::TreatmentProgramNotFound {
                id: treatment_program_id,
            });
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
            INSERT_SCHEDULE_ENTRY_SQL,
            params![
                treatment_program_id as i64,
                treatment_type_id as i64,
                month.map(i64::from),
                is_flexible,
                visit_number.map(i64::from),
                instructions,
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| SchedulerError::database_error("Failed to insert schedule entry", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(ScheduleEntry {
            id,
            treatment_program_id,
            treatment_type_id,
            month,
            is_flexible,
            visit_number,
            instructions: instructions.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    /// Loads the entries for a treatment program, grouped by visit number
    /// with month-anchored entries ahead of flexible ones.
    pub fn get_schedule_entries(&self, treatment_program_id: u64) -> Result<Vec<ScheduleEntry>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SCHEDULE_ENTRIES_SQL)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let entries = stmt
            .query_map(
                params![treatment_program_id as i64],
                Self::build_schedule_entry_from_row,
            )
            .map_err(|e| SchedulerError::database_error("Failed to query schedule entries", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch schedule entries")?;

        Ok(entries)
    }
}
