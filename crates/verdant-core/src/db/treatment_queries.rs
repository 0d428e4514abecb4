//! Treatment catalog operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::{status_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result, SchedulerError},
    models::{TreatmentCategory, TreatmentType},
};

const INSERT_TREATMENT_TYPE_SQL: &str = "INSERT INTO treatment_types (name, category, notes, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_TREATMENT_TYPE_SQL: &str = "SELECT id, name, category, notes, created_at, updated_at FROM treatment_types WHERE id = ?1";
const SELECT_TREATMENT_TYPES_SQL: &str = "SELECT id, name, category, notes, created_at, updated_at FROM treatment_types ORDER BY category, name";

impl super::Database {
    fn build_treatment_type_from_row(row: &rusqlite::Row) -> rusqlite::Result<TreatmentType> {
        Ok(TreatmentType {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            category: status_column::<TreatmentCategory>(row, 2)?,
            notes: row.get(3)?,
            created_at: timestamp_column(row, 4)?,
            updated_at: timestamp_column(row, 5)?,
        })
    }

    /// Creates a new treatment catalog entry.
    pub fn create_treatment_type(
        &mut self,
        name: &str,
        category: TreatmentCategory,
        notes: Option<&str>,
    ) -> Result<TreatmentType> {
        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_TREATMENT_TYPE_SQL,
                params![name, category.as_str(), notes, &now_str, &now_str],
            )
            .map_err(|e| SchedulerError::database_error("Failed to insert treatment type", e))?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(TreatmentType {
            id,
            name: name.into(),
            category,
            notes: notes.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a treatment type by its ID.
    pub fn get_treatment_type(&self, id: u64) -> Result<Option<TreatmentType>> {
        self.connection
            .query_row(
                SELECT_TREATMENT_TYPE_SQL,
                params![id as i64],
                Self::build_treatment_type_from_row,
            )
            .optional()
            .map_err(|e| SchedulerError::database_error("Failed to query treatment type", e))
    }

    /// Lists the treatment catalog, grouped by category.
    pub fn list_treatment_types(&self) -> Result<Vec<TreatmentType>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TREATMENT_TYPES_SQL)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let types = stmt
            .query_map([], Self::build_treatment_type_from_row)
            .map_err(|e| SchedulerError::database_error("Failed to query treatment types", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch treatment types")?;

        Ok(types)
    }
}
