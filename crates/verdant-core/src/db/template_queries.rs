//! Program template CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::{status_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result, SchedulerError},
    models::{Cadence, MonthlyDistribution, ProgramTemplate, TemplateFilter, TemplateTreatment},
};

const INSERT_TEMPLATE_SQL: &str = "INSERT INTO program_templates (name, description, services_per_year, services_per_month, default_cadence, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_TEMPLATE_SQL: &str = "SELECT id, name, description, services_per_year, services_per_month, default_cadence, is_active, created_at, updated_at FROM program_templates WHERE id = ?1";
const SELECT_TEMPLATES_SQL: &str = "SELECT id, name, description, services_per_year, services_per_month, default_cadence, is_active, created_at, updated_at FROM program_templates";
const CHECK_TEMPLATE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM program_templates WHERE id = ?1)";
const SELECT_TEMPLATE_TARGET_SQL: &str =
    "SELECT services_per_year FROM program_templates WHERE id = ?1";
const UPDATE_TEMPLATE_DISTRIBUTION_SQL: &str =
    "UPDATE program_templates SET services_per_month = ?1, updated_at = ?2 WHERE id = ?3";
const INSERT_TEMPLATE_TREATMENT_SQL: &str = "INSERT INTO template_treatments (template_id, treatment_type_id, month, quantity, instructions, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_TEMPLATE_TREATMENTS_SQL: &str = "SELECT id, template_id, treatment_type_id, month, quantity, instructions, created_at, updated_at FROM template_treatments WHERE template_id = ?1 ORDER BY month, id";
const COUNT_TEMPLATE_PROGRAMS_SQL: &str =
    "SELECT COUNT(*) FROM client_programs WHERE template_id = ?1";
const DELETE_TEMPLATE_TREATMENTS_SQL: &str =
    "DELETE FROM template_treatments WHERE template_id = ?1";
const DELETE_TEMPLATE_SQL: &str = "DELETE FROM program_templates WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a ProgramTemplate from a database row
    fn build_template_from_row(row: &rusqlite::Row) -> rusqlite::Result<ProgramTemplate> {
        // Legacy rows may hold a brace-delimited list; the decoder accepts
        // both forms and degrades to the default distribution.
        let distribution_text: String = row.get(4)?;
        let services_per_month = MonthlyDistribution::from_db_value(&distribution_text);

        Ok(ProgramTemplate {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            description: row.get(2)?,
            services_per_year: row.get::<_, i64>(3)? as u32,
            services_per_month,
            default_cadence: status_column::<Cadence>(row, 5)?,
            is_active: row.get(6)?,
            created_at: timestamp_column(row, 7)?,
            updated_at: timestamp_column(row, 8)?,
            treatments: Vec::new(),
        })
    }

    /// Helper function to construct a TemplateTreatment from a database row
    fn build_template_treatment_from_row(
        row: &rusqlite::Row,
    ) -> rusqlite::Result<TemplateTreatment> {
        Ok(TemplateTreatment {
            id: row.get::<_, i64>(0)? as u64,
            template_id: row.get::<_, i64>(1)? as u64,
            treatment_type_id: row.get::<_, i64>(2)? as u64,
            month: row.get::<_, i64>(3)? as i8,
            quantity: row.get::<_, Option<i64>>(4)?.map(|q| q as u32),
            instructions: row.get(5)?,
            created_at: timestamp_column(row, 6)?,
            updated_at: timestamp_column(row, 7)?,
        })
    }

    /// Creates a new program template.
    ///
    /// The monthly counts must sum to the annual target; the check runs
    /// here so the invariant holds for every persisted row.
    pub fn create_template(
        &mut self,
        name: &str,
        description: Option<&str>,
        services_per_year: u32,
        services_per_month: MonthlyDistribution,
        default_cadence: Cadence,
    ) -> Result<ProgramTemplate> {
        if services_per_month.total() != services_per_year {
            return Err(SchedulerError::validation("services_per_month").with_reason(format!(
                "monthly counts sum to {} but services_per_year is {}",
                services_per_month.total(),
                services_per_year
            )));
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_TEMPLATE_SQL,
                params![
                    name,
                    description,
                    services_per_year as i64,
                    services_per_month.to_db_value(),
                    default_cadence.as_str(),
                    true,
                    &now_str,
                    &now_str
                ],
            )
            .map_err(|e| SchedulerError::database_error("Failed to insert template", e))?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(ProgramTemplate {
            id,
            name: name.into(),
            description: description.map(String::from),
            services_per_year,
            services_per_month,
            default_cadence,
            is_active: true,
            created_at: now,
            updated_at: now,
            treatments: Vec::new(),
        })
    }

    /// Retrieves a template by its ID, with treatments eagerly loaded.
    pub fn get_template(&self, id: u64) -> Result<Option<ProgramTemplate>> {
        let mut template = self
            .connection
            .query_row(SELECT_TEMPLATE_SQL, params![id as i64], Self::build_template_from_row)
            .optional()
            .map_err(|e| SchedulerError::database_error("Failed to query template", e))?;

        if let Some(ref mut template) = template {
            template.treatments = self.get_template_treatments(template.id)?;
        }

        Ok(template)
    }

    /// Lists templates, active-only unless the filter says otherwise.
    pub fn list_templates(&self, filter: &TemplateFilter) -> Result<Vec<ProgramTemplate>> {
        let mut query = SELECT_TEMPLATES_SQL.to_string();
        if !filter.include_inactive {
            query.push_str(" WHERE is_active = 1");
        }
        query.push_str(" ORDER BY name");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let mut templates = stmt
            .query_map([], Self::build_template_from_row)
            .map_err(|e| SchedulerError::database_error("Failed to query templates", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch templates")?;

        for template in &mut templates {
            template.treatments = self.get_template_treatments(template.id)?;
        }

        Ok(templates)
    }

    /// Replaces a template's monthly distribution.
    ///
    /// The authoritative sum check lives here: the counts must have
    /// exactly 12 entries and sum to the template's annual target. Check
    /// and write happen inside one transaction.
    pub fn set_monthly_distribution(
        &mut self,
        template_id: u64,
        monthly_counts: &[u32],
    ) -> Result<ProgramTemplate> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let services_per_year: Option<i64> = tx
            .query_row(SELECT_TEMPLATE_TARGET_SQL, params![template_id as i64], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| SchedulerError::database_error("Failed to query template target", e))?;

        let Some(services_per_year) = services_per_year else {
            return Err(SchedulerError::TemplateNotFound { id: template_id });
        };

        let counts: [u32; 12] = monthly_counts.try_into().map_err(|_| {
            SchedulerError::validation("monthly_counts").with_reason(format!(
                "expected 12 monthly counts, got {}",
                monthly_counts.len()
            ))
        })?;

        let distribution = MonthlyDistribution(counts);
        if i64::from(distribution.total()) != services_per_year {
            return Err(SchedulerError::validation("monthly_counts").with_reason(format!(
                "monthly counts sum to {} but services_per_year is {}",
                distribution.total(),
                services_per_year
            )));
        }

        let now = Timestamp::now().to_string();
        tx.execute(
            UPDATE_TEMPLATE_DISTRIBUTION_SQL,
            params![distribution.to_db_value(), &now, template_id as i64],
        )
        .map_err(|e| SchedulerError::database_error("Failed to update distribution", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_template(template_id)?
            .ok_or(SchedulerError::TemplateNotFound { id: template_id })
    }

    /// Links a treatment type to a template month.
    pub fn link_treatment(
        &mut self,
        template_id: u64,
        treatment_type_id: u64,
        month: i8,
        quantity: Option<u32>,
        instructions: Option<&str>,
    ) -> Result<TemplateTreatment> {
        if !(1..=12).contains(&month) {
            return Err(SchedulerError::validation("month")
                .with_reason(format!("month must be between 1 and 12, got {month}")));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let template_exists: bool = tx
            .query_row(CHECK_TEMPLATE_EXISTS_SQL, params![template_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check template existence")?;
        if !template_exists {
            return Err(SchedulerError::TemplateNotFound { id: template_id });
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
            INSERT_TEMPLATE_TREATMENT_SQL,
            params![
                template_id as i64,
                treatment_type_id as i64,
                i64::from(month),
                quantity.map(i64::from),
                instructions,
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| SchedulerError::database_error("Failed to insert template treatment", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(TemplateTreatment {
            id,
            template_id,
            treatment_type_id,
            month,
            quantity,
            instructions: instructions.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    /// Permanently deletes a template and its treatment links.
    ///
    /// Deletion is refused while client programs still reference the
    /// template.
    pub fn delete_template(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_TEMPLATE_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check template existence")?;
        if !exists {
            return Err(SchedulerError::TemplateNotFound { id });
        }

        let assigned: i64 = tx
            .query_row(COUNT_TEMPLATE_PROGRAMS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to count template assignments")?;
        if assigned > 0 {
            return Err(SchedulerError::validation("template_id").with_reason(format!(
                "template is assigned to {assigned} client program(s); deletion refused"
            )));
        }

        tx.execute(DELETE_TEMPLATE_TREATMENTS_SQL, params![id as i64])
            .map_err(|e| SchedulerError::database_error("Failed to delete template treatments", e))?;
        tx.execute(DELETE_TEMPLATE_SQL, params![id as i64])
            .map_err(|e| SchedulerError::database_error("Failed to delete template", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Loads the treatment links for a template, ordered by month.
    pub fn get_template_treatments(&self, template_id: u64) -> Result<Vec<TemplateTreatment>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TEMPLATE_TREATMENTS_SQL)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let treatments = stmt
            .query_map(params![template_id as i64], Self::build_template_treatment_from_row)
            .map_err(|e| SchedulerError::database_error("Failed to query template treatments", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch template treatments")?;

        Ok(treatments)
    }
}
