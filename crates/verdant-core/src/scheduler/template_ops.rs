//! Template and treatment catalog operations for the Scheduler.

use tokio::task;

use super::Scheduler;
use crate::{
    allocator,
    db::Database,
    error::{Result, SchedulerError},
    models::{MonthlyDistribution, ProgramTemplate, TemplateFilter, TemplateTreatment, TreatmentType},
    params::{
        CreateTemplate, CreateTreatmentType, Distribute, Id, LinkTreatment, ListTemplates,
        SetMonthlyDistribution,
    },
};

impl Scheduler {
    /// Creates a new program template.
    ///
    /// When no explicit monthly counts are given, the distribution is
    /// seeded from the allocator for the current year so the sum
    /// invariant holds from the first write.
    pub async fn create_template(&self, params: &CreateTemplate) -> Result<ProgramTemplate> {
        let distribution = match &params.services_per_month {
            Some(counts) => {
                let counts: [u32; 12] = counts.as_slice().try_into().map_err(|_| {
                    SchedulerError::validation("services_per_month").with_reason(format!(
                        "expected 12 monthly counts, got {}",
                        counts.len()
                    ))
                })?;
                MonthlyDistribution(counts)
            }
            None => MonthlyDistribution(allocator::services_array(&Distribute {
                year: jiff::Zoned::now().year(),
                annual_services: params.services_per_year,
                cadence: params.default_cadence,
            })),
        };

        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_template(
                &params.name,
                params.description.as_deref(),
                params.services_per_year,
                distribution,
                params.default_cadence,
            )
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a template by its ID, with treatments eagerly loaded.
    pub async fn get_template(&self, params: &Id) -> Result<Option<ProgramTemplate>> {
        let db_path = self.db_path.clone();
        let template_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_template(template_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists templates, active-only unless the parameters say otherwise.
    pub async fn list_templates(&self, params: &ListTemplates) -> Result<Vec<ProgramTemplate>> {
        let db_path = self.db_path.clone();
        let filter = TemplateFilter::from(params);

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_templates(&filter)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Replaces a template's monthly distribution.
    ///
    /// The counts must have exactly 12 entries summing to the template's
    /// `services_per_year`; a mismatch fails with a validation error.
    pub async fn set_monthly_distribution(
        &self,
        params: &SetMonthlyDistribution,
    ) -> Result<ProgramTemplate> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_monthly_distribution(params.template_id, &params.monthly_counts)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Links a treatment type to a template month.
    ///
    /// The month must fall in 1..=12, and both the template and the
    /// treatment type must exist.
    pub async fn link_treatment_to_template(
        &self,
        params: &LinkTreatment,
    ) -> Result<TemplateTreatment> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.link_treatment(
                params.template_id,
                params.treatment_type_id,
                params.month,
                params.quantity,
                params.instructions.as_deref(),
            )
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a template by ID.
    pub(crate) async fn delete_template_by_id(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let template_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_template(template_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Creates a new treatment catalog entry.
    pub async fn create_treatment_type(
        &self,
        params: &CreateTreatmentType,
    ) -> Result<TreatmentType> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_treatment_type(&params.name, params.category, params.notes.as_deref())
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists the treatment catalog, grouped by category.
    pub async fn list_treatment_types(&self) -> Result<Vec<TreatmentType>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_treatment_types()
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
