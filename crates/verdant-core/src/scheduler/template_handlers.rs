//! Template handler operations that return formatted wrapper types.

use super::Scheduler;
use crate::{
    error::Result,
    models::ProgramTemplate,
    params::{DeleteTemplate, Distribute, Id, ListTemplates},
};

impl Scheduler {
    /// Handle listing templates as a display collection.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use verdant_core::{params::ListTemplates, SchedulerBuilder};
    /// # async {
    /// let scheduler = SchedulerBuilder::new().build().await?;
    /// let templates = scheduler
    ///     .list_templates_display(&ListTemplates { all: false })
    ///     .await?;
    /// println!("{templates}");
    /// # Result::<(), verdant_core::SchedulerError>::Ok(())
    /// # };
    /// ```
    pub async fn list_templates_display(
        &self,
        params: &ListTemplates,
    ) -> Result<crate::display::Templates> {
        let templates = self.list_templates(params).await?;
        Ok(crate::display::Templates(templates))
    }

    /// Handle permanently deleting a template with confirmation.
    ///
    /// Uses a get-before-delete pattern so the deleted template's details
    /// can be shown for confirmation. Requires the explicit `confirmed`
    /// flag; deletion is also refused while client programs still
    /// reference the template.
    ///
    /// # Errors
    ///
    /// Returns `SchedulerError::Validation` if `confirmed` is false or
    /// the template is still assigned.
    pub async fn delete_template(
        &self,
        params: &DeleteTemplate,
    ) -> Result<Option<ProgramTemplate>> {
        if !params.confirmed {
            return Err(crate::SchedulerError::validation("confirmed").with_reason(
                "Template deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        let id_params = Id { id: params.id };
        let template = self.get_template(&id_params).await?;

        if template.is_some() {
            self.delete_template_by_id(&id_params).await?;
        }

        Ok(template)
    }

    /// Handle rendering the monthly distribution table for a year.
    ///
    /// Pure computation; see [`crate::allocator`] for the algorithm.
    pub fn distribution_table(&self, params: &Distribute) -> crate::display::Distribution {
        crate::display::Distribution(self.distribute(params))
    }
}
