//! Program and client handler operations that return formatted wrapper
//! types or apply role-based policies.

use super::Scheduler;
use crate::{
    error::Result,
    models::{Capability, Client, ClientProgram, ProgramFilter, ProgramStatus},
    params::{Id, ListPrograms, ShowClient},
    SchedulerError,
};

impl Scheduler {
    /// Handle listing programs as summaries with instance counts.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use verdant_core::{params::ListPrograms, SchedulerBuilder};
    /// # async {
    /// let scheduler = SchedulerBuilder::new().build().await?;
    /// let summaries = scheduler
    ///     .list_programs_summary(&ListPrograms::default())
    ///     .await?;
    /// println!("{summaries}");
    /// # Result::<(), verdant_core::SchedulerError>::Ok(())
    /// # };
    /// ```
    pub async fn list_programs_summary(
        &self,
        params: &ListPrograms,
    ) -> Result<crate::display::ProgramSummaries> {
        let filter = ProgramFilter::from(params);
        let summaries = self.list_programs(filter).await?;
        Ok(crate::display::ProgramSummaries(summaries))
    }

    /// Handle showing a complete program with its instances.
    pub async fn show_program_with_instances(&self, params: &Id) -> Result<Option<ClientProgram>> {
        self.get_program(params).await
    }

    /// Handle showing a client with role-based field visibility.
    ///
    /// Capability-gated fields are stripped rather than erroring, so any
    /// role can look a client up; see [`Scheduler::client_gate_code`] for
    /// the hard-gated path.
    pub async fn show_client_for_role(&self, params: &ShowClient) -> Result<Option<Client>> {
        let client = self.get_client(&Id { id: params.id }).await?;
        Ok(client.map(|c| c.redacted_for(params.role)))
    }

    /// Handle revealing a client's gate code to a sufficiently privileged
    /// role.
    ///
    /// # Errors
    ///
    /// Returns `SchedulerError::Permission` if the role lacks the
    /// gate-code capability, `SchedulerError::ClientNotFound` if the
    /// client does not exist.
    pub async fn client_gate_code(&self, params: &ShowClient) -> Result<Option<String>> {
        if !params.role.can(Capability::ViewGateCode) {
            return Err(SchedulerError::permission(
                params.role.as_str(),
                Capability::ViewGateCode.describe(),
            ));
        }

        let client = self
            .get_client(&Id { id: params.id })
            .await?
            .ok_or(SchedulerError::ClientNotFound { id: params.id })?;

        Ok(client.gate_code)
    }

    /// Handle listing clients as a display collection, redacted for the
    /// caller's role.
    pub async fn list_clients_display(
        &self,
        role: crate::models::StaffRole,
    ) -> Result<crate::display::Clients> {
        let clients = self.list_clients().await?;
        Ok(crate::display::Clients(
            clients.into_iter().map(|c| c.redacted_for(role)).collect(),
        ))
    }

    /// Handle listing the treatment catalog as a display collection.
    pub async fn list_treatment_types_display(&self) -> Result<crate::display::TreatmentTypes> {
        let types = self.list_treatment_types().await?;
        Ok(crate::display::TreatmentTypes(types))
    }

    /// Handle pausing an active program.
    pub async fn pause_program(&self, params: &Id) -> Result<ClientProgram> {
        self.update_program_status(params, ProgramStatus::Paused).await
    }

    /// Handle resuming a paused program.
    pub async fn resume_program(&self, params: &Id) -> Result<ClientProgram> {
        self.update_program_status(params, ProgramStatus::Active).await
    }

    /// Handle completing a program at the end of its term.
    pub async fn complete_program(&self, params: &Id) -> Result<ClientProgram> {
        self.update_program_status(params, ProgramStatus::Completed).await
    }

    /// Handle cancelling a program before the end of its term.
    pub async fn cancel_program(&self, params: &Id) -> Result<ClientProgram> {
        self.update_program_status(params, ProgramStatus::Cancelled).await
    }
}
