//! Client CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::timestamp_column;
use crate::{
    error::{DatabaseResultExt, Result, SchedulerError},
    models::Client,
};

const INSERT_CLIENT_SQL: &str = "INSERT INTO clients (name, address, gate_code, monthly_rate_cents, notes, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_CLIENT_SQL: &str = "SELECT id, name, address, gate_code, monthly_rate_cents, notes, created_at, updated_at FROM clients WHERE id = ?1";
const SELECT_CLIENTS_SQL: &str = "SELECT id, name, address, gate_code, monthly_rate_cents, notes, created_at, updated_at FROM clients ORDER BY name";
const CHECK_CLIENT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM clients WHERE id = ?1)";

impl super::Database {
    /// Helper function to construct a Client from a database row
    fn build_client_from_row(row: &rusqlite::Row) -> rusqlite::Result<Client> {
        Ok(Client {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            address: row.get(2)?,
            gate_code: row.get(3)?,
            monthly_rate_cents: row.get(4)?,
            notes: row.get(5)?,
            created_at: timestamp_column(row, 6)?,
            updated_at: timestamp_column(row, 7)?,
        })
    }

    /// Creates a new client.
    pub fn create_client(
        &mut self,
        name: &str,
        address: Option<&str>,
        gate_code: Option<&str>,
        monthly_rate_cents: Option<i64>,
        notes: Option<&str>,
    ) -> Result<Client> {
        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_CLIENT_SQL,
                params![name, address, gate_code, monthly_rate_cents, notes, &now_str, &now_str],
            )
            .map_err(|e| SchedulerError::database_error("Failed to insert client", e))?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(Client {
            id,
            name: name.into(),
            address: address.map(String::from),
            gate_code: gate_code.map(String::from),
            monthly_rate_cents,
            notes: notes.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a client by its ID.
    pub fn get_client(&self, id: u64) -> Result<Option<Client>> {
        self.connection
            .query_row(SELECT_CLIENT_SQL, params![id as i64], Self::build_client_from_row)
            .optional()
            .map_err(|e| SchedulerError::database_error("Failed to query client", e))
    }

    /// Lists all clients ordered by name.
    pub fn list_clients(&self) -> Result<Vec<Client>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CLIENTS_SQL)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let clients = stmt
            .query_map([], Self::build_client_from_row)
            .map_err(|e| SchedulerError::database_error("Failed to query clients", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch clients")?;

        Ok(clients)
    }

    /// Whether a client row exists for the given ID.
    pub(crate) fn client_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_CLIENT_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check client existence")
    }
}
