//! Client repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use atelier_core::error::{AppError, ErrorKind};
use atelier_core::result::AppResult;
use atelier_entity::client::{Client, NewClient};

use crate::stores::ClientStore;

/// Repository for client CRUD operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    /// Create a new client repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientStore for ClientRepository {
    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Client>> {
        sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE owner_id = $1 ORDER BY created_at",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list clients", e))
    }

    async fn find_by_id_and_owner(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Client>> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find client", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Client>> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find client by id", e)
            })
    }

    async fn create(&self, data: &NewClient) -> AppResult<Client> {
        sqlx::query_as::<_, Client>(
            "INSERT INTO clients (name, email, owner_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create client", e))
    }

    async fn update(&self, client: &Client) -> AppResult<Client> {
        sqlx::query_as::<_, Client>(
            "UPDATE clients SET name = $2, email = $3, owner_id = $4 WHERE id = $1 RETURNING *",
        )
        .bind(client.id)
        .bind(&client.name)
        .bind(&client.email)
        .bind(client.owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update client", e))?
        .ok_or_else(|| AppError::not_found(format!("Client {} not found", client.id)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete client", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Client {id} not found")));
        }
        Ok(())
    }
}
