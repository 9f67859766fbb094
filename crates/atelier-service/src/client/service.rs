//! Client CRUD, scoped to the owning user.
//!
//! Every operation resolves the current principal first and then touches
//! only rows that principal owns. A row owned by someone else looks
//! exactly like a row that does not exist, so ids cannot be probed across
//! accounts.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use atelier_core::error::AppError;
use atelier_core::result::AppResult;
use atelier_database::{ClientStore, UserStore};
use atelier_entity::{Client, NewClient};

use crate::context::Identity;
use crate::ownership::resolve_owner_transfer;

/// Manages client records.
pub struct ClientService {
    /// Client store.
    clients: Arc<dyn ClientStore>,
    /// Principal directory, for owner-transfer targets.
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for ClientService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientService").finish()
    }
}

/// Data for creating a client. The owner is never taken from input; the
/// caller becomes the owner.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateClientRequest {
    /// Client name.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
}

/// Data for updating a client.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateClientRequest {
    /// Client name.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Requested owner. `None` leaves the owner untouched.
    pub owner_id: Option<Uuid>,
}

impl ClientService {
    /// Creates a new client service.
    pub fn new(clients: Arc<dyn ClientStore>, users: Arc<dyn UserStore>) -> Self {
        Self { clients, users }
    }

    /// Lists the caller's clients.
    pub async fn list(&self, identity: &Identity) -> AppResult<Vec<Client>> {
        let me = identity.require()?;
        self.clients.find_by_owner(me.id).await
    }

    /// Gets one of the caller's clients by id.
    pub async fn get(&self, identity: &Identity, id: Uuid) -> AppResult<Client> {
        let me = identity.require()?;
        self.clients
            .find_by_id_and_owner(id, me.id)
            .await?
            .ok_or_else(|| AppError::not_found("Client not found"))
    }

    /// Creates a client owned by the caller.
    pub async fn create(
        &self,
        identity: &Identity,
        req: CreateClientRequest,
    ) -> AppResult<Client> {
        let me = identity.require()?;

        if req.name.trim().is_empty() {
            return Err(AppError::validation("Client name cannot be empty"));
        }

        let client = self
            .clients
            .create(&NewClient {
                name: req.name,
                email: req.email,
                owner_id: me.id,
            })
            .await?;

        info!(user_id = %me.id, client_id = %client.id, "Client created");

        Ok(client)
    }

    /// Updates one of the caller's clients.
    pub async fn update(
        &self,
        identity: &Identity,
        id: Uuid,
        req: UpdateClientRequest,
    ) -> AppResult<Client> {
        let me = identity.require()?;

        if req.name.trim().is_empty() {
            return Err(AppError::validation("Client name cannot be empty"));
        }

        let mut client = self
            .clients
            .find_by_id_and_owner(id, me.id)
            .await?
            .ok_or_else(|| AppError::not_found("Client not found"))?;

        client.name = req.name;
        client.email = req.email;
        client.owner_id =
            resolve_owner_transfer(self.users.as_ref(), client.owner_id, req.owner_id).await?;

        let updated = self.clients.update(&client).await?;

        info!(user_id = %me.id, client_id = %id, "Client updated");

        Ok(updated)
    }

    /// Deletes one of the caller's clients.
    pub async fn delete(&self, identity: &Identity, id: Uuid) -> AppResult<()> {
        let me = identity.require()?;

        self.clients
            .find_by_id_and_owner(id, me.id)
            .await?
            .ok_or_else(|| AppError::not_found("Client not found"))?;

        self.clients.delete(id).await?;

        info!(user_id = %me.id, client_id = %id, "Client deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::error::ErrorKind;
    use atelier_database::MemoryStore;
    use atelier_entity::{NewUser, Role, User};

    async fn create_user(db: &MemoryStore, email: &str) -> User {
        db.users()
            .create(&NewUser {
                email: email.to_string(),
                password_hash: "hash".to_string(),
                first_name: None,
                last_name: None,
                roles: vec![Role::User],
            })
            .await
            .unwrap()
    }

    async fn setup() -> (ClientService, MemoryStore, Identity, Identity) {
        let db = MemoryStore::new();
        let alice = create_user(&db, "alice@example.com").await;
        let bob = create_user(&db, "bob@example.com").await;

        let service = ClientService::new(Arc::new(db.clients()), Arc::new(db.users()));
        (service, db, Identity::from(alice), Identity::from(bob))
    }

    fn create_request(name: &str) -> CreateClientRequest {
        CreateClientRequest {
            name: name.to_string(),
            email: None,
        }
    }

    #[tokio::test]
    async fn test_anonymous_calls_are_rejected_before_storage() {
        let (service, _db, _alice, _bob) = setup().await;
        let anon = Identity::anonymous();

        let list = service.list(&anon).await.unwrap_err();
        let get = service.get(&anon, Uuid::new_v4()).await.unwrap_err();
        let create = service
            .create(&anon, create_request("Acme"))
            .await
            .unwrap_err();

        for err in [list, get, create] {
            assert_eq!(err.kind, ErrorKind::Unauthenticated);
        }
    }

    #[tokio::test]
    async fn test_create_stamps_caller_as_owner() {
        let (service, _db, alice, _bob) = setup().await;

        let client = service
            .create(&alice, create_request("Acme"))
            .await
            .unwrap();
        assert_eq!(client.owner_id, Some(alice.current().unwrap().id));
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_caller() {
        let (service, _db, alice, bob) = setup().await;
        service
            .create(&alice, create_request("Alice & Co"))
            .await
            .unwrap();
        service
            .create(&bob, create_request("Bob Ltd"))
            .await
            .unwrap();

        let mine = service.list(&alice).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].name, "Alice & Co");
    }

    #[tokio::test]
    async fn test_foreign_client_reads_as_not_found() {
        let (service, _db, alice, bob) = setup().await;
        let client = service
            .create(&alice, create_request("Acme"))
            .await
            .unwrap();

        let err = service.get(&bob, client.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        // Indistinguishable from an id that never existed.
        let missing = service.get(&bob, Uuid::new_v4()).await.unwrap_err();
        assert_eq!(missing.kind, err.kind);
        assert_eq!(missing.message, err.message);
    }

    #[tokio::test]
    async fn test_foreign_delete_leaves_row_intact() {
        let (service, _db, alice, bob) = setup().await;
        let client = service
            .create(&alice, create_request("Acme"))
            .await
            .unwrap();

        let err = service.delete(&bob, client.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        // Still there for the real owner.
        assert!(service.get(&alice, client.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_mutates_name_and_email() {
        let (service, _db, alice, _bob) = setup().await;
        let client = service
            .create(&alice, create_request("Acme"))
            .await
            .unwrap();

        let updated = service
            .update(
                &alice,
                client.id,
                UpdateClientRequest {
                    name: "Acme Studios".to_string(),
                    email: Some("studio@acme.example".to_string()),
                    owner_id: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Acme Studios");
        assert_eq!(updated.email.as_deref(), Some("studio@acme.example"));
        assert_eq!(updated.owner_id, client.owner_id);
    }

    #[tokio::test]
    async fn test_owner_transfer_moves_client_between_accounts() {
        let (service, _db, alice, bob) = setup().await;
        let bob_id = bob.current().unwrap().id;
        let client = service
            .create(&alice, create_request("Acme"))
            .await
            .unwrap();

        let updated = service
            .update(
                &alice,
                client.id,
                UpdateClientRequest {
                    name: client.name.clone(),
                    email: None,
                    owner_id: Some(bob_id),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.owner_id, Some(bob_id));

        // Alice no longer sees it; Bob does.
        let gone = service.get(&alice, client.id).await.unwrap_err();
        assert_eq!(gone.kind, ErrorKind::NotFound);
        assert!(service.get(&bob, client.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_owner_transfer_to_missing_user_fails() {
        let (service, _db, alice, _bob) = setup().await;
        let client = service
            .create(&alice, create_request("Acme"))
            .await
            .unwrap();

        let err = service
            .update(
                &alice,
                client.id,
                UpdateClientRequest {
                    name: client.name.clone(),
                    email: None,
                    owner_id: Some(Uuid::new_v4()),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ReferenceNotFound);

        // The failed transfer changed nothing.
        let reloaded = service.get(&alice, client.id).await.unwrap();
        assert_eq!(reloaded.owner_id, client.owner_id);
        assert_eq!(reloaded.name, "Acme");
    }

    #[tokio::test]
    async fn test_same_owner_transfer_is_noop() {
        let (service, _db, alice, _bob) = setup().await;
        let alice_id = alice.current().unwrap().id;
        let client = service
            .create(&alice, create_request("Acme"))
            .await
            .unwrap();

        let updated = service
            .update(
                &alice,
                client.id,
                UpdateClientRequest {
                    name: client.name.clone(),
                    email: None,
                    owner_id: Some(alice_id),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.owner_id, Some(alice_id));
    }
}
