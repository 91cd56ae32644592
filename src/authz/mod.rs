//! Ownership authorization for notetect.
//!
//! Every mutating resource operation runs through `OwnershipEngine` before
//! touching storage. The engine resolves the owning user of the target -
//! directly for subjects, notes, and documents, through the
//! Folder→Subject→User chain for folders - and compares it to the
//! requester. Nothing is cached between calls: storage is the source of
//! truth and may change between requests.

use sqlx::SqlitePool;

use crate::auth::AuthenticatedIdentity;
use crate::db::Database;
use crate::{NotetectError, Result};

/// Reference to a resource whose ownership is being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceRef {
    /// A subject, owned directly by a user.
    Subject(i64),
    /// A folder, owned transitively through its subject.
    Folder(i64),
    /// A note, owned directly by a user whether filed or not.
    Note(i64),
    /// A document, owned directly by a user.
    Document(i64),
}

impl ResourceRef {
    fn kind(&self) -> &'static str {
        match self {
            ResourceRef::Subject(_) => "subject",
            ResourceRef::Folder(_) => "folder",
            ResourceRef::Note(_) => "note",
            ResourceRef::Document(_) => "document",
        }
    }
}

/// Decides ALLOW/DENY for a requester against a target resource.
pub struct OwnershipEngine<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OwnershipEngine<'a> {
    /// Create an engine over the given database.
    pub fn new(db: &'a Database) -> Self {
        Self { pool: db.pool() }
    }

    /// Authorize a requester against a resource.
    ///
    /// Ownership mismatch and resource-not-found both return `Forbidden`:
    /// a denied caller learns nothing about whether the id exists.
    pub async fn authorize(
        &self,
        identity: AuthenticatedIdentity,
        resource: ResourceRef,
    ) -> Result<()> {
        let owner = self.resolve_owner(resource).await?;

        match owner {
            Some(user_id) if user_id == identity.user_id() => Ok(()),
            Some(_) => {
                tracing::warn!(
                    requester = identity.user_id(),
                    kind = resource.kind(),
                    "Ownership check denied"
                );
                Err(NotetectError::Forbidden)
            }
            None => Err(NotetectError::Forbidden),
        }
    }

    /// Resolve the owning user id of a resource, or None if the resource
    /// does not exist.
    async fn resolve_owner(&self, resource: ResourceRef) -> Result<Option<i64>> {
        let owner = match resource {
            ResourceRef::Subject(id) => {
                sqlx::query_scalar("SELECT user_id FROM subjects WHERE id = ?")
                    .bind(id)
                    .fetch_optional(self.pool)
                    .await?
            }
            // Folders carry no owner column; walk the chain to the
            // subject's owner
            ResourceRef::Folder(id) => {
                sqlx::query_scalar(
                    "SELECT s.user_id FROM folders f
                     JOIN subjects s ON s.id = f.subject_id
                     WHERE f.id = ?",
                )
                .bind(id)
                .fetch_optional(self.pool)
                .await?
            }
            ResourceRef::Note(id) => {
                sqlx::query_scalar("SELECT user_id FROM notes WHERE id = ?")
                    .bind(id)
                    .fetch_optional(self.pool)
                    .await?
            }
            ResourceRef::Document(id) => {
                sqlx::query_scalar("SELECT user_id FROM documents WHERE id = ?")
                    .bind(id)
                    .fetch_optional(self.pool)
                    .await?
            }
        };

        Ok(owner)
    }
}
