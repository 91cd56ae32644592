//! Note service: CRUD and folder moves behind ownership checks.
//!
//! A note's owner is its own `user_id`; the folder chain only comes into
//! play when a folder link is set. Creating a filed note and moving a note
//! both authorize the destination folder against the same requester, so a
//! move can never transfer effective ownership.

use crate::auth::AuthenticatedIdentity;
use crate::authz::{OwnershipEngine, ResourceRef};
use crate::db::Database;
use crate::{NotetectError, Result};

use super::repository::NoteRepository;
use super::{NewNote, Note};

/// Maximum length for note titles (in characters).
pub const MAX_TITLE_LENGTH: usize = 200;

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(NotetectError::Validation("title must not be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(NotetectError::Validation(format!(
            "title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Service for note operations with ownership enforcement.
pub struct NoteService<'a> {
    db: &'a Database,
}

impl<'a> NoteService<'a> {
    /// Create a new NoteService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List the requester's notes.
    pub async fn list(&self, identity: AuthenticatedIdentity) -> Result<Vec<Note>> {
        let repo = NoteRepository::new(self.db.pool());
        repo.list_by_owner(identity.user_id()).await
    }

    /// List the notes in a folder the requester owns.
    pub async fn list_in_folder(
        &self,
        identity: AuthenticatedIdentity,
        folder_id: i64,
    ) -> Result<Vec<Note>> {
        OwnershipEngine::new(self.db)
            .authorize(identity, ResourceRef::Folder(folder_id))
            .await?;

        let repo = NoteRepository::new(self.db.pool());
        repo.list_by_folder(folder_id).await
    }

    /// Get a single note the requester owns.
    pub async fn get(&self, identity: AuthenticatedIdentity, note_id: i64) -> Result<Note> {
        OwnershipEngine::new(self.db)
            .authorize(identity, ResourceRef::Note(note_id))
            .await?;

        let repo = NoteRepository::new(self.db.pool());
        repo.get_by_id(note_id)
            .await?
            .ok_or(NotetectError::Forbidden)
    }

    /// Create a note, optionally filed in a folder.
    ///
    /// A destination folder is authorized against the requester before the
    /// note is written, so a note can never be created into somebody
    /// else's folder.
    pub async fn create(
        &self,
        identity: AuthenticatedIdentity,
        title: &str,
        content: &str,
        folder_id: Option<i64>,
    ) -> Result<Note> {
        validate_title(title)?;

        if let Some(folder_id) = folder_id {
            OwnershipEngine::new(self.db)
                .authorize(identity, ResourceRef::Folder(folder_id))
                .await?;
        }

        let mut new_note = NewNote::new(title, content, identity.user_id());
        if let Some(folder_id) = folder_id {
            new_note = new_note.with_folder(folder_id);
        }

        let repo = NoteRepository::new(self.db.pool());
        repo.create(&new_note).await
    }

    /// Rename a note after re-checking ownership.
    pub async fn update_title(
        &self,
        identity: AuthenticatedIdentity,
        note_id: i64,
        title: &str,
    ) -> Result<Note> {
        validate_title(title)?;

        OwnershipEngine::new(self.db)
            .authorize(identity, ResourceRef::Note(note_id))
            .await?;

        let repo = NoteRepository::new(self.db.pool());
        repo.update_title(note_id, title)
            .await?
            .ok_or(NotetectError::Forbidden)
    }

    /// Replace a note's content after re-checking ownership.
    pub async fn update_content(
        &self,
        identity: AuthenticatedIdentity,
        note_id: i64,
        content: &str,
    ) -> Result<Note> {
        OwnershipEngine::new(self.db)
            .authorize(identity, ResourceRef::Note(note_id))
            .await?;

        let repo = NoteRepository::new(self.db.pool());
        repo.update_content(note_id, content)
            .await?
            .ok_or(NotetectError::Forbidden)
    }

    /// Move a note to another folder, or unfile it with `None`.
    ///
    /// Both the note and the destination folder must belong to the
    /// requester; the check runs before the link is written, and a denied
    /// move leaves the note untouched.
    pub async fn move_to_folder(
        &self,
        identity: AuthenticatedIdentity,
        note_id: i64,
        folder_id: Option<i64>,
    ) -> Result<Note> {
        let engine = OwnershipEngine::new(self.db);
        engine.authorize(identity, ResourceRef::Note(note_id)).await?;

        if let Some(folder_id) = folder_id {
            engine
                .authorize(identity, ResourceRef::Folder(folder_id))
                .await?;
        }

        let repo = NoteRepository::new(self.db.pool());
        repo.set_folder(note_id, folder_id)
            .await?
            .ok_or(NotetectError::Forbidden)
    }

    /// Delete a note after re-checking ownership.
    pub async fn delete(&self, identity: AuthenticatedIdentity, note_id: i64) -> Result<()> {
        OwnershipEngine::new(self.db)
            .authorize(identity, ResourceRef::Note(note_id))
            .await?;

        let repo = NoteRepository::new(self.db.pool());
        repo.delete(note_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::folder::FolderService;
    use crate::subject::SubjectService;

    struct Fixture {
        db: Database,
        alice: AuthenticatedIdentity,
        bob: AuthenticatedIdentity,
        alice_folder: i64,
        bob_folder: i64,
    }

    async fn setup() -> Fixture {
        let db = Database::open_in_memory().await.unwrap();
        for (name, email) in [("Alice", "alice@x.com"), ("Bob", "bob@x.com")] {
            sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, 'h')")
                .bind(name)
                .bind(email)
                .execute(db.pool())
                .await
                .unwrap();
        }
        let alice = AuthenticatedIdentity::new(1);
        let bob = AuthenticatedIdentity::new(2);

        let subjects = SubjectService::new(&db);
        let folders = FolderService::new(&db);
        let alice_subject = subjects.create(alice, "Math").await.unwrap();
        let bob_subject = subjects.create(bob, "Biology").await.unwrap();
        let alice_folder = folders
            .create(alice, alice_subject.id, "Algebra")
            .await
            .unwrap();
        let bob_folder = folders
            .create(bob, bob_subject.id, "Cells")
            .await
            .unwrap();

        Fixture {
            db,
            alice,
            bob,
            alice_folder: alice_folder.id,
            bob_folder: bob_folder.id,
        }
    }

    #[tokio::test]
    async fn test_create_unfiled_and_get() {
        let f = setup().await;
        let service = NoteService::new(&f.db);

        let note = service.create(f.alice, "Quiz", "body", None).await.unwrap();
        assert!(note.folder_id.is_none());

        let fetched = service.get(f.alice, note.id).await.unwrap();
        assert_eq!(fetched.title, "Quiz");
    }

    #[tokio::test]
    async fn test_create_into_own_folder() {
        let f = setup().await;
        let service = NoteService::new(&f.db);

        let note = service
            .create(f.alice, "Quiz", "body", Some(f.alice_folder))
            .await
            .unwrap();
        assert_eq!(note.folder_id, Some(f.alice_folder));
    }

    #[tokio::test]
    async fn test_create_into_foreign_folder_denied() {
        let f = setup().await;
        let service = NoteService::new(&f.db);

        // Bob tries to file a note into Alice's folder: denied at the
        // folder ownership check before anything is written
        let result = service
            .create(f.bob, "Sneaky", "body", Some(f.alice_folder))
            .await;
        assert!(matches!(result, Err(NotetectError::Forbidden)));

        assert!(service.list(f.bob).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_foreign_note_denied() {
        let f = setup().await;
        let service = NoteService::new(&f.db);

        let note = service.create(f.alice, "Quiz", "", None).await.unwrap();
        let result = service.get(f.bob, note.id).await;
        assert!(matches!(result, Err(NotetectError::Forbidden)));
    }

    #[tokio::test]
    async fn test_update_title_and_content_by_owner_only() {
        let f = setup().await;
        let service = NoteService::new(&f.db);

        let note = service.create(f.alice, "Quiz", "body", None).await.unwrap();

        assert!(service.update_title(f.bob, note.id, "Defaced").await.is_err());
        assert!(service
            .update_content(f.bob, note.id, "defaced")
            .await
            .is_err());

        let updated = service
            .update_title(f.alice, note.id, "Quiz 2")
            .await
            .unwrap();
        assert_eq!(updated.title, "Quiz 2");

        let updated = service
            .update_content(f.alice, note.id, "revised")
            .await
            .unwrap();
        assert_eq!(updated.content, "revised");
    }

    #[tokio::test]
    async fn test_move_between_own_folders() {
        let f = setup().await;
        let service = NoteService::new(&f.db);

        let note = service
            .create(f.alice, "Quiz", "", Some(f.alice_folder))
            .await
            .unwrap();

        let moved = service
            .move_to_folder(f.alice, note.id, None)
            .await
            .unwrap();
        assert!(moved.folder_id.is_none());

        let moved = service
            .move_to_folder(f.alice, note.id, Some(f.alice_folder))
            .await
            .unwrap();
        assert_eq!(moved.folder_id, Some(f.alice_folder));
    }

    #[tokio::test]
    async fn test_move_to_foreign_folder_rejected_link_unchanged() {
        let f = setup().await;
        let service = NoteService::new(&f.db);

        let note = service
            .create(f.alice, "Quiz", "", Some(f.alice_folder))
            .await
            .unwrap();

        // Destination owned by Bob: the move is rejected and the note's
        // folder link stays exactly as it was
        let result = service
            .move_to_folder(f.alice, note.id, Some(f.bob_folder))
            .await;
        assert!(matches!(result, Err(NotetectError::Forbidden)));

        let unchanged = service.get(f.alice, note.id).await.unwrap();
        assert_eq!(unchanged.folder_id, Some(f.alice_folder));
    }

    #[tokio::test]
    async fn test_move_foreign_note_denied() {
        let f = setup().await;
        let service = NoteService::new(&f.db);

        let note = service
            .create(f.alice, "Quiz", "", Some(f.alice_folder))
            .await
            .unwrap();

        let result = service
            .move_to_folder(f.bob, note.id, Some(f.bob_folder))
            .await;
        assert!(matches!(result, Err(NotetectError::Forbidden)));
    }

    #[tokio::test]
    async fn test_list_in_folder_scoped() {
        let f = setup().await;
        let service = NoteService::new(&f.db);

        service
            .create(f.alice, "Quiz", "", Some(f.alice_folder))
            .await
            .unwrap();

        let notes = service
            .list_in_folder(f.alice, f.alice_folder)
            .await
            .unwrap();
        assert_eq!(notes.len(), 1);

        assert!(service.list_in_folder(f.bob, f.alice_folder).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_by_owner_only() {
        let f = setup().await;
        let service = NoteService::new(&f.db);

        let note = service.create(f.alice, "Quiz", "", None).await.unwrap();

        assert!(service.delete(f.bob, note.id).await.is_err());
        assert!(service.delete(f.alice, note.id).await.is_ok());
        assert!(service.list(f.alice).await.unwrap().is_empty());
    }
}
