//! User model and repository for notetect.
//!
//! This is the credential store adapter: it is the only place user records
//! are looked up or persisted, and it never sees a plaintext password -
//! callers hash before saving.

use sqlx::{QueryBuilder, SqlitePool};

use crate::{NotetectError, Result};

/// User entity representing a registered account.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address (unique, natural login key).
    pub email: String,
    /// Password hash (Argon2 PHC string).
    pub password: String,
    /// Account creation timestamp.
    pub created_at: String,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Password hash (must be pre-hashed with Argon2).
    pub password: String,
}

impl NewUser {
    /// Create a new user record.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Data for updating an existing user.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New password hash (if changing password).
    pub password: Option<String>,
}

impl UserUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a new password hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.password.is_none()
    }
}

/// Repository for user CRUD operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user in the database.
    ///
    /// Returns the created user with the assigned ID. Email uniqueness is
    /// enforced here by the UNIQUE constraint; a duplicate insert surfaces
    /// as `EmailInUse`.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let result = sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
            .bind(&new_user.name)
            .bind(&new_user.email)
            .bind(&new_user.password)
            .execute(self.pool)
            .await
            .map_err(|e| {
                if e.to_string().contains("UNIQUE") {
                    NotetectError::EmailInUse
                } else {
                    NotetectError::Database(e.to_string())
                }
            })?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| NotetectError::NotFound("user".to_string()))
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// Get a user by email (case-insensitive).
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, created_at
             FROM users WHERE email = ? COLLATE NOCASE",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// Check whether a user exists with the given email (case-insensitive).
    pub async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = ? COLLATE NOCASE)")
                .bind(email)
                .fetch_one(self.pool)
                .await?;

        Ok(exists)
    }

    /// Update a user by ID.
    ///
    /// Only fields that are set in the update will be modified.
    /// Returns the updated user, or None if not found.
    pub async fn update(&self, id: i64, update: &UserUpdate) -> Result<Option<User>> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE users SET ");
        let mut separated = query.separated(", ");

        if let Some(ref name) = update.name {
            separated.push("name = ");
            separated.push_bind_unseparated(name);
        }
        if let Some(ref password) = update.password {
            separated.push("password = ");
            separated.push_bind_unseparated(password);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query.build().execute(self.pool).await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn setup() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        let user = repo
            .create(&NewUser::new("Alice", "alice@example.com", "$argon2id$hash"))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");

        let fetched = repo.get_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(fetched.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_get_by_email_case_insensitive() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("Alice", "alice@example.com", "h"))
            .await
            .unwrap();

        let fetched = repo.get_by_email("ALICE@EXAMPLE.COM").await.unwrap();
        assert!(fetched.is_some());
    }

    #[tokio::test]
    async fn test_get_by_email_missing() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        let fetched = repo.get_by_email("nobody@example.com").await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_exists_by_email() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        assert!(!repo.exists_by_email("alice@example.com").await.unwrap());

        repo.create(&NewUser::new("Alice", "alice@example.com", "h"))
            .await
            .unwrap();

        assert!(repo.exists_by_email("alice@example.com").await.unwrap());
        assert!(repo.exists_by_email("Alice@Example.Com").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_email_in_use() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("Alice", "alice@example.com", "h"))
            .await
            .unwrap();

        let result = repo
            .create(&NewUser::new("Imposter", "alice@example.com", "h2"))
            .await;

        assert!(matches!(result, Err(NotetectError::EmailInUse)));
    }

    #[tokio::test]
    async fn test_update_name() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        let user = repo
            .create(&NewUser::new("Alice", "alice@example.com", "h"))
            .await
            .unwrap();

        let updated = repo
            .update(user.id, &UserUpdate::new().name("Alice B."))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Alice B.");
        assert_eq!(updated.password, "h");
    }

    #[tokio::test]
    async fn test_update_password() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        let user = repo
            .create(&NewUser::new("Alice", "alice@example.com", "old"))
            .await
            .unwrap();

        let updated = repo
            .update(user.id, &UserUpdate::new().password("new"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.password, "new");
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        let updated = repo.update(999, &UserUpdate::new().name("X")).await.unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_empty_update_returns_current() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        let user = repo
            .create(&NewUser::new("Alice", "alice@example.com", "h"))
            .await
            .unwrap();

        let same = repo.update(user.id, &UserUpdate::new()).await.unwrap().unwrap();
        assert_eq!(same.name, "Alice");
    }
}
