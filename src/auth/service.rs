//! Authentication facade for notetect.
//!
//! The only auth entry point the routing layer calls: signup, login,
//! session resolution, and profile/password updates. Logout has no
//! server-side effect - tokens are not tracked, so clearing the transport
//! cookie is all there is; an unexpired token presented again still
//! validates. That is a property of the stateless session design, not a
//! bug in this facade.

use tracing::{info, warn};

use crate::auth::password::{hash_password, validate_password, verify_password};
use crate::auth::token::TokenService;
use crate::auth::AuthenticatedIdentity;
use crate::db::{Database, NewUser, UserRepository, UserUpdate};
use crate::{NotetectError, Result};

/// Public view of a user account: everything a client may see.
/// The password hash never leaves this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// User ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// An established session: the profile plus the bearer token to hand back
/// to the transport.
#[derive(Debug, Clone)]
pub struct EstablishedSession {
    /// The authenticated user's public profile.
    pub user: UserProfile,
    /// Signed session token.
    pub token: String,
}

/// Authentication facade over the credential store, password hasher, and
/// token service.
pub struct AuthService<'a> {
    db: &'a Database,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService.
    pub fn new(db: &'a Database, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Register a new account and establish a session for it.
    ///
    /// The email is pre-checked for a clean `EmailInUse` error; the UNIQUE
    /// constraint in the store still backstops concurrent signups.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<EstablishedSession> {
        let repo = UserRepository::new(self.db.pool());

        if repo.exists_by_email(email).await? {
            return Err(NotetectError::EmailInUse);
        }

        validate_password(password)
            .map_err(|e| NotetectError::Validation(e.to_string()))?;

        let password_hash = hash_password(password)
            .map_err(|e| NotetectError::Validation(e.to_string()))?;

        let user = repo.create(&NewUser::new(name, email, password_hash)).await?;

        info!(user_id = user.id, "New account registered");

        let token = self.tokens.issue(user.id)?;
        Ok(EstablishedSession {
            user: UserProfile {
                id: user.id,
                name: user.name,
                email: user.email,
            },
            token,
        })
    }

    /// Authenticate with email and password and establish a session.
    ///
    /// An unknown email and a wrong password produce the identical
    /// `InvalidCredentials` error; the password is verified even though the
    /// caller can't tell, so nothing about account existence leaks through
    /// the error.
    pub async fn login(&self, email: &str, password: &str) -> Result<EstablishedSession> {
        let repo = UserRepository::new(self.db.pool());

        let user = repo
            .get_by_email(email)
            .await?
            .ok_or(NotetectError::InvalidCredentials)?;

        verify_password(password, &user.password).map_err(|_| {
            warn!(user_id = user.id, "Login failed: wrong password");
            NotetectError::InvalidCredentials
        })?;

        info!(user_id = user.id, "Login successful");

        let token = self.tokens.issue(user.id)?;
        Ok(EstablishedSession {
            user: UserProfile {
                id: user.id,
                name: user.name,
                email: user.email,
            },
            token,
        })
    }

    /// Resolve a session token to an authenticated identity.
    ///
    /// Delegates to token validation, then confirms the bound user still
    /// exists: a valid token for a since-removed account is just as invalid
    /// as a bad signature.
    pub async fn resolve_session(&self, token: &str) -> Result<AuthenticatedIdentity> {
        let user_id = self.tokens.validate(token)?;

        let repo = UserRepository::new(self.db.pool());
        let exists = repo.get_by_id(user_id).await?.is_some();
        if !exists {
            return Err(NotetectError::InvalidSession);
        }

        Ok(AuthenticatedIdentity::new(user_id))
    }

    /// Load the public profile for an authenticated identity.
    pub async fn current_user(&self, identity: AuthenticatedIdentity) -> Result<UserProfile> {
        let repo = UserRepository::new(self.db.pool());
        let user = repo
            .get_by_id(identity.user_id())
            .await?
            .ok_or(NotetectError::InvalidSession)?;

        Ok(UserProfile {
            id: user.id,
            name: user.name,
            email: user.email,
        })
    }

    /// Update the display name of the authenticated user.
    pub async fn update_name(
        &self,
        identity: AuthenticatedIdentity,
        new_name: &str,
    ) -> Result<UserProfile> {
        if new_name.trim().is_empty() {
            return Err(NotetectError::Validation("name must not be empty".to_string()));
        }

        let repo = UserRepository::new(self.db.pool());
        let user = repo
            .update(identity.user_id(), &UserUpdate::new().name(new_name))
            .await?
            .ok_or(NotetectError::InvalidSession)?;

        Ok(UserProfile {
            id: user.id,
            name: user.name,
            email: user.email,
        })
    }

    /// Change the authenticated user's password.
    ///
    /// The current password is re-verified first. A wrong current password
    /// is a validation failure on this already-authenticated request, not
    /// an `InvalidCredentials` login error.
    pub async fn update_password(
        &self,
        identity: AuthenticatedIdentity,
        current_password: &str,
        new_password: &str,
    ) -> Result<()> {
        let repo = UserRepository::new(self.db.pool());
        let user = repo
            .get_by_id(identity.user_id())
            .await?
            .ok_or(NotetectError::InvalidSession)?;

        verify_password(current_password, &user.password).map_err(|_| {
            NotetectError::Validation("current password is incorrect".to_string())
        })?;

        validate_password(new_password)
            .map_err(|e| NotetectError::Validation(e.to_string()))?;

        let new_hash = hash_password(new_password)
            .map_err(|e| NotetectError::Validation(e.to_string()))?;

        repo.update(user.id, &UserUpdate::new().password(new_hash))
            .await?;

        info!(user_id = user.id, "Password changed");
        Ok(())
    }
}
