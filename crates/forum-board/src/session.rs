//! Demo sign-in.
//!
//! There are no accounts. The configured admin credentials, compared as
//! plain text, give an admin session. Every other sign-in succeeds as a
//! member named after the given name or the email's local part.

use forum_config::AuthConfig;
use forum_core::entities::AuthorDescriptor;
use forum_core::enums::Role;
use serde::Serialize;

use crate::board::ForumBoard;
use crate::error::BoardError;

const ADMIN_USER_ID: &str = "admin-001";
const ADMIN_INITIALS: &str = "AD";

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub initials: String,
    pub role: Role,
}

impl Session {
    /// Author shown on questions and answers posted in this session.
    #[must_use]
    pub fn author(&self) -> AuthorDescriptor {
        AuthorDescriptor {
            name: self.name.clone(),
            initials: self.initials.clone(),
        }
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// First character of every space-separated word in `name`, uppercased.
fn name_initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}

/// First two characters of `email`, uppercased.
fn email_initials(email: &str) -> String {
    email.chars().take(2).collect::<String>().to_uppercase()
}

/// Sign in.
///
/// # Errors
///
/// Returns `Validation` when `email` is blank.
pub fn login(
    auth: &AuthConfig,
    email: &str,
    password: &str,
    name: Option<&str>,
) -> Result<Session, BoardError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(BoardError::validation("email is required to sign in"));
    }

    if email == auth.admin_email && password == auth.admin_password {
        tracing::info!(email, "session: admin signed in");
        return Ok(Session {
            user_id: ADMIN_USER_ID.to_string(),
            name: auth.admin_name.clone(),
            email: email.to_string(),
            initials: ADMIN_INITIALS.to_string(),
            role: Role::Admin,
        });
    }

    let name = name.map(str::trim).filter(|n| !n.is_empty());
    let local_part = email.split('@').next().unwrap_or(email);
    let session = Session {
        user_id: format!("user-{local_part}"),
        name: name.unwrap_or(local_part).to_string(),
        email: email.to_string(),
        initials: name.map_or_else(|| email_initials(email), name_initials),
        role: Role::Member,
    };
    tracing::info!(email, "session: member signed in");
    Ok(session)
}

impl ForumBoard {
    /// Sign in against this board's configured admin credentials.
    ///
    /// # Errors
    ///
    /// Same as [`login`].
    pub fn login(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<Session, BoardError> {
        login(&self.config().auth, email, password, name)
    }
}
