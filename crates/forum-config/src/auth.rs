//! Demo sign-in settings.
//!
//! The board has no account store. Signing in with these credentials grants
//! the admin role; any other sign-in becomes a member.

use serde::{Deserialize, Serialize};

fn default_admin_email() -> String {
    String::from("admin@xyz.in")
}

fn default_admin_password() -> String {
    String::from("admin")
}

fn default_admin_name() -> String {
    String::from("Admin User")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default = "default_admin_email")]
    pub admin_email: String,

    /// Compared as plain text.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,

    #[serde(default = "default_admin_name")]
    pub admin_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_email: default_admin_email(),
            admin_password: default_admin_password(),
            admin_name: default_admin_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_demo_admin() {
        let config = AuthConfig::default();
        assert_eq!(config.admin_email, "admin@xyz.in");
        assert_eq!(config.admin_password, "admin");
        assert_eq!(config.admin_name, "Admin User");
    }
}
