//! Integration tests for TOML + env configuration loading.
//!
//! Uses figment::Jail for sandboxed env var and file manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use forum_config::ForumConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[listing]
page_size = 25

[pseudonym]
max_attempts = 50
sweep_on_exhaustion = false
seed = 42

[posting]
min_title_len = 15
"#,
        )?;

        let config: ForumConfig = Figment::from(Serialized::defaults(ForumConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.listing.page_size, 25);
        assert_eq!(config.pseudonym.max_attempts, 50);
        assert!(!config.pseudonym.sweep_on_exhaustion);
        assert_eq!(config.pseudonym.seed, Some(42));
        assert_eq!(config.posting.min_title_len, 15);
        assert_eq!(config.posting.min_description_len, 20);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".forum")?;
        jail.create_file(".forum/config.toml", "[listing]\npage_size = 5\n")?;

        let config = ForumConfig::load().expect("config loads");
        assert_eq!(config.listing.page_size, 5);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".forum")?;
        jail.create_file(".forum/config.toml", "[listing]\npage_size = 5\n")?;
        jail.set_env("FORUM_LISTING__PAGE_SIZE", "12");
        jail.set_env("FORUM_MODERATION__MAX_LINKS", "3");

        let config = ForumConfig::load().expect("config loads");
        assert_eq!(config.listing.page_size, 12);
        assert_eq!(config.moderation.max_links, 3);
        Ok(())
    });
}

#[test]
fn invalid_page_size_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("FORUM_LISTING__PAGE_SIZE", "0");

        let figment = Figment::from(Serialized::defaults(ForumConfig::default()))
            .merge(Env::prefixed("FORUM_").split("__"));
        let err = ForumConfig::from_figment(&figment).unwrap_err();
        assert!(err.to_string().contains("page_size"));
        Ok(())
    });
}

#[test]
fn admin_credentials_come_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("FORUM_AUTH__ADMIN_EMAIL", "mod@example.org");
        jail.set_env("FORUM_AUTH__ADMIN_PASSWORD", "s3cret");

        let config = ForumConfig::load().expect("config loads");
        assert_eq!(config.auth.admin_email, "mod@example.org");
        assert_eq!(config.auth.admin_password, "s3cret");
        assert_eq!(config.auth.admin_name, "Admin User");
        Ok(())
    });
}
