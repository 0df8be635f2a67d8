use figment::Jail;
use pretty_assertions::assert_eq;
use probe_config::{ProbeConfig, TargetOverrides};

/// Point the user config directory into the jail so a real global file cannot leak in.
fn isolate_home(jail: &mut Jail) {
    let home = jail.directory().display().to_string();
    jail.set_env("HOME", &home);
    jail.set_env("XDG_CONFIG_HOME", format!("{home}/.config"));
}

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.set_env("PROBE_TARGET__BASE_URL", "http://127.0.0.1:18080");
        jail.set_env("PROBE_PRINCIPALS__ADMIN", "superuser");
        jail.set_env("PROBE_FIXTURES__WHITELIST_USER_ID", "42");

        let config = ProbeConfig::load().expect("config loads");
        assert_eq!(config.target.base_url, "http://127.0.0.1:18080");
        assert_eq!(config.principals.admin, "superuser");
        assert_eq!(config.fixtures.whitelist_user_id, 42);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file(
            "probe.toml",
            r#"
[target]
timeout_secs = 10
"#,
        )?;
        jail.set_env("PROBE_TARGET__TIMEOUT_SECS", "3");

        let config = ProbeConfig::load().expect("config loads");
        assert_eq!(config.target.timeout_secs, 3);
        Ok(())
    });
}

#[test]
fn command_line_beats_env() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.set_env("PROBE_TARGET__INSECURE", "false");

        let overrides = TargetOverrides {
            insecure: Some(true),
            ..TargetOverrides::default()
        };
        let config = ProbeConfig::load_with_overrides(&overrides).expect("config loads");
        assert!(config.target.insecure);
        Ok(())
    });
}

#[test]
fn zero_timeout_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.set_env("PROBE_TARGET__TIMEOUT_SECS", "0");
        assert!(ProbeConfig::load().is_err());
        Ok(())
    });
}
