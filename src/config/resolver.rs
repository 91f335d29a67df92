//! Configuration resolver.
//!
//! Select profile -> load base layer -> load profile overlay -> merge ->
//! run system checks. Runs once, synchronously, before anything else starts.

use super::checks::{run_checks, CheckMessage};
use super::constants::PROFILE_SELECTOR_VAR;
use super::env::EnvSource;
use super::layers::{BaseLayer, Overlay};
use super::profile::Profile;
use super::settings::Settings;
use crate::errors::{ConfigError, ConfigResult};

/// Resolves a [`Settings`] snapshot from an environment source.
#[derive(Debug, Clone)]
pub struct Resolver {
    selector_var: String,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            selector_var: PROFILE_SELECTOR_VAR.to_string(),
        }
    }
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different variable to select the profile.
    pub fn with_selector_var(mut self, name: impl Into<String>) -> Self {
        self.selector_var = name.into();
        self
    }

    pub fn selector_var(&self) -> &str {
        &self.selector_var
    }

    /// Read the selector variable and pick the profile.
    pub fn select_profile<E: EnvSource + ?Sized>(&self, env: &E) -> ConfigResult<Profile> {
        let selector = env.var(&self.selector_var)?;
        let profile = Profile::from_selector(selector.as_deref());
        tracing::debug!(
            selector_var = %self.selector_var,
            selector = selector.as_deref().unwrap_or("<unset>"),
            %profile,
            "Profile selected"
        );
        Ok(profile)
    }

    /// Resolve the full snapshot, failing fast on missing or malformed
    /// production values and on error-level system checks.
    pub fn resolve<E: EnvSource + ?Sized>(&self, env: &E) -> ConfigResult<Settings> {
        self.resolve_with_warnings(env).map(|(settings, _)| settings)
    }

    /// Like [`Resolver::resolve`], also returning the warning-level check
    /// messages the snapshot passed with.
    pub fn resolve_with_warnings<E: EnvSource + ?Sized>(
        &self,
        env: &E,
    ) -> ConfigResult<(Settings, Vec<CheckMessage>)> {
        let profile = self.select_profile(env)?;
        let base = BaseLayer::load(env)?;
        let overlay = Overlay::load(profile, env)?;
        let settings = Settings::merge(base, overlay);

        let (errors, warnings): (Vec<CheckMessage>, Vec<CheckMessage>) = run_checks(&settings)
            .into_iter()
            .partition(CheckMessage::is_error);

        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        if !errors.is_empty() {
            return Err(ConfigError::FailedChecks(errors));
        }

        tracing::info!(
            profile = %settings.profile,
            debug = settings.debug,
            warnings = warnings.len(),
            "Settings resolved"
        );

        Ok((settings, warnings))
    }
}

/// Resolve settings with the default selector variable.
pub fn resolve<E: EnvSource + ?Sized>(env: &E) -> ConfigResult<Settings> {
    Resolver::default().resolve(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::{MapEnv, MockEnvSource};

    #[test]
    fn test_selector_is_read_exactly_once() {
        let mut env = MockEnvSource::new();
        env.expect_var()
            .withf(|key: &str| key == PROFILE_SELECTOR_VAR)
            .times(1)
            .returning(|_| Ok(None));
        env.expect_var()
            .withf(|key: &str| key != PROFILE_SELECTOR_VAR)
            .returning(|_| Ok(None));

        let settings = resolve(&env).unwrap();
        assert_eq!(settings.profile, Profile::Development);
    }

    #[test]
    fn test_custom_selector_var() {
        let env = MapEnv::new()
            .set("DEPLOY_ENV", "prod")
            .set(PROFILE_SELECTOR_VAR, "dev");
        let resolver = Resolver::new().with_selector_var("DEPLOY_ENV");
        assert_eq!(resolver.selector_var(), "DEPLOY_ENV");
        assert_eq!(resolver.select_profile(&env).unwrap(), Profile::Production);
    }

    #[test]
    fn test_unreadable_selector_fails() {
        let mut env = MockEnvSource::new();
        env.expect_var().returning(|key| {
            Err(ConfigError::invalid(
                key,
                "<non-unicode>",
                "value is not valid unicode",
            ))
        });

        let err = resolve(&env).unwrap_err();
        assert_eq!(err.code(), "INVALID_SETTING");
        assert_eq!(err.key(), Some(PROFILE_SELECTOR_VAR));
    }

    #[test]
    fn test_warnings_are_returned_without_errors() {
        let (settings, warnings) = Resolver::new()
            .resolve_with_warnings(&MapEnv::new())
            .unwrap();
        assert_eq!(settings.profile, Profile::Development);
        assert!(!warnings.is_empty());
        assert!(warnings.iter().all(|w| !w.is_error()));
        assert!(warnings.iter().any(|w| w.id == "settings.W001"));
    }

    #[test]
    fn test_no_warnings_for_strong_development_secret() {
        let env = MapEnv::new().set("SECRET_KEY", "local-dev-key");
        let (_, warnings) = Resolver::new().resolve_with_warnings(&env).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_production_missing_secret_fails_before_checks() {
        let env = MapEnv::new().set(PROFILE_SELECTOR_VAR, "prod");
        let err = resolve(&env).unwrap_err();
        assert_eq!(err.code(), "MISSING_SETTING");
        assert_eq!(err.key(), Some("SECRET_KEY"));
    }

    #[test]
    fn test_production_wildcard_host_fails_checks() {
        let env = MapEnv::new()
            .set(PROFILE_SELECTOR_VAR, "prod")
            .set("SECRET_KEY", "x".repeat(64))
            .set("ALLOWED_HOSTS", "*")
            .set("DB_NAME", "shop")
            .set("DB_USER", "shop_user")
            .set("DB_PASSWORD", "hunter2");
        match resolve(&env) {
            Err(ConfigError::FailedChecks(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].id, "settings.E006");
            }
            other => panic!("expected failed checks, got {:?}", other),
        }
    }
}
