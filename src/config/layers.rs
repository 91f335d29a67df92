//! Base layer and profile overlays.
//!
//! The base layer carries defaults shared by every profile. An overlay only
//! sets the values its profile owns; `None` means "keep the base value".

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::constants::{
    ALLOWED_HOSTS_VAR, BASE_DIR_VAR, CONTEXT_PROCESSORS, DB_ENGINE_POSTGRESQL, DB_HOST_VAR,
    DB_NAME_VAR, DB_PASSWORD_VAR, DB_PORT_VAR, DB_USER_VAR, DEFAULT_AUTO_FIELD,
    DEFAULT_DATABASE_ALIAS, DEFAULT_DB_HOST, DEFAULT_DB_PORT, INSECURE_SECRET_KEY, INSTALLED_APPS,
    LANGUAGE_CODE, MIDDLEWARE, MIN_SECRET_KEY_LENGTH, ROOT_URLCONF, SECRET_KEY_VAR, STATIC_URL,
    TEMPLATE_BACKEND_DJANGO, TIME_ZONE, USE_I18N, USE_TZ, WSGI_APPLICATION,
};
use super::env::EnvSource;
use super::hosts::{parse_host_list, HostPattern};
use super::profile::Profile;
use super::settings::{DatabaseSettings, TemplateBackend, TemplateOptions};
use crate::errors::{ConfigError, ConfigResult};

/// Shared defaults applicable to every profile.
#[derive(Debug, Clone)]
pub struct BaseLayer {
    pub base_dir: PathBuf,
    pub secret_key: String,
    pub debug: bool,
    pub allowed_hosts: Vec<HostPattern>,
    pub installed_apps: Vec<String>,
    pub middleware: Vec<String>,
    pub root_urlconf: String,
    pub wsgi_application: String,
    pub templates: Vec<TemplateBackend>,
    pub databases: BTreeMap<String, DatabaseSettings>,
    pub language_code: String,
    pub time_zone: String,
    pub use_i18n: bool,
    pub use_tz: bool,
    pub static_url: String,
    pub default_auto_field: String,
}

impl Default for BaseLayer {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            secret_key: INSECURE_SECRET_KEY.to_string(),
            debug: false,
            allowed_hosts: Vec::new(),
            installed_apps: to_strings(INSTALLED_APPS),
            middleware: to_strings(MIDDLEWARE),
            root_urlconf: ROOT_URLCONF.to_string(),
            wsgi_application: WSGI_APPLICATION.to_string(),
            templates: vec![TemplateBackend {
                backend: TEMPLATE_BACKEND_DJANGO.to_string(),
                dirs: Vec::new(),
                app_dirs: true,
                options: TemplateOptions {
                    context_processors: to_strings(CONTEXT_PROCESSORS),
                },
            }],
            databases: BTreeMap::new(),
            language_code: LANGUAGE_CODE.to_string(),
            time_zone: TIME_ZONE.to_string(),
            use_i18n: USE_I18N,
            use_tz: USE_TZ,
            static_url: STATIC_URL.to_string(),
            default_auto_field: DEFAULT_AUTO_FIELD.to_string(),
        }
    }
}

impl BaseLayer {
    /// Build the base layer, taking `SECRET_KEY` and `BASE_DIR` from the
    /// environment when set.
    pub fn load<E: EnvSource + ?Sized>(env: &E) -> ConfigResult<Self> {
        let base_dir = non_empty(env, BASE_DIR_VAR)?
            .map(PathBuf::from)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        let secret_key =
            non_empty(env, SECRET_KEY_VAR)?.unwrap_or_else(|| INSECURE_SECRET_KEY.to_string());

        Ok(Self {
            base_dir,
            secret_key,
            ..Self::default()
        })
    }
}

/// Profile-specific values layered over the base.
#[derive(Debug, Clone)]
pub struct Overlay {
    pub profile: Profile,
    pub secret_key: Option<String>,
    pub debug: Option<bool>,
    pub allowed_hosts: Option<Vec<HostPattern>>,
    pub databases: Option<BTreeMap<String, DatabaseSettings>>,
}

impl Overlay {
    /// An overlay that overrides nothing.
    pub fn empty(profile: Profile) -> Self {
        Self {
            profile,
            secret_key: None,
            debug: None,
            allowed_hosts: None,
            databases: None,
        }
    }

    /// Load the overlay for a profile.
    pub fn load<E: EnvSource + ?Sized>(profile: Profile, env: &E) -> ConfigResult<Self> {
        match profile {
            Profile::Development => Self::development(env),
            Profile::Production => Self::production(env),
        }
    }

    /// Development: verbose diagnostics, any host, and datastore
    /// credentials read without a presence check.
    pub fn development<E: EnvSource + ?Sized>(env: &E) -> ConfigResult<Self> {
        let database = DatabaseSettings::new(
            DB_ENGINE_POSTGRESQL,
            env.var(DB_NAME_VAR)?.unwrap_or_default(),
            env.var(DB_USER_VAR)?.unwrap_or_default(),
            env.var(DB_PASSWORD_VAR)?.unwrap_or_default(),
            DEFAULT_DB_HOST,
            DEFAULT_DB_PORT,
        );

        if !database.is_complete() {
            tracing::warn!(
                "Database credentials incomplete ({}, {}, {}); connections will fail at request time",
                DB_NAME_VAR,
                DB_USER_VAR,
                DB_PASSWORD_VAR
            );
        }

        Ok(Self {
            profile: Profile::Development,
            secret_key: None,
            debug: Some(true),
            allowed_hosts: Some(vec![HostPattern::Any]),
            databases: Some(single_database(database)),
        })
    }

    /// Production: every security-sensitive value must be present, and the
    /// first one missing or malformed aborts loading.
    pub fn production<E: EnvSource + ?Sized>(env: &E) -> ConfigResult<Self> {
        let secret_key = required(env, SECRET_KEY_VAR)?;
        if secret_key == INSECURE_SECRET_KEY {
            return Err(ConfigError::insecure(
                SECRET_KEY_VAR,
                "the development placeholder cannot be used in production",
            ));
        }
        if secret_key.chars().count() < MIN_SECRET_KEY_LENGTH {
            return Err(ConfigError::insecure(
                SECRET_KEY_VAR,
                format!("must be at least {} characters long", MIN_SECRET_KEY_LENGTH),
            ));
        }

        let raw_hosts = required(env, ALLOWED_HOSTS_VAR)?;
        let allowed_hosts = parse_host_list(&raw_hosts);
        if allowed_hosts.is_empty() {
            return Err(ConfigError::invalid(
                ALLOWED_HOSTS_VAR,
                raw_hosts,
                "expected at least one host",
            ));
        }

        let name = required(env, DB_NAME_VAR)?;
        let user = required(env, DB_USER_VAR)?;
        let password = required(env, DB_PASSWORD_VAR)?;
        let host = non_empty(env, DB_HOST_VAR)?.unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
        let port = match non_empty(env, DB_PORT_VAR)? {
            Some(raw) => parse_port(DB_PORT_VAR, &raw)?,
            None => DEFAULT_DB_PORT,
        };

        let database = DatabaseSettings::new(DB_ENGINE_POSTGRESQL, name, user, password, host, port);
        // Reject hosts the ORM could not connect to
        database.url()?;

        Ok(Self {
            profile: Profile::Production,
            secret_key: Some(secret_key),
            debug: Some(false),
            allowed_hosts: Some(allowed_hosts),
            databases: Some(single_database(database)),
        })
    }
}

/// Read a variable that must be present and non-blank.
fn required<E: EnvSource + ?Sized>(env: &E, key: &str) -> ConfigResult<String> {
    non_empty(env, key)?.ok_or_else(|| ConfigError::missing(key))
}

fn non_empty<E: EnvSource + ?Sized>(env: &E, key: &str) -> ConfigResult<Option<String>> {
    Ok(env.var(key)?.filter(|value| !value.trim().is_empty()))
}

fn parse_port(key: &str, raw: &str) -> ConfigResult<u16> {
    match raw.trim().parse::<u16>() {
        Ok(0) => Err(ConfigError::invalid(key, raw, "port must be non-zero")),
        Ok(port) => Ok(port),
        Err(e) => Err(ConfigError::invalid(key, raw, e.to_string())),
    }
}

fn single_database(database: DatabaseSettings) -> BTreeMap<String, DatabaseSettings> {
    let mut databases = BTreeMap::new();
    databases.insert(DEFAULT_DATABASE_ALIAS.to_string(), database);
    databases
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
