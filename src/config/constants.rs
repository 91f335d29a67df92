//! Settings names and defaults
//!
//! Centralized location for environment variable names and the literal
//! values that make up the base layer.

// =============================================================================
// Profile Selection
// =============================================================================

/// Environment variable that selects the active profile
pub const PROFILE_SELECTOR_VAR: &str = "APP_ENV";

/// Selector value that chooses the production profile (exact match)
pub const PRODUCTION_SELECTOR: &str = "prod";

/// Environment variable overriding the project root directory
pub const BASE_DIR_VAR: &str = "BASE_DIR";

/// Default env file loaded before resolution
pub const DEFAULT_ENV_FILE: &str = ".env";

// =============================================================================
// Security
// =============================================================================

/// Environment variable holding the secret key
pub const SECRET_KEY_VAR: &str = "SECRET_KEY";

/// Placeholder secret used when `SECRET_KEY` is unset (development only)
pub const INSECURE_SECRET_KEY: &str = "dummy-insecure-key";

/// Minimum secret key length accepted in production
pub const MIN_SECRET_KEY_LENGTH: usize = 50;

/// Environment variable holding the comma-separated host allowlist
pub const ALLOWED_HOSTS_VAR: &str = "ALLOWED_HOSTS";

/// Host pattern that accepts any host
pub const ANY_HOST: &str = "*";

/// Replacement shown wherever a secret would be printed
pub const REDACTED: &str = "[REDACTED]";

// =============================================================================
// Applications & Middleware
// =============================================================================

pub const APP_ADMIN: &str = "django.contrib.admin";
pub const APP_AUTH: &str = "django.contrib.auth";
pub const APP_CONTENTTYPES: &str = "django.contrib.contenttypes";
pub const APP_SESSIONS: &str = "django.contrib.sessions";
pub const APP_MESSAGES: &str = "django.contrib.messages";
pub const APP_STATICFILES: &str = "django.contrib.staticfiles";

/// Installed components, in load order
pub const INSTALLED_APPS: &[&str] = &[
    APP_ADMIN,
    APP_AUTH,
    APP_CONTENTTYPES,
    APP_SESSIONS,
    APP_MESSAGES,
    APP_STATICFILES,
];

pub const MIDDLEWARE_SECURITY: &str = "django.middleware.security.SecurityMiddleware";
pub const MIDDLEWARE_SESSION: &str = "django.contrib.sessions.middleware.SessionMiddleware";
pub const MIDDLEWARE_COMMON: &str = "django.middleware.common.CommonMiddleware";
pub const MIDDLEWARE_CSRF: &str = "django.middleware.csrf.CsrfViewMiddleware";
pub const MIDDLEWARE_AUTHENTICATION: &str =
    "django.contrib.auth.middleware.AuthenticationMiddleware";
pub const MIDDLEWARE_MESSAGE: &str = "django.contrib.messages.middleware.MessageMiddleware";
pub const MIDDLEWARE_CLICKJACKING: &str =
    "django.middleware.clickjacking.XFrameOptionsMiddleware";

/// Request/response processing stages. Each stage may rely on the ones
/// before it, so this order is kept verbatim.
pub const MIDDLEWARE: &[&str] = &[
    MIDDLEWARE_SECURITY,
    MIDDLEWARE_SESSION,
    MIDDLEWARE_COMMON,
    MIDDLEWARE_CSRF,
    MIDDLEWARE_AUTHENTICATION,
    MIDDLEWARE_MESSAGE,
    MIDDLEWARE_CLICKJACKING,
];

// =============================================================================
// URL Dispatch & Server Entry Point
// =============================================================================

pub const ROOT_URLCONF: &str = "config.urls";
pub const WSGI_APPLICATION: &str = "config.wsgi.application";

// =============================================================================
// Internationalization
// =============================================================================

pub const LANGUAGE_CODE: &str = "en-us";
pub const TIME_ZONE: &str = "Africa/Nairobi";
pub const USE_I18N: bool = true;
pub const USE_TZ: bool = true;

// =============================================================================
// Static Files & Models
// =============================================================================

pub const STATIC_URL: &str = "/static/";
pub const DEFAULT_AUTO_FIELD: &str = "django.db.models.BigAutoField";

// =============================================================================
// Templates
// =============================================================================

pub const TEMPLATE_BACKEND_DJANGO: &str = "django.template.backends.django.DjangoTemplates";

pub const CONTEXT_PROCESSOR_DEBUG: &str = "django.template.context_processors.debug";
pub const CONTEXT_PROCESSOR_REQUEST: &str = "django.template.context_processors.request";
pub const CONTEXT_PROCESSOR_AUTH: &str = "django.contrib.auth.context_processors.auth";
pub const CONTEXT_PROCESSOR_MESSAGES: &str =
    "django.contrib.messages.context_processors.messages";

pub const CONTEXT_PROCESSORS: &[&str] = &[
    CONTEXT_PROCESSOR_DEBUG,
    CONTEXT_PROCESSOR_REQUEST,
    CONTEXT_PROCESSOR_AUTH,
    CONTEXT_PROCESSOR_MESSAGES,
];

// =============================================================================
// Database
// =============================================================================

/// Alias of the primary datastore
pub const DEFAULT_DATABASE_ALIAS: &str = "default";

pub const DB_ENGINE_POSTGRESQL: &str = "django.db.backends.postgresql";

pub const DB_NAME_VAR: &str = "DB_NAME";
pub const DB_USER_VAR: &str = "DB_USER";
pub const DB_PASSWORD_VAR: &str = "DB_PASSWORD";
pub const DB_HOST_VAR: &str = "DB_HOST";
pub const DB_PORT_VAR: &str = "DB_PORT";

/// Default database host
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default PostgreSQL port
pub const DEFAULT_DB_PORT: u16 = 5432;
