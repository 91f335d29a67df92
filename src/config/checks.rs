//! Startup system checks over a merged settings snapshot.
//!
//! Error-level findings stop resolution; warnings are only logged.

use serde::Serialize;

use super::constants::{
    APP_ADMIN, APP_AUTH, APP_CONTENTTYPES, APP_MESSAGES, APP_SESSIONS, CONTEXT_PROCESSOR_AUTH,
    CONTEXT_PROCESSOR_MESSAGES, CONTEXT_PROCESSOR_REQUEST, MIDDLEWARE_AUTHENTICATION,
    MIDDLEWARE_MESSAGE, MIDDLEWARE_SESSION, SECRET_KEY_VAR, TEMPLATE_BACKEND_DJANGO,
};
use super::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    Warning,
    Error,
}

/// A single system check finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckMessage {
    pub id: &'static str,
    pub level: CheckLevel,
    pub message: String,
}

impl CheckMessage {
    fn error(id: &'static str, message: impl Into<String>) -> Self {
        Self {
            id,
            level: CheckLevel::Error,
            message: message.into(),
        }
    }

    fn warning(id: &'static str, message: impl Into<String>) -> Self {
        Self {
            id,
            level: CheckLevel::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == CheckLevel::Error
    }
}

impl std::fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.message)
    }
}

/// Stages that must appear in this relative order when present.
const ORDERED_STAGES: &[&str] = &[
    MIDDLEWARE_SESSION,
    MIDDLEWARE_AUTHENTICATION,
    MIDDLEWARE_MESSAGE,
];

const ADMIN_APPS: &[&str] = &[APP_AUTH, APP_CONTENTTYPES, APP_SESSIONS, APP_MESSAGES];

const ADMIN_MIDDLEWARE: &[&str] = &[
    MIDDLEWARE_AUTHENTICATION,
    MIDDLEWARE_SESSION,
    MIDDLEWARE_MESSAGE,
];

const ADMIN_CONTEXT_PROCESSORS: &[&str] = &[
    CONTEXT_PROCESSOR_REQUEST,
    CONTEXT_PROCESSOR_AUTH,
    CONTEXT_PROCESSOR_MESSAGES,
];

/// Run every check and return all findings, errors and warnings alike.
pub fn run_checks(settings: &Settings) -> Vec<CheckMessage> {
    let mut messages = Vec::new();
    check_middleware_order(settings, &mut messages);
    check_admin_dependencies(settings, &mut messages);
    check_profile_safety(settings, &mut messages);
    messages
}

fn check_middleware_order(settings: &Settings, messages: &mut Vec<CheckMessage>) {
    let positions: Vec<(&str, usize)> = ORDERED_STAGES
        .iter()
        .filter_map(|stage| settings.middleware_position(stage).map(|pos| (*stage, pos)))
        .collect();

    for pair in positions.windows(2) {
        let (earlier, earlier_pos) = pair[0];
        let (later, later_pos) = pair[1];
        if later_pos < earlier_pos {
            messages.push(CheckMessage::error(
                "settings.E001",
                format!("'{}' must come before '{}' in MIDDLEWARE", earlier, later),
            ));
        }
    }
}

fn check_admin_dependencies(settings: &Settings, messages: &mut Vec<CheckMessage>) {
    if !settings.has_app(APP_ADMIN) {
        return;
    }

    for app in ADMIN_APPS {
        if !settings.has_app(app) {
            messages.push(CheckMessage::error(
                "settings.E002",
                format!("'{}' must be in INSTALLED_APPS to use the admin", app),
            ));
        }
    }

    for stage in ADMIN_MIDDLEWARE {
        if settings.middleware_position(stage).is_none() {
            messages.push(CheckMessage::error(
                "settings.E003",
                format!("'{}' must be in MIDDLEWARE to use the admin", stage),
            ));
        }
    }

    let backend = settings
        .templates
        .iter()
        .find(|t| t.backend == TEMPLATE_BACKEND_DJANGO);
    match backend {
        Some(backend) => {
            for processor in ADMIN_CONTEXT_PROCESSORS {
                if !backend.has_context_processor(processor) {
                    messages.push(CheckMessage::error(
                        "settings.E004",
                        format!(
                            "'{}' must be enabled in the templates backend to use the admin",
                            processor
                        ),
                    ));
                }
            }
        }
        None => messages.push(CheckMessage::error(
            "settings.E004",
            format!("a '{}' instance must be configured in TEMPLATES", TEMPLATE_BACKEND_DJANGO),
        )),
    }
}

fn check_profile_safety(settings: &Settings, messages: &mut Vec<CheckMessage>) {
    if settings.profile.is_production() {
        if settings.debug {
            messages.push(CheckMessage::error(
                "settings.E005",
                "DEBUG must be false in production",
            ));
        }
        if settings.allowed_hosts.is_empty() || settings.allowed_hosts.iter().any(|h| h.is_wildcard())
        {
            messages.push(CheckMessage::error(
                "settings.E006",
                "ALLOWED_HOSTS must list explicit hosts in production",
            ));
        }
    } else if settings.has_insecure_secret_key() {
        messages.push(CheckMessage::warning(
            "settings.W001",
            format!("{} is the insecure development placeholder", SECRET_KEY_VAR),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::MIDDLEWARE_CSRF;
    use crate::config::hosts::HostPattern;
    use crate::config::layers::{BaseLayer, Overlay};
    use crate::config::profile::Profile;

    fn settings_from(base: BaseLayer, overlay: Overlay) -> Settings {
        Settings::merge(base, overlay)
    }

    fn ids(messages: &[CheckMessage]) -> Vec<&'static str> {
        messages.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_default_development_only_warns_about_secret() {
        let settings = settings_from(BaseLayer::default(), Overlay::empty(Profile::Development));
        let messages = run_checks(&settings);
        assert_eq!(ids(&messages), vec!["settings.W001"]);
        assert!(!messages[0].is_error());
    }

    #[test]
    fn test_reordered_middleware_is_flagged() {
        let mut base = BaseLayer::default();
        base.middleware = vec![
            MIDDLEWARE_AUTHENTICATION.to_string(),
            MIDDLEWARE_SESSION.to_string(),
            MIDDLEWARE_MESSAGE.to_string(),
        ];
        let messages = run_checks(&settings_from(base, Overlay::empty(Profile::Development)));
        assert!(ids(&messages).contains(&"settings.E001"));
    }

    #[test]
    fn test_admin_requires_dependencies() {
        let mut base = BaseLayer::default();
        base.installed_apps.retain(|app| app != APP_SESSIONS);
        base.middleware.retain(|stage| stage != MIDDLEWARE_MESSAGE);
        base.templates[0]
            .options
            .context_processors
            .retain(|p| p != CONTEXT_PROCESSOR_REQUEST);

        let messages = run_checks(&settings_from(base, Overlay::empty(Profile::Development)));
        let found = ids(&messages);
        assert!(found.contains(&"settings.E002"));
        assert!(found.contains(&"settings.E003"));
        assert!(found.contains(&"settings.E004"));
    }

    #[test]
    fn test_unrelated_middleware_does_not_affect_order() {
        let mut base = BaseLayer::default();
        base.middleware.insert(0, MIDDLEWARE_CSRF.to_string());
        let messages = run_checks(&settings_from(base, Overlay::empty(Profile::Development)));
        assert!(messages.iter().all(|m| !m.is_error()));
    }

    #[test]
    fn test_production_wildcard_and_debug_are_errors() {
        let overlay = Overlay {
            debug: Some(true),
            allowed_hosts: Some(vec![HostPattern::Any]),
            ..Overlay::empty(Profile::Production)
        };
        let messages = run_checks(&settings_from(BaseLayer::default(), overlay));
        let found = ids(&messages);
        assert!(found.contains(&"settings.E005"));
        assert!(found.contains(&"settings.E006"));
    }

    #[test]
    fn test_display() {
        let message = CheckMessage::error("settings.E005", "DEBUG must be false in production");
        assert_eq!(
            message.to_string(),
            "settings.E005: DEBUG must be false in production"
        );
    }
}
