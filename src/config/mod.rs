//! Application configuration module
//!
//! Profile selection, the base layer and profile overlays, and the
//! resolver that merges them into an immutable [`Settings`] snapshot.

mod checks;
mod constants;
mod env;
mod hosts;
mod layers;
mod profile;
mod resolver;
mod settings;

pub use checks::{run_checks, CheckLevel, CheckMessage};
pub use constants::*;
pub use env::{load_env_file, read_env_file, EnvSource, MapEnv, ProcessEnv};
pub use hosts::{parse_host_list, HostPattern};
pub use layers::{BaseLayer, Overlay};
pub use profile::Profile;
pub use resolver::{resolve, Resolver};
pub use settings::{DatabaseSettings, Settings, TemplateBackend, TemplateOptions};
