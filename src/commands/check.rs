//! Check command - Run system checks against the resolved settings.

use std::io::Write;

use crate::config::{EnvSource, Resolver};
use crate::errors::{ConfigError, ConfigResult};

/// Execute the check command
pub fn execute<E, W>(resolver: &Resolver, env: &E, out: &mut W) -> ConfigResult<()>
where
    E: EnvSource + ?Sized,
    W: Write,
{
    tracing::info!("Running system checks...");

    let (settings, warnings) = match resolver.resolve_with_warnings(env) {
        Ok(resolved) => resolved,
        Err(ConfigError::FailedChecks(errors)) => {
            for error in &errors {
                writeln!(out, "ERROR {}", error)?;
            }
            return Err(ConfigError::FailedChecks(errors));
        }
        Err(e) => return Err(e),
    };

    for warning in &warnings {
        writeln!(out, "WARNING {}", warning)?;
    }
    writeln!(
        out,
        "System check identified {} issue(s) for profile {}.",
        warnings.len(),
        settings.profile
    )?;

    Ok(())
}
