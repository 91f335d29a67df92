//! Get command - Print one setting by name.

use std::io::Write;

use crate::cli::args::GetArgs;
use crate::config::{EnvSource, Resolver};
use crate::errors::ConfigResult;

/// Execute the get command
pub fn execute<E, W>(args: GetArgs, resolver: &Resolver, env: &E, out: &mut W) -> ConfigResult<()>
where
    E: EnvSource + ?Sized,
    W: Write,
{
    let settings = resolver.resolve(env)?;
    let value = settings.get(&args.name)?;

    // Print bare strings without JSON quoting
    match value {
        serde_json::Value::String(s) => writeln!(out, "{}", s)?,
        other => writeln!(out, "{}", other)?,
    }

    Ok(())
}
