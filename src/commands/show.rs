//! Show command - Print the resolved settings.

use std::io::Write;

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::{EnvSource, Resolver};
use crate::errors::ConfigResult;

/// Execute the show command
pub fn execute<E, W>(args: ShowArgs, resolver: &Resolver, env: &E, out: &mut W) -> ConfigResult<()>
where
    E: EnvSource + ?Sized,
    W: Write,
{
    let settings = resolver.resolve(env)?;

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &settings)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            if let serde_json::Value::Object(map) = settings.to_value()? {
                for (name, value) in map {
                    writeln!(out, "{} = {}", name, value)?;
                }
            }
        }
    }

    Ok(())
}
