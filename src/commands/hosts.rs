//! Hosts command - Test request hosts against the allowlist.

use std::io::Write;

use crate::cli::args::HostsArgs;
use crate::config::{EnvSource, Resolver};
use crate::errors::ConfigResult;

/// Execute the hosts command
pub fn execute<E, W>(args: HostsArgs, resolver: &Resolver, env: &E, out: &mut W) -> ConfigResult<()>
where
    E: EnvSource + ?Sized,
    W: Write,
{
    let settings = resolver.resolve(env)?;

    for host in &args.hosts {
        let status = if settings.is_host_allowed(host) {
            "allowed"
        } else {
            "rejected"
        };
        writeln!(out, "{}: {}", host, status)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapEnv;

    #[test]
    fn test_production_allowlist() {
        let env = MapEnv::new()
            .set("APP_ENV", "prod")
            .set("SECRET_KEY", "p".repeat(50))
            .set("ALLOWED_HOSTS", ".example.com")
            .set("DB_NAME", "shop")
            .set("DB_USER", "shop_user")
            .set("DB_PASSWORD", "hunter2");
        let args = HostsArgs {
            hosts: vec!["www.example.com:443".to_string(), "evil.test".to_string()],
        };
        let mut out = Vec::new();
        execute(args, &Resolver::new(), &env, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "www.example.com:443: allowed\nevil.test: rejected\n"
        );
    }
}
