use std::{error::Error, fmt::Display};

use clap::CommandFactory;
use tablegen_codegen::{TableGenerator, WriterContext};
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::{AppConfig, Cli, ConnectionProfile};

/// Name under which the resolved connection is registered in the
/// configuration store before discovery runs.
pub const GENERATOR_CONNECTION_NAME: &str = "table-generator";

pub async fn run_generate_command(cli: Cli) -> Result<(), Box<dyn Error>> {
    if cli.verbose {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .try_init();
    } else {
        let filter_layer = EnvFilter::try_new("tablegen_codegen=info").unwrap();
        // stdout carries the generated class only, so all diagnostics go to
        // stderr
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(false)
            .without_time()
            .with_writer(std::io::stderr);

        let _ = tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init();
    }

    let mut config = AppConfig::load()?;
    let profile = resolve_connection_profile(&cli, &mut config)?;
    let url = profile.url()?;

    let context = WriterContext::new(
        &cli.root_namespace,
        &cli.db_namespace,
        &cli.default_connection,
    );

    // Interruption is best effort: the signal may land before, during or
    // after the useful work, and no cleanup is guaranteed.
    let output = tokio::select! {
        output = async {
            TableGenerator::discover(url.as_str(), &profile.schema_name, &cli.table)
                .await?
                .transform()
                .map(|writer| writer.generate(&context))
        } => output?,
        _ = tokio::signal::ctrl_c() => return Err("Abort signal received".into()),
    };

    print!("{}", output.content);

    Ok(())
}

fn resolve_connection_profile(
    cli: &Cli,
    config: &mut AppConfig,
) -> Result<ConnectionProfile, Box<dyn Error>> {
    let profile = match &cli.connection_name {
        Some(connection_name) => match config.connection(connection_name) {
            Ok(profile) => profile,
            Err(err) => {
                // configuration errors print the usage text before bailing out
                Cli::command().print_help()?;
                return Err(err);
            }
        },
        None => ConnectionProfile {
            host: cli.host.clone(),
            user: cli.user.clone(),
            password: cli.password.clone(),
            port: cli.port,
            schema_name: cli.db_name.clone().ok_or("Missing database name")?,
        },
    };

    config.register_connection(GENERATOR_CONNECTION_NAME, &profile);
    config.connection(GENERATOR_CONNECTION_NAME)
}

pub fn handle_error<E>(error: E)
where
    E: Display,
{
    eprintln!("{error}");
    ::std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn full_mode_builds_profile_from_switches() {
        let cli = Cli::parse_from([
            "tablegen", "-h", "db.local", "-u", "reader", "-p", "pw", "-P", "3307", "-d", "mydb",
            "-t", "user", "-r", "Root", "-n", "Db",
        ]);
        let mut config = AppConfig::default();
        let profile = resolve_connection_profile(&cli, &mut config).unwrap();
        assert_eq!(
            profile,
            ConnectionProfile {
                host: "db.local".to_owned(),
                user: "reader".to_owned(),
                password: "pw".to_owned(),
                port: 3307,
                schema_name: "mydb".to_owned(),
            }
        );
    }

    #[test]
    fn resolved_profile_is_registered_in_the_store() {
        let cli = Cli::parse_from([
            "tablegen", "-d", "mydb", "-t", "user", "-r", "Root", "-n", "Db",
        ]);
        let mut config = AppConfig::default();
        resolve_connection_profile(&cli, &mut config).unwrap();
        assert_eq!(
            config
                .get("resource.database.table-generator.ro.database")
                .and_then(|v| v.as_str()),
            Some("mydb")
        );
        assert_eq!(
            config
                .get("resource.database.table-generator.ro.backendType")
                .and_then(|v| v.as_str()),
            Some("mysql")
        );
    }

    #[test]
    fn config_mode_resolves_the_named_connection() {
        let cli = Cli::parse_from([
            "tablegen", "-c", "users_db", "-t", "user", "-r", "Root", "-n", "Db",
        ]);
        let mut config = AppConfig::from_toml_str(
            r#"
            [resource.database.users_db.ro]
            host = "db.example.com"
            database = "users"
        "#,
        )
        .unwrap();
        let profile = resolve_connection_profile(&cli, &mut config).unwrap();
        assert_eq!(profile.host, "db.example.com");
        assert_eq!(profile.schema_name, "users");
        assert_eq!(profile.user, "root");
    }

    #[test]
    fn unknown_named_connection_halts_with_a_configuration_error() {
        let cli = Cli::parse_from([
            "tablegen", "-c", "missing", "-t", "user", "-r", "Root", "-n", "Db",
        ]);
        let mut config = AppConfig::default();
        let err = resolve_connection_profile(&cli, &mut config).unwrap_err();
        assert_eq!(err.to_string(), "Invalid connection configuration");
    }
}
