use clap::{ArgAction, Parser};

/// Command line interface of the table descriptor generator.
///
/// Two mutually exclusive switch groups set up the database connection:
/// either a fully specified connection (`--host`/`--user`/`--password`/
/// `--port`/`--db-name`) or a connection preconfigured in `tablegen.toml`
/// (`--connection-name`). The auto short help flag is disabled so `-h` can
/// keep its historical meaning, the host switch; `--help` still works.
#[derive(Parser, Debug)]
#[command(
    name = "tablegen",
    version,
    about = "Generates table descriptor classes from a MySQL table's schema metadata",
    long_about = "Generates table descriptor classes for the DAO layer and sends the output to \
                  STDOUT. The classes should be reviewed after generation and placed into the \
                  project's common namespace, or the company common namespace if used by several \
                  projects. The database namespace should be the CamelCased version of the \
                  database name.",
    disable_help_flag = true,
    override_usage = "tablegen --db-name <databaseName> --table <tableName> --root-namespace <namespace> --db-namespace <namespace> [options]\n       \
                      tablegen --connection-name <connectionName> --table <tableName> --root-namespace <namespace> --db-namespace <namespace> [options]"
)]
pub struct Cli {
    /// Show debug messages
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// DB server host name. Defaults to "localhost".
    #[arg(short = 'h', long, value_name = "host", default_value = "localhost")]
    pub host: String,

    /// DB server username. Defaults to "root".
    #[arg(short = 'u', long, value_name = "username", default_value = "root")]
    pub user: String,

    /// DB server password for the specified user. Defaults to empty password.
    #[arg(
        short = 'p',
        long,
        value_name = "password",
        default_value = "",
        env = "TABLEGEN_DB_PASSWORD"
    )]
    pub password: String,

    /// DB server port. Defaults to 3306
    #[arg(short = 'P', long, value_name = "port", default_value = "3306")]
    pub port: u16,

    /// Database name
    #[arg(
        short = 'd',
        long,
        value_name = "databaseName",
        required_unless_present = "connection_name"
    )]
    pub db_name: Option<String>,

    /// Configured connection name
    #[arg(
        short = 'c',
        long,
        value_name = "connectionName",
        conflicts_with_all = ["host", "user", "password", "port", "db_name"]
    )]
    pub connection_name: Option<String>,

    /// Table name
    #[arg(short = 't', long, value_name = "tableName")]
    pub table: String,

    /// The name of the default connection should be used by the class
    #[arg(long, value_name = "defaultConnection", default_value = "")]
    pub default_connection: String,

    /// The root namespace to use
    #[arg(short = 'r', long, value_name = "namespace")]
    pub root_namespace: String,

    /// The database namespace to use
    #[arg(short = 'n', long, value_name = "namespace")]
    pub db_namespace: String,

    /// Print help
    #[arg(long, action = ArgAction::HelpLong)]
    help: Option<bool>,
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use clap::Parser;

    use super::*;

    #[test]
    fn full_mode_applies_documented_defaults() {
        let cli = Cli::parse_from([
            "tablegen", "-d", "mydb", "-t", "user", "-r", "MyCompany", "-n", "MyDb",
        ]);
        assert_eq!(cli.host, "localhost");
        assert_eq!(cli.user, "root");
        assert_eq!(cli.password, "");
        assert_eq!(cli.port, 3306);
        assert_eq!(cli.db_name.as_deref(), Some("mydb"));
        assert_eq!(cli.default_connection, "");
        assert!(!cli.verbose);
    }

    #[test]
    fn short_h_means_host_not_help() {
        let cli = Cli::parse_from([
            "tablegen", "-h", "db.local", "-d", "mydb", "-t", "user", "-r", "Root", "-n", "Db",
        ]);
        assert_eq!(cli.host, "db.local");
    }

    #[test]
    fn connection_name_selects_config_mode() {
        let cli = Cli::parse_from([
            "tablegen", "-c", "users_db", "-t", "user", "-r", "Root", "-n", "Db",
        ]);
        assert_eq!(cli.connection_name.as_deref(), Some("users_db"));
        assert_eq!(cli.db_name, None);
    }

    #[test]
    fn connection_name_conflicts_with_full_mode_switches() {
        let err = Cli::try_parse_from([
            "tablegen", "-c", "users_db", "-h", "db.local", "-t", "user", "-r", "Root", "-n", "Db",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = Cli::try_parse_from([
            "tablegen", "-c", "users_db", "-d", "mydb", "-t", "user", "-r", "Root", "-n", "Db",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn db_name_is_required_without_connection_name() {
        let err = Cli::try_parse_from(["tablegen", "-t", "user", "-r", "Root", "-n", "Db"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn table_and_namespaces_are_required_in_both_modes() {
        let err =
            Cli::try_parse_from(["tablegen", "-d", "mydb", "-r", "Root", "-n", "Db"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err =
            Cli::try_parse_from(["tablegen", "-c", "users_db", "-t", "user", "-n", "Db"])
                .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err =
            Cli::try_parse_from(["tablegen", "-c", "users_db", "-t", "user", "-r", "Root"])
                .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn long_help_is_available() {
        let err = Cli::try_parse_from(["tablegen", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
