use clap::{Parser, ValueEnum};
use kingscore::config::db::DbKind;
use kingscore::infra::db::connect_db;
use migration::{migrate, MigrationCommand};

#[derive(Clone, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

#[derive(Clone, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "kingscore database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Database type (in-memory SQLite is not supported: it disappears when the command exits)
    #[arg(short, long, value_enum, default_value = "postgres")]
    db: Db,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,kingscore=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let command = match args.command {
        Command::Up => MigrationCommand::Up,
        Command::Down => MigrationCommand::Down,
        Command::Fresh => MigrationCommand::Fresh,
        Command::Reset => MigrationCommand::Reset,
        Command::Refresh => MigrationCommand::Refresh,
        Command::Status => MigrationCommand::Status,
    };

    let db_kind = match args.db {
        Db::Postgres => DbKind::Postgres,
        Db::SqliteFile => DbKind::SqliteFile,
    };

    let conn = match connect_db(db_kind).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Failed to connect: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
    tracing::info!("migration command finished");
}
