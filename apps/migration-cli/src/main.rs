use clap::Parser;
use migration::MigrationCommand;
use sea_orm::{ConnectOptions, Database};

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Supplytrace database migration tool")]
struct Args {
    /// Migration command to run: up, down, fresh, reset, refresh, status
    command: String,

    /// Path to the SQLite database file (created if missing)
    #[arg(short, long, default_value = "supply_chain.db")]
    db_file: String,
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
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let command = match args.command.to_lowercase().as_str() {
        "up" => MigrationCommand::Up,
        "down" => MigrationCommand::Down,
        "fresh" => MigrationCommand::Fresh,
        "reset" => MigrationCommand::Reset,
        "refresh" => MigrationCommand::Refresh,
        "status" => MigrationCommand::Status,
        other => {
            eprintln!("❌ Unknown migration command: {other}");
            eprintln!("Supported commands: up, down, fresh, reset, refresh, status");
            std::process::exit(1);
        }
    };

    // `mode=rwc` creates the file on first use, matching server bootstrap.
    let url = format!("sqlite://{}?mode=rwc", args.db_file);
    let mut opts = ConnectOptions::new(url);
    opts.max_connections(1).sqlx_logging(false);

    let db = match Database::connect(opts).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ Failed to open {}: {e}", args.db_file);
            std::process::exit(1);
        }
    };

    if let Err(e) = migration::migrate(&db, command).await {
        eprintln!("❌ Migration failed: {e}");
        std::process::exit(1);
    }
}
