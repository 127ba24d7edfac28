//! Picto CLI
//!
//! Operator interface for the picto database

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use picto_core::logging_facility;
use picto_core_types::RequestContext;
use picto_store::errors::Result;
use picto_store::StoreConfig;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "picto")]
#[command(about = "Picto - users, posts, comments, media and follows", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database path (overrides config and PICTO_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create or upgrade the database schema
    Init,
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
    /// User operations
    User(commands::user::UserArgs),
    /// Post operations
    Post(commands::post::PostArgs),
    /// Comment operations
    Comment(commands::comment::CommentArgs),
    /// Media operations
    Media(commands::media::MediaArgs),
    /// Follow operations
    Follow(commands::follow::FollowArgs),
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let ctx = RequestContext::new();

    if let Err(e) = run(cli, &ctx) {
        eprintln!("Error: {}", e.with_context(&ctx));
        std::process::exit(1);
    }
}

fn run(cli: Cli, ctx: &RequestContext) -> Result<()> {
    let mut config = StoreConfig::load(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.database.path = db;
    }

    logging_facility::init(config.logging.profile);
    let span = tracing::info_span!("request", request_id = %ctx.request_id);
    let _guard = span.enter();

    let mut conn = picto_store::db::open_with(&config.database)?;
    picto_store::migrations::apply_migrations(&mut conn)?;

    match cli.command {
        Commands::Init => commands::init::execute(&conn),
        Commands::Seed(args) => commands::seed::execute(args, &mut conn),
        Commands::User(args) => commands::user::execute(args, &mut conn),
        Commands::Post(args) => commands::post::execute(args, &conn),
        Commands::Comment(args) => commands::comment::execute(args, &conn),
        Commands::Media(args) => commands::media::execute(args, &conn),
        Commands::Follow(args) => commands::follow::execute(args, &mut conn),
    }
}
