use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use rolegate::cli::create_admin;
use rolegate::config::AppConfig;
use rolegate::logging::init_tracing;
use rolegate::router::init_router;
use rolegate::state::{connect_and_migrate, init_app_state};
use rolegate_db::PgDirectory;
use tracing::info;

#[derive(Parser)]
#[command(name = "rolegate")]
#[command(about = "Rolegate - role-based access control API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Create an active administrator account
    CreateAdmin {
        #[arg(long)]
        full_name: String,

        #[arg(short = 'e', long)]
        email: String,

        #[arg(short = 'p', long)]
        password: String,

        #[arg(long, default_value = "")]
        cell_number: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    init_tracing(&config.server.log_dir).context("Failed to initialise logging")?;

    let pool = connect_and_migrate(&config).await?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&config, pool).await,
        Commands::CreateAdmin {
            full_name,
            email,
            password,
            cell_number,
        } => {
            let directory = PgDirectory::new(pool);
            let user = create_admin(
                &directory,
                &config.password,
                &full_name,
                &email,
                &password,
                &cell_number,
            )
            .await?;
            println!("Admin created: {} ({})", user.email, user.id);
            Ok(())
        }
    }
}

async fn serve(config: &AppConfig, pool: rolegate_db::PgPool) -> anyhow::Result<()> {
    let state = init_app_state(config, pool);
    let app = init_router(state);

    let addr = config.server.socket_addr().context("Invalid APP_HOST/APP_PORT")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
