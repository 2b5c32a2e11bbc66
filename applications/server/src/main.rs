/// Jukebox Server - music upload and metadata backend
use clap::{Parser, Subcommand};
use jukebox_core::{AlbumStore, UserId};
use jukebox_metadata::{FilenameMetadataExtractor, LoftyMetadataReader};
use jukebox_server::{
    config::ServerConfig,
    create_router,
    services::{FileStorage, UploadService},
    state::AppState,
};
use jukebox_storage::LocalStorageContext;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jukebox-server")]
#[command(about = "Jukebox upload and metadata server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "JUKEBOX_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Guess title and artist from filenames, one JSON object per line
    Parse {
        /// Filenames to parse
        #[arg(required = true)]
        filenames: Vec<String>,
    },
    /// Album maintenance
    Albums {
        #[command(subcommand)]
        command: AlbumsCommand,
    },
}

#[derive(Subcommand)]
enum AlbumsCommand {
    /// List stored albums
    List {
        /// Only albums uploaded by this user
        #[arg(short, long)]
        user: Option<String>,

        /// Configuration file path
        #[arg(short, long, env = "JUKEBOX_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "jukebox_server=info,jukebox_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Parse { filenames } => {
            parse_filenames(&filenames)?;
        }
        Commands::Albums {
            command: AlbumsCommand::List { user, config },
        } => {
            list_albums(user, config).await?;
        }
    }

    Ok(())
}

async fn connect(config: &ServerConfig) -> anyhow::Result<LocalStorageContext> {
    let pool = jukebox_storage::connect_with_retry(
        &config.storage.database_url,
        &config.storage.retry_policy(),
    )
    .await?;
    jukebox_storage::run_migrations(&pool).await?;
    Ok(LocalStorageContext::new(pool))
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Jukebox Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Exhausted retries end the process; the supervisor decides what happens next
    let storage: Arc<dyn AlbumStore> = Arc::new(connect(&config).await?);
    tracing::info!("Database connected");

    let file_storage = FileStorage::new(config.storage.music_storage_path.clone());
    file_storage.initialize().await?;
    let file_storage = Arc::new(file_storage);
    tracing::info!(
        "File storage initialized at {}",
        config.storage.music_storage_path.display()
    );

    let uploads = Arc::new(UploadService::new(
        Arc::clone(&storage),
        file_storage,
        Arc::new(LoftyMetadataReader::new()),
    ));

    let app_state = AppState::new(storage, uploads);
    let app = create_router(app_state, config.storage.max_upload_bytes);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

fn parse_filenames(filenames: &[String]) -> anyhow::Result<()> {
    let extractor = FilenameMetadataExtractor::new();
    for filename in filenames {
        let parsed = extractor.parse(filename);
        println!("{}", serde_json::to_string(&parsed)?);
    }
    Ok(())
}

async fn list_albums(user: Option<String>, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?;
    let storage = connect(&config).await?;

    let albums = match user {
        Some(user) => storage.get_albums_by_user(&UserId::new(user)).await?,
        None => storage.get_all_albums().await?,
    };

    println!("Albums:");
    for album in albums {
        println!(
            "  {} - {} / {} ({} tracks, uploaded by {})",
            album.id, album.artist, album.title, album.track_count, album.uploaded_by
        );
    }

    Ok(())
}
