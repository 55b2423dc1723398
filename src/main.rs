use clap::{Parser, Subcommand};
use std::sync::Arc;

use messenger_relay::application::messaging::{BackendRouter, EventDispatcher};
use messenger_relay::infrastructure::adapters::messenger::MessengerAdapter;
use messenger_relay::infrastructure::backends::{DialogflowProvider, GeminiMockProvider};
use messenger_relay::infrastructure::config::Config;
use messenger_relay::infrastructure::server::{self, AppState};

#[derive(Parser)]
#[command(name = "messenger-relay")]
#[command(about = "Messenger webhook relay for Dialogflow", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the relay server
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_server(cli.config, cli.port);
        }
        Commands::Version => {
            println!("messenger-relay v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn run_server(config_path: String, port_override: Option<u16>) {
    // Load config
    let config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using environment", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    // Required credentials are checked up front instead of failing on the
    // first backend call.
    let credentials = match config.validate() {
        Ok(creds) => creds,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let port = port_override.unwrap_or(config.server.port);

    // Wire services explicitly; everything downstream takes injected handles
    let dialogflow = Arc::new(DialogflowProvider::new(
        credentials.dialogflow_project_id.as_str(),
        credentials.dialogflow_access_token.as_str(),
        config.dialogflow.language_code.as_str(),
    ));
    let gemini = Arc::new(GeminiMockProvider::new());
    let sender = Arc::new(MessengerAdapter::new(credentials.page_access_token));

    let dispatcher = EventDispatcher::new(
        BackendRouter::new(config.router.trigger_keyword.as_str()),
        dialogflow,
        gemini,
        sender,
    );

    let state = Arc::new(AppState {
        verify_token: credentials.verify_token,
        dispatcher: Arc::new(dispatcher),
    });

    tracing::info!("Starting messenger-relay on port {}", port);

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        if let Err(e) = server::serve(state, port).await {
            tracing::error!("Server error: {}", e);
            std::process::exit(1);
        }
    });
}

fn init_config() {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
}
