use std::sync::Arc;

use clap::Parser;
use clap::Subcommand;
use solace::config::AppConfig;
use solace::database::Database;
use solace::sentiment::chronological_scores;
use solace::sentiment::summarize_scores;
use solace::sentiment::window_limit;
use solace::sentiment::HttpPolarityClient;
use solace::sentiment::SentimentAnalyzer;
use solace::Result;
use tracing::info;

#[derive(Parser)]
#[command(name = "solace")]
#[command(about = "Solace CLI for the emotional support backend")]
#[command(version)]
struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Enable permissive CORS for local frontend development
        #[arg(long)]
        cors: bool,
    },
    /// Score a piece of text and print the result
    Analyze {
        /// Text to score
        text: String,
    },
    /// Show a user's emotional trend
    Trend {
        /// User identifier
        #[arg(long)]
        user_id: i64,
        /// Days of history to consider
        #[arg(short, long, default_value = "30")]
        days: i64,
    },
    /// Show current configuration
    Config,
    /// Initialize the database schema
    Init {
        /// Re-run initialization even if tables exist
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging; --verbose overrides the configured level
    if cli.verbose {
        solace::logging::init_logging_with_level("debug")?;
    } else {
        solace::logging::init_logging_with_config(Some(&config))?;
    }

    info!("Configuration loaded successfully");

    // Execute the requested command
    match cli.command {
        Commands::Serve { host, port, cors } => {
            solace::api::serve_api(&config, host, port, cors).await?;
        }
        Commands::Analyze { text } => {
            handle_analyze_command(&config, &text).await?;
        }
        Commands::Trend { user_id, days } => {
            handle_trend_command(&config, user_id, days).await?;
        }
        Commands::Config => {
            handle_config_command(&config)?;
        }
        Commands::Init { force } => {
            handle_init_command(&config, force).await?;
        }
    }

    Ok(())
}

async fn handle_analyze_command(config: &AppConfig, text: &str) -> Result<()> {
    let polarity = Arc::new(HttpPolarityClient::new(config)?);
    let analyzer = SentimentAnalyzer::new(config, polarity)?;

    let result = analyzer.analyze(text).await?;

    println!("🧭 Sentiment Analysis");
    println!("=====================");
    println!("  Score:          {:.3}", result.score);
    println!("  Classification: {}", result.classification);
    println!("  Confidence:     {:.3}", result.confidence);
    println!("  Polarity:       {:.3}", result.polarity);
    println!("  Subjectivity:   {:.3}", result.subjectivity);
    if result.matched_keywords.is_empty() {
        println!("  Keywords:       (none)");
    } else {
        println!("  Keywords:       {}", result.matched_keywords.join(", "));
    }

    Ok(())
}

async fn handle_trend_command(config: &AppConfig, user_id: i64, days: i64) -> Result<()> {
    let database = Database::from_config(config).await?;
    database.verify_schema_or_error().await?;

    let limit = window_limit(days);
    let scores = database.recent_emotion_scores(user_id, limit).await?;
    let summary = summarize_scores(&chronological_scores(&scores));

    println!("📈 Emotional Trend for user {}", user_id);
    println!("================================");
    println!("  Window:         last {} days (up to {} scores)", days, limit);
    println!("  Trend:          {}", summary.trend);
    println!("  Average:        {:.3}", summary.average);
    println!("  Volatility:     {:.3}", summary.volatility);
    println!("  Entries:        {}", summary.total_entries);
    println!("  Classification: {}", summary.classification);

    Ok(())
}

fn handle_config_command(config: &AppConfig) -> Result<()> {
    println!("📋 Solace Configuration:");
    println!();

    println!("🗄️  Database:");
    println!("  URL: {}", mask_database_url(config.database_url()));
    println!("  Max connections: {}", config.max_connections());
    println!("  Min connections: {}", config.min_connections());
    println!("  Connection timeout: {}s", config.connection_timeout());
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  Backtrace: {}", config.logging.backtrace);
    println!();

    println!("🧠 LLM:");
    println!("  Provider: {}", config.llm_provider());
    println!("  Endpoint: {}", config.llm_endpoint());
    println!("  Model: {}", config.llm_model());
    println!("  Temperature: {}", config.llm_temperature());
    println!("  Max tokens: {}", config.llm_max_tokens());
    println!();

    println!("🎭 Polarity service:");
    println!("  Endpoint: {}", config.polarity_endpoint());
    println!("  Timeout: {}s", config.polarity_timeout_secs());
    println!();

    println!("💬 Chat:");
    println!("  History limit: {} exchanges", config.history_limit());
    println!(
        "  Custom directive: {}",
        if config.system_prompt().is_some() {
            "yes"
        } else {
            "built-in"
        }
    );

    Ok(())
}

async fn handle_init_command(config: &AppConfig, force: bool) -> Result<()> {
    let database = Database::from_config(config).await?;

    if !force && database.is_schema_initialized().await? {
        println!("✅ Database schema already initialized");
        println!("   Use --force to re-run initialization");
        return Ok(());
    }

    println!("🔧 Initializing database schema...");
    database.init_schema().await?;
    println!("✅ Database schema initialized successfully!");

    Ok(())
}

/// Mask database URL for display (hide password)
fn mask_database_url(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        if let Some(host) = parsed.host_str() {
            format!(
                "{}://{}@{}:{}",
                parsed.scheme(),
                parsed.username(),
                host,
                parsed.port().unwrap_or(5432)
            )
        } else {
            "***masked***".to_string()
        }
    } else {
        "***invalid***".to_string()
    }
}
