//! chatgate server binary.

use clap::Parser;

use chatgate::server::ChatGateServerBuilder;
use chatgate::{init_logging, WebConfig};

/// Session-gated demo API for an AI chat service.
#[derive(Parser)]
#[command(name = "chatgate")]
#[command(about = "A session-gated AI chat demo API")]
#[command(version)]
struct Args {
    /// Server host to bind to [default: 127.0.0.1]
    #[arg(long)]
    host: Option<String>,

    /// Server port to listen on [default: 8000]
    #[arg(short, long)]
    port: Option<u16>,

    /// Session lifetime in seconds [default: 3600]
    #[arg(long)]
    session_ttl_secs: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Apply the flags that were actually given on top of `config`.
    fn apply_to(&self, config: &mut WebConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(secs) = self.session_ttl_secs {
            config.session_ttl_secs = secs;
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    std::env::set_var(
        "RUST_LOG",
        format!("chatgate={},tower_http=debug", args.log_level),
    );
    init_logging();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Environment first, command line overrides
    let mut config = WebConfig::from_env();
    args.apply_to(&mut config);

    println!("🚀 Starting chatgate server");
    println!("📍 Server: http://{}:{}", config.host, config.port);
    println!("📚 Swagger UI: http://{}:{}/swagger-ui", config.host, config.port);
    println!("⏱️  Session TTL: {}s", config.session_ttl_secs);

    let server = ChatGateServerBuilder::new()
        .host(config.host.clone())
        .port(config.port)
        .session_ttl_secs(config.session_ttl_secs)
        .build();

    if let Err(e) = server.start().await {
        eprintln!("❌ Server failed to start: {}", e);
        std::process::exit(1);
    }
}
