use abacus_api::{
    cli::{self, Cli, Command, ServeArgs},
    create_app, tracing_setup,
};
use anyhow::Context;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => serve(args).await,
        Command::Calc(args) => match cli::run_calc(&args) {
            Ok(result) => {
                println!("{result}");
                Ok(())
            }
            Err(err) => {
                eprintln!("Error: {err:#}");
                std::process::exit(1);
            }
        },
        Command::Explain => {
            print!("{}", cli::explain_text());
            Ok(())
        }
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = tracing::subscriber::with_default(
        tracing_setup::bootstrap_subscriber(std::io::stderr),
        || args.resolve_config(),
    )?;
    tracing_setup::init_tracing(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        max_body_size_kb = config.limits.max_body_size_kb,
        request_timeout_seconds = config.limits.request_timeout_seconds,
        "Starting Abacus calculator service"
    );

    let app = create_app(&config);
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "Web server started successfully");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "Failed to listen for shutdown signal");
    }
}
