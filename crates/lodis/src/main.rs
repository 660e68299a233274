use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lodis::config::Config;
use lodis::server::Server;
use tokio::sync::watch;
use tracing::error;
use tracing::info;

#[derive(Parser)]
#[command(name = "lodis", about = "Redis-protocol server over an ordered KV engine")]
struct Args {
    /// Config file path
    #[arg(short = 'c', long = "config", default_value = "lodis.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let cfg = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Load/parse config file error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    telemetry::init(&cfg.log_level);

    let server = match Server::new(cfg).await {
        Ok(server) => server,
        Err(e) => {
            error!("Open storage error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown_tx.send(true).ok();
    });

    if let Err(e) = server.run(shutdown_rx).await {
        error!("Server error: {}", e);
        let _ = server.close().await;
        return ExitCode::FAILURE;
    }
    if let Err(e) = server.close().await {
        error!("Close storage error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

// SIGHUP, SIGINT, SIGTERM and SIGQUIT all initiate graceful shutdown.
async fn wait_for_signal() {
    use tokio::signal::unix::SignalKind;
    use tokio::signal::unix::signal;

    let mut streams = Vec::new();
    for kind in [
        SignalKind::hangup(),
        SignalKind::interrupt(),
        SignalKind::terminate(),
        SignalKind::quit(),
    ] {
        match signal(kind) {
            Ok(stream) => streams.push(stream),
            Err(e) => error!("Failed to install signal handler: {}", e),
        }
    }
    if streams.is_empty() {
        // No handlers at all; park forever and let the runtime be killed.
        std::future::pending::<()>().await;
        return;
    }

    let waits = streams
        .iter_mut()
        .map(|s| Box::pin(s.recv()))
        .collect::<Vec<_>>();
    futures::future::select_all(waits).await;
    info!("Signal received, shutting down");
}
