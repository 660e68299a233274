//! TCP accept loop and server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use storage::Registry;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::debug;
use tracing::error;
use tracing::info;

use crate::cmd::CmdTable;
use crate::config::Config;
use crate::connection::Session;

pub struct Server {
    cfg: Config,
    listener: TcpListener,
    registry: Arc<Registry>,
    table: Arc<CmdTable>,
}

impl Server {
    /// Open all sixteen databases eagerly and bind the listen address.
    pub async fn new(cfg: Config) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let registry = Arc::new(Registry::open(&cfg.data_path).await?);
        let listener = TcpListener::bind(&cfg.listen).await?;
        Ok(Self {
            cfg,
            listener,
            registry,
            table: Arc::new(CmdTable::new()),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections until the shutdown signal fires. Each connection
    /// runs as its own task; a failing or closing session never takes the
    /// server down.
    pub async fn run(
        &self,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!("Server is starting, listen on {}", self.cfg.listen);

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    info!("Server is closing...");
                    return Ok(());
                }
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((socket, addr)) => {
                            debug!("New connection: {}", addr);
                            let mut session = Session::new(
                                socket,
                                self.table.clone(),
                                self.registry.clone(),
                                self.cfg.require_pass.clone(),
                            );
                            tokio::spawn(async move {
                                if let Err(e) = session.run().await {
                                    debug!("Connection {} closed: {}", addr, e);
                                }
                            });
                        }
                        Err(e) => {
                            error!("Server accepts connection error: {}", e);
                        }
                    }
                }
            }
        }
    }

    /// Close all engines. In-flight writers finish first because closing
    /// waits on each database's lock.
    pub async fn close(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.registry.close().await?;
        info!("Server is down.");
        Ok(())
    }
}
