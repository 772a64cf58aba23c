use log::{error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;

use crate::config::AppConfig;
use crate::error::ServerError;
use crate::middleware::logging::{log_connection, log_rejected_connection};
use crate::protocol::responses::{self, format_response};
use crate::server::session::handle_session;

pub struct Server {
    listener: TcpListener,
    config: Arc<AppConfig>,
    permits: Arc<Semaphore>,
}

impl Server {
    /// Binds the listener described by `config.server`.
    pub async fn bind(config: AppConfig) -> Result<Self, ServerError> {
        let socket = config.server.listen_socket();

        let listener = TcpListener::bind(&socket)
            .await
            .map_err(|e| ServerError::Bind(socket.clone(), e))?;
        info!("Server bound to {}", socket);

        let permits = Arc::new(Semaphore::new(config.server.max_clients));

        Ok(Self {
            listener,
            config: Arc::new(config),
            permits,
        })
    }

    /// Address actually bound, useful when the configured port is 0.
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept loop. Runs until the task is dropped.
    pub async fn run(self) -> Result<(), ServerError> {
        info!(
            "Starting account-gate on {} (max {} clients)",
            self.local_addr()?,
            self.config.server.max_clients
        );

        loop {
            match self.listener.accept().await {
                Ok((mut stream, addr)) => {
                    let permit = match Arc::clone(&self.permits).try_acquire_owned() {
                        Ok(permit) => permit,
                        Err(_) => {
                            log_rejected_connection(&addr, self.config.server.max_clients);
                            let reply = format_response(
                                responses::SERVICE_UNAVAILABLE,
                                "Too many connections",
                            );
                            let _ = stream.write_all(reply.as_bytes()).await;
                            continue;
                        }
                    };

                    log_connection(&addr);
                    let config = Arc::clone(&self.config);

                    // Spawn a task for each client so accept loop doesn't block
                    tokio::spawn(async move {
                        if let Err(e) = handle_session(stream, addr, config).await {
                            warn!("Session with {} ended with error: {}", addr, e);
                        }
                        drop(permit);
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}
