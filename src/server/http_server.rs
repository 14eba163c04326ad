//! The accept loop around the request pipeline.

use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;

use log::{debug, error, info};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpSocket};
use tokio::signal;

use crate::parser::{parse_request, HeadReader, Request};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::resolver::StaticFiles;
use crate::server::response::Response;

/// A static file server handling one connection at a time.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    files: StaticFiles,
}

impl HttpServer {
    /// Create a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let files = StaticFiles::new(config.root.clone()).with_policy(config.path_policy);
        Self { config, files }
    }

    pub fn files(&self) -> &StaticFiles {
        &self.files
    }

    /// Set up the TCP listener.
    fn setup_listener(&self) -> Result<TcpListener, Error> {
        let addr = self.config.addr();
        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4()?,
            SocketAddr::V6(_) => TcpSocket::new_v6()?,
        };
        // Avoid "Address already in use" when restarting.
        socket.set_reuseaddr(true)?;
        socket.bind(addr)?;
        let listener = socket.listen(self.config.backlog)?;
        info!("Starting a server on http://{addr}/");
        Ok(listener)
    }

    /// Start the server and serve connections until Ctrl+C.
    ///
    /// A failing connection is logged and closed; the loop keeps going.
    pub async fn start(&self) -> Result<(), Error> {
        info!("Reinhardt {version}", version = env!("CARGO_PKG_VERSION"));
        info!("Serving {root}", root = self.config.root.display());

        let listener = self.setup_listener()?;
        let shutdown = signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                res = &mut shutdown => {
                    if let Err(e) = res {
                        error!("Error setting up Ctrl+C handler: {e}");
                    }
                    info!("Shutting down server...");
                    break;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((mut socket, addr)) => {
                            info!("Connected from: {addr}");
                            match self.handle_connection_until(&mut socket, shutdown.as_mut()).await {
                                Some(Ok(())) => {}
                                Some(Err(e)) => error!("Error handling connection from {addr}: {e}"),
                                None => {
                                    info!("Shutting down server, dropping connection from {addr}");
                                    break;
                                }
                            }
                        }
                        Err(e) => error!("Error accepting connection: {e}"),
                    }
                }
            }
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// Serve a single connection: read its head, resolve it and write the
    /// response.
    ///
    /// On error nothing is written; the caller drops the connection.
    pub async fn handle_connection(
        &self,
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
    ) -> Result<(), Error> {
        let head = read_head(socket, self.config.read_buffer_size, self.config.max_head_size).await?;
        debug!("{}", String::from_utf8_lossy(&head));

        let request = parse_request(&head)?;
        let target = format!("{} /{}", request.method, request.path);
        let response = self.respond(request).await?;
        info!("{target} -> {code} {reason}", code = response.code(), reason = response.reason());

        let (head, body) = response.into_parts();
        socket.write_all(&head).await?;
        socket.write_all(&body).await?;
        socket.shutdown().await?;
        Ok(())
    }

    /// Serve a single connection unless `shutdown` completes first.
    ///
    /// Returns `None` when `shutdown` won the race; the connection is then
    /// abandoned without a response.
    pub async fn handle_connection_until<F: Future>(
        &self,
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        shutdown: Pin<&mut F>,
    ) -> Option<Result<(), Error>> {
        tokio::select! {
            res = self.handle_connection(socket) => Some(res),
            _ = shutdown => None,
        }
    }

    /// Resolve on the blocking pool, the filesystem calls being synchronous.
    async fn respond(&self, request: Request) -> Result<Response, Error> {
        let files = self.files.clone();
        tokio::task::spawn_blocking(move || files.resolve(&request))
            .await
            .map_err(|e| Error::TaskError(e.to_string()))?
    }
}

/// Read from `socket` in `chunk_size` pieces until a complete head arrives.
pub async fn read_head(
    socket: &mut (impl AsyncRead + Unpin),
    chunk_size: usize,
    limit: Option<usize>,
) -> Result<Vec<u8>, Error> {
    let mut reader = match limit {
        Some(limit) => HeadReader::with_limit(limit),
        None => HeadReader::new(),
    };
    let mut chunk = vec![0; chunk_size.max(1)];

    loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Err(Error::ConnectionClosed);
        }
        if reader.feed(&chunk[..n])? {
            return Ok(reader.into_head());
        }
    }
}
