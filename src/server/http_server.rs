//! HTTP server implementation.
//!
//! Every accepted connection gets its own task and serves exactly one
//! request. There is no cap on concurrent connections and no read or write
//! deadline; a client that stalls holds its task until it goes away.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use log::{debug, error, info, warn};

use crate::parser::{read_request, Error as ParserError, Request};
use crate::response::{ResponseWriter, StatusCode};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::{HandlerError, HandlerFn};

/// Pause after a failed accept before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// How long to wait for the client to hang up after we are done writing.
const LINGER_TIMEOUT: Duration = Duration::from_millis(500);

/// A running HTTP server.
///
/// Returned by [`HttpServer::serve`] once the listener is bound; the accept
/// loop runs in the background. Dropping the handle stops the accept loop
/// just like [`HttpServer::close`], without waiting for it.
pub struct HttpServer {
    local_addr: SocketAddr,
    shutdown_tx: watch::Sender<bool>,
    accept_task: JoinHandle<()>,
}

impl HttpServer {
    /// Bind `config.addr` and start accepting connections.
    ///
    /// `handler` is called once per successfully parsed request.
    pub async fn serve<F>(config: ServerConfig, handler: F) -> Result<Self, Error>
    where
        F: Fn(&mut ResponseWriter, &Request) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind(config.addr).await?;
        let local_addr = listener.local_addr()?;
        info!("Server listening on http://{local_addr}");

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handler: HandlerFn = Arc::new(handler);

        let accept_task = tokio::spawn(Self::accept_loop(
            listener,
            handler,
            config.read_buffer_size,
            shutdown_rx,
        ));

        Ok(Self {
            local_addr,
            shutdown_tx,
            accept_task,
        })
    }

    /// Bind every interface at `port` with the default configuration.
    pub async fn serve_port<F>(port: u16, handler: F) -> Result<Self, Error>
    where
        F: Fn(&mut ResponseWriter, &Request) + Send + Sync + 'static,
    {
        Self::serve(ServerConfig::with_port(port), handler).await
    }

    /// The address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections and close the listener.
    ///
    /// Connections that were already accepted keep running to completion.
    pub async fn close(self) -> Result<(), Error> {
        self.shutdown_tx.send_replace(true);

        if let Err(e) = self.accept_task.await {
            error!("Accept loop failed during shutdown: {e}");
            return Err(Error::IoError(e.into()));
        }

        info!("Server on {addr} closed", addr = self.local_addr);
        Ok(())
    }

    async fn accept_loop(
        listener: TcpListener,
        handler: HandlerFn,
        read_buffer_size: usize,
        mut shutdown_rx: watch::Receiver<bool>,
    ) {
        loop {
            tokio::select! {
                // Resolves on close() and when the handle is dropped
                _ = shutdown_rx.changed() => {
                    debug!("Shutting down accept loop");
                    break;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            Self::spawn_connection(socket, addr, handler.clone(), read_buffer_size);
                        }
                        Err(e) => {
                            if *shutdown_rx.borrow() {
                                break;
                            }
                            error!("Error accepting connection: {e}");
                            tokio::time::sleep(ACCEPT_BACKOFF).await;
                        }
                    }
                }
            }
        }
    }

    fn spawn_connection(
        mut socket: TcpStream,
        addr: SocketAddr,
        handler: HandlerFn,
        read_buffer_size: usize,
    ) {
        debug!("Accepted connection from {addr}");

        tokio::spawn(async move {
            match Self::handle_connection(&mut socket, handler, read_buffer_size).await {
                Ok(()) => debug!("Connection from {addr} closed"),
                Err(Error::ParseError(e)) => warn!("Bad request from {addr}: {e}"),
                Err(e) => error!("Error handling connection from {addr}: {e}"),
            }
        });
    }

    /// Serve a single request on `socket`.
    ///
    /// Reads and parses the request, runs `handler` on it, writes the
    /// buffered response, and shuts the socket down. A malformed request is
    /// answered with `400 Bad Request` without calling the handler. A failed
    /// read or write drops the connection without a response.
    pub async fn handle_connection<S>(
        socket: &mut S,
        handler: HandlerFn,
        read_buffer_size: usize,
    ) -> Result<(), Error>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let request = match read_request(socket, read_buffer_size).await {
            Ok(req) => req,
            Err(ParserError::Io(e)) => return Err(Error::IoError(e)),
            Err(e) => {
                let response = HandlerError::new(
                    StatusCode::BAD_REQUEST,
                    format!("Error parsing request: {e}"),
                )
                .to_bytes()?;
                socket.write_all(&response).await?;
                Self::close_connection(socket).await?;
                return Err(Error::ParseError(e));
            }
        };

        debug!("{} {}", request.method(), request.target());

        // Handlers are synchronous; keep them off the async workers
        let response = tokio::task::spawn_blocking(move || {
            let mut writer = ResponseWriter::new(Vec::new());
            handler(&mut writer, &request);
            writer.into_inner()
        })
        .await
        .map_err(|e| Error::HandlerFailed(e.to_string()))?;

        if response.is_empty() {
            warn!("Handler wrote no response");
        }

        socket.write_all(&response).await?;
        Self::close_connection(socket).await
    }

    /// Send FIN, then wait briefly for the peer to hang up.
    ///
    /// Closing with unread input still queued makes the kernel send RST,
    /// which can discard the response before the client reads it.
    async fn close_connection<S>(socket: &mut S) -> Result<(), Error>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        socket.shutdown().await?;

        let drain = async {
            let mut scratch = [0u8; 512];
            while let Ok(n) = socket.read(&mut scratch).await {
                if n == 0 {
                    break;
                }
            }
        };
        let _ = tokio::time::timeout(LINGER_TIMEOUT, drain).await;

        Ok(())
    }
}
