//! Contains the blocking TCP responder.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};

use tracing::{debug, info, warn};

use crate::errors::ErrContext;
use crate::{Result, Script};

/// Size of the buffer a single request is received into.
pub const RECV_BUFFER_SIZE: usize = 1024;

/// How the server treats connections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Accept connections forever and cycle through the script on each one.
    Repeat,
    /// Serve a single connection, send each reply of the script at most once,
    /// then close the connection and stop.
    Once,
}

/// A stub that answers every request with the next frame of a fixed script.
///
/// Requests are not parsed.  A read returning no data means the peer has
/// closed its side, which ends the connection.
pub struct Server {
    listener: TcpListener,
    script: Script,
    mode: Mode,
}

impl Server {
    /// Bind the listening socket.
    pub fn bind(addr: impl ToSocketAddrs, script: Script, mode: Mode) -> Result<Self> {
        let listener = TcpListener::bind(addr).ctx("binding listener")?;
        Ok(Server { listener, script, mode })
    }

    /// Return the address the server is listening on.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr().ctx("getting local address")
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Run the server.
    ///
    /// With `Mode::Once` this returns the number of replies sent after the
    /// single connection is done.  With `Mode::Repeat` it only returns if
    /// accepting a connection fails; errors on an accepted connection are
    /// logged and the next connection is accepted.
    pub fn serve(&self) -> Result<usize> {
        let addr = self.local_addr()?;
        info!(%addr, mode = ?self.mode, replies = self.script.len(), "server listening");
        match self.mode {
            Mode::Once => {
                let (client, peer) = self.listener.accept().ctx("accepting connection")?;
                info!(%peer, "accepted connection");
                self.handle_client(client)
            }
            Mode::Repeat => loop {
                let (client, peer) = self.listener.accept().ctx("accepting connection")?;
                info!(%peer, "accepted connection");
                if let Err(e) = self.handle_client(client) {
                    warn!(%peer, "connection failed: {}", e);
                }
            },
        }
    }

    /// Play the script back on one connection.
    ///
    /// Returns the number of replies sent.  The stream is closed when it is
    /// dropped at the end of this function.
    pub fn handle_client(&self, mut socket: TcpStream) -> Result<usize> {
        // Every reply is a single small frame; don't let Nagle hold it back.
        socket.set_nodelay(true).ctx("setting NODELAY")?;

        let mut buf = [0; RECV_BUFFER_SIZE];
        let mut sent = 0;
        loop {
            for reply in &self.script {
                let n = socket.read(&mut buf).ctx("receiving request")?;
                if n == 0 {
                    debug!(sent, "peer closed connection");
                    return Ok(sent);
                }
                info!(request = %hex::encode(&buf[..n]), "received request");

                socket.write_all(reply.as_bytes()).ctx("sending reply")?;
                sent += 1;
                info!(%reply, "sent reply");
            }
            if self.mode == Mode::Once {
                debug!(sent, "script finished, closing connection");
                return Ok(sent);
            }
        }
    }
}
