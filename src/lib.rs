//! A stub responder for DoIP diagnostic testers.
//!
//! # Introduction
//!
//! While developing a tester it helps to have a counterpart that answers
//! deterministically.  This crate listens on a TCP port and replies to every
//! request with the next frame of a fixed [`Script`], without looking at what
//! was sent.  By default the script holds three frames: a routing activation
//! response and two positive diagnostic responses.
//!
//! ```no_run
//! use doip_stub::{Mode, Script, Server};
//!
//! let server = Server::bind(("localhost", doip_stub::DOIP_PORT), Script::default(), Mode::Once)?;
//! let _replies = server.serve()?;
//! # Ok::<(), doip_stub::Error>(())
//! ```

pub mod errors;
pub mod script;
pub mod server;

pub use errors::{Error, Result};
pub use script::{Reply, Script};
pub use server::{Mode, Server};

/// TCP port testers connect to by default.
pub const DOIP_PORT: u16 = 13400;

#[cfg(test)]
mod test;
