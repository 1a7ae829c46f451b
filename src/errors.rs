//! Defines the stub's error types.

/// Result alias for `doip_stub::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// A collection of different errors that can happen while serving a tester.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An IO error occurred.
    #[error("{0}: {1}")]
    Io(&'static str, std::io::Error),

    /// The reply table is unusable.
    #[error("invalid reply script: {0}")]
    Script(&'static str),

    /// A reply frame was given as malformed hex.
    #[error("invalid reply frame: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl Clone for Error {
    fn clone(&self) -> Self {
        use Error::*;
        match self {
            Io(ctx, e) => Io(ctx, std::io::Error::from(e.kind())),
            Script(ctx) => Script(ctx),
            Hex(e) => Hex(e.clone()),
        }
    }
}

pub(crate) trait ErrContext {
    type Success;
    fn ctx(self, context: &'static str) -> Result<Self::Success>;
}

impl<T> ErrContext for std::result::Result<T, std::io::Error> {
    type Success = T;
    fn ctx(self, context: &'static str) -> Result<Self::Success> {
        self.map_err(|e| Error::Io(context, e))
    }
}
