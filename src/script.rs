//! The fixed reply table the stub plays back to a tester.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{Error, Result};

/// Reply to the routing activation request a tester sends after connecting.
pub const ROUTING_ACTIVATION_REPLY: &[u8] = &[
    0x02, 0xfd, 0x00, 0x06, 0x00, 0x00, 0x00, 0x09,
    0x12, 0x34, 0x56, 0x78, 0x10, 0x00, 0x00, 0x00, 0x00,
];

/// Reply to a `10 01` session control request.
pub const SESSION_CONTROL_REPLY: &[u8] = &[
    0x02, 0xfd, 0x80, 0x01, 0x00, 0x00, 0x00, 0x06,
    0x56, 0x78, 0x12, 0x34, 0x50, 0x01,
];

/// Reply to a `22 f1 96` read data by identifier request.
pub const READ_DID_REPLY: &[u8] = &[
    0x02, 0xfd, 0x80, 0x01, 0x00, 0x00, 0x00, 0x08,
    0x56, 0x78, 0x12, 0x34, 0x62, 0xf1, 0x86, 0x02,
];

/// A single opaque reply frame.
///
/// The content is never interpreted; it only has to be non-empty.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Reply(Vec<u8>);

impl Reply {
    /// Create a reply from raw bytes.
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::Script("reply frame is empty"));
        }
        Ok(Reply(bytes))
    }

    /// Return the frame bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Reply {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Reply {
    type Err = Error;

    /// Parse a reply from hex (`02fd8001...`).
    ///
    /// Whitespace between digits is ignored, so `"02 fd 80 01"` works too.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.split_whitespace().collect::<String>();
        Reply::new(hex::decode(digits)?)
    }
}

impl Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

/// An ordered, non-empty list of replies.
///
/// The n-th read on a connection is answered with the n-th reply.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Script {
    replies: Vec<Reply>,
}

impl Script {
    pub fn new(replies: Vec<Reply>) -> Result<Self> {
        if replies.is_empty() {
            return Err(Error::Script("no replies given"));
        }
        Ok(Script { replies })
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    // Never true, a script always has a reply.
    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Reply> {
        self.replies.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reply> {
        self.replies.iter()
    }
}

impl Default for Script {
    /// Routing activation, then session control, then the identifier read.
    fn default() -> Self {
        let replies = [ROUTING_ACTIVATION_REPLY, SESSION_CONTROL_REPLY, READ_DID_REPLY]
            .iter()
            .map(|frame| Reply(frame.to_vec()))
            .collect();
        Script { replies }
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a Reply;
    type IntoIter = std::slice::Iter<'a, Reply>;

    fn into_iter(self) -> Self::IntoIter {
        self.replies.iter()
    }
}
