//! Errors produced while generating a header.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong in a single generation run. None of these are recovered from
/// locally; the caller decides whether to retry on the next build.
#[derive(Debug, Error)]
pub enum EmbedError {
   /// The request was rejected before any file was touched.
   #[error("invalid configuration: {0}")]
   Configuration(String),

   /// An input file could not be read. Nothing was written.
   #[error("cannot read input file {}: {source}", path.display())]
   InputRead {
      path: PathBuf,
      #[source]
      source: std::io::Error,
   },

   /// The finished header could not be written.
   #[error("cannot write header {}: {source}", path.display())]
   OutputWrite {
      path: PathBuf,
      #[source]
      source: std::io::Error,
   },
}

impl EmbedError {
   pub(crate) fn config(message: impl Into<String>) -> Self {
      Self::Configuration(message.into())
   }
}
