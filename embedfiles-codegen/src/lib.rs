//! Generation of C headers that embed the contents of binary files as static arrays.
//!
//! A run takes an [`EmbedRequest`], asks a [`StalenessOracle`] whether the header is out of date,
//! and if so reads every input and writes one header containing an array per file, optionally
//! followed by a table of contents.

use std::path::PathBuf;

use tracing::info;

pub mod declaration;
pub mod error;
pub mod gate;
pub mod header;
pub mod io;
pub mod item;
pub mod literal;
pub mod mangle;
pub mod request;
pub mod toc;

pub use error::EmbedError;
pub use gate::{AlwaysStale, MtimeOracle, StalenessOracle};
pub use header::{HeaderAssembler, HeaderDocument};
pub use io::{DiskFileSystem, FileSystem};
pub use request::{Defaults, EmbedConfig, EmbedRequest, InputFile};

/// What a call to [`generate`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
   /// The header was up to date. Nothing was read or written.
   UpToDate,
   /// The header was regenerated from `items` inputs and is `bytes` long.
   Written { path: PathBuf, items: usize, bytes: usize },
}

/// Regenerates the header for `request` if `oracle` considers it stale.
pub fn generate(
   request: &EmbedRequest,
   fs: &dyn FileSystem,
   oracle: &dyn StalenessOracle,
   progress: impl FnMut(&InputFile),
) -> Result<Outcome, EmbedError> {
   let outputs = [request.out_header().to_path_buf()];
   if !gate::should_run(oracle, &request.input_paths(), &outputs) {
      info!(header = %request.out_header().display(), "up to date");
      return Ok(Outcome::UpToDate);
   }

   let document = HeaderAssembler::new(request).run(fs, progress)?;
   let bytes = document.text().len();
   let items = request.inputs().len();
   info!(header = %request.out_header().display(), items, bytes, "written");
   Ok(Outcome::Written { path: request.out_header().to_path_buf(), items, bytes })
}
