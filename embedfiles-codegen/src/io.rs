//! Filesystem access used by the generator.

use std::io::Write;
use std::path::Path;

/// The file operations a generation run needs. Reads happen before any write, and the header is
/// handed over in a single `write` call.
pub trait FileSystem {
   fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
   fn write(&self, path: &Path, text: &str) -> std::io::Result<()>;
   fn create_dir_all(&self, path: &Path) -> std::io::Result<()>;
}

/// The real filesystem.
///
/// Writes go to a temporary file next to the destination which is then renamed over it, so
/// readers of the header never observe a half-written file.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFileSystem;

impl FileSystem for DiskFileSystem {
   fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
      std::fs::read(path)
   }

   fn write(&self, path: &Path, text: &str) -> std::io::Result<()> {
      let dir = match path.parent() {
         Some(parent) if !parent.as_os_str().is_empty() => parent,
         _ => Path::new("."),
      };
      let mut file =
         tempfile::Builder::new().prefix(".embedfiles").suffix(".tmp").tempfile_in(dir)?;
      file.write_all(text.as_bytes())?;
      file.flush()?;
      file.persist(path).map_err(|err| err.error)?;
      Ok(())
   }

   fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
      std::fs::create_dir_all(path)
   }
}
