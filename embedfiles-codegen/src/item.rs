//! Items derived from input files.

use crate::mangle::mangle;

/// One input file, loaded and named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedItem {
   /// Base file name with its first `.` replaced by `_`.
   pub raw_name: String,
   /// `prefix + raw_name`.
   pub symbol_name: String,
   /// Declared array length. Includes the terminator in text mode.
   pub byte_length: usize,
   content: Vec<u8>,
}

impl EmbeddedItem {
   pub fn new(base_name: &str, prefix: &str, content: Vec<u8>, as_text: bool) -> Self {
      let raw_name = mangle(base_name);
      Self {
         symbol_name: format!("{}{}", prefix, raw_name),
         raw_name,
         byte_length: content.len() + usize::from(as_text),
         content,
      }
   }

   /// The file's bytes, exactly as read.
   pub fn content(&self) -> &[u8] {
      &self.content
   }
}
