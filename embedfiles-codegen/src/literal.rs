//! Rendering byte buffers as C initializer lists.

use std::fmt::Write;

/// How many bytes go on one line of a generated initializer.
pub const BYTES_PER_LINE: usize = 16;

/// Renders `bytes` as `0x..,` entries, breaking the line after every 16th byte.
///
/// The result always ends with exactly one newline unless `bytes` is empty.
pub fn emit(bytes: &[u8]) -> String {
   let mut buffer = String::with_capacity(bytes.len() * 6 + bytes.len() / BYTES_PER_LINE + 1);
   for (index, byte) in bytes.iter().enumerate() {
      let _ = write!(buffer, "0x{:02x}, ", byte);
      if (index + 1) % BYTES_PER_LINE == 0 {
         buffer.push('\n');
      }
   }
   if !buffer.is_empty() && !buffer.ends_with('\n') {
      buffer.push('\n');
   }
   buffer
}

/// Same as [`emit`], followed by a terminating `0` entry so the array can be used as a C string.
pub fn emit_text(bytes: &[u8]) -> String {
   let mut buffer = emit(bytes);
   buffer.push_str("0\n");
   buffer
}

#[cfg(test)]
pub(crate) fn decode(literal: &str) -> Vec<u8> {
   literal
      .split(|c: char| c == ',' || c.is_whitespace())
      .filter(|token| !token.is_empty())
      .map(|token| match token.strip_prefix("0x") {
         Some(hex) => u8::from_str_radix(hex, 16).unwrap(),
         None => token.parse().unwrap(),
      })
      .collect()
}
