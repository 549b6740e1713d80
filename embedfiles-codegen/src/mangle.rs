//! Deriving C symbol names from file names.

/// Turns a file's base name into the raw name used in symbols and the table of contents.
///
/// Only the first `.` is replaced with `_`, so `icon.png` becomes `icon_png` and `a.b.c` becomes
/// `a_b.c`. Nothing else is touched.
pub fn mangle(base_name: &str) -> String {
   base_name.replacen('.', "_", 1)
}

/// Returns whether `name` is usable as a C identifier as-is.
pub fn is_c_identifier(name: &str) -> bool {
   let mut chars = name.chars();
   match chars.next() {
      Some(c) if c == '_' || c.is_ascii_alphabetic() => (),
      _ => return false,
   }
   chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn replaces_first_dot_only() {
      assert_eq!(mangle("icon.png"), "icon_png");
      assert_eq!(mangle("a.b.c"), "a_b.c");
      assert_eq!(mangle("README"), "README");
      assert_eq!(mangle(".hidden"), "_hidden");
   }

   #[test]
   fn leaves_other_characters_alone() {
      assert_eq!(mangle("my-file.bin"), "my-file_bin");
      assert_eq!(mangle("with space.txt"), "with space_txt");
   }

   #[test]
   fn identifier_check() {
      assert!(is_c_identifier("embed_icon_png"));
      assert!(is_c_identifier("_x1"));
      assert!(!is_c_identifier("embed_a_b.c"));
      assert!(!is_c_identifier("embed_my-file_bin"));
      assert!(!is_c_identifier("1abc"));
      assert!(!is_c_identifier(""));
   }
}
