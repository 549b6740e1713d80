//! The optional table of contents listing every embedded item.

use std::fmt::Write;

use crate::declaration::DeclarationStyle;
use crate::item::EmbeddedItem;

/// A row of the table of contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocEntry<'a> {
   pub raw_name: &'a str,
   pub symbol_name: &'a str,
   pub byte_length: usize,
}

impl<'a> From<&'a EmbeddedItem> for TocEntry<'a> {
   fn from(item: &'a EmbeddedItem) -> Self {
      Self {
         raw_name: &item.raw_name,
         symbol_name: &item.symbol_name,
         byte_length: item.byte_length,
      }
   }
}

/// Returns the entries for `items`, ordered by raw name so the table does not depend on the
/// order the inputs were listed in.
pub fn entries(items: &[EmbeddedItem]) -> Vec<TocEntry<'_>> {
   let mut entries: Vec<TocEntry> = items.iter().map(TocEntry::from).collect();
   entries.sort_by(|a, b| a.raw_name.cmp(b.raw_name));
   entries
}

/// Renders `name` as the contents of a C string literal. Quotes and backslashes are escaped,
/// and anything outside printable ASCII becomes an octal escape per UTF-8 byte.
pub fn escape_c_string(name: &str) -> String {
   let mut escaped = String::with_capacity(name.len());
   for byte in name.bytes() {
      match byte {
         b'"' => escaped.push_str("\\\""),
         b'\\' => escaped.push_str("\\\\"),
         b' '..=b'~' => escaped.push(char::from(byte)),
         _ => {
            let _ = write!(escaped, "\\{:03o}", byte);
         }
      }
   }
   escaped
}

/// Builds the item struct, the `NUM_ITEMS` macro, and the populated item array.
pub fn build(items: &[EmbeddedItem], prefix: &str, style: DeclarationStyle) -> String {
   let item_type = format!("{}item_t", prefix);
   let count_macro = format!("{}NUM_ITEMS", prefix.to_uppercase());

   let mut buffer = String::new();
   let _ = write!(
      buffer,
      "typedef struct {{\n    const char* name;\n    const {}* ptr;\n    size_t size;\n}} {};\n",
      style.element_type(),
      item_type
   );
   let _ = writeln!(buffer, "#define {} ({})", count_macro, items.len());
   let _ = writeln!(
      buffer,
      "static {}{} {}items[{}] = {{",
      style.qualifier(),
      item_type,
      prefix,
      items.len()
   );
   for entry in entries(items) {
      let _ = writeln!(
         buffer,
         "    {{ \"{}\", {}, {} }},",
         escape_c_string(entry.raw_name),
         entry.symbol_name,
         entry.byte_length
      );
   }
   buffer.push_str("};\n");
   buffer
}
