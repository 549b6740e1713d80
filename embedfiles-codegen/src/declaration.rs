//! Static array declarations.

use crate::item::EmbeddedItem;
use crate::literal;

/// Options shared by every declaration in one header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationStyle {
   /// Declare `char` arrays with a terminating zero instead of `uint8_t` arrays.
   pub as_text: bool,
   /// Emit the `const` qualifier.
   pub as_const: bool,
}

impl Default for DeclarationStyle {
   fn default() -> Self {
      Self { as_text: false, as_const: true }
   }
}

impl DeclarationStyle {
   pub(crate) fn element_type(&self) -> &'static str {
      if self.as_text {
         "char"
      } else {
         "uint8_t"
      }
   }

   pub(crate) fn qualifier(&self) -> &'static str {
      if self.as_const {
         "const "
      } else {
         ""
      }
   }
}

/// Builds the declaration of a single item's array.
pub fn build(item: &EmbeddedItem, style: DeclarationStyle) -> String {
   let body = if style.as_text {
      literal::emit_text(item.content())
   } else {
      literal::emit(item.content())
   };
   format!(
      "static {}{} {}[{}] = {{\n{}}};\n",
      style.qualifier(),
      style.element_type(),
      item.symbol_name,
      item.byte_length,
      body
   )
}
