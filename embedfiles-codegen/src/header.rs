//! Assembling complete headers.

use tracing::{debug, warn};

use crate::declaration;
use crate::error::EmbedError;
use crate::io::FileSystem;
use crate::item::EmbeddedItem;
use crate::mangle::is_c_identifier;
use crate::request::{EmbedRequest, InputFile};
use crate::toc;

/// Text every generated header starts with.
pub const PREAMBLE: &str = "#pragma once\n\
                            // machine generated, do not edit\n\
                            #include <stdint.h>\n\
                            #include <stddef.h>\n";

/// Where an assembler is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerState {
   Idle,
   Reading,
   Emitting,
   Writing,
   Done,
   /// An input could not be read; nothing was written.
   Failed,
}

/// The fragments of a header, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDocument {
   fragments: Vec<String>,
}

impl HeaderDocument {
   pub fn fragments(&self) -> &[String] {
      &self.fragments
   }

   /// Joins the fragments, separated by blank lines.
   pub fn text(&self) -> String {
      self.fragments.join("\n")
   }
}

/// Lays out the preamble, one declaration per item in the given order, and the table of contents
/// if the request asks for one.
pub fn render(request: &EmbedRequest, items: &[EmbeddedItem]) -> HeaderDocument {
   let style = request.style();
   let mut fragments = Vec::with_capacity(items.len() + 2);
   fragments.push(PREAMBLE.to_owned());
   fragments.extend(items.iter().map(|item| declaration::build(item, style)));
   if request.emit_list() {
      fragments.push(toc::build(items, request.prefix(), style));
   }
   HeaderDocument { fragments }
}

/// Produces one header from one request.
pub struct HeaderAssembler<'r> {
   request: &'r EmbedRequest,
   state: AssemblerState,
}

impl<'r> HeaderAssembler<'r> {
   pub fn new(request: &'r EmbedRequest) -> Self {
      Self { request, state: AssemblerState::Idle }
   }

   pub fn state(&self) -> AssemblerState {
      self.state
   }

   fn transition(&mut self, next: AssemblerState) {
      debug!(
         from = ?self.state,
         to = ?next,
         header = %self.request.out_header().display(),
         "assembler"
      );
      self.state = next;
   }

   /// Reads every input, then writes the finished header in one go.
   ///
   /// `progress` is called after each input file has been read. If any input cannot be read,
   /// the run stops and the output is left as it was.
   pub fn run(
      &mut self,
      fs: &dyn FileSystem,
      mut progress: impl FnMut(&InputFile),
   ) -> Result<HeaderDocument, EmbedError> {
      self.transition(AssemblerState::Reading);
      let request = self.request;
      let as_text = request.style().as_text;
      let mut items = Vec::with_capacity(request.inputs().len());
      for input in request.inputs() {
         let content = match fs.read(&input.path) {
            Ok(content) => content,
            Err(source) => {
               self.transition(AssemblerState::Failed);
               return Err(EmbedError::InputRead { path: input.path.clone(), source });
            }
         };
         let item = EmbeddedItem::new(&input.base_name, request.prefix(), content, as_text);
         if !item.symbol_name.is_ascii() {
            warn!(
               symbol = %item.symbol_name,
               path = %input.path.display(),
               "symbol contains non-ASCII characters, the header will not be ASCII-only"
            );
         } else if !is_c_identifier(&item.symbol_name) {
            warn!(
               symbol = %item.symbol_name,
               path = %input.path.display(),
               "symbol is not a valid C identifier"
            );
         }
         items.push(item);
         progress(input);
      }

      self.transition(AssemblerState::Emitting);
      let document = render(request, &items);
      drop(items);

      self.transition(AssemblerState::Writing);
      let out_header = request.out_header();
      let output_error =
         |source| EmbedError::OutputWrite { path: out_header.to_path_buf(), source };
      if let Some(parent) = out_header.parent().filter(|parent| !parent.as_os_str().is_empty()) {
         fs.create_dir_all(parent).map_err(output_error)?;
      }
      fs.write(out_header, &document.text()).map_err(output_error)?;

      self.transition(AssemblerState::Done);
      Ok(document)
   }
}

#[cfg(test)]
mod tests {
   use std::path::PathBuf;

   use super::*;
   use crate::io::memory::MemoryFileSystem;
   use crate::request::{Defaults, EmbedConfig};

   fn request(files: &[&str], list: bool) -> EmbedRequest {
      EmbedConfig {
         dir: Some(PathBuf::from("/assets")),
         files: files.iter().map(PathBuf::from).collect(),
         out_header: Some(PathBuf::from("/gen/embedded.h")),
         list,
         ..EmbedConfig::default()
      }
      .into_request(&Defaults::default())
      .unwrap()
   }

   #[test]
   fn writes_single_item_header() {
      let fs = MemoryFileSystem::with_files(&[("/assets/logo.png", &[0x00, 0x01, 0xff])]);
      let request = request(&["logo.png"], false);
      let mut assembler = HeaderAssembler::new(&request);
      assembler.run(&fs, |_| ()).unwrap();

      assert_eq!(assembler.state(), AssemblerState::Done);
      assert_eq!(
         fs.text("/gen/embedded.h").unwrap(),
         "#pragma once\n\
          // machine generated, do not edit\n\
          #include <stdint.h>\n\
          #include <stddef.h>\n\
          \n\
          static const uint8_t embed_logo_png[3] = {\n\
          0x00, 0x01, 0xff, \n\
          };\n"
      );
      assert_eq!(fs.writes.get(), 1);
   }

   #[test]
   fn declarations_keep_request_order() {
      let fs = MemoryFileSystem::with_files(&[
         ("/assets/b.bin", &[0x41]),
         ("/assets/a.bin", &[0x42]),
      ]);
      let request = request(&["b.bin", "a.bin"], true);
      let document = HeaderAssembler::new(&request).run(&fs, |_| ()).unwrap();

      let fragments = document.fragments();
      assert_eq!(fragments.len(), 4);
      assert!(fragments[1].contains("embed_b_bin[1]"));
      assert!(fragments[2].contains("embed_a_bin[1]"));
      let toc = &fragments[3];
      assert!(toc.find("\"a_bin\"").unwrap() < toc.find("\"b_bin\"").unwrap());
      assert!(document.text().ends_with("    { \"b_bin\", embed_b_bin, 1 },\n};\n"));
   }

   #[test]
   fn reports_progress_per_file() {
      let fs = MemoryFileSystem::with_files(&[("/assets/a.bin", &[1]), ("/assets/b.bin", &[2])]);
      let request = request(&["a.bin", "b.bin"], false);
      let mut seen = Vec::new();
      HeaderAssembler::new(&request).run(&fs, |input| seen.push(input.base_name.clone())).unwrap();
      assert_eq!(seen, ["a.bin", "b.bin"]);
   }

   #[test]
   fn unreadable_input_leaves_output_untouched() {
      let fs = MemoryFileSystem::with_files(&[
         ("/assets/a.bin", &[1]),
         ("/gen/embedded.h", b"previous header"),
      ]);
      let request = request(&["a.bin", "missing.bin"], true);
      let mut assembler = HeaderAssembler::new(&request);
      let err = assembler.run(&fs, |_| ()).unwrap_err();

      assert_eq!(assembler.state(), AssemblerState::Failed);
      assert!(matches!(&err, EmbedError::InputRead { path, .. } if path.ends_with("missing.bin")));
      assert_eq!(fs.writes.get(), 0);
      assert_eq!(fs.text("/gen/embedded.h").unwrap(), "previous header");
   }

   #[test]
   fn write_failure_is_reported() {
      let mut fs = MemoryFileSystem::with_files(&[("/assets/a.bin", &[1])]);
      fs.fail_writes = true;
      let request = request(&["a.bin"], false);
      let err = HeaderAssembler::new(&request).run(&fs, |_| ()).unwrap_err();
      assert!(matches!(err, EmbedError::OutputWrite { .. }));
   }

   #[test]
   fn text_mode_round_trip() {
      let content = b"#version 330\nvoid main() {}\n";
      let fs = MemoryFileSystem::with_files(&[("/assets/shader.glsl", content)]);
      let request = EmbedConfig {
         files: vec![PathBuf::from("/assets/shader.glsl")],
         out_header: Some(PathBuf::from("shaders.h")),
         as_text: true,
         ..EmbedConfig::default()
      }
      .into_request(&Defaults::default())
      .unwrap();
      let document = HeaderAssembler::new(&request).run(&fs, |_| ()).unwrap();

      let declaration = &document.fragments()[1];
      assert!(declaration.starts_with("static const char embed_shader_glsl[29] = {\n"));
      let body = declaration.split_once("= {\n").unwrap().1.trim_end_matches("};\n");
      let mut expected = content.to_vec();
      expected.push(0);
      assert_eq!(crate::literal::decode(body), expected);
   }
}
