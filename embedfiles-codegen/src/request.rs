//! Configuration and validated embed requests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::declaration::DeclarationStyle;
use crate::error::EmbedError;
use crate::mangle::mangle;

/// Prefix put in front of every generated symbol unless configured otherwise.
pub const DEFAULT_PREFIX: &str = "embed_";

/// Defaults that apply to every request of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
   /// Base directory for relative `dir` and `files` entries.
   pub source_dir: PathBuf,
   pub prefix: String,
}

impl Default for Defaults {
   fn default() -> Self {
      Self { source_dir: PathBuf::from("."), prefix: DEFAULT_PREFIX.to_owned() }
   }
}

/// Options for a single header, as written in a job file or given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmbedConfig {
   /// Base directory of the files to embed.
   pub dir: Option<PathBuf>,
   /// Files to embed, relative to `dir`.
   #[serde(default)]
   pub files: Vec<PathBuf>,
   /// Path of the generated header.
   pub out_header: Option<PathBuf>,
   pub prefix: Option<String>,
   /// Emit a table of contents after the arrays.
   #[serde(default)]
   pub list: bool,
   /// Null-terminate the arrays and declare them as `char`.
   #[serde(default)]
   pub as_text: bool,
   /// Emit `const` on the declarations. Defaults to `true`.
   pub as_const: Option<bool>,
}

/// One input file of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
   pub path: PathBuf,
   pub base_name: String,
}

/// A checked request to generate one header.
///
/// Always has at least one input, and no two inputs share a symbol name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedRequest {
   inputs: Vec<InputFile>,
   out_header: PathBuf,
   prefix: String,
   style: DeclarationStyle,
   emit_list: bool,
}

impl EmbedConfig {
   /// Validates the configuration and resolves its paths.
   pub fn into_request(self, defaults: &Defaults) -> Result<EmbedRequest, EmbedError> {
      let out_header = self
         .out_header
         .ok_or_else(|| EmbedError::config("missing output header path (outHeader)"))?;
      if self.files.is_empty() {
         return Err(EmbedError::config(format!(
            "no files to embed into {}",
            out_header.display()
         )));
      }

      let dir = match self.dir {
         Some(dir) => defaults.source_dir.join(dir),
         None => defaults.source_dir.clone(),
      };

      let mut inputs = Vec::with_capacity(self.files.len());
      let mut seen: HashMap<String, &Path> = HashMap::new();
      for file in &self.files {
         let base_name = file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
               EmbedError::config(format!("{} does not name a UTF-8 file", file.display()))
            })?
            .to_owned();
         if let Some(previous) = seen.insert(mangle(&base_name), file.as_path()) {
            return Err(EmbedError::config(format!(
               "{} and {} would both be embedded as `{}`",
               previous.display(),
               file.display(),
               mangle(&base_name)
            )));
         }
         inputs.push(InputFile { path: dir.join(file), base_name });
      }

      Ok(EmbedRequest {
         inputs,
         out_header,
         prefix: self.prefix.unwrap_or_else(|| defaults.prefix.clone()),
         style: DeclarationStyle { as_text: self.as_text, as_const: self.as_const.unwrap_or(true) },
         emit_list: self.list,
      })
   }
}

impl EmbedRequest {
   pub fn inputs(&self) -> &[InputFile] {
      &self.inputs
   }

   pub fn input_paths(&self) -> Vec<PathBuf> {
      self.inputs.iter().map(|input| input.path.clone()).collect()
   }

   pub fn out_header(&self) -> &Path {
      &self.out_header
   }

   pub fn prefix(&self) -> &str {
      &self.prefix
   }

   pub fn style(&self) -> DeclarationStyle {
      self.style
   }

   pub fn emit_list(&self) -> bool {
      self.emit_list
   }
}
