//! Job files, for generating several headers in one invocation.
//!
//! ```toml
//! [[embed]]
//! dir = "assets"
//! files = ["logo.png", "font.bin"]
//! outHeader = "generated/assets.h"
//! list = true
//!
//! [[embed]]
//! files = ["shaders/sprite.glsl"]
//! outHeader = "generated/shaders.h"
//! asText = true
//! ```
//!
//! Relative paths are resolved against the directory containing the job file.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use embedfiles_codegen::{EmbedConfig, EmbedError, EmbedRequest};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct JobFile {
   #[serde(default)]
   embed: Vec<EmbedConfig>,
}

/// Parses the contents of a job file.
pub fn parse(source: &str) -> anyhow::Result<Vec<EmbedConfig>> {
   let file: JobFile = toml::from_str(source)?;
   if file.embed.is_empty() {
      return Err(EmbedError::Configuration("job file has no [[embed]] entries".into()).into());
   }
   Ok(file.embed)
}

/// Loads a job file. Output paths are made relative to the file's directory.
pub fn load(path: &Path) -> anyhow::Result<Vec<EmbedConfig>> {
   let source = std::fs::read_to_string(path)
      .with_context(|| format!("cannot read job file {}", path.display()))?;
   let mut configs =
      parse(&source).with_context(|| format!("invalid job file {}", path.display()))?;
   let base = path.parent().unwrap_or_else(|| Path::new(""));
   for config in &mut configs {
      config.out_header = config.out_header.take().map(|out| base.join(out));
   }
   Ok(configs)
}

/// Rejects request sets in which two requests would write the same header.
pub fn check_distinct_outputs(requests: &[EmbedRequest]) -> Result<(), EmbedError> {
   let mut seen = HashMap::new();
   for (index, request) in requests.iter().enumerate() {
      if let Some(previous) = seen.insert(request.out_header(), index) {
         return Err(EmbedError::Configuration(format!(
            "jobs {} and {} both write {}",
            previous + 1,
            index + 1,
            request.out_header().display()
         )));
      }
   }
   Ok(())
}
