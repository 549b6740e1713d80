//! Deciding whether a header needs to be regenerated at all.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

/// Answers whether `outputs` are out of date with respect to `inputs`.
pub trait StalenessOracle {
   fn is_stale(&self, inputs: &[PathBuf], outputs: &[PathBuf]) -> bool;
}

/// Compares modification times.
///
/// Outputs are stale when any of them is missing, or when any input is missing or was modified
/// after the oldest output.
#[derive(Debug, Clone, Copy, Default)]
pub struct MtimeOracle;

/// Always regenerates.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysStale;

fn modified(path: &Path) -> Option<SystemTime> {
   std::fs::metadata(path).and_then(|metadata| metadata.modified()).ok()
}

impl StalenessOracle for MtimeOracle {
   fn is_stale(&self, inputs: &[PathBuf], outputs: &[PathBuf]) -> bool {
      let mut oldest_output: Option<SystemTime> = None;
      for output in outputs {
         match modified(output) {
            Some(time) => {
               oldest_output = Some(oldest_output.map_or(time, |oldest| oldest.min(time)))
            }
            None => return true,
         }
      }
      let oldest_output = match oldest_output {
         Some(time) => time,
         None => return true,
      };
      inputs.iter().any(|input| modified(input).map_or(true, |time| time > oldest_output))
   }
}

impl StalenessOracle for AlwaysStale {
   fn is_stale(&self, _inputs: &[PathBuf], _outputs: &[PathBuf]) -> bool {
      true
   }
}

/// Returns whether generation should run. When this returns `false` the caller must not touch
/// the filesystem.
pub fn should_run(oracle: &dyn StalenessOracle, inputs: &[PathBuf], outputs: &[PathBuf]) -> bool {
   let stale = oracle.is_stale(inputs, outputs);
   debug!(inputs = inputs.len(), outputs = outputs.len(), stale, "checked staleness");
   stale
}

#[cfg(test)]
mod tests {
   use std::fs::File;
   use std::time::Duration;

   use super::*;

   fn touch(path: &Path, time: SystemTime) {
      File::options().write(true).open(path).unwrap().set_modified(time).unwrap();
   }

   #[test]
   fn missing_output_is_stale() {
      let dir = tempfile::tempdir().unwrap();
      let input = dir.path().join("a.bin");
      std::fs::write(&input, [1u8]).unwrap();
      assert!(MtimeOracle.is_stale(&[input], &[dir.path().join("out.h")]));
   }

   #[test]
   fn newer_input_is_stale() {
      let dir = tempfile::tempdir().unwrap();
      let input = dir.path().join("a.bin");
      let output = dir.path().join("out.h");
      std::fs::write(&input, [1u8]).unwrap();
      std::fs::write(&output, "x").unwrap();

      let base = SystemTime::now() - Duration::from_secs(3600);
      touch(&input, base);
      touch(&output, base + Duration::from_secs(10));
      assert!(!MtimeOracle.is_stale(&[input.clone()], &[output.clone()]));

      touch(&input, base + Duration::from_secs(20));
      assert!(MtimeOracle.is_stale(&[input], &[output]));
   }

   #[test]
   fn missing_input_is_stale() {
      let dir = tempfile::tempdir().unwrap();
      let output = dir.path().join("out.h");
      std::fs::write(&output, "x").unwrap();
      assert!(MtimeOracle.is_stale(&[dir.path().join("gone.bin")], &[output]));
   }

   #[test]
   fn no_outputs_is_stale() {
      assert!(MtimeOracle.is_stale(&[], &[]));
      assert!(should_run(&AlwaysStale, &[], &[]));
   }
}
