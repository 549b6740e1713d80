//! Progress reporting utilities.

use std::io::Stdout;

use colored::Colorize;
use pbr::ProgressBar;

/// Reports a task.
pub fn task(name: &str) {
   println!("{}", name.bold());
}

/// Reports that a task had nothing to do.
pub fn skipped(reason: &str) {
   println!("  {}", reason.dimmed());
}

/// Reports a finished task.
pub fn done(summary: &str) {
   println!("  {}", summary.green());
}

/// A progress bar that only appears once there is progress to show.
pub struct LazyBar {
   total: u64,
   enabled: bool,
   bar: Option<ProgressBar<Stdout>>,
}

impl LazyBar {
   pub fn new(total: usize, enabled: bool) -> Self {
      Self { total: total as u64, enabled, bar: None }
   }

   pub fn inc(&mut self) {
      if !self.enabled {
         return;
      }
      let total = self.total;
      self.bar.get_or_insert_with(|| ProgressBar::new(total)).inc();
   }

   pub fn finish(self) {
      if let Some(mut bar) = self.bar {
         bar.finish();
      }
   }
}
