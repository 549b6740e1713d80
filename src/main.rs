use std::path::{Path, PathBuf};

use anyhow::Context;
use embedfiles_codegen::{
   generate, AlwaysStale, Defaults, DiskFileSystem, EmbedConfig, EmbedRequest, MtimeOracle,
   Outcome, StalenessOracle,
};
use progress::LazyBar;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

mod job;
mod progress;

#[derive(StructOpt)]
#[structopt(name = "embedfiles", about = "Generates a C header embedding the contents of files.")]
struct Args {
   /// The files to embed.
   files: Vec<PathBuf>,

   /// Base directory of the files to embed.
   #[structopt(long)]
   dir: Option<PathBuf>,

   /// Directory that relative paths are resolved against.
   ///
   /// Defaults to the current directory, or to the job file's directory when using --jobs.
   #[structopt(long)]
   source_root: Option<PathBuf>,

   /// The generated header file.
   #[structopt(short, long)]
   out_header: Option<PathBuf>,

   /// Prefix of every generated symbol.
   #[structopt(long)]
   prefix: Option<String>,

   /// Also generates a table of contents listing every embedded file.
   #[structopt(long)]
   list: bool,

   /// Null-terminates the data and declares it as `char` arrays.
   #[structopt(long)]
   as_text: bool,

   /// Omits the `const` qualifier from the declarations.
   #[structopt(long)]
   no_const: bool,

   /// Regenerates even if the header is newer than all of its inputs.
   #[structopt(long)]
   force: bool,

   /// Runs every job in the given TOML file instead of a single request.
   #[structopt(
      long,
      conflicts_with_all = &["files", "dir", "out-header", "prefix", "list", "as-text", "no-const"]
   )]
   jobs: Option<PathBuf>,

   /// Does not print progress.
   #[structopt(short, long)]
   quiet: bool,
}

impl Args {
   fn single_config(&self) -> EmbedConfig {
      EmbedConfig {
         dir: self.dir.clone(),
         files: self.files.clone(),
         out_header: self.out_header.clone(),
         prefix: self.prefix.clone(),
         list: self.list,
         as_text: self.as_text,
         as_const: if self.no_const { Some(false) } else { None },
      }
   }

   fn requests(&self) -> anyhow::Result<Vec<EmbedRequest>> {
      let (configs, job_dir) = match &self.jobs {
         Some(path) => (job::load(path)?, path.parent().map(Path::to_path_buf)),
         None => (vec![self.single_config()], None),
      };
      let defaults = Defaults {
         source_dir: self
            .source_root
            .clone()
            .or(job_dir)
            .unwrap_or_else(|| PathBuf::from(".")),
         ..Defaults::default()
      };
      let requests = configs
         .into_iter()
         .map(|config| config.into_request(&defaults))
         .collect::<Result<Vec<_>, _>>()?;
      job::check_distinct_outputs(&requests)?;
      Ok(requests)
   }
}

fn run(request: &EmbedRequest, oracle: &dyn StalenessOracle, quiet: bool) -> anyhow::Result<()> {
   if !quiet {
      progress::task(&format!(
         "Embedding {} file(s) into {}",
         request.inputs().len(),
         request.out_header().display()
      ));
   }
   let mut bar = LazyBar::new(request.inputs().len(), !quiet);
   let outcome = generate(request, &DiskFileSystem, oracle, |_| bar.inc());
   bar.finish();
   let outcome =
      outcome.with_context(|| format!("cannot generate {}", request.out_header().display()))?;

   if !quiet {
      match outcome {
         Outcome::UpToDate => progress::skipped("up to date"),
         Outcome::Written { items, bytes, .. } => {
            progress::done(&format!("wrote {} item(s), {} bytes", items, bytes))
         }
      }
   }
   Ok(())
}

fn main() -> anyhow::Result<()> {
   tracing_subscriber::fmt()
      .with_env_filter(
         EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
      )
      .with_writer(std::io::stderr)
      .init();

   let args = Args::from_args();
   let requests = args.requests()?;
   let oracle: &dyn StalenessOracle = if args.force { &AlwaysStale } else { &MtimeOracle };
   for request in &requests {
      run(request, oracle, args.quiet)?;
   }

   Ok(())
}
