//! CLI for discoverer.

mod report;

use anyhow::Result;
use clap::Parser;
use discoverer_core::config;
use discoverer_core::reindex::run_reindex;

use report::print_report;

/// Build display summaries for captured sites.
#[derive(Debug, Parser)]
#[command(name = "discoverer")]
#[command(
    about = "Summarize pages captured by webgrab into discoverer index records",
    long_about = None
)]
pub struct Cli {
    /// Root directory holding `webgrab/` and `discoverer/` (default: home directory; `~` is expanded).
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<String>,

    /// Update all summaries, overwriting pre-existing ones.
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.run()
    }

    fn run(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let root = cfg.resolve_root(self.directory.as_deref())?;
        println!("discoverer root directory: {}", root.display());
        let layout = cfg.layout(&root);
        tracing::info!(
            root = %root.display(),
            configs = %layout.configs_dir.display(),
            results = %layout.results_dir.display(),
            force = self.force,
            "starting reindex"
        );

        let report = run_reindex(&layout, self.force)?;
        print_report(&report);
        Ok(())
    }
}
