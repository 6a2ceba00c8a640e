use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use tracing::debug;

use crate::config::Options;
use crate::error::Result;
use crate::pipeline;
use crate::tool::{GoModGraph, GraphSource, StaticReport};
use crate::util::{logging, output};

#[derive(Parser, Debug)]
#[command(name = "modtree")]
#[command(about = "go mod graph with better human readability", long_about = None)]
pub struct Cli {
    /// Maximum depth to print, 0 for no limit
    #[arg(
        short = 'l',
        long,
        env = "MODTREE_MAX_LEVEL",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub max_level: i64,
    /// Only show branches leading to this module
    #[arg(short, long, env = "MODTREE_TARGET", default_value = "")]
    pub target: String,
    /// Print a JSON document instead of a tree
    #[arg(short, long, env = "MODTREE_JSON")]
    pub json: bool,
    /// Run go mod graph in this directory
    #[arg(short = 'C', long)]
    pub dir: Option<PathBuf>,
    /// Read a saved edge list instead of running go ("-" for stdin)
    #[arg(short, long, conflicts_with = "dir")]
    pub input: Option<PathBuf>,
    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
    /// Print a shell completion script and exit
    #[arg(long, value_enum)]
    pub completions: Option<Shell>,
}

impl Cli {
    fn options(&self) -> Result<Options> {
        let opts = Options::builder()
            .max_level(self.max_level)
            .target(self.target.clone())
            .json(self.json)
            .build()?;
        Ok(opts)
    }

    fn source(&self) -> Result<Box<dyn GraphSource>> {
        if let Some(path) = &self.input {
            return Ok(Box::new(StaticReport::from_path(path)?));
        }
        let mut source = GoModGraph::new();
        if let Some(dir) = &self.dir {
            source = source.in_dir(dir);
        }
        Ok(Box::new(source))
    }
}

pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
    if let Err(err) = dispatch(cli) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "modtree", &mut io::stdout());
        return Ok(());
    }

    let opts = cli.options()?;
    debug!(?opts, "resolved options");
    let source = cli.source()?;
    let rendered = pipeline::tree(source.as_ref(), &opts)?;
    if let Some(target) = opts.target().filter(|_| rendered.is_empty()) {
        output::warn(&format!("no dependency path reaches {target}"));
    }
    output::result(&rendered)?;
    Ok(())
}
