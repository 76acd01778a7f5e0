use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use console::style;
use unipak_extract::{ExtractOptions, Progress, extract};

#[derive(Clone, Debug, Parser)]
#[command(name="unipak",version=env!("CARGO_PKG_VERSION"),about="Extract a .unitypackage into a readable file tree",long_about=None)]
struct App {
    /// The .unitypackage file. The part of the filename before the
    /// extension names the directory the contents are extracted to.
    package: PathBuf,

    /// Directory the output tree is created under (defaults to the
    /// package's own directory).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// If the output directory already exists, delete it and start over.
    #[arg(short, long)]
    force: bool,
}

fn run(app: App) -> anyhow::Result<PathBuf> {
    let mut options = ExtractOptions::default()
        .force(app.force)
        .on_progress(Arc::new(|progress: &Progress| {
            println!("{} => {}", style(&progress.id).dim(), progress.real_path);
        }));
    if let Some(dir) = app.output_dir {
        options = options.output_base_dir(dir);
    }

    extract(&app.package, &options)
        .with_context(|| format!("could not extract {}", app.package.display()))
}

fn main() -> ExitCode {
    match run(App::parse()) {
        Ok(output_dir) => {
            println!();
            println!(
                "Done. Result saved in {}.",
                style(output_dir.display()).green()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
