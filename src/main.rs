use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use buildenv::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("buildenv=warn")),
        )
        .with_target(false)
        .init();

    let workspace = match args.workspace {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let outcome = buildenv::convert(&workspace)?;

    match &outcome.first_created_file {
        Some(first) => {
            for path in &outcome.created_files {
                println!("wrote {}", path.display());
            }
            println!(
                "{} environment file(s) created, starting with {}",
                outcome.created_files.len(),
                first.display()
            );
        }
        None => println!(
            "no environments defined in {}",
            workspace.join(buildenv::SOURCE_FILE_NAME).display()
        ),
    }

    Ok(())
}
