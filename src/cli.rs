use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "buildenv", version, about)]
pub struct Args {
    /// Workspace directory containing env.json (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub workspace: Option<std::path::PathBuf>,
}
