use super::Parser;

#[derive(Parser, Debug)]
#[command(about = "Logs through a bundle logger facade")]
pub struct Cli {
    /// Settings file, defaults to settings/dev.toml in debug builds
    #[arg(long)]
    pub settings: Option<String>,

    /// Forward to the tracing subscriber instead of printing to the console
    #[arg(long)]
    pub tracing: bool,
}
