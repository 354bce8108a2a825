use super::Parser;

#[derive(Parser, Debug)]
#[command(about = "In-memory user directory HTTP service")]
pub struct Cli {
    /// Path to a TOML settings file, without or with extension.
    #[arg(long)]
    pub settings: Option<String>,
}
