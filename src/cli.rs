use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "corecheck", version, about = "Actor Core conformance check CLI")]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, default_value = ".", help = "Root directory of the audited project")]
    pub root: String,
    #[arg(long, default_value_t = false, help = "Exit non-zero when any check fails")]
    pub strict: bool,
}
