use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xtasks")]
#[command(about = "Run project tasks using rust instead of scripts")]
pub struct App {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Builds a binary and installs it at the given path
    Install(InstallArgs),
    /// Run the lint pipeline (fmt, check, clippy, test, machete, typos)
    Lint(LintArgs),
    /// Run the test suite
    Test(TestArgs),
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Name of the binary to install (defaults to "wikipedia")
    #[arg(short, long, default_value = "wikipedia")]
    pub name: String,

    /// Directory to install the binary to (defaults to ~/.local/bin)
    #[arg(short, long)]
    pub path: Option<String>,
}

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Print the output of passing checks too
    #[arg(short, long)]
    pub verbose: bool,

    /// Apply formatting and clippy fixes instead of only checking
    #[arg(long)]
    pub fix: bool,

    /// Skip `cargo fmt`
    #[arg(long)]
    pub no_fmt: bool,

    /// Skip `cargo check`
    #[arg(long)]
    pub no_check: bool,

    /// Skip `cargo clippy`
    #[arg(long)]
    pub no_clippy: bool,

    /// Skip `cargo test`
    #[arg(long)]
    pub no_test: bool,

    /// Skip `cargo machete`
    #[arg(long)]
    pub no_machete: bool,

    /// Skip `typos`
    #[arg(long)]
    pub no_typos: bool,
}

#[derive(Args, Debug)]
pub struct TestArgs {
    /// Only run the end-to-end tests that talk to the real Wikipedia API
    #[arg(long)]
    pub e2e: bool,

    /// Extra arguments forwarded to `cargo test`
    #[arg(last = true)]
    pub args: Vec<String>,
}
