use clap::Parser;
use std::path::PathBuf;

use invoicer::{ConfigStore, ConsolePrompt, Result, Session, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "invoicer")]
#[command(version, about = "Interactive CLI invoice generator", long_about = None)]
struct Cli {
    /// Company name shown on invoice headers
    #[arg(long)]
    company_name: Option<String>,

    /// Company address shown on invoice headers
    #[arg(long)]
    company_address: Option<String>,

    /// Prefix for auto-generated invoice numbers
    #[arg(long)]
    invoice_prefix: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let store = ConfigStore::new(PathBuf::from(CONFIG_FILE));
    let config = store
        .load()?
        .with_overrides(cli.company_name, cli.company_address, cli.invoice_prefix);

    let mut session = Session::new(config, store, ".", ConsolePrompt);
    session.run()
}
