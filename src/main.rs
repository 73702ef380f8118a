use clap::Parser;
use varint_codec::adapters::cli_runner::CliRunner;
use varint_codec::config::{AppConfig, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli);
    let runner = CliRunner::new(config);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = runner.run(cli.cmd, tokio::io::stdin(), &mut stdout).await {
        eprintln!("[ERROR] {:#}", e);
        std::process::exit(1);
    }
}
