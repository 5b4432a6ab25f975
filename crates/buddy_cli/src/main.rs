//! CLI entry point for codebuddy: prompt in, extracted code on stdout.

mod cli;

use anyhow::Result;
use buddy_extract::extract;
use buddy_llm::{OllamaClient, OllamaConfig, PromptGateway};
use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = OllamaConfig::from_env();
    if let Some(url) = cli.url {
        config = config.with_api_url(url);
    }
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }

    let client = OllamaClient::new(config);
    let reply = client.response_only(&cli.prompt).await?;

    if cli.raw {
        println!("{reply}");
        return Ok(());
    }

    let code = extract(cli.language, &reply);
    if code.is_empty() {
        // Empty extraction is an outcome, not an error; tell the user on
        // stderr and keep stdout clean for piping.
        eprintln!("no {} code block found in the model reply", cli.language);
        return Ok(());
    }

    println!("{code}");
    Ok(())
}
