//! siteassist CLI binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use siteassist::adapters::{photo, translation};
use siteassist::cli::{read_translate_input, resolve_image_arg, Cli, Commands};
use siteassist::config::AssistConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.apply_overrides(AssistConfig::load());

    let result = match cli.command {
        Commands::Photo(args) => match resolve_image_arg(&args.image) {
            Ok(image) => Ok(photo::analyze_construction_photo(&config, &image).await),
            Err(e) => Err(e),
        },
        Commands::Translate(args) => match read_translate_input(args.text) {
            Ok(text) => Ok(translation::translate_project_content(&config, &text).await),
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
