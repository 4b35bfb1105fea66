use dotenvy::dotenv;

mod config;
mod setup;

use business::domain::completion::use_cases::generate::GenerateTextParams;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Chat completion entry point
///
/// Sends one prompt to the configured chat-completion endpoint and prints the reply.
/// Words passed on the command line form the input; without them a default
/// question is used.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.openai)?;

    // 5. Generate and print
    let text = container
        .generate_text_use_case
        .execute(GenerateTextParams {
            prompt: config.prompt(),
            stop: None,
        })
        .await?;
    println!("{}", text);

    Ok(())
}
