use clap::Parser;
use mock_registrar::utils::{logger, validation::Validate};
use mock_registrar::{CliConfig, DomainStore, ProviderRegistry, RegistrationEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mock-registrar demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // The schema layer's job: reject malformed requests before the engine.
    if let Err(e) = config.validate() {
        tracing::error!("Request validation failed: {}", e);
        eprintln!("Invalid request: {}", e);
        std::process::exit(1);
    }

    let registry = ProviderRegistry::with_defaults()?;
    let engine = RegistrationEngine::new(DomainStore::new(), registry);

    match engine.register(config.to_register_request()).await {
        Ok(receipt) => {
            tracing::info!("Registration complete");
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
        Err(e) => {
            tracing::error!("Registration failed ({}): {}", e.http_status(), e);
            eprintln!("Registration failed: {}", e);
            std::process::exit(1);
        }
    }

    let inspected = engine.inspect(&config.name).await?;
    tracing::debug!("Inspect after register: {:?}", inspected);

    Ok(())
}
