use clap::Parser;
use contact_flavors::utils::{logger, validation::Validate};
use contact_flavors::{remove_flavor, sample_contacts, CliConfig, ContactError};

fn run(config: &CliConfig) -> Result<String, ContactError> {
    config.validate()?;

    let contacts = sample_contacts();
    tracing::debug!("Loaded {} sample contacts", contacts.len());

    let updated = remove_flavor(Some(contacts), &config.target, &config.flavor)?;
    Ok(serde_json::to_string_pretty(&updated)?)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Flavor removal failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
