use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "contact-flavors")]
#[command(about = "Remove a favorite flavor from one contact in the sample contact book")]
pub struct CliConfig {
    #[arg(long, default_value = "Freddie Mercury", help = "Full name of the contact to edit")]
    pub target: String,

    #[arg(long, default_value = "strawberry", help = "Flavor to remove, every occurrence")]
    pub flavor: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("target", &self.target)?;
        validate_non_empty_string("flavor", &self.flavor)?;
        Ok(())
    }
}
