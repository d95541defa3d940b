pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::remover::{remove_flavor, remove_flavor_in_place, remove_strawberry};
pub use core::sample::sample_contacts;
pub use domain::model::{Contact, ContactBook};
pub use utils::error::{ContactError, Result};
