pub mod remover;
pub mod sample;

pub use crate::domain::model::{Contact, ContactBook};
pub use crate::utils::error::Result;
