pub mod client;
pub mod config;
pub mod core;
pub mod domain;
pub mod request;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliCommand, CliConfig};

pub use client::{ApiClient, HttpTransport};
pub use config::SdkConfig;
pub use crate::core::{Hydrator, HydratorRegistry, Model, ModelKind, Record, Value};
pub use domain::model::{Amount, BankAccount, Customer, Directdebit, Status, Transaction};
pub use utils::error::{Result, SdkError};
