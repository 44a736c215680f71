//! coulis_cli - resolve and extract coulis style documents from the command line.

pub mod cli;
pub mod document;
pub mod error;
pub mod output;
pub mod run;

pub use document::{ContractDocument, GroupDocument, PropertyDocument, StyleDocument};
pub use error::{CliError, Result};
pub use run::{extract, resolve, HashReport, Resolution};
