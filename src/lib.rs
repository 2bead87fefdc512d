// Library root - exports for the binary and tests

pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use cli::Cli;
pub use config::Config;
pub use database::{PgUserStore, UserStore};
pub use error::{InputError, PromoteError, StoreError};
pub use models::{PromotionRequest, UserRecord};
pub use services::{run, run_batch, BatchReport, Promoter};
