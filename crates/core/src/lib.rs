pub mod cache;
pub mod client;
pub mod constants;
pub mod defaults;
pub mod paths;
pub mod settings;
pub mod store;
pub mod types;
pub mod validate;

pub use client::{ApiClient, ApiError};
pub use store::{ConfigStore, StoreError};
pub use types::{AppConfig, EntriesResponse, Lead, SubmitResponse, TestResponse};
pub use validate::ValidationError;
