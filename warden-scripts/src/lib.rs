pub mod client;
pub mod model;

pub use client::{ProviderError, ScriptsClient};
pub use model::ScriptResult;
