//! Self-hosted random alias strategy.

use async_trait::async_trait;

use crate::domain::AliasGenerator;
use crate::error::AppError;
use crate::utils::codegen::generate_code;

/// Default alias strategy: random URL-safe codes from OS entropy.
///
/// Needs no network and no coordination; uniqueness is left to the storage
/// constraint and the link service's retry loop.
pub struct RandomAlias;

#[async_trait]
impl AliasGenerator for RandomAlias {
    async fn generate(&self, _original_url: &str) -> Result<String, AppError> {
        generate_code()
            .map_err(|e| AppError::generation_failed(format!("entropy source failed: {e}")))
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
