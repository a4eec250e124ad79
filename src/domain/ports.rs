use crate::utils::error::Result;
use async_trait::async_trait;

/// A single-shot text completion backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;

    fn model(&self) -> &str;
}

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}
