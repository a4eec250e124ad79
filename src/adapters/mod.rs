// Adapters layer: concrete implementations of the domain ports.

#[cfg(feature = "cli")]
pub mod clipboard;
pub mod gemini;

#[cfg(feature = "cli")]
pub use clipboard::SystemClipboard;
pub use gemini::GeminiClient;
