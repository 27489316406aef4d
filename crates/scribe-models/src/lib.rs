// Models module - data structures for generation API communication
pub mod requests;
pub mod responses;


// Re-export commonly used types
pub use requests::GenerateRequest;
pub use responses::GenerationFragment;

/// Model requested when nothing else is configured
pub const DEFAULT_MODEL: &str = "llama3";
