pub mod fallback;
pub mod handlers;
pub mod pipeline;
pub mod progress;
pub mod prompts;
