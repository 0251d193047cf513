pub mod llm;
pub mod observability;
pub mod persistence;
pub mod prompts;
pub mod usage;
pub mod youtube;
