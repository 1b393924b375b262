pub mod advice;
pub mod ats;
pub mod content;
pub mod handlers;
pub mod market_fit;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod scoring;
pub mod sections;
pub mod skills;

pub use pipeline::ResumeAnalyzer;
