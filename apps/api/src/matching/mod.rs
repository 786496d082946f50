pub mod handlers;
pub mod normalize;
pub mod pipeline;
pub mod prompts;
