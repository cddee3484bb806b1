pub mod api;
pub mod completion;
pub mod config;
pub mod corpus;
pub mod prompts;
pub mod tutor;
