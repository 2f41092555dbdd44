pub mod parser;
pub mod processor;
pub mod scheduler;
