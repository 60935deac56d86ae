pub mod parser;
pub mod sinks;
