pub mod backend;
pub mod generate;
