pub mod generate;
pub mod version;
