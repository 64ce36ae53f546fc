pub mod generate;
pub mod quick;
