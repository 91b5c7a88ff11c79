pub mod application;
pub mod errors;
