pub mod issues;
pub mod setup;
