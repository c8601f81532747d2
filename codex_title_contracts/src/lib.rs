pub mod artifacts;
pub mod config;
pub mod contracts;
pub mod deployments;
pub mod errors;
pub mod network;
pub mod token_uri;
