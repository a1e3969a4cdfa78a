pub mod http;
pub mod sources;
pub mod write;
