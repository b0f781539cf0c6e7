pub mod demo;
pub mod provider;
