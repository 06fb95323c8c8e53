//! HTTP adapters for the standings data provider

pub mod api_football;

pub use api_football::ApiFootballClient;
