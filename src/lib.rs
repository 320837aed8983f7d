//! Jyotish - Vedic Astrology MCP Server
//!
//! A Model Context Protocol server providing the daily Panchang, approximate
//! sidereal Moon placement, Ashtakoot (Guna Milan) matching and daily horoscopes.

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod server;
pub mod storage;

pub use error::{Error, Result};
pub use server::JyotishServer;
