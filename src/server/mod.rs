//! MCP server exposing the calculation engine as tools

mod tools;

pub use tools::*;
