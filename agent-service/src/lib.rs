//! Agent service: a thin HTTP façade that turns natural-language food queries
//! into structured objects via an LLM, then relays search queries to the
//! recipe search backend.

pub mod agents;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
