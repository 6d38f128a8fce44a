//! Core types and static tables for the ocean float query toolkit.

pub mod config;
pub mod profile;
pub mod provenance;
pub mod qc;
pub mod query;
pub mod region;
pub mod summary;
pub mod variable;
