//! Inventory document construction
//!
//! This module provides the types of the dynamic-inventory document and
//! the builder that folds fetched cluster and node records into it.

pub mod builder_config;
pub mod document;
pub mod group;
pub mod host_vars;
pub mod inventory_builder;
