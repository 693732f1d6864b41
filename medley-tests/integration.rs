//! Integration tests for Medley
//!
//! These tests drive complete menu sessions through injected
//! input/output buffers and verify the catalog contract through the
//! public API only.

#[path = "integration/menu_session.rs"]
mod menu_session;

#[path = "integration/catalog_contract.rs"]
mod catalog_contract;
