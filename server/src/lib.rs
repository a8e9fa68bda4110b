//! Back Office Server
//!
//! Multi-tenant inventory and sales back office (vehicles, customers,
//! companies, payments). This crate carries the permission-resolution
//! engine; request dispatch, identity, and the CRUD surfaces live with
//! their own services and consume [`permissions::AccessGate`].

pub mod config;
pub mod db;
pub mod permissions;
