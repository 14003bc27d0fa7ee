//! Networking modules for the remote authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the generic request path (headers, credentials, error
//! normalization), `auth` maps user actions onto endpoints, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod auth;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
