//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and form surfaces while reading the session
//! from the Leptos context provided by `App`.

pub mod header;
pub mod input;
pub mod protected_route;
