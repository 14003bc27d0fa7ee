//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is provided through Leptos context by the root component rather
//! than living in a module-level singleton, so tests build isolated stores.

pub mod session;
