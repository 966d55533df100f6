//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`cards`, `filter`, `pagination`, `stats`) so
//! components depend on small focused models and the logic stays testable
//! without a DOM.

pub mod cards;
pub mod filter;
pub mod pagination;
pub mod stats;
