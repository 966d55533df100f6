//! Domain services backing the HTTP routes.

pub mod cards;
