//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep formatting and URL concerns out of page and
//! component code so they can be tested without a browser.

pub mod card_link;
pub mod date;
pub mod markdown;
