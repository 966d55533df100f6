//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the card list, its controls and the statistics panel.
//! Pages own the state and pass it down as signals and callbacks.

pub mod card_item;
pub mod filter_sort;
pub mod graph_stats;
pub mod pagination;
pub mod safety_card_list;
