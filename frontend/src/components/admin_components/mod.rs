//! Admin console components.

pub mod data_table;
pub mod order_details_dialog;
