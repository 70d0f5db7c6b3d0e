//! Game rules for k-in-a-row grids

pub mod win;

pub use win::k_in_row;
