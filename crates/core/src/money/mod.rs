//! Monetary amounts: parsing currency-formatted display strings and
//! rendering amounts back for display.

mod money_format;
mod money_model;
mod money_parser;

pub use money_format::*;
pub use money_model::*;
pub use money_parser::*;

#[cfg(test)]
mod money_tests;
