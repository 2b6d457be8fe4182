//! Parses integer arithmetic expressions with single-letter variables into
//! expression trees, and calculates them for given variable values.

pub mod interpreter;
