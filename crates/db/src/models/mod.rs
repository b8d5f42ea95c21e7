//! Row types and DTOs, one module per table, plus cross-table aggregates.

pub mod account;
pub mod assignment;
pub mod catalog;
pub mod course;
