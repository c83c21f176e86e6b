//! Payroll export adapters for Norwegian payroll systems
//!
//! This crate transforms normalized payroll lines into the import formats of
//! external payroll systems (Tripletex and PowerOffice Go). It resolves
//! employee id and salary code mappings, applies each system's record
//! schema, and renders complete export files with conventional filenames.

#![warn(missing_docs)]

pub mod adapters;
pub mod error;
pub mod export;
pub mod mapping;
pub mod models;
pub mod registry;
