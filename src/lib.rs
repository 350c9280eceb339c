//! Attendance Engine for internal operations
//!
//! This crate provides the attendance core of an internal-operations system:
//! monthly work and leave summaries computed from daily attendance records,
//! leave request handling, expense claims, and the record-source contract
//! those computations depend on.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod source;
