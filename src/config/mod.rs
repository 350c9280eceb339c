//! Configuration loading and management for the Attendance Engine.
//!
//! This module provides functionality to load the operations policy from a
//! YAML file (leave allowance, attendance defaults) and the persisted
//! client preferences that the original system kept in browser storage.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/attendance/policy.yaml").unwrap();
//! println!("Annual leave allowance: {}", config.policy().leave.annual_allowance_days);
//! ```

mod loader;
mod preferences;
mod types;

pub use loader::ConfigLoader;
pub use preferences::{Preferences, PreferencesStore, Theme};
pub use types::{AttendancePolicy, LeavePolicy, PolicyConfig};
