//! Configuration types for the operations policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML policy file.

use serde::Deserialize;

/// Top-level operations policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Paid-leave policy.
    pub leave: LeavePolicy,
    /// Attendance form defaults.
    pub attendance: AttendancePolicy,
}

/// Paid-leave policy.
#[derive(Debug, Clone, Deserialize)]
pub struct LeavePolicy {
    /// Paid-leave days granted per year.
    pub annual_allowance_days: u32,
}

/// Attendance form defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendancePolicy {
    /// Break duration pre-filled on new records (duration-of-day string).
    pub default_break: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            leave: LeavePolicy {
                annual_allowance_days: 20,
            },
            attendance: AttendancePolicy {
                default_break: "01:00".to_string(),
            },
        }
    }
}
