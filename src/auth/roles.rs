// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Principal roles for authorization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Primary role of a campus principal.
///
/// Every principal carries exactly one role; it is embedded in the token
/// at issuance and trusted by every verifying service.
///
/// ## Role Hierarchy
///
/// - `Administrator` - full access to all endpoints of all services
/// - `Coordinator` - manages programmes and academic records
/// - `Instructor` - records grades for their own courses
/// - `Student` - enrolled; can read their own records and enroll
/// - `Applicant` - registered but not yet enrolled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access
    Administrator,
    /// Programme coordinator
    Coordinator,
    /// Teaching staff
    Instructor,
    /// Enrolled student
    Student,
    /// Prospective student
    Applicant,
}

impl Role {
    /// Check if this role satisfies the required role.
    ///
    /// Administrators satisfy every requirement; every other role
    /// satisfies only its exact requirement.
    pub fn has_privilege(&self, required: Role) -> bool {
        match (self, required) {
            (Role::Administrator, _) => true,
            (role, required) => *role == required,
        }
    }

    /// Parse a role from its label (case-insensitive).
    pub fn from_str(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "administrator" => Some(Role::Administrator),
            "coordinator" => Some(Role::Coordinator),
            "instructor" => Some(Role::Instructor),
            "student" => Some(Role::Student),
            "applicant" => Some(Role::Applicant),
            _ => None,
        }
    }
}

impl Default for Role {
    /// Default role is Applicant (least privilege).
    fn default() -> Self {
        Role::Applicant
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Administrator => write!(f, "administrator"),
            Role::Coordinator => write!(f, "coordinator"),
            Role::Instructor => write!(f, "instructor"),
            Role::Student => write!(f, "student"),
            Role::Applicant => write!(f, "applicant"),
        }
    }
}
