// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! In-memory store.
//!
//! Stands in for the boundary behind which the real system keeps its
//! relational repositories: the credential store consulted at login and
//! the domain tables the intranet and enrollment services read and write.
//! The authentication core only ever reads principals through this seam;
//! it never mutates them.

use std::collections::HashMap;

use chrono::Utc;
use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

use crate::auth::Role;
use crate::error::ApiError;
use crate::models::{
    AcademicRecord, CreateRecordRequest, Enrollment, UserAccount,
};

/// Normalize a login identifier for comparison: NFKC, trimmed,
/// lowercased. Applied to both the stored and the supplied side.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim().nfkc().collect::<String>().to_lowercase()
}

#[derive(Default)]
pub struct InMemoryStore {
    accounts: HashMap<Uuid, UserAccount>,
    records: HashMap<String, AcademicRecord>,
    enrollments: HashMap<String, Enrollment>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Accounts (credential store)
    // -------------------------------------------------------------------------

    /// Look up an account by username or email.
    ///
    /// Both sides are normalized; no signal distinguishes "unknown
    /// username" from "unknown email".
    pub fn find_by_identifier(&self, identifier: &str) -> Option<&UserAccount> {
        let wanted = normalize_identifier(identifier);
        self.accounts.values().find(|account| {
            normalize_identifier(&account.username) == wanted
                || normalize_identifier(&account.email) == wanted
        })
    }

    /// Create an account; fails on duplicate username or email.
    pub fn insert_account(
        &mut self,
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Result<UserAccount, ApiError> {
        let username = username.into();
        let email = email.into();

        if self.find_by_identifier(&username).is_some()
            || self.find_by_identifier(&email).is_some()
        {
            return Err(ApiError::conflict("Username or email already exists"));
        }

        let account = UserAccount {
            user_id: Uuid::new_v4(),
            username,
            email,
            password_hash: password_hash.into(),
            role,
            created_at: Utc::now(),
        };
        self.accounts.insert(account.user_id, account.clone());
        Ok(account)
    }

    pub fn list_accounts(&self) -> Vec<&UserAccount> {
        let mut accounts: Vec<&UserAccount> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.username.cmp(&b.username));
        accounts
    }

    // -------------------------------------------------------------------------
    // Academic records (intranet service)
    // -------------------------------------------------------------------------

    pub fn records_for(&self, student: &str) -> Vec<AcademicRecord> {
        let mut records: Vec<AcademicRecord> = self
            .records
            .values()
            .filter(|record| record.student == student)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));
        records
    }

    pub fn insert_record(&mut self, request: CreateRecordRequest) -> AcademicRecord {
        let id = Uuid::new_v4().to_string();
        let record = AcademicRecord {
            id: id.clone(),
            student: request.student,
            course: request.course,
            grade: request.grade,
            term: request.term,
            recorded_at: Utc::now(),
        };
        self.records.insert(id, record.clone());
        record
    }

    // -------------------------------------------------------------------------
    // Enrollments (enrollment service)
    // -------------------------------------------------------------------------

    pub fn enrollments_for(&self, student: &str) -> Vec<Enrollment> {
        let mut enrollments: Vec<Enrollment> = self
            .enrollments
            .values()
            .filter(|enrollment| enrollment.student == student)
            .cloned()
            .collect();
        enrollments.sort_by(|a, b| a.requested_at.cmp(&b.requested_at));
        enrollments
    }

    /// File an enrollment request; fails if the student already has one
    /// pending for the same course.
    pub fn insert_enrollment(
        &mut self,
        student: impl Into<String>,
        course: impl Into<String>,
    ) -> Result<Enrollment, ApiError> {
        let student = student.into();
        let course = course.into();

        let duplicate = self
            .enrollments
            .values()
            .any(|e| e.student == student && e.course == course && e.status == "pending");
        if duplicate {
            return Err(ApiError::conflict(
                "An enrollment request for this course is already pending",
            ));
        }

        let id = Uuid::new_v4().to_string();
        let enrollment = Enrollment {
            id: id.clone(),
            student,
            course,
            status: "pending".to_string(),
            requested_at: Utc::now(),
        };
        self.enrollments.insert(id, enrollment.clone());
        Ok(enrollment)
    }
}
