//! Shared test utilities for the bunch-switch workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: git repository fixtures
//! - [`repo`]: [`repo::TestRepo`] builder for bunch trees

pub mod git;
pub mod repo;
