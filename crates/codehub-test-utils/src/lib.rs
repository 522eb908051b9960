// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for codehub integration tests.

pub mod failing_kv;
pub mod harness;

pub use failing_kv::FailingKv;
pub use harness::{TestHarness, TestHarnessBuilder};
