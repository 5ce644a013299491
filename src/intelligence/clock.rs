// ABOUTME: Injectable time and identifier sources for the food analyzer
// ABOUTME: Clock and IdGenerator traits with system-backed and deterministic implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

//! The two non-deterministic inputs of a classification are the entity id
//! and the creation timestamp. Both come through these traits so tests can
//! pin them.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use uuid::Uuid;

/// Source of the current time in epoch milliseconds
pub trait Clock: Send + Sync {
    /// Current time (epoch milliseconds)
    fn now_millis(&self) -> i64;
}

/// Source of fresh entity identifiers
pub trait IdGenerator: Send + Sync {
    /// A new identifier, unique per call
    fn next_id(&self) -> String;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now_ms: i64,
}

impl FixedClock {
    /// Freeze the clock at `now_ms`
    #[must_use]
    pub const fn new(now_ms: i64) -> Self {
        Self { now_ms }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.now_ms
    }
}

/// Identifiers `<prefix>-1`, `<prefix>-2`, ... in call order
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Start a sequence with the given prefix
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{n}", self.prefix)
    }
}
