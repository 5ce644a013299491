// ABOUTME: Command modules for hunter-cli
// ABOUTME: Provides the classify and stats subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

pub mod classify;
pub mod stats;
