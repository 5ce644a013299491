// ABOUTME: Helper modules for hunter-cli
// ABOUTME: Provides output formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

pub mod display;
