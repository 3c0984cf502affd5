// ABOUTME: Helper modules for nutriplan-cli
// ABOUTME: Provides terminal output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
