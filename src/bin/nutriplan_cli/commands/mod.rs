// ABOUTME: Re-exports command modules for nutriplan-cli
// ABOUTME: Provides the calculator and meal plan commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod calculators;
pub mod plan;
