// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for fastwell-cli
// ABOUTME: Provides access to the engine commands and the preset listing

pub mod engine;
pub mod presets;
