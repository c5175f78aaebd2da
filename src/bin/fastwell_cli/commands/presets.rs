// ABOUTME: Preset listing command for fastwell-cli
// ABOUTME: Prints every fasting preset with its fasting and eating window lengths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fastwell::config::OutputFormat;
use fastwell::models::FastingPreset;
use serde_json::json;

use crate::helpers::display::print_json;

/// List all presets
pub fn list(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let presets: Vec<_> = FastingPreset::all()
                .iter()
                .map(|preset| {
                    json!({
                        "preset": preset,
                        "display_name": preset.display_name(),
                        "fasting_hours": preset.fasting_hours(),
                        "eating_window_hours": preset.eating_window_hours(),
                    })
                })
                .collect();
            print_json(&presets)
        }
        OutputFormat::Pretty => {
            println!("{:<8} {:>8} {:>8}", "Preset", "Fast", "Eat");
            println!("{}", "=".repeat(26));
            for preset in FastingPreset::all() {
                println!(
                    "{:<8} {:>7}h {:>7}h",
                    preset.display_name(),
                    preset.fasting_hours(),
                    preset.eating_window_hours()
                );
            }
            Ok(())
        }
    }
}
