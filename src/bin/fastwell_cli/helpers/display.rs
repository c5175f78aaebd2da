// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for fastwell-cli
// ABOUTME: Renders verdicts, plans, advisories and errors as JSON or human-readable text

use anyhow::Result;
use fastwell::config::OutputFormat;
use fastwell::errors::{AppError, ErrorResponse, ErrorResponseDetails};
use fastwell::models::{FastingPlan, PlanSafetyResult, Recommendation};
use fastwell::services::PlanAssessment;
use serde::Serialize;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an error to stderr in the requested format
pub fn print_error(error: &AppError, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let response = ErrorResponse {
                error: ErrorResponseDetails {
                    code: error.code,
                    message: error.message.clone(),
                    field: error.context.field.clone(),
                    details: error.context.details.clone(),
                },
            };
            match serde_json::to_string_pretty(&response) {
                Ok(body) => eprintln!("{body}"),
                Err(_) => eprintln!("{error}"),
            }
        }
        OutputFormat::Pretty => {
            eprintln!("Error: {error}");
            if let Some(reason) = error.context.details.get("reason") {
                eprintln!("   Reason: {reason}");
            }
        }
    }
}

/// Display a safety verdict
pub fn display_safety(verdict: &PlanSafetyResult) {
    match verdict {
        PlanSafetyResult::Safe => println!("Safety: SAFE"),
        PlanSafetyResult::Caution { reasons } => {
            println!("Safety: CAUTION");
            for reason in reasons {
                println!("   - {reason}");
            }
        }
        PlanSafetyResult::Blocked { reason } => {
            println!("Safety: BLOCKED ({reason})");
            println!("   A fasting plan cannot be generated for this profile.");
        }
    }
}

/// Display a generated plan
pub fn display_plan(plan: &FastingPlan) {
    println!("\nFasting Plan");
    println!("{}", "=".repeat(50));
    println!(
        "   Preset: {} ({}h fast / {}h eating)",
        plan.recommended_preset.display_name(),
        plan.recommended_preset.fasting_hours(),
        plan.recommended_preset.eating_window_hours()
    );
    println!(
        "   Duration: {} weeks ({} to {})",
        plan.duration_weeks,
        plan.start_date.format("%Y-%m-%d"),
        plan.end_date().format("%Y-%m-%d")
    );
    println!("   Daily calories: {} kcal", plan.daily_calorie_target);
    println!("   Calorie deficit: {} kcal/day", plan.calorie_deficit);
    println!(
        "   Protein: {} g/day ({:.1} g/kg)",
        plan.protein_target_grams, plan.protein_per_kg
    );
    println!("   Carb:fiber ratio: {:.0}:1", plan.carb_fiber_ratio);
    println!(
        "   Expected loss: {:.2} kg/week",
        plan.expected_weekly_loss_kg
    );

    println!("\nMilestones:");
    for milestone in &plan.milestones {
        match &milestone.description_arg {
            Some(arg) => println!(
                "   Week {:>2}: {} (~{arg} kg)",
                milestone.week_number, milestone.title
            ),
            None => println!("   Week {:>2}: {}", milestone.week_number, milestone.title),
        }
    }
}

/// Display fitness advisories
pub fn display_recommendations(advisories: &[Recommendation]) {
    println!("\nFitness Recommendations");
    println!("{}", "=".repeat(50));
    for advisory in advisories {
        let params = if advisory.params.is_empty() {
            String::new()
        } else {
            let joined: Vec<String> = advisory.params.iter().map(ToString::to_string).collect();
            format!(" [{}]", joined.join(", "))
        };
        println!(
            "   {:<10} {}{params}",
            format!("{:?}", advisory.priority).to_uppercase(),
            advisory.title_key
        );
    }
}

/// Display a full onboarding assessment
pub fn display_assessment(assessment: &PlanAssessment) {
    display_safety(&assessment.safety);
    display_plan(&assessment.plan);
    display_recommendations(&assessment.recommendations);
}
