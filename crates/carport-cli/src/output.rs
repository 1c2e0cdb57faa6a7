//! Output formatting for CLI responses

use anyhow::Error;
use can_chrysler_protocol::{ChryslerFrame, ChryslerVariant};
use colored::*;
use serde_json::json;

use crate::commands::replay::{CycleReport, ReplaySummary};

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": format!("{error:#}"),
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format error as JSON: {}", e),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// One frame as `NAME bus=N SIGNAL=value ...`.
pub fn format_frame(frame: &ChryslerFrame) -> String {
    let mut line = format!("{} bus={}", frame.id, frame.bus);
    for (name, value) in &frame.signals {
        line.push_str(&format!(" {name}={value}"));
    }
    line
}

/// Print one replayed cycle. JSON mode writes one object per line so the
/// output can be piped back into other tools.
pub fn print_cycle(report: &CycleReport, json: bool) {
    if json {
        match serde_json::to_string(report) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format cycle as JSON: {}", e),
        }
        return;
    }

    let marker = if report.output.state.can_valid {
        "●".green()
    } else {
        "●".red()
    };
    let conditions: Vec<&str> = report.output.conditions.iter().map(|c| c.name()).collect();

    print!("{} {}", marker, format!("cycle {:>5}", report.cycle).bold());
    if !conditions.is_empty() {
        print!("  [{}]", conditions.join(", ").yellow());
    }
    println!();

    if report.frames.is_empty() {
        println!("    {}", "(silent)".dimmed());
    }
    for frame in &report.frames {
        println!("    {}", format_frame(frame));
    }
}

pub fn print_summary(summary: &ReplaySummary, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "summary": summary
        });
        match serde_json::to_string(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format summary as JSON: {}", e),
        }
        return;
    }

    println!();
    println!("{} {}", "Replay:".bold(), summary.variant.cyan());
    println!("  Cycles: {}", summary.cycles);
    println!(
        "  Valid: {}",
        if summary.valid_cycles == summary.cycles {
            summary.valid_cycles.to_string().green()
        } else {
            summary.valid_cycles.to_string().yellow()
        }
    );
    println!("  Commanding: {}", summary.commanding_cycles);
    println!("  Frames Sent: {}", summary.frames_sent);
    println!("  Rate Limited: {}", summary.rate_limited_cycles);
}

pub fn print_variant_list(variants: &[ChryslerVariant], json: bool) {
    if json {
        let list: Vec<_> = variants
            .iter()
            .map(|variant| {
                let params = variant.params();
                json!({
                    "name": variant.name(),
                    "description": variant.description(),
                    "min_steer_speed": params.min_steer_speed,
                    "latch_release_speed": params.latch_release_speed,
                })
            })
            .collect();
        let output = json!({
            "success": true,
            "variants": list
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format variant list as JSON: {}", e),
        }
        return;
    }

    println!("{}", "Supported Variants:".bold());
    for variant in variants {
        let params = variant.params();
        let release = params
            .latch_release_speed
            .map(|speed| format!(", releases below {speed:.1} m/s"))
            .unwrap_or_default();
        println!(
            "  {} {} (steers from {:.1} m/s{})",
            variant.name().cyan(),
            variant.description(),
            params.min_steer_speed,
            release.dimmed()
        );
    }
}

/// Full parameter record of one variant.
pub fn print_variant(variant: ChryslerVariant, json: bool) {
    let params = variant.params();
    if json {
        let output = json!({
            "success": true,
            "description": variant.description(),
            "params": params
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format variant as JSON: {}", e),
        }
        return;
    }

    println!("{} {}", variant.name().bold(), variant.description());
    println!("  Wheelbase: {:.3} m", params.wheelbase);
    println!("  Steer Ratio: {:.1}", params.steer_ratio);
    println!("  Mass: {:.0} kg", params.mass);
    println!("  Min Steer Speed: {:.2} m/s", params.min_steer_speed);
    match params.latch_release_speed {
        Some(speed) => println!("  Latch Release: {:.2} m/s", speed),
        None => println!("  Latch Release: {}", "never".dimmed()),
    }
    let limits = &params.steer_limits;
    println!(
        "  Torque: max {} up {} down {} error {} override {}",
        limits.max,
        limits.delta_up,
        limits.delta_down,
        limits.error_max,
        limits.override_threshold
    );
}
