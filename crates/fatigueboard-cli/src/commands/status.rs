//! Fatigue overview rendered as bars.

use fatigueboard_core::{days_to_recover, MuscleGroup, RecoveryLevel};
use serde::Serialize;

use super::Workspace;

#[derive(Serialize)]
struct StatusRow {
    muscle: MuscleGroup,
    label: &'static str,
    score: f64,
    level: RecoveryLevel,
    days_to_recover: u32,
}

#[derive(Serialize)]
struct StatusReport {
    last_evaluated: String,
    decayed_days: u32,
    muscles: Vec<StatusRow>,
}

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::open()?;
    if ws.decayed_days > 0 {
        ws.save()?;
    }

    let rate = ws.config.model.decay_per_day;
    let rows: Vec<StatusRow> = ws
        .state
        .fatigue
        .iter()
        .map(|(muscle, score)| StatusRow {
            muscle,
            label: muscle.label(),
            score,
            level: RecoveryLevel::from_score(score),
            days_to_recover: days_to_recover(score, rate),
        })
        .collect();

    if json {
        let report = StatusReport {
            last_evaluated: ws.state.last_evaluated.to_rfc3339(),
            decayed_days: ws.decayed_days,
            muscles: rows,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let width = ws.config.display.bar_width as usize;
    println!("\nMuscle Fatigue:");
    println!("{}", "─".repeat(width + 36));

    for row in rows
        .iter()
        .filter(|r| ws.config.display.show_empty || r.score > 0.0)
    {
        let filled = ((row.score / 100.0) * width as f64).round() as usize;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled.min(width)));
        let recover = match row.days_to_recover {
            0 => String::new(),
            u32::MAX => "  (no decay)".to_string(),
            1 => "  (1 day)".to_string(),
            n => format!("  ({n} days)"),
        };
        println!(
            "{:<11} {} {:>5.1}  {:<10}{}",
            row.label,
            bar,
            row.score,
            row.level.label(),
            recover
        );
    }

    println!("{}", "─".repeat(width + 36));
    match ws.state.fatigue.most_fatigued() {
        Some((muscle, score)) => println!(
            "Most fatigued: {} ({:.1}) - {}",
            muscle,
            score,
            RecoveryLevel::from_score(score).advice()
        ),
        None => println!("All muscle groups fully recovered."),
    }

    Ok(())
}
