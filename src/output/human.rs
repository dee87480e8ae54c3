use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL};

use crate::core::metrics::{BmiResult, DeficitPlan, IdealWeight};
use crate::core::progress::TimeEstimate;
use crate::core::tracker::{Dashboard, ProgressReport};
use crate::models::{Profile, WeightEntry};

/// Pretty-print a single weight entry.
pub fn format_entry(e: &WeightEntry) -> String {
    format!("{} | {:.1} kg", e.date, e.weight_kg)
}

/// Weight history as a table, with the change from the previous entry.
pub fn history_table(entries: &[WeightEntry]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Date", "Weight (kg)", "Change"]);

    let mut previous: Option<f64> = None;
    for e in entries {
        let change = match previous {
            Some(p) => format!("{:+.1}", e.weight_kg - p),
            None => "-".to_string(),
        };
        table.add_row(vec![
            e.date.to_string(),
            format!("{:.1}", e.weight_kg),
            change,
        ]);
        previous = Some(e.weight_kg);
    }
    table.to_string()
}

pub fn format_profile(p: &Profile) -> String {
    let pace = p
        .goal_pace
        .map_or_else(|| "-".to_string(), |g| g.to_string());
    format!(
        "{} ({}, {} years)\nHeight: {:.1} cm\nWeight: {:.1} kg -> {:.1} kg\nActivity: {} | Pace: {}",
        p.name, p.sex, p.age, p.height_cm, p.initial_weight_kg, p.target_weight_kg, p.activity_level, pace
    )
}

pub fn format_bmi(b: &BmiResult) -> String {
    format!("BMI: {:.2} ({})\n{}", b.bmi, b.classification, b.description)
}

pub fn format_deficit(d: &DeficitPlan) -> String {
    format!(
        "TDEE: {:.2} kcal\nDeficit: {:.2} kcal ({}%)\nDaily target: {:.2} kcal\nExpected loss: {:.2} kg/week",
        d.tdee, d.deficit_calories, d.deficit_percent, d.daily_calories, d.weekly_loss_kg
    )
}

pub fn format_ideal_weight(w: &IdealWeight) -> String {
    format!(
        "Devine: {:.1} kg\nRobinson: {:.1} kg\nMiller: {:.1} kg\nBMI 21.5: {:.1} kg\nAverage: {:.1} kg",
        w.devine, w.robinson, w.miller, w.bmi_based, w.average
    )
}

fn format_estimate(t: &TimeEstimate) -> String {
    format!(
        "~{} days ({} weeks, {} months), around {}",
        t.days,
        t.weeks,
        t.months,
        t.target_date.format("%d/%m/%Y")
    )
}

pub fn format_progress(r: &ProgressReport) -> String {
    let s = &r.snapshot;
    let mut out = format!(
        "Weight: {:.1} kg (start {:.1}, goal {:.1}) as of {}\nLost: {:.2} kg | Remaining: {:.2} kg | {:.1}% complete",
        r.current_weight_kg,
        r.initial_weight_kg,
        r.target_weight_kg,
        r.as_of,
        s.weight_lost_kg,
        s.weight_remaining_kg,
        s.percent_complete
    );
    if s.goal_reached {
        out.push_str(&format!("\n{}", "Goal reached!".green().bold()));
    } else if let Some(ref t) = s.time_estimate {
        out.push_str(&format!("\nTime to goal: {}", format_estimate(t)));
    }
    if let Some(ref d) = r.deficit {
        out.push_str(&format!(
            "\nDaily target: {:.0} kcal ({:.0} kcal deficit)",
            d.daily_calories, d.deficit_calories
        ));
    }
    out
}

/// Pretty-print the dashboard overview.
pub fn format_dashboard(d: &Dashboard) -> String {
    let mut out = format!("=== Slimtrack — {} ===\n\n", d.date);

    match d.profile {
        Some(ref p) => out.push_str(&format!("{}\n", format_profile(p))),
        None => out.push_str(&format!(
            "{}\n",
            "No profile yet. Run `slimtrack profile set`.".yellow()
        )),
    }

    if let Some(ref b) = d.bmi {
        out.push_str(&format!("\nBMI: {:.2} ({})\n", b.bmi, b.classification));
    }
    if let Some(ref r) = d.progress {
        out.push_str(&format!("\n{}\n", format_progress(r)));
    }

    if d.recent.is_empty() {
        out.push_str("\nNo weight recorded yet.");
    } else {
        out.push_str(&format!("\n{}", history_table(&d.recent)));
    }
    out
}
