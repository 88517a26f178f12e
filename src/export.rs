//! Schedule export: CSV download and clipboard-ready text summary.

use crate::models::{Pairing, Roster, Schedule};
use chrono::Local;

/// Render a schedule as CSV: one `Week,Player1,Player2,Sitout` row per
/// result (sit-outs carry the name in the Player2 column), followed by a
/// statistics block.
pub fn schedule_csv(
    roster: &Roster,
    schedule: &Schedule,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(&mut buffer);

    writer.write_record(["Week", "Player1", "Player2", "Sitout"])?;
    for week in &roster.weeks {
        for pairing in schedule.week_results(week) {
            match pairing {
                Pairing::Pair { a, b } => {
                    writer.write_record([week.as_str(), a, b, "No"])?;
                }
                Pairing::Sitout { player } => {
                    writer.write_record([week.as_str(), "", player, "Yes"])?;
                }
            }
        }
    }

    let (stats, score) = match schedule.score {
        Some(result) => (result.stats, result.score),
        None => (Default::default(), 0),
    };
    writer.write_record([""])?;
    writer.write_record(["Statistics"])?;
    writer.write_record(["Metric", "Value"])?;
    writer.write_record(["Unique Pairings", &stats.unique_pairs.to_string()])?;
    writer.write_record(["Total Sitouts", &stats.total_sitouts.to_string()])?;
    writer.write_record(["Preferred Pairs Used", &stats.preferred_used.to_string()])?;
    writer.write_record(["Pairing Repeats", &stats.pair_repeats.to_string()])?;
    writer.write_record(["Optimization Score", &score.to_string()])?;
    writer.flush()?;
    drop(writer);

    Ok(String::from_utf8(buffer)?)
}

/// Render a schedule as plain text for clipboard copy: a header with the
/// generation date, one block per non-empty week, and the statistics.
pub fn schedule_summary(roster: &Roster, schedule: &Schedule) -> String {
    let mut text = String::from("Golf Group Schedule\n");
    text.push_str(&format!(
        "Generated {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M")
    ));

    for week in &roster.weeks {
        let results = schedule.week_results(week);
        if results.is_empty() {
            continue;
        }
        let marker = if roster.aggregate_weeks.contains(week) {
            " (Aggregate)"
        } else {
            ""
        };
        text.push_str(&format!("Week {}{}\n", week, marker));
        for pairing in results {
            match pairing {
                Pairing::Pair { a, b } => text.push_str(&format!("  {} + {}\n", a, b)),
                Pairing::Sitout { player } => {
                    text.push_str(&format!("  {} sits out\n", player))
                }
            }
        }
        text.push('\n');
    }

    if let Some(result) = schedule.score {
        text.push_str(&format!("Unique pairings: {}\n", result.stats.unique_pairs));
        text.push_str(&format!("Total sitouts: {}\n", result.stats.total_sitouts));
        text.push_str(&format!(
            "Preferred pairs used: {}\n",
            result.stats.preferred_used
        ));
        text.push_str(&format!("Pairing repeats: {}\n", result.stats.pair_repeats));
        text.push_str(&format!("Optimization score: {}\n", result.score));
    }

    text
}
