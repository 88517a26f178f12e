//! Textual configuration parsing: the section-based format into a Roster.

use crate::models::{PairKey, Roster, ScheduleError};

/// Parse the section-based configuration text into a validated roster.
///
/// A line ending in `:` opens a section (`PLAYERS`, `WEEKS`,
/// `AGGREGATE_WEEKS`, `PREFERRED_PAIRS`, `FORBIDDEN_PAIRS`, `AVAILABILITY`,
/// `OBJECTIVES`). Blank lines and `#` comments are ignored, as are lines in
/// unknown sections. Week labels must be numeric and in 1..=52; other lines
/// in the week sections are skipped. Objective values are clamped to 1..=10
/// and unparsable values keep their defaults.
///
/// Constraint and availability lines may reference players before the
/// `PLAYERS` section appears; all references are checked once the whole text
/// has been read.
pub fn parse_config(text: &str) -> Result<Roster, ScheduleError> {
    let mut roster = Roster::new();
    let mut section = String::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(header) = line.strip_suffix(':') {
            section = header.trim().to_uppercase();
            continue;
        }

        match section.as_str() {
            "PLAYERS" => roster.add_player(line)?,
            "WEEKS" => {
                if let Some(week) = parse_week(line) {
                    roster.add_week(week);
                }
            }
            "AGGREGATE_WEEKS" => {
                if let Some(week) = parse_week(line) {
                    roster.mark_aggregate(week);
                }
            }
            "PREFERRED_PAIRS" => {
                let parts: Vec<&str> = line.split(',').map(str::trim).collect();
                if parts.len() >= 3 {
                    if let Ok(max_times) = parts[2].parse::<u32>() {
                        roster
                            .preferred_pairs
                            .insert(PairKey::new(parts[0], parts[1]), max_times.max(1));
                    }
                }
            }
            "FORBIDDEN_PAIRS" => {
                let parts: Vec<&str> = line.split(',').map(str::trim).collect();
                if parts.len() >= 2 {
                    roster
                        .forbidden_pairs
                        .insert(PairKey::new(parts[0], parts[1]));
                }
            }
            "AVAILABILITY" => {
                if let Some((week, names)) = line.split_once(':') {
                    let players: Vec<String> = names
                        .split(',')
                        .map(str::trim)
                        .filter(|p| !p.is_empty())
                        .map(str::to_string)
                        .collect();
                    roster.set_availability(week.trim(), players);
                }
            }
            "OBJECTIVES" => {
                if let Some((key, value)) = line.split_once(':') {
                    if let Ok(weight) = value.trim().parse::<u32>() {
                        let weight = weight.clamp(1, 10);
                        match key.trim().to_uppercase().as_str() {
                            "UNIQUE_PAIRINGS" => roster.objectives.unique_pairings = weight,
                            "MINIMIZE_SITOUTS" => roster.objectives.minimize_sitouts = weight,
                            "PREFERRED_PAIRS" => roster.objectives.preferred_pairs = weight,
                            "MAX_PAIR_REPEATS" => roster.objectives.max_pair_repeats = weight,
                            _ => {}
                        }
                    }
                }
            }
            _ => {}
        }
    }

    roster.validate()?;
    Ok(roster)
}

/// Accept a week label if it is numeric and within the season range.
fn parse_week(line: &str) -> Option<String> {
    let number: u32 = line.parse().ok()?;
    (1..=52).contains(&number).then(|| line.to_string())
}

/// Starter configuration shown by the UI.
pub const EXAMPLE_CONFIG: &str = "\
# Golf Group Scheduler Configuration
# Format your data below:

PLAYERS:
Scott
Mark
GaryS
Greg
Ken
Bob
Chris
Dave

WEEKS:
1
2
3
4
5
6

AGGREGATE_WEEKS:
2
4
6

PREFERRED_PAIRS:
# Format: Player1,Player2,MaxTimesTogether
Scott,Mark,2
GaryS,Greg,3

FORBIDDEN_PAIRS:
# Players who should NOT be paired
Scott,Greg

AVAILABILITY:
# Format: Week:CommaSeparatedPlayers
1:Scott,Mark,GaryS,Greg,Bob,Chris
2:Scott,Mark,Ken,Bob,Dave
3:Scott,GaryS,Ken,Bob,Chris,Dave
4:Scott,Mark,Greg,Ken,Dave
5:Scott,Mark,GaryS,Ken,Bob,Chris
6:GaryS,Greg,Ken,Bob,Dave

OBJECTIVES:
# Weights for optimization (1-10)
UNIQUE_PAIRINGS: 8
MINIMIZE_SITOUTS: 6
PREFERRED_PAIRS: 7
MAX_PAIR_REPEATS: 3
";
