//! Integration tests for the textual configuration parser.

use golf_scheduler_web::{parse_config, PairKey, ScheduleError, EXAMPLE_CONFIG};

#[test]
fn example_config_parses() {
    let roster = parse_config(EXAMPLE_CONFIG).unwrap();

    assert_eq!(roster.players.len(), 8);
    assert_eq!(roster.players[0], "Scott");
    assert_eq!(roster.weeks, ["1", "2", "3", "4", "5", "6"]);
    assert_eq!(roster.aggregate_weeks.len(), 3);
    assert!(roster.aggregate_weeks.contains("4"));

    assert_eq!(roster.preferred_pairs[&PairKey::new("Scott", "Mark")], 2);
    assert_eq!(roster.preferred_pairs[&PairKey::new("GaryS", "Greg")], 3);
    assert!(roster.forbidden_pairs.contains(&PairKey::new("Scott", "Greg")));

    assert_eq!(roster.available_players("1").len(), 6);
    let week_four: Vec<&str> = roster
        .available_players("4")
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(week_four, ["Scott", "Mark", "Greg", "Ken", "Dave"]);

    assert_eq!(roster.objectives.unique_pairings, 8);
    assert_eq!(roster.objectives.minimize_sitouts, 6);
    assert_eq!(roster.objectives.preferred_pairs, 7);
    assert_eq!(roster.objectives.max_pair_repeats, 3);
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let roster = parse_config(
        "PLAYERS:\n# a comment\nAnn\n\nBeth\n\nWEEKS:\n# another\n1\n\nAVAILABILITY:\n1:Ann,Beth\n",
    )
    .unwrap();
    assert_eq!(roster.players, ["Ann", "Beth"]);
    assert_eq!(roster.weeks, ["1"]);
}

#[test]
fn objective_values_are_clamped() {
    let roster = parse_config(
        "PLAYERS:\nAnn\nBeth\nWEEKS:\n1\nOBJECTIVES:\nUNIQUE_PAIRINGS: 99\nMINIMIZE_SITOUTS: 0\n",
    )
    .unwrap();
    assert_eq!(roster.objectives.unique_pairings, 10);
    assert_eq!(roster.objectives.minimize_sitouts, 1);
}

#[test]
fn unparsable_or_missing_objectives_keep_defaults() {
    let roster = parse_config(
        "PLAYERS:\nAnn\nBeth\nWEEKS:\n1\nOBJECTIVES:\nPREFERRED_PAIRS: lots\nNOT_A_KEY: 4\n",
    )
    .unwrap();
    assert_eq!(roster.objectives.preferred_pairs, 7);
    assert_eq!(roster.objectives.max_pair_repeats, 3);
}

#[test]
fn weeks_outside_the_season_range_are_skipped() {
    let roster = parse_config("PLAYERS:\nAnn\nBeth\nWEEKS:\n0\n1\n52\n53\nspring\n").unwrap();
    assert_eq!(roster.weeks, ["1", "52"]);
}

#[test]
fn no_players_is_rejected() {
    let result = parse_config("WEEKS:\n1\n");
    assert!(matches!(result, Err(ScheduleError::NoPlayers)));
}

#[test]
fn no_weeks_is_rejected() {
    let result = parse_config("PLAYERS:\nAnn\n");
    assert!(matches!(result, Err(ScheduleError::NoWeeks)));
}

#[test]
fn duplicate_player_is_rejected() {
    let result = parse_config("PLAYERS:\nAnn\nann\nWEEKS:\n1\n");
    assert!(matches!(result, Err(ScheduleError::DuplicatePlayerName(_))));
}

#[test]
fn constraint_with_unknown_player_is_rejected() {
    let result = parse_config("PLAYERS:\nAnn\nBeth\nWEEKS:\n1\nFORBIDDEN_PAIRS:\nAnn,Zed\n");
    assert!(matches!(result, Err(ScheduleError::UnknownPlayer(name)) if name == "Zed"));
}

#[test]
fn self_pair_is_rejected() {
    let result = parse_config("PLAYERS:\nAnn\nBeth\nWEEKS:\n1\nPREFERRED_PAIRS:\nAnn,Ann,2\n");
    assert!(matches!(result, Err(ScheduleError::PlayerPairedWithSelf(_))));
}

#[test]
fn availability_with_unknown_player_is_rejected() {
    let result = parse_config("PLAYERS:\nAnn\nBeth\nWEEKS:\n1\nAVAILABILITY:\n1:Ann,Zed\n");
    assert!(matches!(result, Err(ScheduleError::UnknownPlayer(name)) if name == "Zed"));
}

#[test]
fn preferred_cap_has_a_floor_of_one() {
    let roster =
        parse_config("PLAYERS:\nAnn\nBeth\nWEEKS:\n1\nPREFERRED_PAIRS:\nAnn,Beth,0\n").unwrap();
    assert_eq!(roster.preferred_pairs[&PairKey::new("Ann", "Beth")], 1);
}
