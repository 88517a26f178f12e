//! Integration tests for round building: coverage, forbidden pairs, sit-outs.

use golf_scheduler_web::{build_schedule, score_schedule, PairKey, Pairing, Roster};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn roster_with(players: &[&str], weeks: &[&str]) -> Roster {
    let mut roster = Roster::new();
    for p in players {
        roster.add_player(*p).unwrap();
    }
    for w in weeks {
        roster.add_week(*w);
    }
    roster
}

fn all_available(roster: &mut Roster) {
    let players = roster.players.clone();
    for week in roster.weeks.clone() {
        roster.set_availability(week, players.clone());
    }
}

/// Names mentioned in one week's results, with multiplicity.
fn names_in_week(results: &[Pairing]) -> Vec<&str> {
    let mut names = Vec::new();
    for pairing in results {
        match pairing {
            Pairing::Pair { a, b } => {
                names.push(a.as_str());
                names.push(b.as_str());
            }
            Pairing::Sitout { player } => names.push(player.as_str()),
        }
    }
    names
}

#[test]
fn every_available_player_appears_exactly_once_per_week() {
    let mut roster = roster_with(
        &["Ann", "Beth", "Cara", "Dan", "Eve", "Finn", "Gus"],
        &["1", "2", "3"],
    );
    all_available(&mut roster);
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..20 {
        let schedule = build_schedule(&roster, &mut rng);
        for week in &roster.weeks {
            let mut names = names_in_week(schedule.week_results(week));
            names.sort_unstable();
            let mut expected: Vec<&str> = roster.players.iter().map(String::as_str).collect();
            expected.sort_unstable();
            assert_eq!(names, expected);
        }
    }
}

#[test]
fn forbidden_pair_is_never_scheduled() {
    let mut roster = roster_with(&["Ann", "Beth", "Cara", "Dan"], &["1", "2", "3", "4"]);
    all_available(&mut roster);
    roster.add_forbidden_pair("Ann", "Beth").unwrap();
    let key = PairKey::new("Ann", "Beth");
    let mut rng = StdRng::seed_from_u64(22);

    for _ in 0..50 {
        let schedule = build_schedule(&roster, &mut rng);
        assert_eq!(schedule.pair_count(&key), 0);
        for week in &roster.weeks {
            for pairing in schedule.week_results(week) {
                assert_ne!(pairing.key().as_ref(), Some(&key));
            }
        }
    }
}

#[test]
fn odd_availability_sits_exactly_one_player_out() {
    let mut roster = roster_with(&["Ann", "Beth", "Cara", "Dan", "Eve"], &["1"]);
    all_available(&mut roster);
    let mut rng = StdRng::seed_from_u64(33);

    let schedule = build_schedule(&roster, &mut rng);
    let sitouts: u32 = schedule.sit_outs.values().sum();
    assert_eq!(sitouts, 1);
    let pairs = schedule
        .week_results("1")
        .iter()
        .filter(|p| matches!(p, Pairing::Pair { .. }))
        .count();
    assert_eq!(pairs, 2);
}

#[test]
fn two_players_one_week_pair_up() {
    let mut roster = roster_with(&["Ann", "Beth"], &["1"]);
    all_available(&mut roster);
    let mut rng = StdRng::seed_from_u64(44);

    let schedule = build_schedule(&roster, &mut rng);
    let results = schedule.week_results("1");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].key(), Some(PairKey::new("Ann", "Beth")));
    assert_eq!(schedule.pair_count(&PairKey::new("Ann", "Beth")), 1);
    assert_eq!(schedule.sit_outs["Ann"], 0);
    assert_eq!(schedule.sit_outs["Beth"], 0);

    let result = score_schedule(&roster, &schedule);
    assert_eq!(result.stats.unique_pairs, 1);
    assert_eq!(result.stats.total_sitouts, 0);
}

#[test]
fn three_players_one_week_one_pair_one_sitout() {
    let mut roster = roster_with(&["Ann", "Beth", "Cara"], &["1"]);
    all_available(&mut roster);
    let mut rng = StdRng::seed_from_u64(55);

    let schedule = build_schedule(&roster, &mut rng);
    let results = schedule.week_results("1");
    assert_eq!(results.len(), 2);
    let pairs = results
        .iter()
        .filter(|p| matches!(p, Pairing::Pair { .. }))
        .count();
    let sitouts = results
        .iter()
        .filter(|p| matches!(p, Pairing::Sitout { .. }))
        .count();
    assert_eq!(pairs, 1);
    assert_eq!(sitouts, 1);
    assert_eq!(schedule.sit_outs.values().sum::<u32>(), 1);
}

#[test]
fn forbidden_only_pairing_forces_both_to_sit_out() {
    let mut roster = roster_with(&["Ann", "Beth"], &["1"]);
    all_available(&mut roster);
    roster.add_forbidden_pair("Ann", "Beth").unwrap();
    let mut rng = StdRng::seed_from_u64(66);

    let schedule = build_schedule(&roster, &mut rng);
    let results = schedule.week_results("1");
    assert_eq!(results.len(), 2);
    assert!(results
        .iter()
        .all(|p| matches!(p, Pairing::Sitout { .. })));
    assert!(schedule.pair_counts.is_empty());
    assert_eq!(schedule.sit_outs["Ann"], 1);
    assert_eq!(schedule.sit_outs["Beth"], 1);
}

#[test]
fn unavailable_players_get_no_sitout_record() {
    let mut roster = roster_with(&["Ann", "Beth", "Cara"], &["1"]);
    roster.set_availability("1", vec!["Ann".to_string(), "Beth".to_string()]);
    let mut rng = StdRng::seed_from_u64(77);

    let schedule = build_schedule(&roster, &mut rng);
    assert_eq!(schedule.sit_outs["Cara"], 0);
    assert!(!names_in_week(schedule.week_results("1")).contains(&"Cara"));
}

#[test]
fn pair_counts_accumulate_across_weeks() {
    let mut roster = roster_with(&["Ann", "Beth"], &["1", "2", "3"]);
    all_available(&mut roster);
    let mut rng = StdRng::seed_from_u64(88);

    let schedule = build_schedule(&roster, &mut rng);
    assert_eq!(schedule.pair_count(&PairKey::new("Ann", "Beth")), 3);
    let result = score_schedule(&roster, &schedule);
    assert_eq!(result.stats.pair_repeats, 2);
}

#[test]
fn weeks_with_nobody_available_are_skipped() {
    let mut roster = roster_with(&["Ann", "Beth"], &["1", "2"]);
    roster.set_availability("1", vec!["Ann".to_string(), "Beth".to_string()]);
    let mut rng = StdRng::seed_from_u64(99);

    let schedule = build_schedule(&roster, &mut rng);
    assert!(schedule.week_results("2").is_empty());
    assert!(!schedule.rounds.contains_key("2"));
}
