use player_stats_catalog::{
    FilterSpec, Player, Selection, filter_roster, nation_options, position_options,
};

fn player(id: i64, name: &str, position: &str, rating: u8, club: &str, nation: &str) -> Player {
    Player {
        id,
        name: name.to_string(),
        position: position.to_string(),
        rating,
        club: club.to_string(),
        nation: nation.to_string(),
    }
}

fn roster() -> Vec<Player> {
    vec![
        player(1, "A. Silva", "ST", 88, "X", "Brazil"),
        player(2, "B. Rossi", "CB", 70, "Y", "Italy"),
        player(3, "C. Santos", "ST", 91, "Porto", "Brazil"),
        player(4, "D. Bianchi", "GK", 82, "Juventus", "Italy"),
        player(5, "E. Müller", "CM", 79, "Bayern", "Germany"),
    ]
}

fn ids(players: &[Player]) -> Vec<i64> {
    players.iter().map(|p| p.id).collect()
}

#[test]
fn min_rating_example() {
    let roster = vec![
        player(1, "A. Silva", "ST", 88, "X", "Brazil"),
        player(2, "B. Rossi", "CB", 70, "Y", "Italy"),
    ];
    let spec = FilterSpec::new().with_min_rating(80);
    assert_eq!(ids(&filter_roster(&roster, &spec)), vec![1]);
}

#[test]
fn inactive_spec_is_identity() {
    let roster = roster();
    let spec = FilterSpec::default();
    assert!(spec.is_identity());
    assert_eq!(filter_roster(&roster, &spec), roster);
}

#[test]
fn empty_roster_yields_empty_view() {
    let spec = FilterSpec::new().with_search("silva").with_min_rating(50);
    assert!(filter_roster(&[], &spec).is_empty());
}

#[test]
fn output_is_subset_in_roster_order() {
    let roster = roster();
    let specs = [
        FilterSpec::new().with_position("ST"),
        FilterSpec::new().with_nation("Italy"),
        FilterSpec::new().with_min_rating(80),
        FilterSpec::new().with_search("a"),
        FilterSpec::new().with_position("GK").with_nation("Brazil"),
    ];
    for spec in &specs {
        let out = filter_roster(&roster, spec);
        assert!(out.iter().all(|p| roster.contains(p)), "{spec:?}");
        let positions: Vec<usize> = out
            .iter()
            .map(|p| roster.iter().position(|r| r == p).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{spec:?}");
    }
}

#[test]
fn position_is_exact_match() {
    let roster = roster();
    assert_eq!(
        ids(&filter_roster(&roster, &FilterSpec::new().with_position("ST"))),
        vec![1, 3]
    );
    // No prefix or case folding on categorical filters.
    assert!(filter_roster(&roster, &FilterSpec::new().with_position("st")).is_empty());
    assert!(filter_roster(&roster, &FilterSpec::new().with_position("S")).is_empty());
}

#[test]
fn min_rating_is_inclusive() {
    let roster = roster();
    let out = filter_roster(&roster, &FilterSpec::new().with_min_rating(82));
    assert_eq!(ids(&out), vec![1, 3, 4]);
}

#[test]
fn nation_is_exact_match() {
    let roster = roster();
    let out = filter_roster(&roster, &FilterSpec::new().with_nation("Brazil"));
    assert_eq!(ids(&out), vec![1, 3]);
}

#[test]
fn search_matches_name_or_club_case_insensitively() {
    let roster = roster();
    assert_eq!(
        ids(&filter_roster(&roster, &FilterSpec::new().with_search("SILVA"))),
        vec![1]
    );
    assert_eq!(
        ids(&filter_roster(&roster, &FilterSpec::new().with_search("juve"))),
        vec![4]
    );
    assert_eq!(
        ids(&filter_roster(&roster, &FilterSpec::new().with_search("müller"))),
        vec![5]
    );
    // Nation is not a search target.
    assert!(filter_roster(&roster, &FilterSpec::new().with_search("germany")).is_empty());
}

#[test]
fn combined_filters_equal_sequential_application() {
    let roster = roster();
    let combined = FilterSpec::new()
        .with_position("ST")
        .with_min_rating(85)
        .with_nation("Brazil")
        .with_search("santos");

    let all_at_once = filter_roster(&roster, &combined);

    let step = filter_roster(&roster, &FilterSpec::new().with_search("santos"));
    let step = filter_roster(&step, &FilterSpec::new().with_nation("Brazil"));
    let step = filter_roster(&step, &FilterSpec::new().with_min_rating(85));
    let step = filter_roster(&step, &FilterSpec::new().with_position("ST"));

    assert_eq!(all_at_once, step);
    assert_eq!(ids(&all_at_once), vec![3]);
}

#[test]
fn predicate_order_does_not_matter() {
    let roster = roster();
    let a = FilterSpec::new().with_min_rating(80);
    let b = FilterSpec::new().with_nation("Italy");

    let ab = filter_roster(&filter_roster(&roster, &a), &b);
    let ba = filter_roster(&filter_roster(&roster, &b), &a);
    assert_eq!(ab, ba);
    assert_eq!(ids(&ab), vec![4]);
}

#[test]
fn filtering_does_not_mutate_roster() {
    let roster = roster();
    let before = roster.clone();
    let _ = filter_roster(&roster, &FilterSpec::new().with_position("CB"));
    assert_eq!(roster, before);
}

#[test]
fn selection_parse() {
    assert_eq!(Selection::parse(""), Selection::All);
    assert_eq!(Selection::parse("all"), Selection::All);
    assert_eq!(Selection::parse("ALL"), Selection::All);
    assert_eq!(Selection::parse("ST"), Selection::Only("ST".to_string()));
}

#[test]
fn options_are_distinct_in_first_seen_order() {
    let roster = roster();
    assert_eq!(position_options(&roster), vec!["ST", "CB", "GK", "CM"]);
    assert_eq!(nation_options(&roster), vec!["Brazil", "Italy", "Germany"]);
}

#[test]
fn options_track_roster_changes() {
    let mut roster = roster();
    roster.retain(|p| p.nation != "Germany");
    assert_eq!(nation_options(&roster), vec!["Brazil", "Italy"]);
    assert!(!position_options(&roster).contains(&"CM".to_string()));

    roster.push(player(6, "F. Dubois", "LW", 84, "Lyon", "France"));
    assert_eq!(nation_options(&roster), vec!["Brazil", "Italy", "France"]);
    assert_eq!(position_options(&roster).last().map(String::as_str), Some("LW"));
}
