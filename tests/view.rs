//! Integration tests for the filter/sort stage.

use tennis_stats_web::{all_players, compute_view, countries, FilterState, PlayerRecord, SortKey};

fn filter_with(countries: &[&str]) -> FilterState {
    FilterState {
        selected_countries: countries.iter().map(|c| c.to_string()).collect(),
        ..FilterState::default()
    }
}

fn names(view: &[PlayerRecord]) -> Vec<&'static str> {
    view.iter().map(|p| p.name).collect()
}

#[test]
fn data_store_is_fixed() {
    let players = all_players();
    assert_eq!(players.len(), 6);
    assert_eq!(players[0].name, "노바크 조코비치");
    assert_eq!(players[5].name, "이수민");
    assert_eq!(all_players(), players);
    assert_eq!(
        countries(),
        ["세르비아", "스페인", "스위스", "미국", "러시아", "한국"]
    );
}

#[test]
fn every_country_subset_keeps_only_its_players() {
    let all = countries();
    for mask in 1u32..(1 << all.len()) {
        let subset: Vec<&str> = all
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << *i) != 0)
            .map(|(_, c)| *c)
            .collect();
        let view = compute_view(all_players(), &filter_with(&subset));
        let expected = all_players()
            .iter()
            .filter(|p| subset.contains(&p.country))
            .count();
        assert_eq!(view.len(), expected, "subset {:?}", subset);
        assert!(view.iter().all(|p| subset.contains(&p.country)));
    }
}

#[test]
fn empty_country_selection_yields_nothing() {
    for sort_key in SortKey::ALL {
        let filter = FilterState {
            selected_countries: Vec::new(),
            search_query: String::new(),
            sort_key,
            ..FilterState::default()
        };
        assert!(compute_view(all_players(), &filter).is_empty());
    }
    let filter = FilterState {
        selected_countries: Vec::new(),
        search_query: "조코비치".to_string(),
        ..FilterState::default()
    };
    assert!(compute_view(all_players(), &filter).is_empty());
}

#[test]
fn search_is_case_sensitive_substring() {
    let mut filter = FilterState::default();
    filter.search_query = "Nadal".to_string();
    assert_eq!(names(&compute_view(all_players(), &filter)), ["라파엘 Nadal"]);

    filter.search_query = "nadal".to_string();
    assert!(compute_view(all_players(), &filter).is_empty());

    filter.search_query = "마".to_string();
    let view = compute_view(all_players(), &filter);
    assert!(!view.is_empty());
    assert!(view.iter().all(|p| p.name.contains("마")));

    filter.search_query = "없는 선수".to_string();
    assert!(compute_view(all_players(), &filter).is_empty());
}

#[test]
fn empty_search_keeps_all_country_matches() {
    let filter = filter_with(&["미국", "러시아"]);
    assert_eq!(compute_view(all_players(), &filter).len(), 2);
}

#[test]
fn sorted_descending_for_every_key() {
    for sort_key in SortKey::ALL {
        let filter = FilterState {
            sort_key,
            ..FilterState::default()
        };
        let view = compute_view(all_players(), &filter);
        assert_eq!(view.len(), 6);
        for pair in view.windows(2) {
            assert!(
                sort_key.value(&pair[0]) >= sort_key.value(&pair[1]),
                "{:?} not descending",
                sort_key
            );
        }
    }
}

#[test]
fn ties_keep_dataset_order() {
    // 라파엘 Nadal and 로저 페더러 share an 82% win rate.
    let filter = FilterState {
        sort_key: SortKey::WinRatePercent,
        ..FilterState::default()
    };
    assert_eq!(
        names(&compute_view(all_players(), &filter)),
        [
            "세라나 윌리엄스",
            "노바크 조코비치",
            "라파엘 Nadal",
            "로저 페더러",
            "마리아 샤라포바",
            "이수민"
        ]
    );
}

#[test]
fn compute_view_is_idempotent() {
    let filter = FilterState {
        sort_key: SortKey::MatchesPlayed,
        ..FilterState::default()
    };
    let first = compute_view(all_players(), &filter);
    let second = compute_view(all_players(), &filter);
    assert_eq!(first, second);
    assert_eq!(all_players()[0].name, "노바크 조코비치");
}

#[test]
fn scenario_two_countries_by_grand_slams() {
    let view = compute_view(all_players(), &filter_with(&["세르비아", "스페인"]));
    assert_eq!(names(&view), ["노바크 조코비치", "라파엘 Nadal"]);
    assert_eq!(view[0].grand_slam_wins, 24);
    assert_eq!(view[1].grand_slam_wins, 22);
}

#[test]
fn scenario_search_single_player() {
    let filter = FilterState {
        search_query: "조코비치".to_string(),
        ..FilterState::default()
    };
    assert_eq!(names(&compute_view(all_players(), &filter)), ["노바크 조코비치"]);
}

#[test]
fn scenario_best_ranking_descending() {
    let filter = FilterState {
        sort_key: SortKey::BestRanking,
        ..FilterState::default()
    };
    assert_eq!(
        names(&compute_view(all_players(), &filter)),
        [
            "이수민",
            "노바크 조코비치",
            "라파엘 Nadal",
            "로저 페더러",
            "세라나 윌리엄스",
            "마리아 샤라포바"
        ]
    );
}
