//! Unit tests for filter functionality

use super::*;

#[cfg(test)]
mod filter_tests {
    use super::*;

    fn player(id: &str, name: &str, percentile: u8) -> Player {
        let mut p = Player::new(id, name);
        p.percentile = percentile;
        p
    }

    fn squad() -> Vec<Player> {
        let mut pedri = player("1", "Pedri", 95);
        pedri.club = "FC Barcelona".to_string();
        pedri.league = "LaLiga".to_string();
        pedri.position = "Central Midfield".to_string();
        pedri.nationality = "Spain".to_string();
        pedri.market_value = "€100.00m".to_string();
        pedri.age = Some(22);
        pedri.height = Some(174);
        pedri.foot = Some("right".to_string());
        pedri.contract = Some("30.06.2030".to_string());

        let mut oblak = player("2", "Jan Oblak", 72);
        oblak.club = "Atlético de Madrid".to_string();
        oblak.league = "LaLiga".to_string();
        oblak.position = "Goalkeeper".to_string();
        oblak.nationality = "Slovenia".to_string();
        oblak.market_value = "€20.00m".to_string();
        oblak.age = Some(32);
        oblak.height = Some(188);
        oblak.foot = Some("right".to_string());
        oblak.contract = Some("30.06.2028".to_string());
        oblak.favorite = true;

        let mut free = player("3", "Isco", 45);
        free.club = "Without Club".to_string();
        free.position = "Attacking Midfield".to_string();
        free.nationality = "Spain".to_string();
        free.market_value = "€750k".to_string();
        free.contract = Some(FREE_AGENT.to_string());

        let mut kid = player("4", "Unknown Prospect", 10);
        kid.club = "FC Barcelona".to_string();
        kid.position = "Centre-Forward".to_string();
        kid.nationality = "Brazil".to_string();

        vec![free, kid, oblak, pedri]
    }

    fn ids(players: &[Player]) -> Vec<&str> {
        players.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_returns_all_sorted() {
        let result = apply(&squad(), &FilterCriteria::default());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_percentiles() {
        let roster = vec![
            player("a", "First", 50),
            player("b", "Second", 80),
            player("c", "Third", 50),
            player("d", "Fourth", 50),
        ];
        let result = apply(&roster, &FilterCriteria::default());
        assert_eq!(ids(&result), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let criteria = FilterCriteria {
            nationality: "Spain".to_string(),
            ..FilterCriteria::default()
        };
        let once = apply(&squad(), &criteria);
        let twice = apply(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_bucket_filters_use_percentile() {
        let roster = vec![
            player("a", "A", 55),
            player("b", "B", 90),
            player("c", "C", 70),
            player("d", "D", 39),
        ];

        let by_bucket = |bucket| {
            let criteria = FilterCriteria {
                market_value_bucket: Some(bucket),
                ..FilterCriteria::default()
            };
            apply(&roster, &criteria)
                .iter()
                .map(|p| p.percentile)
                .collect::<Vec<_>>()
        };

        assert_eq!(by_bucket(MarketValueBucket::Elite), vec![90]);
        assert_eq!(by_bucket(MarketValueBucket::High), vec![70]);
        assert_eq!(by_bucket(MarketValueBucket::Medium), vec![55]);
        assert_eq!(by_bucket(MarketValueBucket::Low), vec![39]);
    }

    #[test]
    fn test_bucket_ignores_market_value_string() {
        let mut cheap_but_elite = player("x", "X", 95);
        cheap_but_elite.market_value = "€50k".to_string();
        let criteria = FilterCriteria {
            market_value_bucket: Some(MarketValueBucket::Elite),
            ..FilterCriteria::default()
        };
        assert!(matches(&cheap_but_elite, &criteria));
    }

    #[test]
    fn test_search_matches_any_of_four_fields() {
        let roster = squad();
        let search = |term: &str| {
            let criteria = FilterCriteria {
                search: term.to_string(),
                ..FilterCriteria::default()
            };
            ids(&apply(&roster, &criteria))
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        };

        assert_eq!(search("oblak"), vec!["2"]);
        assert_eq!(search("BARCELONA"), vec!["1", "4"]);
        assert_eq!(search("slovenia"), vec!["2"]);
        assert_eq!(search("goalkeeper"), vec!["2"]);
        assert_eq!(search("  isco  "), vec!["3"]);
        assert!(search("nobody").is_empty());
    }

    #[test]
    fn test_search_does_not_look_at_league() {
        let criteria = FilterCriteria {
            search: "laliga".to_string(),
            ..FilterCriteria::default()
        };
        assert!(apply(&squad(), &criteria).is_empty());
    }

    #[test]
    fn test_blank_search_passes_all() {
        assert!(matches_search(&player("1", "Anyone", 1), "   "));
    }

    #[test]
    fn test_exact_match_is_case_sensitive() {
        let criteria = FilterCriteria {
            club: "fc barcelona".to_string(),
            ..FilterCriteria::default()
        };
        assert!(apply(&squad(), &criteria).is_empty());

        let criteria = FilterCriteria {
            club: "FC Barcelona".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&squad(), &criteria)), vec!["1", "4"]);
    }

    #[test]
    fn test_league_and_position_filters() {
        let criteria = FilterCriteria {
            league: "LaLiga".to_string(),
            position: "Goalkeeper".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&squad(), &criteria)), vec!["2"]);
    }

    #[test]
    fn test_foot_filter_excludes_unknown_foot() {
        let criteria = FilterCriteria {
            foot: "right".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&squad(), &criteria)), vec!["1", "2"]);
    }

    #[test]
    fn test_market_value_range_in_millions() {
        let criteria = FilterCriteria {
            min_market_value: Some(1.0),
            max_market_value: Some(50.0),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&squad(), &criteria)), vec!["2"]);

        let criteria = FilterCriteria {
            max_market_value: Some(0.75),
            ..FilterCriteria::default()
        };
        // 750k is inclusive; a missing value parses as 0
        assert_eq!(ids(&apply(&squad(), &criteria)), vec!["3", "4"]);
    }

    #[test]
    fn test_missing_age_counts_as_zero() {
        let min_only = FilterCriteria {
            min_age: Some(18),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&squad(), &min_only)), vec!["1", "2"]);

        let max_only = FilterCriteria {
            max_age: Some(25),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&squad(), &max_only)), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_height_range() {
        let criteria = FilterCriteria {
            min_height: Some(180),
            max_height: Some(190),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&squad(), &criteria)), vec!["2"]);
    }

    #[test]
    fn test_contract_free_agent_requires_exact_sentinel() {
        let criteria = FilterCriteria {
            contract: Some(ContractFilter::FreeAgent),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&squad(), &criteria)), vec!["3"]);

        let mut lowercase = player("z", "Z", 1);
        lowercase.contract = Some("free agent".to_string());
        assert!(!matches_contract(&lowercase, &ContractFilter::FreeAgent));
    }

    #[test]
    fn test_contract_expiry_year() {
        let criteria = FilterCriteria {
            contract: Some(ContractFilter::ExpiresIn("2028".to_string())),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&squad(), &criteria)), vec!["2"]);
    }

    #[test]
    fn test_contract_without_date_components_never_matches_year() {
        let mut p = player("z", "Z", 1);
        p.contract = Some("2028".to_string());
        assert!(!matches_contract(
            &p,
            &ContractFilter::ExpiresIn("2028".to_string())
        ));

        p.contract = None;
        assert!(!matches_contract(&p, &ContractFilter::FreeAgent));
    }

    #[test]
    fn test_favorites_only() {
        let criteria = FilterCriteria {
            favorites_only: true,
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&squad(), &criteria)), vec!["2"]);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let criteria = FilterCriteria {
            nationality: "Spain".to_string(),
            market_value_bucket: Some(MarketValueBucket::Medium),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&squad(), &criteria)), vec!["3"]);
    }

    #[test]
    fn test_select_returns_roster_positions() {
        let roster = squad();
        let positions = select(&roster, &FilterCriteria::default());
        assert_eq!(positions, vec![3, 2, 0, 1]);
    }

    #[test]
    fn test_sort_by_percentile_in_place() {
        let mut players = vec![player("a", "A", 10), player("b", "B", 99), player("c", "C", 10)];
        sort_by_percentile(&mut players);
        assert_eq!(ids(&players), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_matches_range_bounds_inclusive() {
        assert!(matches_range(5, Some(5), Some(5)));
        assert!(!matches_range(4, Some(5), None));
        assert!(!matches_range(6, None, Some(5)));
        assert!(matches_range(6, None, None));
    }

    #[test]
    fn test_active_filters_labels() {
        let criteria = FilterCriteria {
            search: " messi ".to_string(),
            club: "Inter Miami".to_string(),
            market_value_bucket: Some(MarketValueBucket::Elite),
            min_age: Some(30),
            contract: Some(ContractFilter::FreeAgent),
            favorites_only: true,
            ..FilterCriteria::default()
        };

        let labels: Vec<String> = active_filters(&criteria)
            .iter()
            .map(|f| f.to_string())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Search: messi",
                "Club: Inter Miami",
                "Value: Elite (90%+)",
                "Age: >= 30",
                "Contract: Free agent",
                "Only Favorites",
            ]
        );
    }

    #[test]
    fn test_active_filters_ranges() {
        let criteria = FilterCriteria {
            min_market_value: Some(1.5),
            max_market_value: Some(10.0),
            max_height: Some(180),
            ..FilterCriteria::default()
        };
        let labels: Vec<String> = active_filters(&criteria)
            .iter()
            .map(|f| f.to_string())
            .collect();
        assert_eq!(labels, vec!["Market value: 1.5-10m", "Height: <= 180cm"]);
    }

    #[test]
    fn test_criteria_is_empty() {
        assert!(FilterCriteria::default().is_empty());
        let criteria = FilterCriteria {
            favorites_only: true,
            ..FilterCriteria::default()
        };
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_criteria_deserialize_partial() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"club": "Girona FC", "market_value_bucket": "high"}"#)
                .unwrap();
        assert_eq!(criteria.club, "Girona FC");
        assert_eq!(criteria.market_value_bucket, Some(MarketValueBucket::High));
        assert!(!criteria.favorites_only);
    }

    #[test]
    fn test_percentile_tier() {
        assert_eq!(PercentileTier::from_percentile(100), PercentileTier::Elite);
        assert_eq!(PercentileTier::from_percentile(90), PercentileTier::Elite);
        assert_eq!(PercentileTier::from_percentile(89), PercentileTier::Good);
        assert_eq!(PercentileTier::from_percentile(70), PercentileTier::Good);
        assert_eq!(PercentileTier::from_percentile(40), PercentileTier::Average);
        assert_eq!(PercentileTier::from_percentile(39), PercentileTier::Below);
        assert_eq!(PercentileTier::Average.to_string(), "average");
    }
}
