use std::collections::HashSet;

use super::*;

#[test]
fn paths_are_unique_and_absolute() {
    let mut seen = HashSet::new();
    for page in PAGES {
        assert!(page.path.starts_with('/'), "{} is not absolute", page.path);
        assert!(seen.insert(page.path), "{} listed twice", page.path);
    }
}

#[test]
fn every_form_page_has_a_home_card() {
    let cards: Vec<_> = feature_cards().map(|(page, _)| page.path).collect();
    assert_eq!(
        cards,
        vec![
            "/crop-recommendation",
            "/fertilizer-recommendation",
            "/soil-crop-recommendation",
            "/disease-detection",
            "/weather-forecast",
            "/market-forecast",
        ]
    );
}

#[test]
fn groups_partition_the_site() {
    let total = in_group(NavGroup::Main).count()
        + in_group(NavGroup::Recommendations).count()
        + in_group(NavGroup::Forecasts).count();
    assert_eq!(total, PAGES.len());
    assert_eq!(in_group(NavGroup::Forecasts).count(), 2);
}

#[test]
fn group_labels() {
    assert_eq!(NavGroup::Recommendations.label(), "Recommendations");
    assert_eq!(NavGroup::Forecasts.label(), "Forecasts");
}
