use super::common::form;
use crate::intake::scoring::{PriorityScorer, ScoreBreakdown, ScoreInput};

fn breakdown(
    budget: Option<&str>,
    company_size: Option<&str>,
    deadline: Option<&str>,
    comments: Option<&str>,
) -> ScoreBreakdown {
    PriorityScorer.score(&ScoreInput::from_form(&form(
        budget,
        company_size,
        deadline,
        comments,
    )))
}

fn budget_points(budget: &str) -> u8 {
    breakdown(Some(budget), None, None, None).budget
}

fn company_points(company_size: &str) -> u8 {
    breakdown(None, Some(company_size), None, None).company_size
}

fn urgency_points(deadline: Option<&str>, comments: Option<&str>) -> u8 {
    breakdown(None, None, deadline, comments).urgency
}

#[test]
fn absent_fields_score_the_floor() {
    let scores = breakdown(None, None, None, None);

    assert_eq!(scores.budget, 10);
    assert_eq!(scores.company_size, 5);
    assert_eq!(scores.urgency, 5);
    assert_eq!(scores.total(), 20);
}

#[test]
fn plain_figures_map_to_budget_tiers() {
    assert_eq!(budget_points("300000"), 10);
    assert_eq!(budget_points("500000"), 20);
    assert_eq!(budget_points("1000000"), 30);
    assert_eq!(budget_points("4999999"), 30);
    assert_eq!(budget_points("5000000"), 40);
    assert_eq!(budget_points("10000000"), 40);
}

#[test]
fn currency_noise_is_stripped_before_parsing() {
    assert_eq!(budget_points("₽5,000,000!"), 40);
    assert_eq!(budget_points("$500000 usd"), 20);
}

#[test]
fn ranges_collapse_to_their_upper_bound() {
    assert_eq!(budget_points("500000-1000000"), budget_points("1000000"));
    assert_eq!(budget_points("100000-600000"), 20);
    assert_eq!(budget_points("4000000 - 6000000"), 40);
}

#[test]
fn shorthand_with_a_digit_takes_the_numeric_path() {
    // "5m" cleans to "5", which parses; the marker table never sees it.
    assert_eq!(budget_points("5m"), 10);
    assert_eq!(budget_points("1m"), 10);
    assert_eq!(budget_points("500k"), 10);
}

#[test]
fn markers_apply_once_no_figure_parses() {
    // Multi-hyphen text defeats numeric extraction, so markers kick in.
    assert_eq!(budget_points("5m-10m-negotiable"), 40);
    assert_eq!(budget_points("500k-1m-2m"), 30);
    // Digit groups separated by spaces fail to parse and carry no marker.
    assert_eq!(budget_points("от 500 000 до 1 000 000"), 10);
    // An unspaced figure embedded in prose that parses poorly still matches.
    assert_eq!(budget_points("примерно 1000000 может 500000 рублей"), 30);
    assert_eq!(budget_points("call us"), 10);
}

#[test]
fn zero_budget_counts_as_absent() {
    assert_eq!(budget_points("0"), 10);
    assert_eq!(budget_points("0-0"), 10);
}

#[test]
fn company_size_markers_follow_declared_order() {
    assert_eq!(company_points("500+"), 30);
    assert_eq!(company_points("100-500"), 30);
    assert_eq!(company_points("50-100"), 20);
    assert_eq!(company_points("100"), 20);
    assert_eq!(company_points("250"), 15);
    assert_eq!(company_points("50"), 15);
    assert_eq!(company_points("12"), 5);
}

#[test]
fn matching_ignores_case() {
    assert_eq!(company_points("500+ EMPLOYEES"), company_points("500+ employees"));
    assert_eq!(
        urgency_points(Some("2 НЕДЕЛИ"), None),
        urgency_points(Some("2 недели"), None)
    );
}

#[test]
fn urgency_accepts_either_signal_alone() {
    assert_eq!(urgency_points(Some("2 недели"), None), 30);
    assert_eq!(urgency_points(None, Some("нужно срочно")), 30);
    assert_eq!(urgency_points(Some("next week"), None), 30);
    assert_eq!(urgency_points(Some("в следующем месяце"), None), 15);
    assert_eq!(urgency_points(Some("next month"), None), 15);
    assert_eq!(urgency_points(Some("к концу года"), None), 5);
}

#[test]
fn scoring_is_deterministic_and_bounded() {
    let profiles = [
        (None, None, None, None),
        (Some("5000000"), Some("500+"), Some("1 неделя"), None),
        (Some("call us"), Some("huge"), Some("someday"), Some("")),
        (Some("0"), Some("250"), Some("next month"), Some("срочно")),
        (Some("500k-1m-2m"), Some("50-100"), None, Some("не к спеху")),
    ];

    for profile in profiles {
        let first = breakdown(profile.0, profile.1, profile.2, profile.3);
        let second = breakdown(profile.0, profile.1, profile.2, profile.3);
        assert_eq!(first, second);
        assert!((20..=100).contains(&first.total()));
    }
}

#[test]
fn end_to_end_profiles_match_expected_totals() {
    let cases = [
        (
            (Some("5000000"), Some("500+"), Some("1 неделя"), None),
            100,
        ),
        (
            (Some("300000"), Some("20"), Some("в следующем месяце"), None),
            30,
        ),
        (
            (
                Some("500000-1000000"),
                Some("100-500"),
                None,
                Some("очень срочно нужно"),
            ),
            90,
        ),
        ((None, None, None, None), 20),
        ((Some("1m"), Some("50-100"), Some("next week"), None), 60),
    ];

    for ((budget, company_size, deadline, comments), expected) in cases {
        let total = breakdown(budget, company_size, deadline, comments).total();
        assert_eq!(
            total, expected,
            "budget {budget:?}, company {company_size:?}, deadline {deadline:?}"
        );
    }
}
