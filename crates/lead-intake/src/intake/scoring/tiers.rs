//! Point tables and matching rules for the triage rubric.
//!
//! Marker lists are ordered and the first matching tier wins. Several
//! markers overlap as substrings ("100-500" contains "500"), so the
//! evaluation order is part of the scoring contract, not an implementation
//! detail.

/// Budget tier points keyed by the minimum figure that earns them.
const BUDGET_FIGURE_TIERS: [(i64, u8); 3] = [(5_000_000, 40), (1_000_000, 30), (500_000, 20)];
const BUDGET_FIGURE_FLOOR: u8 = 10;

/// Fallback markers scanned when no usable figure can be extracted.
const BUDGET_MARKER_TIERS: [(&[&str], u8); 3] = [
    (&["5000000", "5m", "10000000", "10m"], 40),
    (&["1000000", "1m"], 30),
    (&["500000", "500k"], 20),
];
const BUDGET_MARKER_FLOOR: u8 = 10;

const COMPANY_SIZE_TIERS: [(&[&str], u8); 3] = [
    (&["500+", "500"], 30),
    (&["100-500", "100"], 20),
    (&["50-100", "50"], 15),
];
const COMPANY_SIZE_FLOOR: u8 = 5;

/// Deadline stems for "week(s)" in Russian and English; the Cyrillic stem
/// covers неделя/недели/недель.
const DEADLINE_WEEK_STEMS: [&str; 2] = ["недел", "week"];
const DEADLINE_MONTH_STEMS: [&str; 2] = ["месяц", "month"];
const URGENT_COMMENT_MARKER: &str = "срочно";

const URGENCY_IMMEDIATE: u8 = 30;
const URGENCY_NEAR_TERM: u8 = 15;
const URGENCY_RELAXED: u8 = 5;

pub(super) fn budget_points(budget: &str) -> u8 {
    if let Some(figure) = extract_budget_figure(budget) {
        return BUDGET_FIGURE_TIERS
            .iter()
            .find(|(threshold, _)| figure >= *threshold)
            .map(|(_, points)| *points)
            .unwrap_or(BUDGET_FIGURE_FLOOR);
    }

    BUDGET_MARKER_TIERS
        .iter()
        .find(|(markers, _)| markers.iter().any(|marker| budget.contains(marker)))
        .map(|(_, points)| *points)
        .unwrap_or(BUDGET_MARKER_FLOOR)
}

/// Extract a numeric budget from free text.
///
/// Keeps digits, hyphens, and spaces; text with exactly one hyphen is a
/// range represented by its upper bound. Anything that fails to parse, and a
/// figure of exactly zero, counts as "no numeric value" so the caller falls
/// through to the textual markers.
fn extract_budget_figure(budget: &str) -> Option<i64> {
    let cleaned: String = budget
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == ' ')
        .collect();

    let figure = if cleaned.contains('-') {
        let parts: Vec<&str> = cleaned.split('-').collect();
        if parts.len() != 2 {
            return None;
        }
        let low = parts[0].trim().parse::<i64>().ok()?;
        let high = parts[1].trim().parse::<i64>().ok()?;
        low.max(high)
    } else {
        cleaned.trim().parse::<i64>().ok()?
    };

    (figure != 0).then_some(figure)
}

pub(super) fn company_size_points(company_size: &str) -> u8 {
    COMPANY_SIZE_TIERS
        .iter()
        .find(|(markers, _)| markers.iter().any(|marker| company_size.contains(marker)))
        .map(|(_, points)| *points)
        .unwrap_or(COMPANY_SIZE_FLOOR)
}

pub(super) fn urgency_points(deadline: &str, comments: &str) -> u8 {
    let within_weeks = DEADLINE_WEEK_STEMS.iter().any(|stem| deadline.contains(stem));
    if within_weeks || comments.contains(URGENT_COMMENT_MARKER) {
        return URGENCY_IMMEDIATE;
    }

    if DEADLINE_MONTH_STEMS.iter().any(|stem| deadline.contains(stem)) {
        return URGENCY_NEAR_TERM;
    }

    URGENCY_RELAXED
}
