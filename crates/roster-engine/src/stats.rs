use chrono::NaiveDate;
use roster_types::{AgeBracket, Member, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::age::{age_on, bracket_for};

/// Grouping label for members whose unit reference could not be resolved.
pub const UNKNOWN_UNIT_LABEL: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCount {
    pub role: Role,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketCount {
    pub bracket: AgeBracket,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitCount {
    pub unit: String,
    pub count: usize,
    pub percentage: f64,
}

/// Demographic summary of a member snapshot.
///
/// Always computed over the full set handed in — the caller decides whether
/// that is the whole snapshot or some filtered view. Percentages are
/// relative to `total_members`; categories with zero members are left out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSummary {
    pub total_members: usize,
    /// Descending by count; ties keep role enumeration order.
    pub role_breakdown: Vec<RoleCount>,
    /// Fixed bracket order, youngest first.
    pub age_breakdown: Vec<BracketCount>,
    /// Descending by count; ties by unit name. Unresolvable units group
    /// under [`UNKNOWN_UNIT_LABEL`].
    pub unit_breakdown: Vec<UnitCount>,
    pub mean_age: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_common_role: Option<Role>,
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total as f64
}

/// Summarize `records` as of `today`.
pub fn summarize(records: &[Member], today: NaiveDate) -> RosterSummary {
    if records.is_empty() {
        return RosterSummary {
            total_members: 0,
            role_breakdown: Vec::new(),
            age_breakdown: Vec::new(),
            unit_breakdown: Vec::new(),
            mean_age: 0.0,
            most_common_role: None,
        };
    }

    let total = records.len();

    let mut role_counts: HashMap<Role, usize> = HashMap::new();
    let mut bracket_counts: HashMap<AgeBracket, usize> = HashMap::new();
    let mut unit_counts: HashMap<String, usize> = HashMap::new();
    let mut age_sum = 0i64;

    for member in records {
        let age = age_on(member.birth_date, today);
        age_sum += age as i64;

        *role_counts.entry(member.role).or_insert(0) += 1;
        *bracket_counts.entry(bracket_for(age)).or_insert(0) += 1;

        let unit_label = member
            .unit_name()
            .unwrap_or(UNKNOWN_UNIT_LABEL)
            .to_string();
        *unit_counts.entry(unit_label).or_insert(0) += 1;
    }

    // Walk the fixed enumerations so ties keep a deterministic order.
    let mut role_breakdown: Vec<RoleCount> = Role::ALL
        .iter()
        .filter_map(|role| {
            let count = *role_counts.get(role).unwrap_or(&0);
            (count > 0).then_some(RoleCount {
                role: *role,
                count,
                percentage: percentage(count, total),
            })
        })
        .collect();
    // Stable sort, so equal counts stay in enumeration order.
    role_breakdown.sort_by(|a, b| b.count.cmp(&a.count));

    let age_breakdown: Vec<BracketCount> = AgeBracket::ALL
        .iter()
        .filter_map(|bracket| {
            let count = *bracket_counts.get(bracket).unwrap_or(&0);
            (count > 0).then_some(BracketCount {
                bracket: *bracket,
                count,
                percentage: percentage(count, total),
            })
        })
        .collect();

    let mut unit_breakdown: Vec<UnitCount> = unit_counts
        .into_iter()
        .map(|(unit, count)| UnitCount {
            unit,
            count,
            percentage: percentage(count, total),
        })
        .collect();
    unit_breakdown.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.unit.cmp(&b.unit)));

    let most_common_role = role_breakdown.first().map(|rc| rc.role);

    RosterSummary {
        total_members: total,
        role_breakdown,
        age_breakdown,
        unit_breakdown,
        mean_age: age_sum as f64 / total as f64,
        most_common_role,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_testing::fixtures::{fixed_today, member, sample_roster};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn empty_set_summarizes_to_zeroes() {
        let summary = summarize(&[], fixed_today());
        assert_eq!(summary.total_members, 0);
        assert!(summary.role_breakdown.is_empty());
        assert!(summary.age_breakdown.is_empty());
        assert!(summary.unit_breakdown.is_empty());
        assert_eq!(summary.mean_age, 0.0);
        assert_eq!(summary.most_common_role, None);
    }

    #[test]
    fn role_breakdown_is_count_descending_with_exact_percentages() {
        let summary = summarize(&sample_roster(), fixed_today());

        let observed: Vec<(Role, usize)> = summary
            .role_breakdown
            .iter()
            .map(|rc| (rc.role, rc.count))
            .collect();
        assert_eq!(
            observed,
            vec![(Role::Member, 13), (Role::Leader, 7), (Role::Pastor, 5)]
        );

        assert!((summary.role_breakdown[0].percentage - 52.0).abs() < EPSILON);
        assert!((summary.role_breakdown[1].percentage - 28.0).abs() < EPSILON);
        assert!((summary.role_breakdown[2].percentage - 20.0).abs() < EPSILON);
        assert_eq!(summary.most_common_role, Some(Role::Member));
    }

    #[test]
    fn counts_cover_the_whole_set_and_percentages_sum_to_100() {
        let summary = summarize(&sample_roster(), fixed_today());

        for (counts, percentages) in [
            (
                summary.role_breakdown.iter().map(|e| e.count).sum::<usize>(),
                summary
                    .role_breakdown
                    .iter()
                    .map(|e| e.percentage)
                    .sum::<f64>(),
            ),
            (
                summary.age_breakdown.iter().map(|e| e.count).sum::<usize>(),
                summary
                    .age_breakdown
                    .iter()
                    .map(|e| e.percentage)
                    .sum::<f64>(),
            ),
            (
                summary.unit_breakdown.iter().map(|e| e.count).sum::<usize>(),
                summary
                    .unit_breakdown
                    .iter()
                    .map(|e| e.percentage)
                    .sum::<f64>(),
            ),
        ] {
            assert_eq!(counts, summary.total_members);
            assert!((percentages - 100.0).abs() < EPSILON);
        }
    }

    #[test]
    fn age_breakdown_keeps_bracket_order() {
        let summary = summarize(&sample_roster(), fixed_today());

        let observed: Vec<(AgeBracket, usize)> = summary
            .age_breakdown
            .iter()
            .map(|bc| (bc.bracket, bc.count))
            .collect();
        assert_eq!(
            observed,
            vec![
                (AgeBracket::Under18, 3),
                (AgeBracket::From18To29, 7),
                (AgeBracket::From30To49, 8),
                (AgeBracket::From50To64, 4),
                (AgeBracket::Over65, 3),
            ]
        );
    }

    #[test]
    fn unitless_members_group_under_the_unknown_label() {
        let summary = summarize(&sample_roster(), fixed_today());

        let observed: Vec<(&str, usize)> = summary
            .unit_breakdown
            .iter()
            .map(|uc| (uc.unit.as_str(), uc.count))
            .collect();
        assert_eq!(
            observed,
            vec![
                ("Central", 12),
                ("Northside", 8),
                ("Riverside", 4),
                (UNKNOWN_UNIT_LABEL, 1),
            ]
        );
    }

    #[test]
    fn mean_age_is_the_arithmetic_mean() {
        let summary = summarize(&sample_roster(), fixed_today());
        // Fixture ages sum to 964 over 25 members.
        assert!((summary.mean_age - 38.56).abs() < EPSILON);
    }

    #[test]
    fn zero_count_roles_are_suppressed() {
        let records = vec![member("Maria Silva", 1999, 3, 12, Role::Member)];
        let summary = summarize(&records, fixed_today());
        assert_eq!(summary.role_breakdown.len(), 1);
        assert_eq!(summary.role_breakdown[0].role, Role::Member);
        assert!((summary.role_breakdown[0].percentage - 100.0).abs() < EPSILON);
    }

    #[test]
    fn role_ties_keep_enumeration_order() {
        let records = vec![
            member("Carlos Pereira", 1963, 4, 2, Role::Pastor),
            member("Maria Silva", 1999, 3, 12, Role::Member),
        ];
        let summary = summarize(&records, fixed_today());

        // One of each; Member precedes Pastor in the enumeration.
        assert_eq!(summary.role_breakdown[0].role, Role::Member);
        assert_eq!(summary.role_breakdown[1].role, Role::Pastor);
        assert_eq!(summary.most_common_role, Some(Role::Member));
    }
}
