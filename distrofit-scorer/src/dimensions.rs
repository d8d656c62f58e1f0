//! Project profile signals onto the four matching axes.
//!
//! Every contribution is an independent signed delta, so the result is the
//! same whatever order terms or rules are visited in. Axes are clamped into
//! `0..=10` only after all contributions are summed.

use std::collections::BTreeSet;

use distrofit_core::{Axis, Signals, UserVector};
use log::debug;

use crate::rules::{
    BASELINE, RULES, Rule, SCRIPTING_DIY_BONUS, SCRIPTING_LANGUAGES, SCRIPTING_THRESHOLD,
    SENIOR_ROLLING_BONUS, Source,
};

/// A single piece of evidence that moved an axis.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Contribution {
    /// Axis that moved.
    pub axis: Axis,
    /// Name of the rule that fired.
    pub rule: &'static str,
    /// Signal term that triggered the rule, when a single term did.
    pub term: Option<String>,
    /// Pattern the term matched, when the rule is table-driven.
    pub pattern: Option<&'static str>,
    /// Signed delta applied to the axis.
    pub delta: i32,
}

/// Derived vector together with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DimensionTrace {
    /// Clamped user vector.
    pub vector: UserVector,
    /// Contributions in rule declaration order.
    pub contributions: Vec<Contribution>,
}

/// Derive the [`UserVector`] for `signals`.
///
/// # Examples
/// ```
/// use distrofit_core::{Signals, UserVector};
/// use distrofit_scorer::extract;
///
/// assert_eq!(extract(&Signals::new()), UserVector::new(5, 5, 3, 5));
/// ```
#[must_use]
pub fn extract(signals: &Signals) -> UserVector {
    extract_with_trace(signals).vector
}

/// Derive the [`UserVector`] for `signals` and report every contribution.
#[must_use]
pub fn extract_with_trace(signals: &Signals) -> DimensionTrace {
    let mut contributions: Vec<Contribution> = RULES
        .iter()
        .flat_map(|rule| rule_contributions(rule, signals))
        .collect();
    contributions.extend(senior_contribution(signals));
    contributions.extend(scripting_contribution(&signals.tech_stack));

    let total = |axis: Axis| -> i32 {
        let baseline = BASELINE
            .iter()
            .find_map(|&(base_axis, value)| (base_axis == axis).then_some(value))
            .unwrap_or(0);
        baseline
            + contributions
                .iter()
                .filter(|contribution| contribution.axis == axis)
                .map(|contribution| contribution.delta)
                .sum::<i32>()
    };
    let vector = UserVector::from_totals(
        total(Axis::Rolling),
        total(Axis::Diy),
        total(Axis::Performance),
        total(Axis::DevFocus),
    );
    debug!(
        "user dimensions: rolling={} diy={} performance={} dev_focus={}",
        vector.rolling(),
        vector.diy(),
        vector.performance(),
        vector.dev_focus()
    );
    DimensionTrace {
        vector,
        contributions,
    }
}

fn rule_contributions<'a>(
    rule: &'a Rule,
    signals: &'a Signals,
) -> impl Iterator<Item = Contribution> + 'a {
    let terms = match rule.source {
        Source::Keywords => &signals.keywords,
        Source::TechStack => &signals.tech_stack,
    };
    terms.iter().filter_map(move |term| {
        rule.matching
            .find(term, rule.patterns)
            .map(|pattern| Contribution {
                axis: rule.axis,
                rule: rule.name,
                term: Some(term.clone()),
                pattern: Some(pattern),
                delta: rule.delta,
            })
    })
}

fn senior_contribution(signals: &Signals) -> Option<Contribution> {
    signals.is_senior().then_some(Contribution {
        axis: Axis::Rolling,
        rule: "senior_experience",
        term: None,
        pattern: None,
        delta: SENIOR_ROLLING_BONUS,
    })
}

fn scripting_contribution(tech_stack: &BTreeSet<String>) -> Option<Contribution> {
    let languages = SCRIPTING_LANGUAGES
        .iter()
        .filter(|language| tech_stack.contains(**language))
        .count();
    (languages >= SCRIPTING_THRESHOLD).then_some(Contribution {
        axis: Axis::Diy,
        rule: "scripting_languages",
        term: None,
        pattern: None,
        delta: SCRIPTING_DIY_BONUS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use distrofit_core::ExperienceLevel;
    use rstest::rstest;

    #[rstest]
    fn empty_signals_yield_baseline() {
        let trace = extract_with_trace(&Signals::new());
        assert_eq!(trace.vector, UserVector::new(5, 5, 3, 5));
        assert!(trace.contributions.is_empty());
    }

    #[rstest]
    fn bleeding_edge_stack_and_seniority_raise_rolling() {
        let signals = Signals::new()
            .with_experience(ExperienceLevel::Senior)
            .with_tech_stack(["rust", "zig", "haskell"]);
        // 5 + 2 + 2 + 1
        assert_eq!(extract(&signals).rolling(), 10);
    }

    #[rstest]
    fn stability_keywords_lower_rolling() {
        let signals = Signals::new().with_keywords(["production", "lts", "stable"]);
        assert_eq!(extract(&signals).rolling(), 0);
    }

    #[rstest]
    fn customisation_keywords_saturate_diy() {
        let signals = Signals::new().with_keywords(["hyprland", "dotfiles"]);
        assert_eq!(extract(&signals).diy(), 10);
    }

    #[rstest]
    fn simplicity_keywords_lower_diy() {
        let signals = Signals::new().with_keywords(["beginner", "easy"]);
        assert_eq!(extract(&signals).diy(), 1);
    }

    #[rstest]
    #[case(&["bash"], 5)]
    #[case(&["bash", "lua"], 7)]
    #[case(&["bash", "lua", "python"], 7)]
    fn scripting_bonus_needs_two_languages(#[case] stack: &[&str], #[case] expected: u8) {
        let signals = Signals::new().with_tech_stack(stack.iter().copied());
        assert_eq!(extract(&signals).diy(), expected);
    }

    #[rstest]
    fn performance_counts_keywords_and_stack() {
        let signals = Signals::new()
            .with_keywords(["gaming", "vulkan"])
            .with_tech_stack(["c++", "cuda"]);
        // 3 + 2 + 2 + 1 + 1
        assert_eq!(extract(&signals).performance(), 9);
    }

    #[rstest]
    fn critical_keywords_match_by_substring() {
        let signals = Signals::new().with_keywords(["Kubernetes-Operators"]);
        let trace = extract_with_trace(&signals);
        let critical: Vec<_> = trace
            .contributions
            .iter()
            .filter(|contribution| contribution.rule == "critical_keywords")
            .collect();
        assert_eq!(critical.len(), 1);
        // critical +2, dev-process +1
        assert_eq!(trace.vector.dev_focus(), 8);
    }

    #[rstest]
    fn developer_stack_counts_each_term_once() {
        // "javascript" contains both "java" and "javascript".
        let signals = Signals::new().with_tech_stack(["javascript"]);
        assert_eq!(extract(&signals).dev_focus(), 6);
    }

    #[rstest]
    fn contribution_order_does_not_change_vector() {
        let forward = Signals::new()
            .with_keywords(["devops", "rice", "gaming", "lts"])
            .with_tech_stack(["rust", "python", "bash"]);
        let reversed = Signals::new()
            .with_tech_stack(["bash", "python", "rust"])
            .with_keywords(["lts", "gaming", "rice", "devops"]);
        assert_eq!(extract(&forward), extract(&reversed));
    }
}
