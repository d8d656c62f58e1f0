#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for the end-to-end scoring pipeline.

use std::cell::RefCell;

use distrofit_core::test_support::{ItemBuilder, catalog_of};
use distrofit_core::{
    Adjustment, Catalog, Eligibility, ExperienceLevel, FitCategory, MatchPenalty, ScoreBreakdown,
    ScoreResult, Signals, UserVector,
};
use distrofit_scorer::FitEngine;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Owned view of an assessment, detached from the catalog borrow.
struct Outcome {
    vector: UserVector,
    candidates: usize,
    eligibility: Eligibility,
    penalties: Vec<MatchPenalty>,
    quality: f64,
    composite: f64,
    breakdown: ScoreBreakdown,
    result: ScoreResult,
}

/// Shared state threaded through the scoring scenarios.
pub struct ScoringContext {
    signals: RefCell<Signals>,
    catalog: RefCell<Option<Catalog>>,
    outcome: RefCell<Option<Outcome>>,
}

#[fixture]
/// Build a fresh `ScoringContext` for each scenario run.
pub fn context() -> ScoringContext {
    ScoringContext {
        signals: RefCell::new(Signals::new()),
        catalog: RefCell::new(None),
        outcome: RefCell::new(None),
    }
}

#[given("a profile with no signals")]
fn no_signals(context: &ScoringContext) {
    *context.signals.borrow_mut() = Signals::new();
}

#[given("a senior profile with no other signals")]
fn senior_profile(context: &ScoringContext) {
    *context.signals.borrow_mut() = Signals::new().with_experience(ExperienceLevel::Senior);
}

#[given("a senior developer profile that loves customisation")]
fn senior_developer(context: &ScoringContext) {
    *context.signals.borrow_mut() = Signals::new()
        .with_experience(ExperienceLevel::Senior)
        .with_keywords(["hyprland", "dotfiles", "devops"])
        .with_tech_stack(["go", "python"]);
}

#[given("the shipped catalog")]
fn shipped_catalog(context: &ScoringContext) {
    *context.catalog.borrow_mut() = Some(Catalog::builtin());
}

#[given("a catalog containing an exact twin of the baseline")]
fn twin_catalog(context: &ScoringContext) {
    let catalog = catalog_of([
        ItemBuilder::new("outlier").axes(9, 9, 9, 9).popularity(100),
        ItemBuilder::new("twin").axes(5, 5, 3, 5).popularity(3790),
    ])
    .expect("valid twin catalog");
    *context.catalog.borrow_mut() = Some(catalog);
}

#[given("a catalog where every item is below the senior floor")]
fn obscure_catalog(context: &ScoringContext) {
    let catalog = catalog_of([
        ItemBuilder::new("tiny").axes(0, 0, 0, 0).popularity(40),
        ItemBuilder::new("small").axes(6, 5, 3, 5).popularity(320),
    ])
    .expect("valid obscure catalog");
    *context.catalog.borrow_mut() = Some(catalog);
}

#[given("a catalog with a single generic easy distribution")]
fn generic_catalog(context: &ScoringContext) {
    let catalog = catalog_of([ItemBuilder::new("generic")
        .axes(6, 10, 3, 6)
        .easy(10)
        .popularity(2000)])
    .expect("valid generic catalog");
    *context.catalog.borrow_mut() = Some(catalog);
}

#[when("I assess the profile")]
fn assess_profile(context: &ScoringContext) {
    let catalog_ref = context.catalog.borrow();
    let catalog = catalog_ref.as_ref().expect("catalog must be initialised");
    let signals = context.signals.borrow();
    let assessment = FitEngine::default().assess(&signals, catalog);
    *context.outcome.borrow_mut() = Some(Outcome {
        vector: assessment.vector,
        candidates: assessment.candidates.len(),
        eligibility: assessment.matched.eligibility,
        penalties: assessment.matched.penalties.clone(),
        quality: assessment.matched.quality,
        composite: assessment.matched.composite,
        breakdown: assessment.breakdown,
        result: assessment.result,
    });
}

#[then("the derived vector is the baseline")]
fn assert_baseline(context: &ScoringContext) {
    with_outcome(context, |outcome| {
        assert_eq!(outcome.vector, UserVector::new(5, 5, 3, 5));
    });
}

#[then("every catalog item was considered")]
fn assert_all_considered(context: &ScoringContext) {
    let expected = Catalog::builtin().len();
    with_outcome(context, |outcome| {
        assert_eq!(outcome.candidates, expected);
        assert_eq!(outcome.eligibility, Eligibility::Unfiltered);
    });
}

#[then("the twin is recommended")]
fn assert_twin(context: &ScoringContext) {
    with_outcome(context, |outcome| {
        assert_eq!(outcome.result.recommendation.id, "twin");
    });
}

#[then("the breakdown records four close axes")]
fn assert_close_axes(context: &ScoringContext) {
    with_outcome(context, |outcome| {
        assert!(
            outcome
                .breakdown
                .adjustments
                .contains(&Adjustment::CloseAxes { count: 4 })
        );
    });
}

#[then("the fit is strong with a score of 100")]
fn assert_strong(context: &ScoringContext) {
    with_outcome(context, |outcome| {
        assert_eq!(outcome.result.score, 100);
        assert_eq!(outcome.result.category, FitCategory::Strong);
    });
}

#[then("the whole catalog was scored as a fallback")]
fn assert_fallback(context: &ScoringContext) {
    with_outcome(context, |outcome| {
        assert_eq!(outcome.eligibility, Eligibility::Fallback);
        assert_eq!(outcome.candidates, 2);
        assert_eq!(outcome.result.recommendation.id, "small");
    });
}

#[then("the recommendation has a positive match quality")]
fn assert_positive_quality(context: &ScoringContext) {
    with_outcome(context, |outcome| {
        assert!(outcome.quality > 0.0);
        assert!(outcome.result.confidence > 0.0);
    });
}

#[then("both senior penalties were applied")]
fn assert_both_penalties(context: &ScoringContext) {
    with_outcome(context, |outcome| {
        assert_eq!(outcome.vector, UserVector::new(6, 10, 3, 10));
        assert_eq!(
            outcome.penalties,
            [
                MatchPenalty::GenericForDeveloper,
                MatchPenalty::TooEasyForTinkerer
            ]
        );
    });
}

#[then("the match quality reflects both penalties")]
#[expect(
    clippy::float_arithmetic,
    reason = "penalty factors are compared as floats"
)]
fn assert_penalised_quality(context: &ScoringContext) {
    with_outcome(context, |outcome| {
        let expected = outcome.composite * 0.85 * 0.90;
        assert!((outcome.quality - expected).abs() < 1e-9);
    });
}

fn with_outcome(context: &ScoringContext, check: impl FnOnce(&Outcome)) {
    let outcome = context.outcome.borrow();
    check(outcome.as_ref().expect("profile should be assessed"));
}

#[scenario(path = "tests/features/scoring.feature", index = 0)]
fn empty_signals_score_against_baseline(context: ScoringContext) {
    let _ = context;
}

#[scenario(path = "tests/features/scoring.feature", index = 1)]
fn exact_twin_earns_bonus(context: ScoringContext) {
    let _ = context;
}

#[scenario(path = "tests/features/scoring.feature", index = 2)]
fn senior_profile_falls_back(context: ScoringContext) {
    let _ = context;
}

#[scenario(path = "tests/features/scoring.feature", index = 3)]
fn senior_penalties_stack(context: ScoringContext) {
    let _ = context;
}
