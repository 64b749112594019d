use mealpause::core::pause::PauseLogic;
use mealpause::core::selection::{BoundarySelection, toggle, toggle_unless_frozen};
use mealpause::models::meal_kind::MealKind;
use mealpause::models::resume_point::ResumePoint;

mod common;
use common::{d, record};

use MealKind::{Breakfast, Dinner, Lunch, Snacks};

fn assert_suffix(sel: &BoundarySelection) {
    let selected = sel.selected();
    match sel.earliest() {
        None => assert!(selected.is_empty()),
        Some(first) => assert_eq!(selected, &MealKind::ALL[first.index()..]),
    }
    for m in MealKind::ALL {
        assert_eq!(sel.is_selected(m), selected.contains(&m));
    }
}

#[test]
fn test_toggle_rules() {
    let mut sel = BoundarySelection::new();

    toggle(&mut sel, Snacks);
    assert_eq!(sel.selected(), &[Snacks, Dinner]);
    assert!(sel.is_locked(Dinner));
    assert!(sel.is_skipped(Lunch));

    // Later meal is locked: no change.
    toggle(&mut sel, Dinner);
    assert_eq!(sel.earliest(), Some(Snacks));

    // Earlier meal extends the suffix.
    toggle(&mut sel, Lunch);
    assert_eq!(sel.selected(), &[Lunch, Snacks, Dinner]);

    // Toggling the earliest clears everything.
    toggle(&mut sel, Lunch);
    assert_eq!(sel.earliest(), None);
    assert_eq!(sel.resume_point(), ResumePoint::FULL_PAUSE);
}

#[test]
fn test_suffix_invariant_for_every_toggle_sequence() {
    let n = MealKind::COUNT;
    for len in 1..=5u32 {
        for code in 0..n.pow(len) {
            let mut sel = BoundarySelection::new();
            let mut c = code;
            for _ in 0..len {
                let meal = MealKind::ALL[c % n];
                c /= n;
                toggle(&mut sel, meal);
                assert_suffix(&sel);
            }
            let rp = sel.resume_point();
            assert_eq!(rp.eaten_meals(), sel.selected());
        }
    }
}

#[test]
fn test_resume_point_round_trip_through_selection() {
    for k in 0..=MealKind::COUNT {
        let rp = ResumePoint::new(k).expect("valid k");
        assert_eq!(BoundarySelection::from_resume_point(rp).resume_point(), rp);
    }
    assert_eq!(ResumePoint::new(0), Some(ResumePoint::FIRST_MEAL));
    assert!(ResumePoint::FIRST_MEAL.paused_meals().is_empty());
    assert_eq!(ResumePoint::new(5), None);
}

#[test]
fn test_frozen_cells_ignore_toggles() {
    let boundary = d("2025-01-13");
    let active = vec![record(1, "s1", Breakfast, "2025-01-13", "2025-01-13")];

    let mut sel = BoundarySelection::new();
    assert!(!toggle_unless_frozen(&mut sel, Breakfast, boundary, &active));
    assert_eq!(sel.earliest(), None);

    assert!(toggle_unless_frozen(&mut sel, Lunch, boundary, &active));
    assert_eq!(sel.earliest(), Some(Lunch));
}

#[test]
fn test_resolve_resume_point() {
    let boundary = d("2025-01-13");

    assert_eq!(
        PauseLogic::resolve_resume_point(None, &[], boundary, &[]),
        ResumePoint::FULL_PAUSE
    );
    assert_eq!(
        PauseLogic::resolve_resume_point(None, &[Dinner, Lunch], boundary, &[]),
        ResumePoint::from_meal(Lunch)
    );
    assert_eq!(
        PauseLogic::resolve_resume_point(Some(ResumePoint::from_meal(Snacks)), &[Snacks], boundary, &[]),
        ResumePoint::FULL_PAUSE
    );
}
