use fabdock_geometry::{LayoutDirection, Offset, Point, Rect, Size};

use crate::{drop_candidates, drop_point, resolve_drop, Anchor};

fn container() -> Rect {
    Rect::from_size(Size::new(300.0, 600.0))
}

fn mirrored(anchor: Anchor) -> Anchor {
    match anchor {
        Anchor::TopStart => Anchor::TopEnd,
        Anchor::TopEnd => Anchor::TopStart,
        Anchor::CenterStart => Anchor::CenterEnd,
        Anchor::CenterEnd => Anchor::CenterStart,
        Anchor::BottomStart => Anchor::BottomEnd,
        Anchor::BottomEnd => Anchor::BottomStart,
        other => other,
    }
}

#[test]
fn drop_point_projects_from_current_anchor() {
    let drop = drop_point(
        container(),
        Anchor::BottomEnd,
        LayoutDirection::Ltr,
        Offset::new(-250.0, -500.0),
    );
    assert_eq!(drop, Point::new(50.0, 100.0));
}

#[test]
fn drop_point_follows_layout_direction() {
    // Under RTL the end anchor sits on the physical left.
    let drop = drop_point(
        container(),
        Anchor::BottomEnd,
        LayoutDirection::Rtl,
        Offset::new(40.0, 0.0),
    );
    assert_eq!(drop, Point::new(40.0, 600.0));
}

#[test]
fn nearest_anchor_wins_across_the_container() {
    let resolved = resolve_drop(
        container(),
        Anchor::BottomEnd,
        LayoutDirection::Ltr,
        Offset::new(-250.0, -500.0),
        &Anchor::CANONICAL,
    );
    assert_eq!(resolved, Some(Anchor::TopStart));
}

#[test]
fn zero_translation_keeps_every_anchor() {
    for current in Anchor::CANONICAL {
        let resolved = resolve_drop(
            container(),
            current,
            LayoutDirection::Ltr,
            Offset::ZERO,
            &Anchor::CANONICAL,
        );
        assert_eq!(resolved, Some(current), "{current:?}");
    }
}

#[test]
fn restricted_set_picks_nearest_member() {
    let allowed = [Anchor::BottomStart, Anchor::BottomEnd];
    let resolved = resolve_drop(
        container(),
        Anchor::BottomEnd,
        LayoutDirection::Ltr,
        Offset::new(-290.0, 0.0),
        &allowed,
    );
    assert_eq!(resolved, Some(Anchor::BottomStart));
}

#[test]
fn empty_allowed_set_resolves_to_none() {
    let resolved = resolve_drop(
        container(),
        Anchor::BottomEnd,
        LayoutDirection::Ltr,
        Offset::new(-150.0, -300.0),
        &[],
    );
    assert_eq!(resolved, None);
}

#[test]
fn result_is_always_a_member_of_allowed() {
    let sets: [&[Anchor]; 4] = [
        &Anchor::CANONICAL,
        &Anchor::CORNERS,
        &[Anchor::Center],
        &[Anchor::TopCenter, Anchor::BottomCenter],
    ];
    let translations = [
        Offset::ZERO,
        Offset::new(75.0, -150.0),
        Offset::new(-75.0, 150.0),
        Offset::new(-400.0, -800.0),
        Offset::new(1000.0, 1000.0),
    ];
    for allowed in sets {
        for translation in translations {
            for current in [Anchor::BottomEnd, Anchor::Center, Anchor::TopStart] {
                let resolved = resolve_drop(
                    container(),
                    current,
                    LayoutDirection::Ltr,
                    translation,
                    allowed,
                )
                .unwrap();
                assert!(
                    allowed.contains(&resolved),
                    "{resolved:?} not in {allowed:?} for {current:?} + {translation:?}"
                );
            }
        }
    }
}

#[test]
fn resolution_is_deterministic() {
    let translation = Offset::new(-120.0, 260.0);
    let first = resolve_drop(
        container(),
        Anchor::TopEnd,
        LayoutDirection::Ltr,
        translation,
        &Anchor::CANONICAL,
    );
    for _ in 0..5 {
        let again = resolve_drop(
            container(),
            Anchor::TopEnd,
            LayoutDirection::Ltr,
            translation,
            &Anchor::CANONICAL,
        );
        assert_eq!(again, first);
    }
}

#[test]
fn equidistant_candidates_keep_canonical_order() {
    // Drop point (150, 0) sits exactly between the two top corners.
    let translation = Offset::new(0.0, -300.0);
    for allowed in [
        [Anchor::TopEnd, Anchor::TopStart],
        [Anchor::TopStart, Anchor::TopEnd],
    ] {
        let resolved = resolve_drop(
            container(),
            Anchor::Center,
            LayoutDirection::Ltr,
            translation,
            &allowed,
        );
        assert_eq!(resolved, Some(Anchor::TopStart), "allowed {allowed:?}");
    }
}

#[test]
fn current_anchor_outside_allowed_resolves_by_distance() {
    // Center is not a corner; the drop lands nearer the trailing corners,
    // which tie, and the earlier canonical one wins.
    let resolved = resolve_drop(
        container(),
        Anchor::Center,
        LayoutDirection::Ltr,
        Offset::new(10.0, 0.0),
        &Anchor::CORNERS,
    );
    assert_eq!(resolved, Some(Anchor::BottomEnd));
}

#[test]
fn zero_size_container_collapses_to_first_canonical() {
    let degenerate = Rect::new(100.0, 200.0, 0.0, 0.0);
    let resolved = resolve_drop(
        degenerate,
        Anchor::BottomEnd,
        LayoutDirection::Ltr,
        Offset::new(5.0, 5.0),
        &Anchor::CANONICAL,
    );
    assert_eq!(resolved, Some(Anchor::BottomStart));

    let corners_only = resolve_drop(
        degenerate,
        Anchor::TopStart,
        LayoutDirection::Ltr,
        Offset::new(-3.0, 8.0),
        &Anchor::CORNERS,
    );
    assert_eq!(corners_only, Some(Anchor::BottomStart));
}

#[test]
fn drop_far_outside_container_still_resolves() {
    let resolved = resolve_drop(
        container(),
        Anchor::TopStart,
        LayoutDirection::Ltr,
        Offset::new(-1000.0, -1000.0),
        &Anchor::CANONICAL,
    );
    assert_eq!(resolved, Some(Anchor::TopStart));
}

#[test]
fn rtl_resolution_mirrors_ltr() {
    let cases = [
        (Anchor::BottomEnd, Offset::new(-250.0, -500.0)),
        (Anchor::BottomEnd, Offset::new(-290.0, 0.0)),
        (Anchor::Center, Offset::new(120.0, 40.0)),
        (Anchor::TopStart, Offset::new(60.0, 580.0)),
    ];
    for (current, translation) in cases {
        let ltr = resolve_drop(
            container(),
            current,
            LayoutDirection::Ltr,
            translation,
            &Anchor::CANONICAL,
        );
        let rtl = resolve_drop(
            container(),
            current,
            LayoutDirection::Rtl,
            Offset::new(-translation.dx, translation.dy),
            &Anchor::CANONICAL,
        );
        assert_eq!(rtl, ltr, "{current:?} + {translation:?}");
    }
}

#[test]
fn candidates_cover_allowed_in_canonical_order() {
    // Allowed order does not matter; candidates come out canonical.
    let allowed = [
        Anchor::TopEnd,
        Anchor::TopStart,
        Anchor::BottomEnd,
        Anchor::BottomStart,
    ];
    let candidates = drop_candidates(
        container(),
        Anchor::BottomEnd,
        LayoutDirection::Ltr,
        Offset::ZERO,
        &allowed,
    );

    let anchors: Vec<Anchor> = candidates.iter().map(|c| c.anchor).collect();
    assert_eq!(
        anchors,
        vec![
            Anchor::BottomStart,
            Anchor::BottomEnd,
            Anchor::TopStart,
            Anchor::TopEnd,
        ]
    );

    let expected_distances = [300.0, 0.0, 670.8204, 600.0];
    for (candidate, expected) in candidates.iter().zip(expected_distances) {
        assert!(
            (candidate.distance - expected).abs() < 1e-3,
            "{:?}: {} vs {}",
            candidate.anchor,
            candidate.distance,
            expected
        );
    }
}

#[test]
fn duplicate_allowed_entries_collapse() {
    let allowed = [Anchor::BottomEnd, Anchor::BottomEnd, Anchor::TopStart];
    let candidates = drop_candidates(
        container(),
        Anchor::BottomEnd,
        LayoutDirection::Ltr,
        Offset::ZERO,
        &allowed,
    );
    assert_eq!(candidates.len(), 2);
}

#[test]
fn mirrored_inputs_under_rtl_reach_the_mirrored_anchor() {
    // The scenario that lands on TopStart under LTR lands on TopEnd when
    // both the current anchor and the translation are mirrored under RTL.
    let ltr = resolve_drop(
        container(),
        Anchor::BottomEnd,
        LayoutDirection::Ltr,
        Offset::new(-250.0, -500.0),
        &Anchor::CANONICAL,
    )
    .unwrap();
    let rtl = resolve_drop(
        container(),
        mirrored(Anchor::BottomEnd),
        LayoutDirection::Rtl,
        Offset::new(-250.0, -500.0),
        &Anchor::CANONICAL,
    )
    .unwrap();
    assert_eq!(ltr, Anchor::TopStart);
    assert_eq!(rtl, mirrored(ltr));
}
