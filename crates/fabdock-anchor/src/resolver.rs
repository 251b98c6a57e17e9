//! Drop resolution: which anchor a released drag settles into.

use fabdock_geometry::{LayoutDirection, Offset, Point, Rect};
use smallvec::SmallVec;

use crate::Anchor;

/// An allowed anchor paired with its distance to the projected drop point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropCandidate {
    pub anchor: Anchor,
    pub distance: f32,
}

/// Projects the end of a drag from the current anchor's reference point.
///
/// The translation is relative to wherever the gesture started, so the
/// drop point hangs off the current anchor rather than the container
/// origin.
pub fn drop_point(
    container: Rect,
    current: Anchor,
    direction: LayoutDirection,
    translation: Offset,
) -> Point {
    current.reference_point(container, direction) + translation
}

/// Ranks every allowed anchor by distance to the projected drop point.
///
/// Candidates come out in canonical order. Duplicates in `allowed`
/// collapse, so no anchor appears twice.
pub fn drop_candidates(
    container: Rect,
    current: Anchor,
    direction: LayoutDirection,
    translation: Offset,
    allowed: &[Anchor],
) -> SmallVec<[DropCandidate; 9]> {
    let drop = drop_point(container, current, direction, translation);
    Anchor::CANONICAL
        .into_iter()
        .filter(|anchor| allowed.contains(anchor))
        .map(|anchor| DropCandidate {
            anchor,
            distance: drop.distance_to(anchor.reference_point(container, direction)),
        })
        .collect()
}

/// Resolves the anchor a released drag settles into.
///
/// `translation` is the predicted end translation of the gesture; the drop
/// point it projects is matched against every allowed anchor and the
/// nearest one wins. Equal distances keep the earliest candidate in
/// canonical order, so the result is deterministic for any input.
///
/// Returns `None` when `allowed` is empty; callers keep their current
/// anchor and reset any in-flight drag offset.
pub fn resolve_drop(
    container: Rect,
    current: Anchor,
    direction: LayoutDirection,
    translation: Offset,
    allowed: &[Anchor],
) -> Option<Anchor> {
    let mut winner: Option<DropCandidate> = None;
    for candidate in drop_candidates(container, current, direction, translation, allowed) {
        // Strict `<` keeps the earliest canonical candidate on ties.
        let better = winner.map_or(true, |best| candidate.distance < best.distance);
        if better {
            winner = Some(candidate);
        }
    }
    winner.map(|candidate| candidate.anchor)
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
