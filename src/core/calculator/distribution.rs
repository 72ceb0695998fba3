//! Minutes-by-type breakdown for the stats view.

use crate::models::session::Session;
use crate::models::stats::TypeShare;
use crate::utils::time::{percentage, seconds_to_minutes};

/// Group minutes by `type`, ranked by minutes descending.
///
/// Each session is rounded to minutes on its own before summing. Ties
/// keep first-appearance order. The list is never truncated.
pub fn compute_distribution(sessions: &[Session]) -> Vec<TypeShare> {
    let mut groups: Vec<(String, i64)> = Vec::new();
    let mut total = 0i64;

    for s in sessions {
        let minutes = seconds_to_minutes(s.duration);
        total = total.saturating_add(minutes);

        match groups.iter_mut().find(|(kind, _)| *kind == s.kind) {
            Some((_, m)) => *m = m.saturating_add(minutes),
            None => groups.push((s.kind.clone(), minutes)),
        }
    }

    // stable: equal minutes stay in insertion order
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    groups
        .into_iter()
        .map(|(kind, minutes)| TypeShare {
            kind,
            minutes,
            percentage: percentage(minutes, total),
        })
        .collect()
}
