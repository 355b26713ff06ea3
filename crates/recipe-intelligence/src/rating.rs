// ABOUTME: Vote toggle semantics and Bayesian-smoothed recipe ratings
// ABOUTME: Computes the 0-10 rating and net vote score from committed like/dislike counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Vote Aggregation
//!
//! The rating blends `C` virtual neutral votes (mean 5 on a 0-10 scale) into
//! the observed likes and dislikes:
//!
//! ```text
//! rating = clamp(round((L * 10 + 5 * C) / (L + D + C)), 0, 10)
//! ```
//!
//! Low-sample recipes are pulled toward the midpoint, and the rating converges
//! to `10 * L / (L + D)` as votes accumulate. A recipe with no votes has a
//! rating of 0. The net score is always `L - D`.

use recipe_core::constants::rating::{CONFIDENCE_WEIGHT, LIKE_POINTS, MAX_RATING, PRIOR_MEAN};
use recipe_core::models::{RecipeScore, VoteAction, VoteTally, VoteType};

/// Resolve a user's vote after a request
///
/// Requesting the vote the user already has removes it; `Unvote` always
/// removes; a different vote type replaces the existing one.
#[must_use]
pub const fn apply_vote(current: Option<VoteType>, requested: VoteAction) -> Option<VoteType> {
    match (current, requested) {
        (_, VoteAction::Unvote)
        | (Some(VoteType::Like), VoteAction::Like)
        | (Some(VoteType::Dislike), VoteAction::Dislike) => None,
        (_, VoteAction::Like) => Some(VoteType::Like),
        (_, VoteAction::Dislike) => Some(VoteType::Dislike),
    }
}

/// Compute the net score and smoothed rating from like and dislike counts
///
/// Integer-only arithmetic; half-way values round up.
#[must_use]
pub fn recompute(likes: u64, dislikes: u64) -> RecipeScore {
    let net = i128::from(likes) - i128::from(dislikes);
    let votes = i64::try_from(net).unwrap_or(if net > 0 { i64::MAX } else { i64::MIN });

    let total = u128::from(likes) + u128::from(dislikes);
    if total == 0 {
        return RecipeScore { votes, rating: 0 };
    }

    let numerator =
        u128::from(likes) * u128::from(LIKE_POINTS) + u128::from(PRIOR_MEAN * CONFIDENCE_WEIGHT);
    let denominator = total + u128::from(CONFIDENCE_WEIGHT);
    // round(n / d) == floor((2n + d) / 2d) for non-negative n
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    let rating = u8::try_from(rounded).map_or(MAX_RATING, |r| r.min(MAX_RATING));

    RecipeScore { votes, rating }
}

/// Score for a committed tally
#[must_use]
pub fn score(tally: &VoteTally) -> RecipeScore {
    recompute(tally.likes, tally.dislikes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(recompute(0, 0), RecipeScore { votes: 0, rating: 0 });
        assert_eq!(recompute(10, 0), RecipeScore { votes: 10, rating: 8 });
        assert_eq!(
            recompute(0, 10),
            RecipeScore {
                votes: -10,
                rating: 3
            }
        );
    }

    #[test]
    fn test_single_votes_stay_near_midpoint() {
        // (10 + 50) / 11 = 5.45
        assert_eq!(recompute(1, 0).rating, 5);
        // 50 / 11 = 4.54
        assert_eq!(recompute(0, 1).rating, 5);
        assert_eq!(recompute(1, 1).rating, 5);
    }

    #[test]
    fn test_rating_converges_to_like_ratio() {
        assert_eq!(recompute(10_000, 0).rating, 10);
        assert_eq!(recompute(0, 10_000).rating, 0);
        assert_eq!(recompute(7_500, 2_500).rating, 7);
    }

    #[test]
    fn test_rating_bounded_across_domain() {
        for likes in 0..60 {
            for dislikes in 0..60 {
                let score = recompute(likes, dislikes);
                assert!(score.rating <= 10);
                assert_eq!(
                    score.votes,
                    i64::try_from(likes).unwrap() - i64::try_from(dislikes).unwrap()
                );
            }
        }

        let extreme = recompute(u64::MAX, u64::MAX);
        assert!(extreme.rating <= 10);
        assert_eq!(extreme.votes, 0);
        assert_eq!(recompute(u64::MAX, 0).votes, i64::MAX);
        assert_eq!(recompute(0, u64::MAX).votes, i64::MIN);
    }

    #[test]
    fn test_apply_vote_toggle_semantics() {
        let like = Some(VoteType::Like);
        let dislike = Some(VoteType::Dislike);

        assert_eq!(apply_vote(None, VoteAction::Like), like);
        assert_eq!(apply_vote(like, VoteAction::Like), None);
        assert_eq!(apply_vote(like, VoteAction::Dislike), dislike);
        assert_eq!(apply_vote(dislike, VoteAction::Like), like);
        assert_eq!(apply_vote(dislike, VoteAction::Dislike), None);
        assert_eq!(apply_vote(None, VoteAction::Unvote), None);
        assert_eq!(apply_vote(like, VoteAction::Unvote), None);
    }

    #[test]
    fn test_like_then_dislike_moves_counts_by_one() {
        let mut tally = VoteTally::new(4, 2);
        let first = apply_vote(None, VoteAction::Like);
        tally.transition(None, first);
        assert_eq!(tally, VoteTally::new(5, 2));

        let second = apply_vote(first, VoteAction::Dislike);
        tally.transition(first, second);
        assert_eq!(second, Some(VoteType::Dislike));
        assert_eq!(tally, VoteTally::new(4, 3));
        assert_eq!(score(&tally), recompute(4, 3));
    }
}
