// ABOUTME: Vote models with like/dislike types, unvote actions, and count tallies
// ABOUTME: Defines VoteType, VoteAction, VoteTally, and the derived RecipeScore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A persisted vote on a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    /// Thumbs up
    Like,
    /// Thumbs down
    Dislike,
}

impl VoteType {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

/// A vote request submitted by a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteAction {
    /// Cast (or toggle off) a like
    Like,
    /// Cast (or toggle off) a dislike
    Dislike,
    /// Remove any existing vote
    #[serde(alias = "UNVOTE")]
    Unvote,
}

impl VoteAction {
    /// Vote type this action casts, if any
    #[must_use]
    pub const fn vote_type(&self) -> Option<VoteType> {
        match self {
            Self::Like => Some(VoteType::Like),
            Self::Dislike => Some(VoteType::Dislike),
            Self::Unvote => None,
        }
    }
}

impl From<VoteType> for VoteAction {
    fn from(vote: VoteType) -> Self {
        match vote {
            VoteType::Like => Self::Like,
            VoteType::Dislike => Self::Dislike,
        }
    }
}

/// Committed like and dislike counts for one recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteTally {
    /// Number of likes
    pub likes: u64,
    /// Number of dislikes
    pub dislikes: u64,
}

impl VoteTally {
    /// Create a tally from counts
    #[must_use]
    pub const fn new(likes: u64, dislikes: u64) -> Self {
        Self { likes, dislikes }
    }

    /// Total number of votes
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.likes.saturating_add(self.dislikes)
    }

    /// Adjust counts for a single user's vote changing from `old` to `new`
    ///
    /// Each category moves by at most one.
    pub fn transition(&mut self, old: Option<VoteType>, new: Option<VoteType>) {
        if old == new {
            return;
        }
        match old {
            Some(VoteType::Like) => self.likes = self.likes.saturating_sub(1),
            Some(VoteType::Dislike) => self.dislikes = self.dislikes.saturating_sub(1),
            None => {}
        }
        match new {
            Some(VoteType::Like) => self.likes = self.likes.saturating_add(1),
            Some(VoteType::Dislike) => self.dislikes = self.dislikes.saturating_add(1),
            None => {}
        }
    }
}

/// Derived recipe score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipeScore {
    /// Net score: likes minus dislikes
    pub votes: i64,
    /// Smoothed rating in `[0, 10]`
    pub rating: u8,
}
