//! Rank-fusion engine: fuses two rankings-with-ties over a shared universe
//! into one consensus ranking.
//!
//! Each input ranking becomes a reflexive preference relation, split into
//! its strict and tie parts. Tier-adjacent strict reversals between the
//! two rankings become contradictions; the union of both tie relations
//! and the contradictions is closed under transitivity, and its
//! equivalence classes are the consensus clusters. A deterministic
//! topological sort over the intersected strict relations linearizes the
//! clusters into the final ranking.

pub mod closure;
pub mod cluster;
pub mod conflict;
pub mod fusion;
pub mod order;
pub mod preference;
pub mod relation;
