//! Lexboard Engine
//!
//! Pure, side-effect-free logic over an in-memory case collection: the
//! filter predicate pipeline, the tag-based recommendation selector, and
//! the comparison selection state machine. Every function here is a pure
//! function of its inputs and is recomputed from the current snapshot on
//! each call; no derived state is cached across a mutation boundary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod filter;
pub mod recommend;

pub use compare::{ComparisonSelection, ComparisonSummary, MAX_COMPARE, MIN_COMPARE};
pub use filter::{filter_cases, CaseFilter, FilterToken, DEFAULT_YEAR_RANGE};
pub use recommend::{recommend, MAX_RECOMMENDATIONS};
