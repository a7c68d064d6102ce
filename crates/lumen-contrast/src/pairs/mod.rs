//! Batch evaluation of foreground/background token pairs.
//!
//! The evaluator never looks tokens up itself: callers inject a
//! [`TokenResolver`] (a theme map, a closure over a live stylesheet, ...).
//! Pairs whose tokens cannot be resolved or parsed are skipped, not failed.

mod table;


use crate::colors::parse_color;
use crate::luminance::evaluate;
use crate::rating::{Rating, AA_RATIO};
use lumen_common::Color;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

pub use table::default_pairs;

/// Looks up the current color string of a design token.
pub trait TokenResolver {
    fn resolve(&self, token: &str) -> Option<String>;
}

impl<F> TokenResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, token: &str) -> Option<String> {
        self(token)
    }
}

impl TokenResolver for HashMap<String, String> {
    fn resolve(&self, token: &str) -> Option<String> {
        self.get(token).cloned()
    }
}

impl TokenResolver for BTreeMap<String, String> {
    fn resolve(&self, token: &str) -> Option<String> {
        self.get(token).cloned()
    }
}

/// A named foreground/background token combination to audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContrastPair {
    pub name: String,
    pub foreground: String,
    pub background: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl ContrastPair {
    pub fn new(name: &str, foreground: &str, background: &str) -> Self {
        Self {
            name: name.into(),
            foreground: foreground.into(),
            background: background.into(),
            group: None,
        }
    }

    pub fn with_group(mut self, group: &str) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// A pair whose tokens resolved, with its measured contrast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairEvaluation {
    pub name: String,
    pub foreground: String,
    pub background: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub foreground_color: Color,
    pub background_color: Color,
    pub ratio: f64,
    pub rating: Rating,
}

/// A failing pair, reported against the AA normal-text requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastIssue {
    pub name: String,
    pub foreground: String,
    pub background: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub ratio: f64,
    pub required_ratio: f64,
    pub rating: Rating,
}

impl From<PairEvaluation> for ContrastIssue {
    fn from(eval: PairEvaluation) -> Self {
        Self {
            name: eval.name,
            foreground: eval.foreground,
            background: eval.background,
            group: eval.group,
            ratio: eval.ratio,
            required_ratio: AA_RATIO,
            rating: eval.rating,
        }
    }
}

fn resolve_color<R>(resolver: &R, pair: &str, token: &str) -> Option<Color>
where
    R: TokenResolver + ?Sized,
{
    let Some(value) = resolver.resolve(token) else {
        debug!("skipping pair '{pair}': token '{token}' did not resolve");
        return None;
    };
    let color = parse_color(&value);
    if color.is_none() {
        debug!("skipping pair '{pair}': token '{token}' has unparseable value '{value}'");
    }
    color
}

/// Evaluate a single pair. `None` when either token is missing or unparseable.
pub fn evaluate_pair<R>(pair: &ContrastPair, resolver: &R) -> Option<PairEvaluation>
where
    R: TokenResolver + ?Sized,
{
    let fg = resolve_color(resolver, &pair.name, &pair.foreground)?;
    let bg = resolve_color(resolver, &pair.name, &pair.background)?;
    let result = evaluate(fg, bg);

    Some(PairEvaluation {
        name: pair.name.clone(),
        foreground: pair.foreground.clone(),
        background: pair.background.clone(),
        group: pair.group.clone(),
        foreground_color: fg,
        background_color: bg,
        ratio: result.ratio,
        rating: result.rating,
    })
}

/// Evaluate every resolvable pair, preserving input order.
pub fn evaluate_pairs<R>(pairs: &[ContrastPair], resolver: &R) -> Vec<PairEvaluation>
where
    R: TokenResolver + ?Sized,
{
    pairs
        .iter()
        .filter_map(|pair| evaluate_pair(pair, resolver))
        .collect()
}

/// Evaluate every pair and return only those rated [`Rating::Fail`], in
/// input order.
pub fn evaluate_all_pairs<R>(pairs: &[ContrastPair], resolver: &R) -> Vec<ContrastIssue>
where
    R: TokenResolver + ?Sized,
{
    evaluate_pairs(pairs, resolver)
        .into_iter()
        .filter(|eval| eval.rating == Rating::Fail)
        .map(ContrastIssue::from)
        .collect()
}
