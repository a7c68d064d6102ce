//! WCAG 2.1 contrast evaluation for design-token colors.
//!
//! Parses the color notations design systems put in CSS custom properties,
//! computes relative luminance and contrast ratio, classifies the ratio
//! against the WCAG thresholds, and audits a table of foreground/background
//! token pairs against an injected token resolver.
//!
//! # Quick Start
//!
//! ```rust
//! use lumen_contrast::{contrast_ratio, parse_color, classify_rating, Rating};
//!
//! let fg = parse_color("222.2 84% 4.9%").unwrap();
//! let bg = parse_color("#ffffff").unwrap();
//! let ratio = contrast_ratio(fg, bg);
//! assert_eq!(classify_rating(ratio), Rating::Aaa);
//! ```

pub mod colors;
pub mod luminance;
pub mod pairs;
pub mod rating;

pub use colors::{hsl_to_rgb, parse_color, validate_color};
pub use luminance::{
    contrast_ratio, evaluate, parse_and_evaluate, relative_luminance, ContrastResult,
};
pub use pairs::{
    default_pairs, evaluate_all_pairs, evaluate_pair, evaluate_pairs, ContrastIssue,
    ContrastPair, PairEvaluation, TokenResolver,
};
pub use rating::{classify_rating, Rating, AAA_RATIO, AA_LARGE_RATIO, AA_RATIO};

pub use lumen_common::Color;
