//! # Response engine
//!
//! Classification, matching, rendering and customization over a
//! [`TemplateRegistry`](crate::registry::TemplateRegistry).
//!
//! ## Flow
//!
//! 1. [`detector::detect_category`] picks a category from the question text
//!    (or the caller names one explicitly).
//! 2. [`matcher::match_question`] picks the canonical question.
//! 3. [`renderer::render`] returns the template for the requested style.
//! 4. [`customizer::customize`] optionally appends situational remarks.
//!
//! [`recommender::similar_questions`] runs off the same (category, matched
//! question) pair. Every step is a pure function of its inputs and the
//! registry; nothing here does I/O or logs.

pub mod customizer;
pub mod detector;
pub mod matcher;
pub mod pipeline;
pub mod recommender;
pub mod renderer;

pub use customizer::{customize, UserSituation};
pub use detector::detect_category;
pub use matcher::match_question;
pub use pipeline::{CategorySelector, ResponseEngine, MARRIAGE_CATEGORY};
pub use recommender::similar_questions;
pub use renderer::{render, validate_style, RenderedResponse};
