//! Career-fit assessment engine.
//!
//! Scores fixed-form Likert questionnaires into normalized function, trait,
//! and level profiles, ranks best-fit matches, and derives a recommended
//! career level with a narrative summary. The instrument (dimension sets,
//! seniority blend, level bands) is injected configuration, so the shipped
//! HR questionnaire is data, not behavior.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
