//! siteassist — construction-site assistant adapters backed by Google Gemini.
//!
//! Two stateless operations: analyze a site photo, and render project text as
//! an interlinear bilingual document. Each has a `Result`-returning core that
//! works against any [`provider::ModelProvider`], and an entry point that
//! builds a fresh provider from [`config::AssistConfig`] and maps failures to a
//! fixed fallback string.
//!
//! # Quick Start
//!
//! ```no_run
//! use siteassist::prelude::*;
//!
//! # async fn example() {
//! let config = AssistConfig::load();
//! let report = analyze_construction_photo(&config, "data:image/png;base64,iVBORw0...").await;
//! let bilingual = translate_project_content(&config, "明天進行二樓樓板灌漿").await;
//! println!("{report}\n{bilingual}");
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod error;
pub mod prelude;
pub mod provider;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
