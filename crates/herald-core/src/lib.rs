//! Herald Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Herald
//! console announcer, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           herald-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │        (Announcer, Stopwatch)           │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: TextSink, Clock)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     herald-adapters (Infrastructure)    │
//! │  (TermSink, MemorySink, SystemClock)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (InterpolationTemplate, Justifiers,    │
//! │   Presets, BannerGenerator)             │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use herald_core::domain::{BannerGenerator, Justification, build};
//!
//! // One-shot banner generation:
//! let line = BannerGenerator::generate(Some("build"), 20, Justification::Center);
//! assert_eq!(line, "======= build ======");
//!
//! // Or hold a template and render repeatedly:
//! let title = build("title").unwrap();
//! assert_eq!(title.left_justify("step 1", 20), "= step 1 ===========");
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Announcer, DEFAULT_COLUMNS, Stopwatch,
        ports::{Clock, TextSink},
    };
    pub use crate::domain::{
        BannerGenerator, InterpolationTemplate, Justification, MessageKind, Preset,
        TemplateAttributes, TemplateSpec, TimestampFormat, build,
    };
    pub use crate::error::{HeraldError, HeraldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
