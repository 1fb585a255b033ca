//! # wardrobe-core
//!
//! Core library for sizing sliding wardrobe doors and their liners.
//!
//! Given an opening (width, height, number of doors, door system) the
//! [`DimensioningEngine`](crate::core::engine::DimensioningEngine) derives door sizes,
//! liner thicknesses and lengths, the dropdown height and a feasibility
//! verdict. The [`LayoutGenerator`](crate::core::layout::LayoutGenerator) turns one
//! result into a front-elevation diagram description for any renderer.
//!
//! ## Quick Start
//!
//! ```rust
//! use wardrobe_core::prelude::*;
//!
//! let opening = OpeningInput::new(
//!     2200.0,
//!     2600.0,
//!     3,
//!     DoorSystem::MadeToMeasure { top_liner: TopLinerOption::Dropdown108 },
//! );
//! let result = DimensioningEngine::default().dimension(&opening);
//!
//! assert_eq!(result.door_height_mm, 2402);
//! assert_eq!(result.door_width_mm, 738);
//! assert!(result.is_ok());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │          Core Layer                 │  Engine, layout, batch service, domain types
//! ├─────────────────────────────────────┤
//! │        Storage Layer                │  Settings file, openings files
//! ├─────────────────────────────────────┤
//! │        Display Layer                │  Tables, CSV/JSON export, status lines
//! ├─────────────────────────────────────┤
//! │         Utils Layer                 │  Logging, validation, text and file helpers
//! └─────────────────────────────────────┘
//! ```
//!
//! Infeasible geometry is never an error: it is reported through
//! [`HeightStatus`](crate::core::result::HeightStatus) with `issue = CHECK`.
//! [`AppError`] is reserved for malformed input, I/O and configuration problems.

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust
/// use wardrobe_core::prelude::*;
/// ```
pub mod prelude {
    // Error handling
    pub use crate::Result;
    pub use crate::error::AppError;

    // Domain
    pub use crate::core::constants::SystemConstants;
    pub use crate::core::engine::DimensioningEngine;
    pub use crate::core::layout::{DiagramLayout, LayoutGenerator};
    pub use crate::core::opening::{
        DoorSystem, FixedDoorWidth, InputPolicy, OpeningInput, OpeningRecord, TopLinerOption,
    };
    pub use crate::core::result::{DimensionResult, HeightStatus, Issue};

    // Services
    pub use crate::core::services::batch_service::BatchService;
    pub use crate::core::services::config_service::ConfigService;
    pub use crate::core::services::types::{BatchReport, BatchRow, BatchSummary};

    // Storage
    pub use crate::storage::config::Config;

    // Display utilities
    pub use crate::display::{OutputFormat, TableDisplay};
}

/// Business logic layer.
///
/// - [`crate::core::engine`]: per-opening dimensioning
/// - [`crate::core::layout`]: diagram layout for one opening
/// - [`crate::core::services`]: batch evaluation and configuration
pub mod core;

/// Storage layer - settings and openings files.
pub mod storage;

/// Utilities layer.
pub mod utils;

/// Display layer - tables, exports and status output.
pub mod display;

/// Hierarchical error system with severity levels and troubleshooting hints.
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
