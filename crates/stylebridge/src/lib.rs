//! stylebridge: translate StyleCI-style YAML configuration into PHP-CS-Fixer
//! compatible rule sets
//!
//! This crate reads a `.styleci.yml` document (preset + enabled/disabled rule
//! names + finder filters), validates it against the known rule catalog, and
//! produces the rule list, rule map, and finder specification a local fixer
//! tool consumes.
//!
//! # Example
//!
//! ```ignore
//! use stylebridge::ConfigBridge;
//!
//! let bridge = ConfigBridge::from_dir(".")?;
//! for (name, enabled) in bridge.rules()? {
//!     println!("{name} = {enabled}");
//! }
//! ```

pub mod availability;
pub mod bridge;
pub mod catalog;
pub mod config;
pub mod error;
pub mod finder;
pub mod resolver;
pub mod ruleset;
pub mod validate;
pub mod warnings;

pub use availability::{AllRules, RegisteredRules, RuleAvailability, ToolVersion};
pub use bridge::ConfigBridge;
pub use catalog::RuleCatalog;
pub use config::StyleCiConfig;
pub use error::ConfigError;
pub use finder::{FinderOp, FinderSpec, Strictness};
pub use warnings::{CollectSink, NullSink, Warning, WarningSink};
