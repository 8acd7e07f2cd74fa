//! Configuration for hanzi exports.
//!
//! Options are read as a flat [`RawConfig`] from layered sources, lowest
//! priority first:
//!
//! 1. Built-in defaults,
//! 2. a TOML file (an explicit path, or `config.toml` in the platform
//!    configuration directory),
//! 3. `HANZI_`-prefixed environment variables (`HANZI_USAGE_EXAMPLES=3`),
//! 4. command-line [`Overrides`].
//!
//! [`RawConfig::validate`] then turns the flat record into an immutable
//! [`ExportConfig`] of tagged modes, rejecting out-of-range values before any
//! analysis runs.

pub mod error;
mod options;

pub use crate::options::{
    ExportConfig, ExportFiles, HanziMode, IndividualExport, StatisticsMode, StatisticsOptions,
};

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use hanzi_analysis::{Direction, LearningParameters, MAX_USAGE_EXAMPLES, SortOrder};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Prefix of environment variables read as configuration.
pub const ENV_PREFIX: &str = "HANZI_";
/// File name looked up in the platform configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const USAGE_EXAMPLES_RANGE: RangeInclusive<i64> = 0..=MAX_USAGE_EXAMPLES as i64;
pub const COMPREHENSION_TARGET_RANGE: RangeInclusive<i64> = 90..=100;
pub const FREQUENCY_THRESHOLD_RANGE: RangeInclusive<i64> = 10..=50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HanziModeOption {
    None,
    #[default]
    Individual,
    Shared,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndividualExportOption {
    UniqueOnly,
    #[default]
    LearningOnly,
    Both,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    Ascending,
    #[default]
    Descending,
}
impl From<SortOption> for Direction {
    fn from(value: SortOption) -> Self {
        match value {
            SortOption::Ascending => Direction::Ascending,
            SortOption::Descending => Direction::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticsModeOption {
    #[default]
    None,
    Individual,
    Combined,
}

/// Every recognised option, as written in configuration sources.
///
/// Numeric options are wide signed integers so that out-of-range values
/// survive deserialization and are reported by [`validate`](Self::validate)
/// with their bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub hanzi_mode: HanziModeOption,
    pub individual_export: IndividualExportOption,
    pub frequency_sort: SortOption,
    pub distance_sort: SortOption,
    pub usage_examples: i64,
    pub comprehension_target: i64,
    pub frequency_threshold: i64,
    pub statistics_mode: StatisticsModeOption,
    pub statistics_percentiles: bool,
}
impl Default for RawConfig {
    fn default() -> Self {
        let learning = LearningParameters::default();
        Self {
            hanzi_mode: HanziModeOption::default(),
            individual_export: IndividualExportOption::default(),
            frequency_sort: SortOption::default(),
            distance_sort: SortOption::default(),
            usage_examples: learning.usage_examples as i64,
            comprehension_target: i64::from(learning.comprehension_target),
            frequency_threshold: learning.frequency_threshold as i64,
            statistics_mode: StatisticsModeOption::default(),
            statistics_percentiles: false,
        }
    }
}
impl RawConfig {
    /// Checks every option and builds the immutable [`ExportConfig`].
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::ConfigurationRange`] for the first numeric option
    ///   outside its bounds,
    /// - [`ErrorKind::NothingToExport`] if both modes are `none`.
    pub fn validate(&self) -> Result<ExportConfig> {
        let learning = LearningParameters {
            usage_examples: check_range("usage_examples", self.usage_examples, USAGE_EXAMPLES_RANGE)?,
            comprehension_target: check_range(
                "comprehension_target",
                self.comprehension_target,
                COMPREHENSION_TARGET_RANGE,
            )?,
            frequency_threshold: check_range("frequency_threshold", self.frequency_threshold, FREQUENCY_THRESHOLD_RANGE)?,
        };
        let hanzi = match self.hanzi_mode {
            HanziModeOption::None => HanziMode::None,
            HanziModeOption::Individual => HanziMode::Individual(IndividualExport {
                files: match self.individual_export {
                    IndividualExportOption::UniqueOnly => ExportFiles::UniqueOnly,
                    IndividualExportOption::LearningOnly => ExportFiles::LearningOnly,
                    IndividualExportOption::Both => ExportFiles::Both,
                },
                order: SortOrder::new(self.frequency_sort.into(), Direction::from(self.distance_sort)),
                learning,
            }),
            HanziModeOption::Shared => HanziMode::Shared { frequency: self.frequency_sort.into() },
        };
        let options = StatisticsOptions { percentiles: self.statistics_percentiles };
        let statistics = match self.statistics_mode {
            StatisticsModeOption::None => StatisticsMode::None,
            StatisticsModeOption::Individual => StatisticsMode::Individual(options),
            StatisticsModeOption::Combined => StatisticsMode::Combined(options),
        };
        if matches!((&hanzi, &statistics), (HanziMode::None, StatisticsMode::None)) {
            exn::bail!(ErrorKind::NothingToExport);
        }
        Ok(ExportConfig { hanzi, statistics })
    }
}

fn range_error(option: &'static str, value: i64, range: RangeInclusive<i64>) -> ErrorKind {
    ErrorKind::ConfigurationRange {
        option,
        value,
        min: *range.start(),
        max: *range.end(),
    }
}

fn check_range<T: TryFrom<i64>>(option: &'static str, value: i64, range: RangeInclusive<i64>) -> Result<T> {
    match T::try_from(value) {
        Ok(converted) if range.contains(&value) => Ok(converted),
        _ => exn::bail!(range_error(option, value, range)),
    }
}

/// Options given on the command line; `None` leaves lower layers untouched.
///
/// Modes are plain strings so they go through the same deserialization as
/// every other source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hanzi_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual_export: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_examples: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comprehension_target: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_threshold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics_percentiles: Option<bool>,
}

/// Location of the configuration file when none is given explicitly.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "hanzi").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Assembles the layered configuration sources without extracting them.
pub fn figment(file: Option<&Path>, overrides: &Overrides) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(RawConfig::default()));
    // Missing files are skipped silently by `Toml::file`.
    if let Some(path) = file.map(Path::to_path_buf).or_else(default_config_path) {
        tracing::debug!(path = %path.display(), "Reading configuration file");
        figment = figment.merge(Toml::file(path));
    }
    figment.merge(Env::prefixed(ENV_PREFIX)).merge(Serialized::globals(overrides))
}

/// Loads and validates the configuration.
#[instrument(skip(overrides))]
pub fn load(file: Option<&Path>, overrides: &Overrides) -> Result<ExportConfig> {
    let raw: RawConfig = figment(file, overrides).extract().or_raise(|| ErrorKind::Load)?;
    tracing::debug!(?raw, "Loaded configuration");
    raw.validate()
}
