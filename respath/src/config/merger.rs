//! Configuration merging and precedence handling.
//!
//! Scalar fields from a higher-precedence source replace lower ones;
//! `protocols` accumulate across sources without duplicates.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use respath::config::{Config, ConfigMerger};
///
/// let low = Config { drive_letters: Some(false), ..Default::default() };
/// let high = Config { drive_letters: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.drive_letters, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.drive_letters.is_some() {
            target.drive_letters = source.drive_letters;
        }

        if source.separator.is_some() {
            target.separator = source.separator;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_protocols) = source.protocols {
            let protocols = target.protocols.get_or_insert_with(Vec::new);
            for protocol in source_protocols {
                if !protocols.contains(protocol) {
                    protocols.push(protocol.clone());
                }
            }
        }
    }
}
