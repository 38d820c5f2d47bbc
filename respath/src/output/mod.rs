//! Output formatting for path reports.
//!
//! Commands that describe a path build a [`PathReport`] (or a
//! [`RelationReport`] when comparing two paths) and hand it to the
//! formatter for the selected [`OutputFormat`].

mod formatters;
mod report;

use crate::config::OutputFormat;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};
pub use report::{PathReport, RelationReport};

/// Trait for rendering reports in one output format.
pub trait OutputFormatter {
    /// Render a single path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_path(&self, report: &PathReport) -> Result<String>;

    /// Render the relationship between two paths.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_relation(&self, report: &RelationReport) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::config::OutputFormat;
    /// use respath::output::PathReport;
    /// use respath::{PlatformPolicy, ResourcePath};
    ///
    /// let policy = PlatformPolicy::POSIX;
    /// let report = PathReport::new(&ResourcePath::parse_with("a/b.txt", &policy), &policy);
    /// let json = OutputFormat::Json.create_formatter().format_path(&report).unwrap();
    /// assert!(json.contains("\"filename\": \"b.txt\""));
    /// ```
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}
