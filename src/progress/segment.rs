//! Segments of a rendered line and their layout.
//!
//! A progress line is a sequence of [`Segment`]s, each rendered through a
//! small template where `{}` stands for the formatted value. The
//! [`OutputSpec`] keeps them in display order and guarantees that every kind
//! appears at most once and that only one status variant is present.
//!
//! # Examples
//!
//! ```rust
//! use progressline::progress::{OutputSpec, Segment};
//!
//! let spec = OutputSpec::from_segments([Segment::Status, Segment::Percentage]).unwrap();
//! let order: Vec<Segment> = spec.segments().collect();
//! assert_eq!(order, vec![Segment::Status, Segment::Percentage]);
//!
//! let custom = OutputSpec::from_formats([
//!     (Segment::Percentage, "[{}%]"),
//!     (Segment::Bar, "{}"),
//! ])
//! .unwrap();
//! assert_eq!(custom.template(Segment::Percentage), Some("[{}%]"));
//! ```

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Placeholder replaced by a segment's formatted value.
pub const PLACEHOLDER: &str = "{}";

/// One independently formatted piece of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The bar's label.
    Label,
    /// Zero-padded percentage, e.g. `042`.
    Percentage,
    /// The framed fill bar, sized to the remaining terminal width.
    Bar,
    /// ETA while running, elapsed time once finished.
    Status,
    /// Byte count and transfer rate followed by the status time.
    StatusBytes,
}

impl Segment {
    /// Name used when parsing a segment from a string.
    pub const fn name(self) -> &'static str {
        match self {
            Segment::Label => "label",
            Segment::Percentage => "percentage",
            Segment::Bar => "bar",
            Segment::Status => "status",
            Segment::StatusBytes => "status_bytes",
        }
    }

    /// Template applied when none is configured.
    pub const fn default_template(self) -> &'static str {
        match self {
            Segment::Label => "{}:",
            Segment::Percentage => "{}%",
            Segment::Bar | Segment::Status | Segment::StatusBytes => PLACEHOLDER,
        }
    }

    fn is_status(self) -> bool {
        matches!(self, Segment::Status | Segment::StatusBytes)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Segment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "label" => Ok(Segment::Label),
            "percentage" => Ok(Segment::Percentage),
            "bar" => Ok(Segment::Bar),
            "status" => Ok(Segment::Status),
            "status_bytes" | "status_file" => Ok(Segment::StatusBytes),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown segment `{}`",
                other
            ))),
        }
    }
}

/// A segment together with the template it is rendered through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentFormat {
    segment: Segment,
    template: String,
}

impl SegmentFormat {
    /// Pair a segment with a template containing `{}`.
    pub fn new(segment: Segment, template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(PLACEHOLDER) {
            return Err(Error::InvalidConfiguration(format!(
                "template `{}` for segment `{}` has no `{}` placeholder",
                template, segment, PLACEHOLDER
            )));
        }
        Ok(Self { segment, template })
    }

    /// Pair a segment with its default template.
    pub fn with_default_template(segment: Segment) -> Self {
        Self {
            segment,
            template: segment.default_template().to_string(),
        }
    }

    /// The segment kind.
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// The template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Substitute the formatted value into the template.
    pub fn apply(&self, value: &str) -> String {
        self.template.replacen(PLACEHOLDER, value, 1)
    }
}

/// Ordered, validated list of segments to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    formats: Vec<SegmentFormat>,
}

impl Default for OutputSpec {
    /// Percentage, bar, status.
    fn default() -> Self {
        Self {
            formats: [Segment::Percentage, Segment::Bar, Segment::Status]
                .into_iter()
                .map(SegmentFormat::with_default_template)
                .collect(),
        }
    }
}

impl OutputSpec {
    /// Build a spec from segments using their default templates.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Result<Self> {
        Self::from_formats_checked(
            segments
                .into_iter()
                .map(SegmentFormat::with_default_template)
                .collect(),
        )
    }

    /// Build a spec from segment names such as `"percentage"` or `"status_file"`.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let segments = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<Segment>>>()?;
        Self::from_segments(segments)
    }

    /// Build a spec from an ordered mapping of segments to templates.
    pub fn from_formats<T: Into<String>>(
        formats: impl IntoIterator<Item = (Segment, T)>,
    ) -> Result<Self> {
        let formats = formats
            .into_iter()
            .map(|(segment, template)| SegmentFormat::new(segment, template))
            .collect::<Result<Vec<_>>>()?;
        Self::from_formats_checked(formats)
    }

    fn from_formats_checked(formats: Vec<SegmentFormat>) -> Result<Self> {
        for (index, format) in formats.iter().enumerate() {
            let segment = format.segment();
            if formats[..index].iter().any(|f| f.segment() == segment) {
                return Err(Error::InvalidConfiguration(format!(
                    "segment `{}` appears more than once",
                    segment
                )));
            }
        }
        if formats.iter().filter(|f| f.segment().is_status()).count() > 1 {
            return Err(Error::InvalidConfiguration(
                "`status` and `status_bytes` cannot be used together".to_string(),
            ));
        }
        Ok(Self { formats })
    }

    /// Segments in display order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.formats.iter().map(SegmentFormat::segment)
    }

    /// Segment formats in display order.
    pub fn iter(&self) -> impl Iterator<Item = &SegmentFormat> {
        self.formats.iter()
    }

    /// Whether the segment is rendered.
    pub fn contains(&self, segment: Segment) -> bool {
        self.formats.iter().any(|f| f.segment() == segment)
    }

    /// Template configured for a segment, if it is rendered.
    pub fn template(&self, segment: Segment) -> Option<&str> {
        self.formats
            .iter()
            .find(|f| f.segment() == segment)
            .map(SegmentFormat::template)
    }

    /// Replace `from` with `to` in place, keeping position and template.
    ///
    /// Returns `false` when `from` is not rendered.
    pub(crate) fn replace(&mut self, from: Segment, to: Segment) -> bool {
        match self.formats.iter_mut().find(|f| f.segment() == from) {
            Some(format) => {
                format.segment = to;
                true
            }
            None => false,
        }
    }
}
