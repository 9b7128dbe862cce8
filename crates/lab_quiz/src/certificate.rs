//! Completion certificates.
//!
//! A [`Certificate`] can only be issued for a passing score and a
//! non-blank name. Rendering goes through [`CertificateRenderer`], which
//! sees nothing but the certificate fields and returns document bytes.

use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::info;

use crate::error::CertificateError;
use crate::grader::QuizResult;
use crate::question::{PASS_MARK, QUESTION_COUNT};

/// Instructor printed when none is configured.
pub const DEFAULT_INSTRUCTOR: &str = "Prof. Shalini Velappan";

/// Issue date format, e.g. "05 March 2025".
pub const DATE_FORMAT: &str = "%d %B %Y";

/// A certificate of completion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Certificate {
    name: String,
    score: u8,
    issued_on: NaiveDate,
    instructor: String,
}

impl Certificate {
    /// Issues a certificate for `score`.
    ///
    /// # Errors
    /// - `CertificateError::EmptyName` if `name` is blank
    /// - `CertificateError::ScoreTooLow` below the pass mark
    /// - `CertificateError::ScoreOutOfRange` above 10
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use lab_quiz::{Certificate, DEFAULT_INSTRUCTOR};
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
    /// let cert = Certificate::issue("  Asha ", 8, date, DEFAULT_INSTRUCTOR).unwrap();
    /// assert_eq!(cert.name(), "Asha");
    /// assert_eq!(cert.issue_date(), "05 March 2025");
    ///
    /// assert!(Certificate::issue("Asha", 4, date, DEFAULT_INSTRUCTOR).is_err());
    /// ```
    pub fn issue(
        name: &str,
        score: u8,
        issued_on: NaiveDate,
        instructor: &str,
    ) -> Result<Self, CertificateError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CertificateError::EmptyName);
        }
        if score > QUESTION_COUNT {
            return Err(CertificateError::ScoreOutOfRange { score });
        }
        if score < PASS_MARK {
            return Err(CertificateError::ScoreTooLow {
                score,
                required: PASS_MARK,
            });
        }

        Ok(Self {
            name: name.to_string(),
            score,
            issued_on,
            instructor: instructor.trim().to_string(),
        })
    }

    /// Issues a certificate for a graded quiz.
    pub fn for_result(
        name: &str,
        result: &QuizResult,
        issued_on: NaiveDate,
        instructor: &str,
    ) -> Result<Self, CertificateError> {
        Self::issue(name, result.score(), issued_on, instructor)
    }

    /// Recipient name, trimmed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Score out of 10.
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Issue date.
    pub fn issued_on(&self) -> NaiveDate {
        self.issued_on
    }

    /// Issue date as printed.
    pub fn issue_date(&self) -> String {
        self.issued_on.format(DATE_FORMAT).to_string()
    }

    /// Instructor name.
    pub fn instructor(&self) -> &str {
        &self.instructor
    }
}

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Scalable vector graphics
    Svg,
}

impl DocumentFormat {
    /// File extension.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Svg => "svg",
        }
    }

    /// MIME type.
    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentFormat::Svg => "image/svg+xml",
        }
    }

    /// Suggested download name, e.g. `certificate.svg`.
    pub fn file_name(&self) -> String {
        format!("certificate.{}", self.extension())
    }
}

/// Renders a certificate into a document.
pub trait CertificateRenderer {
    /// Format produced by [`CertificateRenderer::render`].
    fn format(&self) -> DocumentFormat;

    /// Renders `certificate` to document bytes.
    fn render(&self, certificate: &Certificate) -> Result<Vec<u8>, CertificateError>;
}

/// Single-page US-letter certificate in SVG.
///
/// Text lines are centred horizontally at fixed offsets from the top of
/// the page, inside a gold border.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgCertificate;

impl SvgCertificate {
    /// Page width in points.
    pub const PAGE_WIDTH: f64 = 612.0;
    /// Page height in points.
    pub const PAGE_HEIGHT: f64 = 792.0;
    /// Border inset from the page edge.
    pub const BORDER_INSET: f64 = 30.0;
    /// Border stroke width.
    pub const BORDER_WIDTH: f64 = 4.0;
    /// Border colour.
    pub const BORDER_COLOUR: &'static str = "#C9A227";

    const FONT_FAMILY: &'static str = "Helvetica, Arial, sans-serif";

    fn lines(certificate: &Certificate) -> [TextLine; 6] {
        [
            TextLine::new(140.0, 28, true, "Certificate of Completion".to_string()),
            TextLine::new(180.0, 16, false, "Futures Trading Lab".to_string()),
            TextLine::new(240.0, 24, true, certificate.name().to_string()),
            TextLine::new(
                280.0,
                24,
                true,
                format!("Score: {}/{}", certificate.score(), QUESTION_COUNT),
            ),
            TextLine::new(320.0, 24, true, certificate.issue_date()),
            TextLine::new(
                360.0,
                24,
                true,
                format!("Instructor: {}", certificate.instructor()),
            ),
        ]
    }
}

struct TextLine {
    offset: f64,
    size: u8,
    bold: bool,
    text: String,
}

impl TextLine {
    fn new(offset: f64, size: u8, bold: bool, text: String) -> Self {
        Self {
            offset,
            size,
            bold,
            text,
        }
    }
}

fn render_error(err: impl std::fmt::Display) -> CertificateError {
    CertificateError::Render {
        message: err.to_string(),
    }
}

impl CertificateRenderer for SvgCertificate {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Svg
    }

    fn render(&self, certificate: &Certificate) -> Result<Vec<u8>, CertificateError> {
        let width = Self::PAGE_WIDTH.to_string();
        let height = Self::PAGE_HEIGHT.to_string();
        let view_box = format!("0 0 {} {}", width, height);
        let inset = Self::BORDER_INSET.to_string();
        let border_w = (Self::PAGE_WIDTH - 2.0 * Self::BORDER_INSET).to_string();
        let border_h = (Self::PAGE_HEIGHT - 2.0 * Self::BORDER_INSET).to_string();
        let stroke_width = Self::BORDER_WIDTH.to_string();
        let centre = (Self::PAGE_WIDTH / 2.0).to_string();

        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(render_error)?;

        let svg = BytesStart::new("svg").with_attributes([
            ("xmlns", "http://www.w3.org/2000/svg"),
            ("width", width.as_str()),
            ("height", height.as_str()),
            ("viewBox", view_box.as_str()),
        ]);
        writer.write_event(Event::Start(svg)).map_err(render_error)?;

        let background = BytesStart::new("rect").with_attributes([
            ("width", "100%"),
            ("height", "100%"),
            ("fill", "white"),
        ]);
        writer
            .write_event(Event::Empty(background))
            .map_err(render_error)?;

        let border = BytesStart::new("rect").with_attributes([
            ("x", inset.as_str()),
            ("y", inset.as_str()),
            ("width", border_w.as_str()),
            ("height", border_h.as_str()),
            ("fill", "none"),
            ("stroke", Self::BORDER_COLOUR),
            ("stroke-width", stroke_width.as_str()),
        ]);
        writer.write_event(Event::Empty(border)).map_err(render_error)?;

        for line in Self::lines(certificate) {
            let y = line.offset.to_string();
            let size = line.size.to_string();
            let weight = if line.bold { "bold" } else { "normal" };
            let text = BytesStart::new("text").with_attributes([
                ("x", centre.as_str()),
                ("y", y.as_str()),
                ("text-anchor", "middle"),
                ("font-family", Self::FONT_FAMILY),
                ("font-size", size.as_str()),
                ("font-weight", weight),
            ]);
            writer.write_event(Event::Start(text)).map_err(render_error)?;
            writer
                .write_event(Event::Text(BytesText::new(&line.text)))
                .map_err(render_error)?;
            writer
                .write_event(Event::End(BytesEnd::new("text")))
                .map_err(render_error)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("svg")))
            .map_err(render_error)?;

        let bytes = writer.into_inner();
        info!(
            score = certificate.score(),
            size = bytes.len(),
            format = self.format().extension(),
            "Certificate rendered"
        );
        Ok(bytes)
    }
}
