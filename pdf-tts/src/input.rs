// Decide which text gets spoken: PDF, then literal string, then a sample sentence

use crate::error::{ExtractError, Result, TtsError};
use crate::options::SAMPLE_SENTENCES;
use crate::rng::{self, RandomSource};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Extracts per-page text from a PDF file
pub trait PdfExtractor {
    /// Text of every page, in page order
    fn page_texts(&self, path: &Path) -> std::result::Result<Vec<String>, ExtractError>;
}

/// PDF extraction backed by lopdf
#[derive(Debug, Default)]
pub struct LopdfExtractor;

impl PdfExtractor for LopdfExtractor {
    fn page_texts(&self, path: &Path) -> std::result::Result<Vec<String>, ExtractError> {
        // Only a missing file is recoverable, so classify it before handing off to lopdf
        if let Err(e) = std::fs::metadata(path) {
            return Err(if e.kind() == ErrorKind::NotFound {
                ExtractError::NotFound(path.to_path_buf())
            } else {
                ExtractError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            });
        }

        let parse_error = |e: lopdf::Error| ExtractError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let doc = lopdf::Document::load(path).map_err(parse_error)?;

        // get_pages is keyed by page number, so iteration is in page order
        doc.get_pages()
            .keys()
            .map(|page| doc.extract_text(&[*page]).map_err(parse_error))
            .collect()
    }
}

/// Where the spoken text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    PdfPath(PathBuf),
    LiteralString(String),
    RandomSample,
}

/// The final text submitted for synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedText {
    pub text: String,
    pub source: TextSource,
}

/// Resolve input text with fallback: PDF, then literal string, then a random sample.
///
/// A PDF that does not exist falls through to the next source. Any other PDF
/// failure is returned as an error.
pub fn resolve_text(
    pdf_path: Option<&Path>,
    literal: Option<&str>,
    extractor: &dyn PdfExtractor,
    rng: &mut dyn RandomSource,
) -> Result<ResolvedText> {
    if let Some(path) = pdf_path {
        match extractor.page_texts(path) {
            Ok(pages) => {
                let text = pages.join("\n");
                if text.trim().is_empty() {
                    return Err(TtsError::EmptyPdf(path.to_path_buf()));
                }
                log::info!("PDF input file processed successfully ({} pages)", pages.len());
                return Ok(ResolvedText {
                    text,
                    source: TextSource::PdfPath(path.to_path_buf()),
                });
            }
            Err(ExtractError::NotFound(missing)) => {
                log::warn!(
                    "PDF path not valid ({}), falling back to string input",
                    missing.display()
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(text) = literal.filter(|t| !t.is_empty()) {
        log::info!("Using string input");
        return Ok(ResolvedText {
            text: text.to_string(),
            source: TextSource::LiteralString(text.to_string()),
        });
    }

    log::info!("No text input, using a random sample sentence");
    Ok(random_sample(rng))
}

/// Pick one sentence from the built-in sample pool
pub fn random_sample(rng: &mut dyn RandomSource) -> ResolvedText {
    let text = rng::choose(rng, SAMPLE_SENTENCES)
        .copied()
        .unwrap_or(SAMPLE_SENTENCES[0]);
    log::info!("Random text: {}", text);
    ResolvedText {
        text: text.to_string(),
        source: TextSource::RandomSample,
    }
}
