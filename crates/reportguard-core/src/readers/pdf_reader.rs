use std::path::Path;

use lopdf::Document;

use crate::errors::ExtractionError;

/// How text is pulled out of a PDF.
///
/// Report files and the reference PDF are deliberately read differently: a report only
/// contributes its last page, the reference contributes every page. Keep both until the
/// asymmetry is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfTextStrategy {
    /// Text of the last page only.
    LastPage,
    /// Text of every non-empty page, each followed by a newline.
    AllPages,
}

pub fn extract_pdf_text(
    path: impl AsRef<Path>,
    strategy: PdfTextStrategy,
) -> Result<String, ExtractionError> {
    let document = Document::load(path.as_ref())?;
    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();

    match strategy {
        PdfTextStrategy::LastPage => match page_numbers.last() {
            Some(last) => Ok(document.extract_text(&[*last])?),
            None => Ok(String::new()),
        },
        PdfTextStrategy::AllPages => {
            let mut text = String::new();
            for page in page_numbers {
                let page_text = document.extract_text(&[page])?;
                if !page_text.is_empty() {
                    text.push_str(&page_text);
                    text.push('\n');
                }
            }
            Ok(text)
        }
    }
}
