//! Font strategy selection and fallback transliteration.
//!
//! The selector runs once per render. It looks for a Unicode-capable
//! TrueType family (DejaVu Sans) in three required styles; if any style is
//! missing the whole attempt fails and the built-in Helvetica family is
//! used instead, with every rendered string forced through
//! [`transliterate`] so that no multi-byte text reaches the output.

use crate::error::{Error, Result};
use printpdf::{BuiltinFont, IndirectFontRef, PdfDocumentReference};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// File names of the primary family, in regular/bold/italic order.
const PRIMARY_FAMILY_FILES: [&str; 3] = [
    "DejaVuSans.ttf",
    "DejaVuSans-Bold.ttf",
    "DejaVuSans-Oblique.ttf",
];

/// Directories probed for the primary family when no font dir is given.
const WELL_KNOWN_FONT_DIRS: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/local/share/fonts",
];

/// Which font family a render ended up using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum FontFamilyKind {
    /// Embedded Unicode-capable TrueType family.
    Primary,
    /// Built-in base-14 Helvetica family.
    FallbackBuiltin,
}

/// The resolved font choice for one render call.
///
/// Decided once before any drawing. `supports_unicode` is the encoding
/// policy the choice implies: when false, every string is transliterated to
/// a single-byte-safe form before it is drawn.
#[derive(Debug, Clone)]
pub struct FontPlan {
    /// Selected family.
    pub family: FontFamilyKind,
    /// Whether arbitrary Unicode text can be drawn as-is.
    pub supports_unicode: bool,
    files: Option<FamilyFiles>,
}

#[derive(Debug, Clone)]
struct FamilyFiles {
    regular: PathBuf,
    bold: PathBuf,
    italic: PathBuf,
}

impl FontPlan {
    /// Returns the built-in fallback plan.
    pub fn fallback() -> Self {
        Self {
            family: FontFamilyKind::FallbackBuiltin,
            supports_unicode: false,
            files: None,
        }
    }

    /// Applies the encoding policy to a string about to be drawn.
    pub fn prepare_text(&self, text: &str) -> String {
        if self.supports_unicode {
            text.to_string()
        } else {
            transliterate(text)
        }
    }

    /// Returns the bullet glyph for this plan.
    pub fn bullet_glyph(&self) -> &'static str {
        if self.supports_unicode {
            "\u{2022}"
        } else {
            "*"
        }
    }
}

/// Selects the font family for a render.
///
/// All three styles of the primary family must be present for the primary
/// plan to be chosen; a partial family counts as a failed attempt.
pub fn select(font_dir: Option<&Path>) -> FontPlan {
    match probe_family(font_dir) {
        Some(files) => {
            debug!(dir = %files.regular.parent().unwrap_or(Path::new("")).display(),
                "using primary TrueType family");
            FontPlan {
                family: FontFamilyKind::Primary,
                supports_unicode: true,
                files: Some(files),
            }
        }
        None => {
            warn!("primary font family unavailable; falling back to builtin Helvetica");
            FontPlan::fallback()
        }
    }
}

fn probe_family(font_dir: Option<&Path>) -> Option<FamilyFiles> {
    let candidates: Vec<PathBuf> = match font_dir {
        Some(dir) => vec![dir.to_path_buf()],
        None => WELL_KNOWN_FONT_DIRS.iter().map(PathBuf::from).collect(),
    };

    for dir in candidates {
        let paths: Vec<PathBuf> = PRIMARY_FAMILY_FILES.iter().map(|f| dir.join(f)).collect();
        if paths.iter().all(|p| p.is_file()) {
            return Some(FamilyFiles {
                regular: paths[0].clone(),
                bold: paths[1].clone(),
                italic: paths[2].clone(),
            });
        }
    }
    None
}

/// Font handles registered with the PDF document, one per required style.
pub struct LoadedFonts {
    /// Regular style, used for paragraphs and bullets.
    pub regular: IndirectFontRef,
    /// Bold style, used for both heading levels.
    pub bold: IndirectFontRef,
    /// Italic style, registered so the full family travels with the document.
    pub italic: IndirectFontRef,
}

/// Registers the planned family with the document.
///
/// If embedding any style of the primary family fails at this stage the
/// loader degrades to the built-in plan rather than surfacing an error, so
/// the returned plan may differ from the one passed in.
pub fn load(doc: &PdfDocumentReference, plan: &FontPlan) -> Result<(LoadedFonts, FontPlan)> {
    if let Some(files) = &plan.files {
        match load_external(doc, files) {
            Ok(fonts) => return Ok((fonts, plan.clone())),
            Err(e) => {
                warn!(error = %e, "embedding primary family failed; using builtin Helvetica");
            }
        }
    }

    let fonts = LoadedFonts {
        regular: add_builtin(doc, BuiltinFont::Helvetica)?,
        bold: add_builtin(doc, BuiltinFont::HelveticaBold)?,
        italic: add_builtin(doc, BuiltinFont::HelveticaOblique)?,
    };
    Ok((fonts, FontPlan::fallback()))
}

fn load_external(doc: &PdfDocumentReference, files: &FamilyFiles) -> Result<LoadedFonts> {
    Ok(LoadedFonts {
        regular: add_external(doc, &files.regular)?,
        bold: add_external(doc, &files.bold)?,
        italic: add_external(doc, &files.italic)?,
    })
}

fn add_external(doc: &PdfDocumentReference, path: &Path) -> Result<IndirectFontRef> {
    let file = File::open(path)
        .map_err(|e| Error::FontUnavailable(format!("{}: {}", path.display(), e)))?;
    doc.add_external_font(file)
        .map_err(|e| Error::FontUnavailable(format!("{}: {}", path.display(), e)))
}

fn add_builtin(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef> {
    doc.add_builtin_font(font)
        .map_err(|e| Error::PdfBackend(e.to_string()))
}

/// Replacements for typographic characters that survive NFKD intact.
const ASCII_SUBSTITUTIONS: [(char, &str); 10] = [
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{2013}', "-"),
    ('\u{2014}', "-"),
    ('\u{2026}', "..."),
    ('\u{2022}', "*"),
    ('\u{00A0}', " "),
    ('\u{00D7}', "x"),
];

/// Reduces a string to a single-byte-safe form for the builtin fonts.
///
/// NFKD decomposition first, so accented letters keep their base letter
/// once combining marks are stripped. Typographic punctuation maps to ASCII
/// equivalents; anything still outside ASCII becomes `'?'`. Never fails,
/// whatever the input.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfkd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        match ASCII_SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push('?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_with_empty_dir_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let plan = select(Some(dir.path()));
        assert_eq!(plan.family, FontFamilyKind::FallbackBuiltin);
        assert!(!plan.supports_unicode);
    }

    #[test]
    fn test_partial_family_counts_as_failure() {
        // Only the regular style present: the whole attempt must fail.
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("DejaVuSans.ttf"), b"not a real font").unwrap();
        let plan = select(Some(dir.path()));
        assert_eq!(plan.family, FontFamilyKind::FallbackBuiltin);
    }

    #[test]
    fn test_fallback_plan_prepares_text() {
        let plan = FontPlan::fallback();
        assert_eq!(plan.prepare_text("caf\u{00E9}"), "cafe");
        assert_eq!(plan.bullet_glyph(), "*");
    }

    #[test]
    fn test_transliterate_accents() {
        assert_eq!(transliterate("r\u{00E9}sum\u{00E9}"), "resume");
        assert_eq!(transliterate("\u{00FC}ber"), "uber");
    }

    #[test]
    fn test_transliterate_typographic_punctuation() {
        assert_eq!(transliterate("\u{201C}quoted\u{201D}"), "\"quoted\"");
        assert_eq!(transliterate("1\u{2013}2\u{2014}3"), "1-2-3");
        assert_eq!(transliterate("wait\u{2026}"), "wait...");
        assert_eq!(transliterate("\u{2022} item"), "* item");
    }

    #[test]
    fn test_transliterate_replaces_unknown_with_placeholder() {
        assert_eq!(transliterate("\u{D55C}\u{AE00}"), "??");
        assert_eq!(transliterate("a\u{1F389}b"), "a?b");
    }

    #[test]
    fn test_transliterate_output_is_ascii() {
        let inputs = ["plain", "caf\u{00E9} \u{2014} \u{D55C}\u{AE00}", "\u{FB01}sh"];
        for input in inputs {
            assert!(transliterate(input).is_ascii(), "input: {:?}", input);
        }
    }

    #[test]
    fn test_transliterate_never_fails_on_ascii() {
        assert_eq!(transliterate("unchanged ASCII 123"), "unchanged ASCII 123");
    }
}
