//! Output filename convention for generated note PDFs.

/// Builds the conventional output filename for a topic.
///
/// Spaces become underscores, every other character outside `[A-Za-z0-9_]`
/// is stripped, and the result is wrapped as `notes_<topic>.pdf`. A topic
/// that sanitizes to nothing degrades to `notes_untitled.pdf`. The
/// rendering engine never applies this itself; it is exported for callers
/// that want the surrounding system's naming.
pub fn output_filename(topic: &str) -> String {
    let sanitized: String = topic
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if sanitized.is_empty() {
        "notes_untitled.pdf".to_string()
    } else {
        format!("notes_{}.pdf", sanitized)
    }
}
