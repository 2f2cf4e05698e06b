//! Suggested filename derivation for rendered documents.

use uuid::Uuid;

/// Sanitizes one name component for filesystem use.
///
/// Trims, collapses whitespace runs to single underscores, strips anything
/// outside `[A-Za-z0-9_-]`, collapses repeated underscores, and trims
/// leading/trailing underscores. Returns `None` when nothing survives.
fn sanitize(name: &str) -> Option<String> {
    let underscored: String = name
        .trim()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");

    let stripped: String = underscored
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        .collect();

    let mut collapsed = String::with_capacity(stripped.len());
    let mut last_was_underscore = false;
    for c in stripped.chars() {
        if c == '_' {
            if !last_was_underscore {
                collapsed.push('_');
            }
            last_was_underscore = true;
        } else {
            collapsed.push(c);
            last_was_underscore = false;
        }
    }

    let trimmed = collapsed.trim_matches('_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Derives the suggested download filename (without extension).
///
/// Joins the sanitized practice and client names with an underscore when
/// both are present; falls back to an opaque identifier when neither
/// survives sanitization.
///
/// # Examples
///
/// ```
/// use compenso_engine::render::suggested_filename;
///
/// let name = suggested_filename(Some("Pratica 2026/14"), Some("Rossi S.r.l."));
/// assert_eq!(name, "Pratica_202614_Rossi_Srl");
/// ```
pub fn suggested_filename(practice_name: Option<&str>, client_name: Option<&str>) -> String {
    let practice = practice_name.and_then(sanitize);
    let client = client_name.and_then(sanitize);

    match (practice, client) {
        (Some(practice), Some(client)) => format!("{practice}_{client}"),
        (Some(practice), None) => practice,
        (None, Some(client)) => client,
        (None, None) => Uuid::new_v4().simple().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// FIL-001: both parts joined with an underscore
    #[test]
    fn test_both_parts_joined() {
        assert_eq!(
            suggested_filename(Some("Pratica 2026/14"), Some("Rossi S.r.l.")),
            "Pratica_202614_Rossi_Srl"
        );
    }

    /// FIL-002: whitespace collapses to single underscores
    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(
            suggested_filename(Some("  Bilancio   annuale  "), None),
            "Bilancio_annuale"
        );
    }

    /// FIL-003: repeated and edge underscores collapse away
    #[test]
    fn test_underscores_collapse_and_trim() {
        assert_eq!(
            suggested_filename(Some("__doppio___nome__"), None),
            "doppio_nome"
        );
        assert_eq!(suggested_filename(None, Some("- cliente -")), "-_cliente_-");
    }

    /// FIL-004: single surviving part is used alone
    #[test]
    fn test_single_part() {
        assert_eq!(suggested_filename(None, Some("Verdi SpA")), "Verdi_SpA");
        assert_eq!(suggested_filename(Some("Perizia"), None), "Perizia");
    }

    /// FIL-005: nothing survives, opaque identifier fallback
    #[test]
    fn test_opaque_fallback() {
        let name = suggested_filename(Some("///"), Some("   "));
        assert_eq!(name.len(), 32);
        assert!(name.chars().all(|c| c.is_ascii_hexdigit()));

        let other = suggested_filename(None, None);
        assert_ne!(name, other);
    }
}
