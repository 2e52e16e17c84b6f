//! Slug derivation for display names
//!
//! A slug is the URL-safe identifier shown in storefront links and used as
//! the category foreign key on products: lowercase, diacritics folded to
//! their base letter, whitespace turned into hyphens, anything else dropped.

/// Fold a lowercase character to its URL-safe base form.
///
/// Returns `None` for characters that have no place in a slug.
fn fold_char(c: char) -> Option<char> {
    Some(match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        c if c.is_ascii_alphanumeric() => c,
        _ => return None,
    })
}

/// Derive a slug from a display name.
///
/// Runs of whitespace collapse into a single hyphen; leading and trailing
/// hyphens are trimmed. A name with no foldable characters yields an empty
/// slug, which callers must treat as invalid.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        } else if let Some(folded) = fold_char(c) {
            slug.push(folded);
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(slugify("Sobremesas"), "sobremesas");
    }

    #[test]
    fn test_whitespace_becomes_hyphen() {
        assert_eq!(slugify("Bolos Especiais"), "bolos-especiais");
        assert_eq!(slugify("Bolos   Especiais"), "bolos-especiais");
    }

    #[test]
    fn test_diacritics_folded() {
        assert_eq!(slugify("Açaí e Cupuaçu"), "acai-e-cupuacu");
        assert_eq!(slugify("Pão de Mel"), "pao-de-mel");
    }

    #[test]
    fn test_punctuation_dropped() {
        assert_eq!(slugify("Bolo!"), "bolo");
        assert_eq!(slugify("Bolo?"), "bolo");
        assert_eq!(slugify("Doces & Cia"), "doces-cia");
    }

    #[test]
    fn test_edges_trimmed() {
        assert_eq!(slugify("  Tortas  "), "tortas");
        assert_eq!(slugify("- Salgados -"), "salgados");
    }

    #[test]
    fn test_empty_when_nothing_survives() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }
}
