use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Checked in order; the first pattern with a hit wins. Labels print the
    // order as "N° Interno: #1234", but degraded text extraction can lose
    // the degree sign or the prefix entirely, so progressively looser forms
    // follow, down to a bare four-digit "#1234".
    static ref PATTERNS: [Regex; 4] = [
        Regex::new(r"(?i)N°\s*Interno:\s*#?(\d{4})").unwrap(),
        Regex::new(r"(?i)N\s*Interno:\s*#?(\d{4})").unwrap(),
        Regex::new(r"(?i)Interno:\s*#?(\d{4})").unwrap(),
        Regex::new(r"#(\d{4})").unwrap(),
    ];
}

/// Pulls the order number out of a page's concatenated text. `None` excludes
/// the page from annotation.
pub fn extract_order_number(text: &str) -> Option<String> {
    for pattern in PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            return Some(captures[1].to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worded_pattern_wins_over_bare_hash() {
        let text = "Destino: CABA #9999 N° Interno: #1234";
        assert_eq!(extract_order_number(text), Some("1234".to_string()));
    }

    #[test]
    fn falls_back_to_bare_hash() {
        assert_eq!(
            extract_order_number("bulto 3 de 4 #5678"),
            Some("5678".to_string())
        );
    }

    #[test]
    fn tolerates_missing_degree_sign_and_case() {
        assert_eq!(
            extract_order_number("n interno: 4521"),
            Some("4521".to_string())
        );
        assert_eq!(
            extract_order_number("INTERNO: #0042"),
            Some("0042".to_string())
        );
    }

    #[test]
    fn no_pattern_yields_none() {
        assert_eq!(extract_order_number("Remitente: ACME SRL, CP 1406"), None);
        assert_eq!(extract_order_number("#123"), None);
    }
}
