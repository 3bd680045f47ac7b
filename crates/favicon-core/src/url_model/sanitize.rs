//! Host-to-filename sanitization.

/// Replaces every character outside ASCII `[A-Za-z0-9_]` with `_`.
///
/// One `_` per character: `a--b` becomes `a__b`, and case is preserved.
pub fn sanitize_host_for_filename(host: &str) -> String {
    host.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_dots_and_dashes() {
        assert_eq!(sanitize_host_for_filename("My-Site.com"), "My_Site_com");
    }

    #[test]
    fn port_colon() {
        assert_eq!(sanitize_host_for_filename("localhost:8080"), "localhost_8080");
    }

    #[test]
    fn no_collapsing() {
        assert_eq!(sanitize_host_for_filename("a--b"), "a__b");
    }

    #[test]
    fn non_ascii() {
        assert_eq!(sanitize_host_for_filename("bücher.de"), "b_cher_de");
        assert_eq!(sanitize_host_for_filename("[::1]"), "___1_");
    }
}
