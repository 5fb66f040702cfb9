// parser.rs

/// Splits a command line into whitespace separated tokens.
///
/// There is no quoting or escaping: every run of whitespace (spaces, tabs,
/// newlines) is a separator and empty tokens are dropped.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_owned).collect()
}

pub fn leading_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_lines_have_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n").is_empty());
        assert!(tokenize("\t \t").is_empty());
        assert!(is_blank(""));
        assert!(is_blank("   \n"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn runs_of_whitespace_collapse() {
        assert_eq!(tokenize("a  b\n"), vec!["a", "b"]);
        assert_eq!(tokenize("  ls   -l\t/tmp  "), vec!["ls", "-l", "/tmp"]);
    }

    #[test]
    fn quotes_are_not_special() {
        assert_eq!(tokenize("echo 'a b'"), vec!["echo", "'a", "b'"]);
    }

    #[test]
    fn leading_token_skips_indentation() {
        assert_eq!(leading_token("   verbose on\n"), Some("verbose"));
        assert_eq!(leading_token("!12"), Some("!12"));
        assert_eq!(leading_token(" \n"), None);
    }
}
