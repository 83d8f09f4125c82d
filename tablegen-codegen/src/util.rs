/// Escapes single quotes for embedding in a single-quoted PHP string literal.
pub(crate) fn escape_single_quotes<T>(string: T) -> String
where
    T: ToString,
{
    string.to_string().replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_only() {
        assert_eq!(escape_single_quotes("plain"), "plain");
        assert_eq!(escape_single_quotes("it's"), "it\\'s");
        assert_eq!(escape_single_quotes("a\\b"), "a\\b");
    }
}
