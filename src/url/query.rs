//! Query string parsing into ordered multi-value parameters.

use ::url::form_urlencoded;

use super::components::QueryParams;

/// Parses a raw query (without the leading `?`).
///
/// Segments are split on `&` and then on the first `=`; a segment without
/// `=` gets an empty value. Names and values are percent-decoded with `+`
/// read as a space. Empty segments are skipped.
pub fn parse_query(raw: &str) -> QueryParams {
    let mut params = QueryParams::new();
    for (name, value) in form_urlencoded::parse(raw.as_bytes()) {
        params.append(name.into_owned(), value.into_owned());
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_repeated_names() {
        let params = parse_query("param1=value1&param2=value2&param1=anotherValue");
        let collected: Vec<_> = params.iter().collect();
        assert_eq!(
            collected,
            vec![
                (
                    "param1",
                    &["value1".to_string(), "anotherValue".to_string()][..]
                ),
                ("param2", &["value2".to_string()][..]),
            ]
        );
    }

    #[test]
    fn test_parse_query_missing_equals_gives_empty_value() {
        let params = parse_query("flag&key=value");
        assert_eq!(params.first("flag"), Some(""));
        assert_eq!(params.first("key"), Some("value"));
    }

    #[test]
    fn test_parse_query_splits_on_first_equals() {
        let params = parse_query("expr=a=b");
        assert_eq!(params.first("expr"), Some("a=b"));
    }

    #[test]
    fn test_parse_query_decodes() {
        let params = parse_query("q=hello+world&name=caf%C3%A9&a%26b=1");
        assert_eq!(params.first("q"), Some("hello world"));
        assert_eq!(params.first("name"), Some("café"));
        assert_eq!(params.first("a&b"), Some("1"));
    }

    #[test]
    fn test_parse_query_skips_empty_segments() {
        let params = parse_query("&&a=1&&");
        assert_eq!(params.len(), 1);
    }
}
