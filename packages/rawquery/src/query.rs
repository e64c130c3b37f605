use std::fmt;

/// A single raw-query entry: a field name and its unescaped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub field: String,
    pub value: String,
}

impl Query {
    /// Build an entry. Values go through `ToString`, so numeric values
    /// render as their decimal text.
    pub fn new(field: impl Into<String>, value: impl ToString) -> Self {
        Self {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.value)
    }
}

/// Parse a raw query string into ordered entries.
///
/// A segment is kept only when it contains exactly one `=`; everything else
/// (missing `=`, a second `=`, the empty segment produced by an empty input)
/// is dropped without error. Duplicated field names are retained in input
/// order. No percent-decoding is performed.
pub fn parse_raw_query(raw_query: &str) -> Vec<Query> {
    raw_query
        .split('&')
        .filter_map(|segment| match segment.split_once('=') {
            Some((field, value)) if !value.contains('=') => Some(Query::new(field, value)),
            _ => None,
        })
        .collect()
}

/// Serialize entries back into a raw query string.
///
/// Entries render as `field=value` joined by `&`. No escaping is applied, so
/// this is the exact inverse of [`parse_raw_query`] for well-formed input.
pub fn encode_queries(queries: &[Query]) -> String {
    queries
        .iter()
        .map(|query| format!("{}={}", query.field, query.value))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_well_formed_pairs() {
        let entries = parse_raw_query("username=helloshaohua&sex=male&age=18&sleep=30000");
        assert_eq!(
            entries,
            vec![
                Query::new("username", "helloshaohua"),
                Query::new("sex", "male"),
                Query::new("age", "18"),
                Query::new("sleep", "30000"),
            ]
        );
    }

    #[test]
    fn parse_empty_input_is_empty() {
        assert!(parse_raw_query("").is_empty());
    }

    #[test]
    fn parse_drops_segments_without_separator() {
        let entries = parse_raw_query("flag&key=value&other");
        assert_eq!(entries, vec![Query::new("key", "value")]);
    }

    #[test]
    fn parse_drops_segments_with_extra_separator() {
        let entries = parse_raw_query("a=b=c&key=value");
        assert_eq!(entries, vec![Query::new("key", "value")]);
    }

    #[test]
    fn parse_keeps_empty_values() {
        let entries = parse_raw_query("key=&next=1");
        assert_eq!(entries, vec![Query::new("key", ""), Query::new("next", "1")]);
    }

    #[test]
    fn parse_keeps_duplicate_fields_in_order() {
        let entries = parse_raw_query("key=first&key=second");
        assert_eq!(
            entries,
            vec![Query::new("key", "first"), Query::new("key", "second")]
        );
    }

    #[test]
    fn parse_does_not_percent_decode() {
        let entries = parse_raw_query("q=hello+world&city=%E5%8C%97%E4%BA%AC");
        assert_eq!(
            entries,
            vec![
                Query::new("q", "hello+world"),
                Query::new("city", "%E5%8C%97%E4%BA%AC"),
            ]
        );
    }

    #[test]
    fn encode_numeric_values() {
        let queries = vec![
            Query::new("username", "helloshaohua"),
            Query::new("sex", "male"),
            Query::new("age", 18),
            Query::new("sleep", 30000),
        ];
        assert_eq!(
            encode_queries(&queries),
            "username=helloshaohua&sex=male&age=18&sleep=30000"
        );
    }

    #[test]
    fn encode_empty_is_empty_string() {
        assert_eq!(encode_queries(&[]), "");
    }

    #[test]
    fn round_trip_well_formed_query() {
        let raw = "q=hello+world&sex=male&sourceid=chrome&ie=UTF-8";
        assert_eq!(encode_queries(&parse_raw_query(raw)), raw);
    }

    #[test]
    fn query_display_renders_field_colon_value() {
        assert_eq!(Query::new("sex", "male").to_string(), "sex:male");
    }
}
