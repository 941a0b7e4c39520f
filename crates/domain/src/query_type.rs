use std::fmt;

/// Query type tag for a lookup request.
///
/// Parsed from a text token. Tokens that do not name a supported record
/// type are preserved verbatim in `Raw` instead of being rejected; the
/// dispatcher treats `Raw` and `Unspecified` as `A` lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryType {
    Unspecified,
    Raw(String),

    A,
    Aaaa,
    Cname,
    Mx,
    Ns,
    Ptr,
    Soa,
    Srv,
    Txt,
}

impl QueryType {
    /// Parse a query-type token. Recognized tokens are the lowercase type
    /// names; anything else becomes `Raw` with the input kept as-is.
    pub fn parse(token: &str) -> Self {
        match token {
            "a" => QueryType::A,
            "aaaa" => QueryType::Aaaa,
            "cname" => QueryType::Cname,
            "mx" => QueryType::Mx,
            "ns" => QueryType::Ns,
            "ptr" => QueryType::Ptr,
            "soa" => QueryType::Soa,
            "srv" => QueryType::Srv,
            "txt" => QueryType::Txt,
            _ => QueryType::Raw(token.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            QueryType::Unspecified => "unspecified",
            QueryType::Raw(token) => token,
            QueryType::A => "a",
            QueryType::Aaaa => "aaaa",
            QueryType::Cname => "cname",
            QueryType::Mx => "mx",
            QueryType::Ns => "ns",
            QueryType::Ptr => "ptr",
            QueryType::Soa => "soa",
            QueryType::Srv => "srv",
            QueryType::Txt => "txt",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
