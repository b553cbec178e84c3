//! Source records as they come out of the assembler.

/// Classification of a record's `type:` field.
///
/// The field is free text; only `mcp` and `web` mean anything downstream,
/// and the match is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    /// An MCP server launched through a package runner
    Mcp,
    /// A documentation URL surfaced to the agent
    Web,
    /// Any other `type:` value
    Other,
    /// No `type:` line in the record
    Untyped,
}

impl SourceType {
    fn classify(raw: Option<&str>) -> Self {
        match raw {
            Some("mcp") => Self::Mcp,
            Some("web") => Self::Web,
            Some(_) => Self::Other,
            None => Self::Untyped,
        }
    }
}

/// One `- name:` block from a sources file.
///
/// Every field except `name` is optional. A field seen twice in the same
/// block keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRecord {
    pub name: String,
    /// Raw `type:` value
    pub kind: Option<String>,
    pub package: Option<String>,
    pub url: Option<String>,
    pub enabled: bool,
}

impl SourceRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn source_type(&self) -> SourceType {
        SourceType::classify(self.kind.as_deref())
    }

    /// The package to launch, if this is an enabled `mcp` record with a
    /// non-empty package.
    pub fn mcp_package(&self) -> Option<&str> {
        self.eligible_field(SourceType::Mcp, self.package.as_deref())
    }

    /// The documentation URL, if this is an enabled `web` record with a
    /// non-empty URL.
    pub fn web_url(&self) -> Option<&str> {
        self.eligible_field(SourceType::Web, self.url.as_deref())
    }

    fn eligible_field<'a>(&self, wanted: SourceType, field: Option<&'a str>) -> Option<&'a str> {
        if !self.enabled || self.source_type() != wanted {
            return None;
        }
        field.filter(|value| !value.is_empty())
    }
}
