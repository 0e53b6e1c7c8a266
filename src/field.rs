use crate::error::{ParseError, Result};

/// Named component of a parsed URL.
///
/// Every component except `Source` has exactly one parent: the composite it
/// is part of. `build` prefers a populated parent over reassembling it from
/// its children, so the relation decides which fields a change must clear.
///
/// ```text
/// source
/// ├── domain
/// │   ├── protocol
/// │   └── authority
/// │       ├── userInfo ── user, password
/// │       ├── host
/// │       └── port
/// └── relative
///     ├── path
///     │   ├── directory
///     │   └── file ── filename, fileExt
///     ├── query ── params
///     └── local ── anchor ── anchorParams
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Source,
    Domain,
    Protocol,
    Authority,
    UserInfo,
    User,
    Password,
    Host,
    Port,
    Relative,
    Path,
    Directory,
    File,
    Filename,
    FileExt,
    Query,
    Params,
    Local,
    Anchor,
    AnchorParams,
}

impl Field {
    pub const ALL: [Field; 20] = [
        Self::Source,
        Self::Domain,
        Self::Protocol,
        Self::Authority,
        Self::UserInfo,
        Self::User,
        Self::Password,
        Self::Host,
        Self::Port,
        Self::Relative,
        Self::Path,
        Self::Directory,
        Self::File,
        Self::Filename,
        Self::FileExt,
        Self::Query,
        Self::Params,
        Self::Local,
        Self::Anchor,
        Self::AnchorParams,
    ];

    /// The composite this component belongs to
    pub fn parent(self) -> Option<Field> {
        match self {
            Self::Source => None,
            Self::Domain | Self::Relative => Some(Self::Source),
            Self::Protocol | Self::Authority => Some(Self::Domain),
            Self::UserInfo | Self::Host | Self::Port => Some(Self::Authority),
            Self::User | Self::Password => Some(Self::UserInfo),
            Self::Path | Self::Query | Self::Local => Some(Self::Relative),
            Self::Directory | Self::File => Some(Self::Path),
            Self::Filename | Self::FileExt => Some(Self::File),
            Self::Params => Some(Self::Query),
            Self::Anchor => Some(Self::Local),
            Self::AnchorParams => Some(Self::Anchor),
        }
    }

    /// This field followed by each of its ancestors up to `Source`
    pub fn lineage(self) -> impl Iterator<Item = Field> {
        core::iter::successors(Some(self), |field| field.parent())
    }

    /// Component name as used in serialized component trees
    pub fn name(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Domain => "domain",
            Self::Protocol => "protocol",
            Self::Authority => "authority",
            Self::UserInfo => "userInfo",
            Self::User => "user",
            Self::Password => "password",
            Self::Host => "host",
            Self::Port => "port",
            Self::Relative => "relative",
            Self::Path => "path",
            Self::Directory => "directory",
            Self::File => "file",
            Self::Filename => "filename",
            Self::FileExt => "fileExt",
            Self::Query => "query",
            Self::Params => "params",
            Self::Local => "local",
            Self::Anchor => "anchor",
            Self::AnchorParams => "anchorParams",
        }
    }

    /// `Params` and `AnchorParams` hold mappings; every other field is text
    pub fn is_mapping(self) -> bool {
        matches!(self, Self::Params | Self::AnchorParams)
    }
}

impl core::str::FromStr for Field {
    type Err = ParseError;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or(ParseError::UnknownField)
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_lineage_ends_at_source() {
        for field in Field::ALL {
            let lineage: Vec<Field> = field.lineage().take(Field::ALL.len() + 1).collect();
            assert!(lineage.len() <= Field::ALL.len(), "{field} has a cycle");
            assert_eq!(lineage.last(), Some(&Field::Source));
        }
    }

    #[test]
    fn test_lineage() {
        let lineage: Vec<Field> = Field::Port.lineage().collect();
        assert_eq!(
            lineage,
            [Field::Port, Field::Authority, Field::Domain, Field::Source]
        );
        let lineage: Vec<Field> = Field::Filename.lineage().collect();
        assert_eq!(
            lineage,
            [
                Field::Filename,
                Field::File,
                Field::Path,
                Field::Relative,
                Field::Source
            ]
        );
    }

    #[test]
    fn test_name_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
        assert_eq!("userinfo".parse::<Field>(), Err(ParseError::UnknownField));
    }
}
