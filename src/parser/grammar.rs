use crate::error::{ParseError, Result};
use crate::field::Field;
use crate::url_parts::UrlParts;
use fancy_regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Composite URL grammar (after Steven Levithan's parseUri, strict variant).
///
/// This is a compatibility artifact: every field's meaning depends on the
/// exact group layout, so it must not be reshaped. The lookahead in the
/// directory part keeps a trailing `name.ext` out of `directory`.
///
/// The `userInfo` group is guarded by a lookahead for the same text. The
/// guard matches in linear time, while the group alone backtracks
/// quadratically over inputs with no `@`.
/// The fragment excludes line terminators (`\n`, `\r`, U+2028, U+2029).
const PATTERN: &str = concat!(
    r"^((?:(?![^:@]+:[^:@/]*@)([^:/?#.]+):(?://)?)?",
    r"((?:(?=[^:@]*:?[^:@]*@)(([^:@]*):?([^:@]*))@)?([^:/?#]*)(?::([0-9]*))?))",
    r"(((/(?:(?:[^?#](?![^?#/]*\.[^?#/.]+(?:[?#]|$)))*/)?)?([^?#/]*))",
    r"(?:\?([^#]*))?(#([^\n\r\u2028\u2029]*))?)$",
);

/// Backtracking budget per match; well above what URLs of a few tens of
/// kilobytes need.
const BACKTRACK_LIMIT: usize = 50_000_000;

/// Fields in capture-group order; group 0 is the whole match
pub const GROUP_FIELDS: [Field; 16] = [
    Field::Source,
    Field::Domain,
    Field::Protocol,
    Field::Authority,
    Field::UserInfo,
    Field::User,
    Field::Password,
    Field::Host,
    Field::Port,
    Field::Relative,
    Field::Path,
    Field::Directory,
    Field::File,
    Field::Query,
    Field::Local,
    Field::Anchor,
];

static GRAMMAR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    match RegexBuilder::new(PATTERN)
        .backtrack_limit(BACKTRACK_LIMIT)
        .build()
    {
        Ok(regex) => Some(regex),
        Err(err) => {
            log::error!("URL grammar failed to compile: {err}");
            None
        }
    }
});

/// Match `input` against the grammar and fill the sixteen grammar fields.
/// Groups that did not participate are stored as empty strings.
pub fn match_components(input: &str) -> Result<UrlParts> {
    let regex = GRAMMAR.as_ref().ok_or(ParseError::MalformedInput)?;

    let captures = match regex.captures(input) {
        Ok(Some(captures)) => captures,
        Ok(None) => {
            log::debug!("no grammar match for {input:?}");
            return Err(ParseError::MalformedInput);
        }
        Err(err) => {
            log::debug!("grammar match for {input:?} aborted: {err}");
            return Err(ParseError::MalformedInput);
        }
    };

    let mut parts = UrlParts::new();
    for (group, field) in GROUP_FIELDS.into_iter().enumerate() {
        let text = captures.get(group).map_or("", |m| m.as_str());
        if let Some(slot) = parts.text_slot_mut(field) {
            *slot = Some(text.to_string());
        }
    }
    Ok(parts)
}
