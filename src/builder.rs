use crate::codec::encode_uri;
use crate::param::param;
use crate::scheme::{SchemeType, get_scheme_type};
use crate::url_parts::UrlParts;
use crate::value::Map;

/// Present and non-empty
fn set(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}

/// Serialized mapping, if it produces anything
fn serialized(params: Option<&Map>) -> Option<String> {
    params.map(|map| param(map, false)).filter(|s| !s.is_empty())
}

/// Assemble a URL string from its components.
///
/// A populated composite always wins over its parts: `source` overrides
/// everything, `domain` overrides protocol and authority, `relative`
/// overrides path, query and anchor, and so on down each branch. `query`
/// wins over `params` and `anchor` over `anchor_params`.
///
/// # Examples
///
/// ```
/// use urlkit::{UrlParts, build};
///
/// let parts = UrlParts {
///     protocol: Some("https".into()),
///     host: Some("example.com".into()),
///     port: Some("8443".into()),
///     path: Some("/docs".into()),
///     query: Some("page=2".into()),
///     ..UrlParts::default()
/// };
/// assert_eq!(build(&parts), "https://example.com:8443/docs?page=2");
/// ```
pub fn build(parts: &UrlParts) -> String {
    if let Some(source) = set(parts.source.as_ref()) {
        return encode_uri(source);
    }

    let mut buffer = String::new();
    // Position right after `file://`, which needs a root `/` to follow
    let mut file_root = None;

    if let Some(domain) = set(parts.domain.as_ref()) {
        buffer.push_str(domain);
    } else {
        if let Some(protocol) = set(parts.protocol.as_ref()) {
            let scheme = get_scheme_type(protocol);
            buffer.push_str(&scheme.prefix(protocol));
            if scheme == SchemeType::File {
                file_root = Some(buffer.len());
            }
        }
        push_authority(&mut buffer, parts);
    }

    if let Some(relative) = set(parts.relative.as_ref()) {
        buffer.push_str(relative);
    } else {
        push_path(&mut buffer, parts);

        if let Some(query) = set(parts.query.as_ref()) {
            buffer.push('?');
            buffer.push_str(query);
        } else if let Some(query) = serialized(parts.params.as_ref()) {
            buffer.push('?');
            buffer.push_str(&query);
        }

        if let Some(anchor) = set(parts.anchor.as_ref()) {
            buffer.push('#');
            buffer.push_str(anchor);
        } else if let Some(anchor) = serialized(parts.anchor_params.as_ref()) {
            buffer.push('#');
            buffer.push_str(&anchor);
        }
    }

    if let Some(at) = file_root {
        if !buffer[at..].starts_with('/') {
            buffer.insert(at, '/');
        }
    }

    log::trace!("built {buffer:?}");
    buffer
}

fn push_authority(buffer: &mut String, parts: &UrlParts) {
    if let Some(authority) = set(parts.authority.as_ref()) {
        buffer.push_str(authority);
        return;
    }

    if let Some(user_info) = set(parts.user_info.as_ref()) {
        buffer.push_str(user_info);
        buffer.push('@');
    } else if let Some(user) = set(parts.user.as_ref()) {
        buffer.push_str(user);
        if let Some(password) = set(parts.password.as_ref()) {
            buffer.push(':');
            buffer.push_str(password);
        }
        buffer.push('@');
    }

    if let Some(host) = set(parts.host.as_ref()) {
        buffer.push_str(host);
        if let Some(port) = set(parts.port.as_ref()) {
            buffer.push(':');
            buffer.push_str(port);
        }
    }
}

fn push_path(buffer: &mut String, parts: &UrlParts) {
    if let Some(path) = set(parts.path.as_ref()) {
        buffer.push_str(path);
        return;
    }

    if let Some(directory) = set(parts.directory.as_ref()) {
        buffer.push_str(directory);
    }
    if let Some(file) = set(parts.file.as_ref()) {
        buffer.push_str(file);
    } else if let Some(filename) = set(parts.filename.as_ref()) {
        buffer.push_str(filename);
        if let Some(ext) = set(parts.file_ext.as_ref()) {
            buffer.push('.');
            buffer.push_str(ext);
        }
    }
}
