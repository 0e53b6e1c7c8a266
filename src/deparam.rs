use crate::codec::decode;
use crate::helpers::{split_key, split_pair, split_segments};
use crate::value::{Map, Value};

/// Deepest bracket nesting expanded into containers. Brackets past it stay
/// in the key as one literal segment.
const MAX_DEPTH: usize = 20;

/// Parse a query (or fragment) string into a mapping.
///
/// Bracketed keys are expanded into nested values: `a[b]=1` creates a map,
/// `a[]=1` appends to a sequence and `a[0][b]=1` indexes one. Repeating a
/// plain key collects its values into a sequence.
///
/// Nesting stops after twenty levels; deeper brackets are kept verbatim as
/// the name of the innermost entry.
///
/// With `coerce` set, `true`/`false` become booleans, `null`/`undefined`
/// and empty values become `Null`, and decimal numbers become numbers.
///
/// # Examples
///
/// ```
/// use urlkit::{Value, deparam};
///
/// let params = deparam("a[b][]=1&a[b][]=2&c=x+y", false);
/// assert_eq!(params["c"], Value::from("x y"));
/// assert_eq!(params["a"].get("b"), Some(&Value::from(vec!["1", "2"])));
///
/// let params = deparam("n=1.5&ok=true", true);
/// assert_eq!(params["n"], Value::Number(1.5));
/// assert_eq!(params["ok"], Value::Bool(true));
/// ```
pub fn deparam(query: &str, coerce: bool) -> Map {
    let mut params = Map::new();

    for segment in split_segments(query) {
        let (raw_key, raw_value) = split_pair(segment);
        let key = decode(raw_key);
        let text = decode(raw_value);
        let value = if coerce {
            coerce_value(text)
        } else {
            Value::String(text)
        };

        let remainder;
        let mut path = split_key(&key);
        if path.len() > MAX_DEPTH + 1 {
            log::debug!("key nested {} levels deep, cut at {MAX_DEPTH}", path.len() - 1);
            remainder = format!("[{}]", path[MAX_DEPTH + 1..].join("]["));
            path.truncate(MAX_DEPTH + 1);
            path.push(&remainder);
        }

        if path.len() > 1 {
            let slot = params.entry(path[0].to_string()).or_insert(Value::Null);
            assign(slot, &path[1..], value);
        } else {
            insert_plain(&mut params, key, value);
        }
    }

    log::trace!("deparam {query:?} -> {} keys", params.len());
    params
}

/// Top-level assignment without brackets: a repeated key turns into a sequence
fn insert_plain(params: &mut Map, key: String, value: Value) {
    match params.get_mut(&key) {
        Some(Value::Seq(items)) => items.push(value),
        Some(existing) => {
            let first = std::mem::replace(existing, Value::Null);
            *existing = Value::Seq(vec![first, value]);
        }
        None => {
            params.insert(key, value);
        }
    }
}

/// Store `value` under `path` inside `slot`, creating containers on the way.
fn assign(slot: &mut Value, path: &[&str], value: Value) {
    let Some((key, rest)) = path.split_first() else {
        *slot = value;
        return;
    };

    if !slot.is_container() {
        *slot = container_for(key);
    }
    if matches!(slot, Value::Seq(items) if !fits_sequence(key, items.len())) {
        if let Value::Seq(items) = std::mem::replace(slot, Value::Null) {
            *slot = Value::Map(seq_to_map(items));
        }
    }

    let child = match slot {
        Value::Seq(items) => {
            let index = parse_index(key).unwrap_or(items.len());
            if index == items.len() {
                items.push(Value::Null);
            }
            match items.get_mut(index) {
                Some(child) => child,
                None => return,
            }
        }
        Value::Map(map) => {
            let name = if key.is_empty() {
                map.len().to_string()
            } else {
                (*key).to_string()
            };
            map.entry(name).or_insert(Value::Null)
        }
        _ => return,
    };

    assign(child, rest, value);
}

/// `[]` and `[0]` start a sequence; any other name starts a map
fn container_for(key: &str) -> Value {
    if fits_sequence(key, 0) {
        Value::Seq(Vec::new())
    } else {
        Value::Map(Map::new())
    }
}

/// Whether `key` can address a sequence of length `len` without leaving holes
fn fits_sequence(key: &str, len: usize) -> bool {
    key.is_empty() || parse_index(key).is_some_and(|index| index <= len)
}

fn parse_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

fn seq_to_map(items: Vec<Value>) -> Map {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| (i.to_string(), item))
        .collect()
}

/// Reinterpret a decoded string as a boolean, null or number where it reads as one
fn coerce_value(text: String) -> Value {
    match text.as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "" | "null" | "undefined" => Value::Null,
        s => match parse_number(s) {
            Some(n) => Value::Number(n),
            None => Value::String(text),
        },
    }
}

/// Decimal number grammar: optional sign, digits with an optional fraction,
/// optional exponent, or `Infinity`. Surrounding whitespace is allowed.
fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    if unsigned == "Infinity" {
        return Some(if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let bytes = unsigned.as_bytes();
    let mut pos = 0;
    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return None;
        }
        pos += exp_digits;
    }
    if pos != bytes.len() {
        return None;
    }

    trimmed.parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
