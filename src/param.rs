use crate::codec::encode;
use crate::value::{Map, Value};
use std::borrow::Cow;

/// Input accepted by [`param`]: a (possibly nested) mapping, or an ordered
/// list of form fields given as `(name, value)` pairs.
#[derive(Debug, Clone, Copy)]
pub enum ParamData<'a> {
    Map(&'a Map),
    Fields(&'a [(String, Value)]),
}

impl<'a> From<&'a Map> for ParamData<'a> {
    fn from(map: &'a Map) -> Self {
        Self::Map(map)
    }
}

impl<'a> From<&'a [(String, Value)]> for ParamData<'a> {
    fn from(fields: &'a [(String, Value)]) -> Self {
        Self::Fields(fields)
    }
}

impl<'a> From<&'a Vec<(String, Value)>> for ParamData<'a> {
    fn from(fields: &'a Vec<(String, Value)>) -> Self {
        Self::Fields(fields)
    }
}

/// Serialize `data` as an `application/x-www-form-urlencoded` string.
///
/// Nested maps become `key[sub]=v`, sequences become `key[]=v` (or
/// `key[i][...]` when the element is itself nested). With `traditional`
/// set, sequences are written as repeated `key=v` pairs and maps are not
/// descended into. A sequence that ends up in a single value (a form field,
/// or an item of a traditional sequence) is written as its items joined
/// with `,`; a map there is written empty.
///
/// # Examples
///
/// ```
/// use urlkit::{Map, Value, param};
///
/// let mut data = Map::new();
/// data.insert("q".into(), Value::from("rust lang"));
/// data.insert("tags".into(), Value::from(vec!["a", "b"]));
///
/// assert_eq!(param(&data, false), "q=rust+lang&tags%5B%5D=a&tags%5B%5D=b");
/// assert_eq!(param(&data, true), "q=rust+lang&tags=a&tags=b");
/// ```
pub fn param<'a>(data: impl Into<ParamData<'a>>, traditional: bool) -> String {
    let mut serializer = Serializer::default();

    match data.into() {
        ParamData::Fields(fields) => {
            for (name, value) in fields {
                serializer.add(name, value);
            }
        }
        ParamData::Map(map) => {
            for (prefix, value) in map {
                serializer.build_params(prefix, value, traditional);
            }
        }
    }

    serializer.finish()
}

#[derive(Default)]
struct Serializer {
    buffer: String,
}

impl Serializer {
    fn build_params(&mut self, prefix: &str, value: &Value, traditional: bool) {
        match resolve(value).as_ref() {
            Value::Seq(items) if traditional || prefix.ends_with("[]") => {
                for item in items {
                    self.add(prefix, item);
                }
            }
            Value::Seq(items) => {
                for (i, item) in items.iter().enumerate() {
                    let item = resolve(item);
                    let key = if item.is_container() {
                        format!("{prefix}[{i}]")
                    } else {
                        format!("{prefix}[]")
                    };
                    self.build_params(&key, &item, traditional);
                }
            }
            Value::Map(map) if !traditional => {
                for (name, item) in map {
                    self.build_params(&format!("{prefix}[{name}]"), item, traditional);
                }
            }
            scalar => self.add(prefix, scalar),
        }
    }

    fn add(&mut self, key: &str, value: &Value) {
        if !self.buffer.is_empty() {
            self.buffer.push('&');
        }
        self.buffer.push_str(&encode(key));
        self.buffer.push('=');
        self.buffer.push_str(&encode(&value.scalar_text()));
    }

    fn finish(self) -> String {
        self.buffer.replace("%20", "+")
    }
}

/// Run a deferred value so its result can be inspected
fn resolve(value: &Value) -> Cow<'_, Value> {
    match value {
        Value::Deferred(d) => Cow::Owned(d.resolve()),
        other => Cow::Borrowed(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Deferred;

    fn map<const N: usize>(entries: [(&str, Value); N]) -> Map {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_param_flat() {
        let data = map([("a", Value::from(1)), ("b", Value::from("x y"))]);
        assert_eq!(param(&data, false), "a=1&b=x+y");
    }

    #[test]
    fn test_param_nested_sequence() {
        let data = map([(
            "a",
            Value::Map(map([("b", Value::from(vec![1, 2]))])),
        )]);
        assert_eq!(param(&data, false), "a%5Bb%5D%5B%5D=1&a%5Bb%5D%5B%5D=2");
    }

    #[test]
    fn test_param_sequence_of_maps_uses_index() {
        let data = map([(
            "a",
            Value::Seq(vec![
                Value::Map(map([("b", Value::from(1))])),
                Value::Map(map([("b", Value::from(2))])),
            ]),
        )]);
        assert_eq!(param(&data, false), "a%5B0%5D%5Bb%5D=1&a%5B1%5D%5Bb%5D=2");
    }

    #[test]
    fn test_param_traditional() {
        let data = map([
            ("a", Value::from(vec![1, 2])),
            ("m", Value::Map(map([("x", Value::from(1))]))),
        ]);
        assert_eq!(param(&data, true), "a=1&a=2&m=");
    }

    #[test]
    fn test_param_bracketed_key_is_flat() {
        let data = map([("a[]", Value::from(vec!["x", "y"]))]);
        assert_eq!(param(&data, false), "a%5B%5D=x&a%5B%5D=y");
    }

    #[test]
    fn test_param_null_and_bool() {
        let data = map([("n", Value::Null), ("t", Value::Bool(true))]);
        assert_eq!(param(&data, false), "n=&t=true");
    }

    #[test]
    fn test_param_deferred() {
        let data = map([
            ("now", Value::from(Deferred::new(|| Value::from(42)))),
            ("list", Value::from(Deferred::new(|| Value::from(vec!["a"])))),
        ]);
        assert_eq!(param(&data, false), "now=42&list%5B%5D=a");
    }

    #[test]
    fn test_param_fields() {
        let fields = vec![
            ("first name".to_string(), Value::from("Ada")),
            ("x".to_string(), Value::from("a&b")),
            ("x".to_string(), Value::Null),
        ];
        assert_eq!(param(&fields, false), "first+name=Ada&x=a%26b&x=");
    }

    #[test]
    fn test_param_fields_join_sequences() {
        let fields = vec![
            ("tags".to_string(), Value::from(vec!["rust", "url"])),
            ("page".to_string(), Value::from(1)),
        ];
        assert_eq!(param(&fields, true), "tags=rust,url&page=1");
        assert_eq!(param(&fields, false), "tags=rust,url&page=1");
    }

    #[test]
    fn test_param_traditional_nested_sequence() {
        let data = map([(
            "a",
            Value::Seq(vec![Value::from(vec!["x", "y"]), Value::from("z")]),
        )]);
        assert_eq!(param(&data, true), "a=x,y&a=z");
    }

    #[test]
    fn test_param_empty() {
        assert_eq!(param(&Map::new(), false), "");
        assert_eq!(param(&map([("a", Value::Seq(vec![]))]), false), "");
    }
}
