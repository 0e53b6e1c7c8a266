//! Split URLs into named components and put them back together, plus
//! nested query-string serialization in both directions.
//!
//! ```
//! use urlkit::{Field, parse};
//!
//! let mut parts = parse(Some("http://example.com:8080/docs/index.html?page=2"), false)?;
//! assert_eq!(parts.port.as_deref(), Some("8080"));
//!
//! parts.set(Field::Port, "9090");
//! assert_eq!(parts.build(), "http://example.com:9090/docs/index.html?page=2");
//! # Ok::<(), urlkit::ParseError>(())
//! ```

// Internal modules (not public API)
mod builder;
mod character_sets;
mod codec;
mod deparam;
mod error;
mod field;
mod helpers;
mod param;
mod parser;
mod scheme;
mod url_parts;
mod value;

// Public API
pub use builder::build;
pub use codec::{decode, encode, encode_uri};
pub use deparam::deparam;
pub use error::{ParseError, Result};
pub use field::Field;
pub use param::{ParamData, param};
pub use parser::{Parser, parse};
pub use url_parts::{UrlParts, kill, prepare};
pub use value::{Deferred, Map, Value};
