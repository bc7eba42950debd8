//! This crate is part of the metrika toolkit.
//!
//! It provides [`IriValue`], an IRI reference
//! ([RFC 3987](https://tools.ietf.org/html/rfc3987))
//! stored as separately normalized components,
//! as well as the resolution of relative IRI references against an absolute one
//! ([RFC 3986 §5](https://tools.ietf.org/html/rfc3986#section-5)).
//!
//! ```
//! use metrika_iri::IriValue;
//!
//! let base = IriValue::parse("http://example.org:80/shop/cart?id=1");
//! let goal = IriValue::absolutize_str(&base, "../checkout").unwrap();
//! assert_eq!(goal.to_string(), "http://example.org/checkout");
//! ```

#![deny(missing_docs)]

mod _value;
pub use self::_value::*;
pub mod error;
pub use self::error::{IriError, Result};
pub mod parse;
pub mod pct;
pub mod resolve;
pub mod scheme;

#[cfg(feature = "serde")]
mod _serde;


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
