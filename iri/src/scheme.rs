//! Default component values of well-known schemes.
//!
//! When a component of an [`IriValue`](crate::IriValue) equals the default
//! value declared for its scheme, the component is dropped.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// The default value of each component for a given scheme (if any).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchemeDefaults {
    /// Default `iuserinfo`
    pub userinfo: Option<&'static str>,
    /// Default `ihost`
    pub host: Option<&'static str>,
    /// Default port
    pub port: Option<u16>,
    /// Default `ipath`
    pub path: Option<&'static str>,
    /// Default `iquery`
    pub query: Option<&'static str>,
    /// Default `ifragment`
    pub fragment: Option<&'static str>,
}

impl SchemeDefaults {
    const NONE: SchemeDefaults = SchemeDefaults {
        userinfo: None,
        host: None,
        port: None,
        path: None,
        query: None,
        fragment: None,
    };
}

lazy_static! {
    static ref SCHEME_DEFAULTS: HashMap<&'static str, SchemeDefaults> = {
        let mut map = HashMap::new();
        map.insert(
            "acap",
            SchemeDefaults {
                port: Some(674),
                ..SchemeDefaults::NONE
            },
        );
        map.insert(
            "dict",
            SchemeDefaults {
                port: Some(2628),
                ..SchemeDefaults::NONE
            },
        );
        map.insert(
            "file",
            SchemeDefaults {
                host: Some("localhost"),
                ..SchemeDefaults::NONE
            },
        );
        map.insert(
            "http",
            SchemeDefaults {
                port: Some(80),
                path: Some("/"),
                ..SchemeDefaults::NONE
            },
        );
        map.insert(
            "https",
            SchemeDefaults {
                port: Some(443),
                path: Some("/"),
                ..SchemeDefaults::NONE
            },
        );
        map
    };
}

/// Look up the defaults of `scheme`, which must already be lowercase.
pub fn scheme_defaults(scheme: &str) -> Option<&'static SchemeDefaults> {
    SCHEME_DEFAULTS.get(scheme)
}
