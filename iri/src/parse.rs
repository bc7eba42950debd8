//! Splitting of raw IRI references into their five components,
//! as per [RFC 3986 appendix B](https://tools.ietf.org/html/rfc3986#appendix-B).
//!
//! [`ParseCache`] memoizes this split; it never changes the outcome of parsing.

use lazy_static::lazy_static;
use regex::bytes::Regex;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

lazy_static! {
    static ref IRI_PARTS: Regex = Regex::new(
        r"(?s-u)^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$"
    )
    .unwrap();
}

const WHITESPACE: &[u8] = b" \t\n\x0C\r";

/// The raw (not yet normalized) components of an IRI reference.
///
/// Absent components are `None`; the path is always present, possibly empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawParts {
    /// Text before the first `:`, if it contains none of `/?#`
    pub scheme: Option<Vec<u8>>,
    /// Text after `//`, up to the next `/`, `?` or `#`
    pub authority: Option<Vec<u8>>,
    /// Text up to the first `?` or `#`
    pub path: Vec<u8>,
    /// Text after the first `?`, up to the first `#`
    pub query: Option<Vec<u8>>,
    /// Text after the first `#`
    pub fragment: Option<Vec<u8>>,
}

/// Split `input`, once trimmed of leading and trailing whitespace, into its components.
pub fn split(input: &[u8]) -> RawParts {
    let input = trim(input);
    let Some(caps) = IRI_PARTS.captures(input) else {
        // every part of the pattern is optional
        return RawParts {
            path: input.to_vec(),
            ..RawParts::default()
        };
    };
    let part = |i| caps.get(i).map(|m| m.as_bytes().to_vec());
    RawParts {
        scheme: part(1),
        authority: part(2),
        path: part(3).unwrap_or_default(),
        query: part(4),
        fragment: part(5),
    }
}

fn trim(mut input: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = input {
        if !WHITESPACE.contains(first) {
            break;
        }
        input = rest;
    }
    while let [rest @ .., last] = input {
        if !WHITESPACE.contains(last) {
            break;
        }
        input = rest;
    }
    input
}

/// A bounded memo table for [`split`].
///
/// Entries are never evicted nor rewritten;
/// once `capacity` entries are stored, further inputs are split without being cached.
#[derive(Debug)]
pub struct ParseCache {
    capacity: usize,
    entries: Mutex<HashMap<Vec<u8>, Arc<RawParts>>>,
}

impl ParseCache {
    /// Capacity of a cache built with [`ParseCache::default`].
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Build an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        ParseCache {
            capacity,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Same as [`split`], using and feeding this cache.
    pub fn split(&self, input: &[u8]) -> Arc<RawParts> {
        let key = trim(input);
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(parts) = entries.get(key) {
            log::trace!("parse cache hit for {:?}", String::from_utf8_lossy(key));
            return Arc::clone(parts);
        }
        let parts = Arc::new(split(key));
        if entries.len() < self.capacity {
            entries.insert(key.to_vec(), Arc::clone(&parts));
        } else {
            log::trace!("parse cache full ({} entries)", self.capacity);
        }
        parts
    }

    /// The maximum number of entries of this cache.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of entries currently stored in this cache.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether this cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ParseCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
