//! Implementation of IRI resolution as per
//! [\[RFC 3986 §5.2\]](https://tools.ietf.org/html/rfc3986#section-5.2).
//!
//! NB: unlike a plain string-level resolver,
//! [`IriValue::absolutize`] works on already normalized components,
//! and drops from its result any component equal to its scheme's default.

use super::error::{IriError, Result};
use super::IriValue;

impl IriValue {
    /// Resolve `relative` against `base`.
    ///
    /// Fails if `base` has no scheme.
    /// The fragment of the result is always that of `relative`.
    pub fn absolutize(base: &IriValue, relative: &IriValue) -> Result<IriValue> {
        let Some(scheme) = base.scheme() else {
            return Err(IriError::RelativeBase(base.to_string()));
        };
        let mut target = if relative.is_blank() {
            let mut target = base.clone();
            target.fragment = None;
            target
        } else if relative.scheme.is_some() {
            relative.clone()
        } else if relative.has_authority() {
            let mut target = relative.clone();
            target.scheme = Some(scheme.to_string());
            target.path = relative.path.as_deref().map(remove_dot_segments);
            target
        } else {
            let (path, query) = match relative.path.as_deref() {
                Some(rel_path) if !rel_path.is_empty() => (
                    Some(remove_dot_segments(&merge(base, rel_path))),
                    relative.query.clone(),
                ),
                _ => (
                    base.path.clone(),
                    relative.query.clone().or_else(|| base.query.clone()),
                ),
            };
            IriValue {
                scheme: Some(scheme.to_string()),
                userinfo: base.userinfo.clone(),
                host: base.host.clone(),
                port: base.port,
                path,
                query,
                fragment: relative.fragment.clone(),
            }
        };
        target.suppress_defaults();
        Ok(target)
    }

    /// Resolve the IRI reference `relative` against `base`.
    ///
    /// `relative` is parsed with [`IriValue::parse`].
    pub fn absolutize_str(base: &IriValue, relative: &str) -> Result<IriValue> {
        Self::absolutize(base, &IriValue::parse(relative))
    }
}

/// Merge a non-empty relative path with the path of `base`
/// ([RFC 3986 §5.2.3](https://tools.ietf.org/html/rfc3986#section-5.2.3)).
fn merge(base: &IriValue, rel_path: &str) -> String {
    if rel_path.starts_with('/') {
        return rel_path.to_string();
    }
    let base_path = base.path.as_deref().unwrap_or("");
    if base.has_authority() && base_path.is_empty() {
        format!("/{rel_path}")
    } else if let Some(last_slash) = base_path.rfind('/') {
        format!("{}{rel_path}", &base_path[..=last_slash])
    } else {
        rel_path.to_string()
    }
}

/// Remove the `.` and `..` segments of `path`
/// ([RFC 3986 §5.2.4](https://tools.ietf.org/html/rfc3986#section-5.2.4)).
///
/// ```
/// use metrika_iri::resolve::remove_dot_segments;
/// assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
/// ```
pub fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());
    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_segment(&mut output);
        } else if input == "/.." {
            input = "/";
            pop_segment(&mut output);
        } else if input == "." || input == ".." {
            input = "";
        } else {
            let skip = usize::from(input.starts_with('/'));
            let end = input[skip..].find('/').map_or(input.len(), |i| i + skip);
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }
    output
}

/// Remove the last segment of `output`, and its preceding `/` if any.
fn pop_segment(output: &mut String) {
    let cut = output.rfind('/').unwrap_or(0);
    output.truncate(cut);
}

//
