//! The [`JsonPointer`] type.

use std::fmt;
use std::ops::Div;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::types::{Node, Resolved};
use crate::util::{escape_component, percent_decode_component, unescape_component};
use crate::validate::validate_json_pointer;
use crate::{find, set, JsonPointerError, Result};

/// A parsed JSON Pointer: an ordered sequence of decoded reference tokens.
///
/// Equality, ordering and hashing look at the token sequence only, so `/1`
/// and `/01` are different pointers even though neither is canonicalized.
/// A pointer is never changed after construction; [`join`](Self::join),
/// [`parent`](Self::parent) and `/` all build a new one.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JsonPointer {
    tokens: Vec<String>,
}

impl JsonPointer {
    /// The empty pointer, referencing the whole document.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a JSON Pointer string.
    ///
    /// # Errors
    ///
    /// A syntax error if the string is neither empty nor starts with `/`,
    /// or if any segment holds a `~` not followed by `0` or `1`.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::JsonPointer;
    ///
    /// assert!(JsonPointer::parse("").unwrap().is_root());
    /// assert_eq!(JsonPointer::parse("/").unwrap().tokens(), [""]);
    /// assert_eq!(JsonPointer::parse("/a~0b/c~1d").unwrap().tokens(), ["a~b", "c/d"]);
    /// assert!(JsonPointer::parse("some/thing").is_err());
    /// ```
    pub fn parse(pointer: &str) -> Result<Self> {
        validate_json_pointer(pointer)?;
        if pointer.is_empty() {
            return Ok(Self::root());
        }
        let tokens = pointer[1..]
            .split('/')
            .map(unescape_component)
            .collect::<Result<_>>()?;
        Ok(Self { tokens })
    }

    /// Parse a pointer whose segments may also be percent-encoded.
    ///
    /// Each segment is percent-decoded first, then `~`-unescaped, so
    /// `/foo/another%20prop` yields the tokens `foo` and `another prop`.
    /// This is not part of RFC 6901; use [`parse`](Self::parse) unless
    /// inputs written for the older draft syntax must be accepted.
    pub fn parse_legacy(pointer: &str) -> Result<Self> {
        if pointer.is_empty() {
            return Ok(Self::root());
        }
        if !pointer.starts_with('/') {
            return Err(JsonPointerError::Syntax(format!(
                "location '{pointer}' must start with /"
            )));
        }
        let tokens = pointer[1..]
            .split('/')
            .map(|segment| unescape_component(&percent_decode_component(segment)?))
            .collect::<Result<_>>()?;
        Ok(Self { tokens })
    }

    /// Build a pointer from already decoded tokens.
    ///
    /// Tokens are stringified, so numbers can be passed directly.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::JsonPointer;
    ///
    /// let pointer = JsonPointer::from_tokens(["foo", "a/b"]);
    /// assert_eq!(pointer.to_string(), "/foo/a~1b");
    ///
    /// let pointer = JsonPointer::from_tokens([0, 1]);
    /// assert_eq!(pointer.to_string(), "/0/1");
    /// ```
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Self {
            tokens: tokens.into_iter().map(|token| token.to_string()).collect(),
        }
    }

    /// The decoded tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check if this pointer references the whole document.
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The final token, if any.
    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// The pointer to the container of this pointer's target.
    ///
    /// Returns `None` for the root pointer.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.tokens.split_last()?;
        Some(Self {
            tokens: init.to_vec(),
        })
    }

    /// Format the pointer back into its string form.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::JsonPointer;
    ///
    /// assert_eq!(JsonPointer::root().format(), "");
    /// assert_eq!(JsonPointer::from_tokens([""]).format(), "/");
    /// assert_eq!(JsonPointer::from_tokens(["m~n", "a/b"]).format(), "/m~0n/a~1b");
    /// ```
    pub fn format(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            out.push('/');
            out.push_str(&escape_component(token));
        }
        out
    }

    /// Alias of [`format`](Self::format).
    pub fn path(&self) -> String {
        self.format()
    }

    /// Check if `other` is a prefix of this pointer.
    ///
    /// Every pointer contains itself and the root pointer.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::JsonPointer;
    ///
    /// let abc = JsonPointer::parse("/a/b/c").unwrap();
    /// assert!(abc.contains(&JsonPointer::parse("/a/b").unwrap()));
    /// assert!(!abc.contains(&JsonPointer::parse("/b/c").unwrap()));
    /// ```
    pub fn contains(&self, other: &JsonPointer) -> bool {
        self.tokens.starts_with(&other.tokens)
    }

    /// Build a new pointer with `suffix` appended.
    ///
    /// The suffix can be another pointer, a token list, or a pointer string.
    ///
    /// # Errors
    ///
    /// Fails only when the suffix is a string that does not parse.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::JsonPointer;
    ///
    /// let base = JsonPointer::parse("/a").unwrap();
    /// assert_eq!(base.join("/b/c").unwrap().to_string(), "/a/b/c");
    /// assert_eq!(base.join(vec!["x/y".to_string()]).unwrap().to_string(), "/a/x~1y");
    /// assert!(base.join("b").is_err());
    /// ```
    pub fn join<S: IntoPointerSuffix>(&self, suffix: S) -> Result<Self> {
        let mut tokens = self.tokens.clone();
        tokens.extend(suffix.into_suffix_tokens()?);
        Ok(Self { tokens })
    }

    /// Resolve this pointer against `doc`. See [`find::resolve`].
    pub fn resolve<'a, N: Node>(&self, doc: &'a N) -> Result<Resolved<'a, N>> {
        find::resolve(doc, self)
    }

    /// Resolve this pointer, falling back to `default` on any walk failure.
    pub fn resolve_or<'a, N: Node>(&self, doc: &'a N, default: &'a N) -> Resolved<'a, N> {
        find::resolve_or(doc, self, default)
    }

    /// Alias of [`resolve`](Self::resolve).
    pub fn get<'a, N: Node>(&self, doc: &'a N) -> Result<Resolved<'a, N>> {
        find::resolve(doc, self)
    }

    /// Resolve every token but the last. See [`find::walk_to_parent`].
    pub fn walk_to_parent<'a, 'p, N: Node>(
        &'p self,
        doc: &'a N,
    ) -> Result<(&'a N, Option<&'p str>)> {
        find::walk_to_parent(doc, self)
    }

    /// Set `value` on a copy of `doc`. See [`set::set`].
    pub fn set<N: Node>(&self, doc: &N, value: N) -> Result<N> {
        set::set(doc, self, value)
    }

    /// Set `value` inside `doc` itself. See [`set::set_in_place`].
    pub fn set_in_place<N: Node>(&self, doc: &mut N, value: N) -> Result<Option<N>> {
        set::set_in_place(doc, self, value)
    }
}

/// Anything that can be appended to a pointer by [`JsonPointer::join`].
pub trait IntoPointerSuffix {
    fn into_suffix_tokens(self) -> Result<Vec<String>>;
}

impl IntoPointerSuffix for JsonPointer {
    fn into_suffix_tokens(self) -> Result<Vec<String>> {
        Ok(self.tokens)
    }
}

impl IntoPointerSuffix for &JsonPointer {
    fn into_suffix_tokens(self) -> Result<Vec<String>> {
        Ok(self.tokens.clone())
    }
}

impl IntoPointerSuffix for Vec<String> {
    fn into_suffix_tokens(self) -> Result<Vec<String>> {
        Ok(self)
    }
}

impl IntoPointerSuffix for &[String] {
    fn into_suffix_tokens(self) -> Result<Vec<String>> {
        Ok(self.to_vec())
    }
}

impl IntoPointerSuffix for &[&str] {
    fn into_suffix_tokens(self) -> Result<Vec<String>> {
        Ok(self.iter().map(|token| token.to_string()).collect())
    }
}

impl IntoPointerSuffix for &str {
    fn into_suffix_tokens(self) -> Result<Vec<String>> {
        JsonPointer::parse(self).map(JsonPointer::into_tokens)
    }
}

impl IntoPointerSuffix for String {
    fn into_suffix_tokens(self) -> Result<Vec<String>> {
        self.as_str().into_suffix_tokens()
    }
}

/// Appends a single raw token: `ptr / "foo" / 0`.
impl<T: ToString> Div<T> for &JsonPointer {
    type Output = JsonPointer;

    fn div(self, token: T) -> JsonPointer {
        let mut tokens = self.tokens.clone();
        tokens.push(token.to_string());
        JsonPointer { tokens }
    }
}

impl<T: ToString> Div<T> for JsonPointer {
    type Output = JsonPointer;

    fn div(mut self, token: T) -> JsonPointer {
        self.tokens.push(token.to_string());
        self
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl fmt::Debug for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsonPointer({:?})", self.format())
    }
}

impl FromStr for JsonPointer {
    type Err = JsonPointerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for JsonPointer {
    type Error = JsonPointerError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for JsonPointer {
    type Error = JsonPointerError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl Serialize for JsonPointer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for JsonPointer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
