//! Wire parameter encoding for API requests.
//!
//! Every UCloud call is a flat set of query parameters. Request types
//! describe their own encoding through the [`Request`] trait instead of any
//! runtime field inspection, but the wire rules are kept exactly as the API
//! defines them:
//!
//! - scalar fields are omitted when they hold the protocol's "absent"
//!   sentinel (`0` for integers, `""` for strings),
//! - sequence fields encode as `Name.0`, `Name.1`, ... in element order,
//! - the `Action` parameter is derived from the request type's name by
//!   stripping the `Request` suffix.

use std::collections::BTreeMap;
use thiserror::Error;

/// Errors produced while encoding a request into parameters.
///
/// Encoding never leaves a partially-built parameter set in the hands of the
/// transport: [`encode`] discards everything on the first failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A field has no parameter representation at all.
    ///
    /// The typed encoders in this workspace cannot hit this; it exists for
    /// hand-written [`Request::write_params`] impls that need to reject a
    /// field at runtime.
    #[error("field `{field}` cannot be encoded as request parameters")]
    UnsupportedField {
        /// Wire name of the offending field.
        field: String,
    },

    /// A sequence element could not be rendered as a parameter value.
    #[error("element {index} of `{field}` cannot be encoded: {message}")]
    Element {
        /// Wire name of the sequence field.
        field: String,
        /// Zero-based index of the offending element.
        index: usize,
        /// What went wrong with the element.
        message: String,
    },

    /// Raised inside a [`Parameterize`] impl for a value that cannot be
    /// rendered. Wrapped into [`EncodeError::Element`] by
    /// [`ParameterSet::set_seq`].
    #[error("{0}")]
    Value(String),
}

/// The flat, name-keyed wire representation of a request.
///
/// Parameter names map to one or more string values. Iteration order is
/// byte-wise lexicographic by name regardless of insertion order, with
/// multiple values for one name kept in insertion order; the signature in
/// [`crate::signature`] relies on exactly that ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: BTreeMap<String, Vec<String>>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct parameter names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no parameters have been set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set a parameter, replacing any previous values for the name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), vec![value.into()]);
    }

    /// Append a value for a name, keeping any previous values.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// First value for a name, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Set a string field, omitting the empty string.
    ///
    /// The API treats `""` as "not provided"; an empty value is never
    /// transmitted.
    pub fn set_str(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.set(name, value);
        }
    }

    /// Set a signed integer field, omitting zero.
    ///
    /// Protocol quirk, preserved deliberately: the wire format never carries
    /// zero-valued optional integers, so a field explicitly set to `0` is
    /// indistinguishable from one that was never set.
    pub fn set_int(&mut self, name: &str, value: i64) {
        if value != 0 {
            self.set(name, value.to_string());
        }
    }

    /// Set an unsigned integer field, omitting zero. Same quirk as
    /// [`ParameterSet::set_int`].
    pub fn set_uint(&mut self, name: &str, value: u64) {
        if value != 0 {
            self.set(name, value.to_string());
        }
    }

    /// Encode a sequence field as `name.0`, `name.1`, ... in element order.
    ///
    /// Every element is rendered through [`Parameterize`]; the first element
    /// that fails aborts the whole encode. Unlike top-level scalars, an
    /// element that renders empty (a zero integer, say) still emits its key
    /// with an empty value.
    pub fn set_seq<P: Parameterize>(&mut self, name: &str, items: &[P]) -> Result<(), EncodeError> {
        for (index, item) in items.iter().enumerate() {
            let value = item.parameterize().map_err(|e| EncodeError::Element {
                field: name.to_string(),
                index,
                message: e.to_string(),
            })?;
            self.set(format!("{name}.{index}"), value);
        }
        Ok(())
    }

    /// Iterate `(name, value)` pairs in byte-sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |v| (name.as_str(), v.as_str())))
    }
}

/// A value that can render itself as a single parameter string.
///
/// Scalars are infallible; composite sequence elements (such as security
/// group rules) implement this to define their packed wire form and may
/// fail with [`EncodeError::Value`].
pub trait Parameterize {
    /// Render the value for the wire.
    fn parameterize(&self) -> Result<String, EncodeError>;
}

impl Parameterize for String {
    fn parameterize(&self) -> Result<String, EncodeError> {
        Ok(self.clone())
    }
}

impl Parameterize for &str {
    fn parameterize(&self) -> Result<String, EncodeError> {
        Ok((*self).to_string())
    }
}

macro_rules! parameterize_int {
    ($($ty:ty),+ $(,)?) => {
        $(impl Parameterize for $ty {
            /// Zero renders as the empty string, matching the wire encoder's
            /// treatment of integer sentinels inside sequences.
            fn parameterize(&self) -> Result<String, EncodeError> {
                if *self == 0 {
                    Ok(String::new())
                } else {
                    Ok(self.to_string())
                }
            }
        })+
    };
}

parameterize_int!(i32, i64, u32, u64);

/// A typed API request that knows how to encode itself.
pub trait Request {
    /// The wire action name, by convention the request type's name with the
    /// `Request` suffix stripped. Types whose name does not carry the suffix
    /// emit no `Action` parameter (any caller-supplied `Action` is left
    /// untouched).
    fn action(&self) -> Option<&'static str>
    where
        Self: Sized,
    {
        action_for::<Self>()
    }

    /// Write the request's fields into `params` following the wire rules
    /// described in the module docs.
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError>;
}

/// Derive the wire action name for a request type.
///
/// `CreateUHostInstanceRequest` becomes `CreateUHostInstance`; a type name
/// without the `Request` suffix yields `None`.
pub fn action_for<R>() -> Option<&'static str> {
    let full = std::any::type_name::<R>();
    let base = full.split('<').next().unwrap_or(full);
    let name = base.rsplit("::").next().unwrap_or(base);
    name.strip_suffix("Request").filter(|s| !s.is_empty())
}

/// Encode a request into a fresh parameter set.
///
/// Emits the derived `Action` parameter (if any) and then the request's own
/// fields. On error no parameter set is returned; partial encodings are
/// never observable.
pub fn encode<R: Request>(request: &R) -> Result<ParameterSet, EncodeError> {
    let mut params = ParameterSet::new();
    if let Some(action) = request.action() {
        params.set("Action", action);
    }
    request.write_params(&mut params)?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DescribeThingRequest {
        zone: String,
        ids: Vec<String>,
        offset: i64,
        limit: i64,
    }

    impl Request for DescribeThingRequest {
        fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
            params.set_str("Zone", &self.zone);
            params.set_seq("Ids", &self.ids)?;
            params.set_int("Offset", self.offset);
            params.set_int("Limit", self.limit);
            Ok(())
        }
    }

    struct Probe; // no `Request` suffix on purpose

    impl Request for Probe {
        fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
            params.set("Custom", "1");
            Ok(())
        }
    }

    struct Unrenderable;

    impl Parameterize for Unrenderable {
        fn parameterize(&self) -> Result<String, EncodeError> {
            Err(EncodeError::Value("not a scalar".into()))
        }
    }

    #[test]
    fn test_action_derived_from_type_name() {
        let req = DescribeThingRequest {
            zone: String::new(),
            ids: vec![],
            offset: 0,
            limit: 0,
        };
        assert_eq!(req.action(), Some("DescribeThing"));
    }

    #[test]
    fn test_no_suffix_emits_no_action() {
        let params = encode(&Probe).unwrap();
        assert_eq!(params.get("Action"), None);
        assert_eq!(params.get("Custom"), Some("1"));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let req = DescribeThingRequest {
            zone: "cn-bj2-04".into(),
            ids: vec!["uhost-1".into(), "uhost-2".into()],
            offset: 0,
            limit: 20,
        };
        assert_eq!(encode(&req).unwrap(), encode(&req).unwrap());
    }

    #[test]
    fn test_zero_integer_is_omitted() {
        let req = DescribeThingRequest {
            zone: "cn-bj2-04".into(),
            ids: vec![],
            offset: 0, // explicitly zero, must not appear
            limit: 20,
        };
        let params = encode(&req).unwrap();
        assert_eq!(params.get("Offset"), None);
        assert_eq!(params.get("Limit"), Some("20"));
    }

    #[test]
    fn test_empty_string_is_omitted() {
        let req = DescribeThingRequest {
            zone: String::new(),
            ids: vec![],
            offset: 0,
            limit: 0,
        };
        let params = encode(&req).unwrap();
        assert_eq!(params.get("Zone"), None);
    }

    #[test]
    fn test_sequence_uses_zero_based_indices() {
        let req = DescribeThingRequest {
            zone: String::new(),
            ids: vec!["uhost-1".into(), "uhost-2".into()],
            offset: 0,
            limit: 0,
        };
        let params = encode(&req).unwrap();
        assert_eq!(params.get("Ids.0"), Some("uhost-1"));
        assert_eq!(params.get("Ids.1"), Some("uhost-2"));
        assert_eq!(params.get("Ids.2"), None);
        assert_eq!(params.get("Ids"), None);
    }

    #[test]
    fn test_zero_integer_in_sequence_keeps_its_key() {
        let mut params = ParameterSet::new();
        params.set_seq("Sizes", &[0i64, 5]).unwrap();
        assert_eq!(params.get("Sizes.0"), Some(""));
        assert_eq!(params.get("Sizes.1"), Some("5"));
    }

    #[test]
    fn test_unrenderable_element_fails_whole_encode() {
        let mut params = ParameterSet::new();
        let err = params
            .set_seq("Rule", &[Unrenderable, Unrenderable])
            .unwrap_err();
        assert_eq!(
            err,
            EncodeError::Element {
                field: "Rule".into(),
                index: 0,
                message: "not a scalar".into(),
            }
        );
    }

    #[test]
    fn test_iteration_is_name_sorted() {
        let mut params = ParameterSet::new();
        params.set("Zebra", "z");
        params.set("Alpha", "a");
        params.add("Alpha", "b");
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![("Alpha", "a"), ("Alpha", "b"), ("Zebra", "z")]
        );
    }

    #[test]
    fn test_set_replaces_add_appends() {
        let mut params = ParameterSet::new();
        params.add("Name", "first");
        params.add("Name", "second");
        assert_eq!(params.iter().count(), 2);
        params.set("Name", "only");
        assert_eq!(params.get("Name"), Some("only"));
        assert_eq!(params.iter().count(), 1);
    }
}
