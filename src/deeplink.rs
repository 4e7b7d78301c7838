//! Extraction of UTM parameters from a deeplink.
//!
//! A deeplink carries parameters in two places that are normalized differently:
//!
//! - the query string, decoded as `application/x-www-form-urlencoded` and matched
//!   case-insensitively on the parameter name;
//! - the fragment, read as `name=value` pairs separated by `&`. Names are lower-cased, values are
//!   kept verbatim and are *not* percent-decoded.

use std::collections::{hash_map::Entry, HashMap};

use url::Url;

use crate::{Error, Result};

/// Relative deeplinks (e.g. `path?utm_source=x`) are resolved against this base so their query
/// and fragment can still be read.
const RELATIVE_BASE: &str = "deeplink:///";

/// Query and fragment parameters of a deeplink. Both tables are empty when the deeplink is
/// missing or unusable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeeplinkParameters {
    query: QueryParameters,
    fragment: FragmentParameters,
}

/// Query string parameters, looked up case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    // Keyed by lower-cased name.
    values: HashMap<String, String>,
}

/// Fragment parameters, keyed by lower-cased name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentParameters {
    values: HashMap<String, String>,
}

impl DeeplinkParameters {
    /// Extract parameters from an optional deeplink.
    ///
    /// Never fails: an unparsable or opaque deeplink is logged and yields empty tables.
    pub fn parse(deeplink: Option<&str>) -> DeeplinkParameters {
        let Some(deeplink) = deeplink else {
            return DeeplinkParameters::default();
        };

        DeeplinkParameters::try_parse(deeplink).unwrap_or_else(|err| {
            log::warn!(target: "mixpanel_dispatcher",
                       deeplink;
                       "something went wrong parsing deeplink: {}", err);
            DeeplinkParameters::default()
        })
    }

    /// Extract parameters from a deeplink, reporting why it is unusable.
    pub fn try_parse(deeplink: &str) -> Result<DeeplinkParameters> {
        let deeplink = deeplink.trim();

        let base = Url::parse(RELATIVE_BASE)?;
        let url = Url::options().base_url(Some(&base)).parse(deeplink)?;

        if url.cannot_be_a_base() {
            return Err(Error::OpaqueDeeplink);
        }

        let query = QueryParameters::from_pairs(
            url.query_pairs()
                .map(|(name, value)| (name.into_owned(), value.into_owned())),
        );
        // Url::fragment() is percent-encoded by the parser, the raw text is read instead.
        let fragment = deeplink
            .split_once('#')
            .map(|(_, fragment)| FragmentParameters::parse(fragment))
            .unwrap_or_default();

        Ok(DeeplinkParameters { query, fragment })
    }

    /// Parameters of the query string.
    pub fn query(&self) -> &QueryParameters {
        &self.query
    }

    /// Parameters of the fragment.
    pub fn fragment(&self) -> &FragmentParameters {
        &self.fragment
    }

    /// Look up `name`, letting the query string override the fragment.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.query.get(name).or_else(|| self.fragment.get(name))
    }
}

impl QueryParameters {
    /// Build the table from decoded pairs. When a name appears more than once, in any casing, the
    /// first occurrence wins.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> QueryParameters {
        let mut values = HashMap::new();
        for (name, value) in pairs {
            if let Entry::Vacant(entry) = values.entry(name.to_lowercase()) {
                entry.insert(value);
            }
        }
        QueryParameters { values }
    }

    /// Look up `name` in any casing.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FragmentParameters {
    /// Parse a raw fragment such as `utm_source=a&utm_medium=b`.
    ///
    /// Tokens without a value are skipped. A later duplicate name replaces an earlier one.
    pub fn parse(fragment: &str) -> FragmentParameters {
        let values = fragment
            .split('&')
            .filter_map(split_pair)
            .map(|(name, value)| (name.to_lowercase(), value.to_owned()))
            .collect();
        FragmentParameters { values }
    }

    /// Look up a lower-case `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Split `name=value`. Empty trailing pieces are ignored, so `name=` and `name` have no value,
/// and anything after a second `=` is dropped.
fn split_pair(token: &str) -> Option<(&str, &str)> {
    let mut parts: Vec<&str> = token.split('=').collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }

    match parts.as_slice() {
        [name, value, ..] => Some((*name, *value)),
        _ => None,
    }
}
