use super::{Bundle, BundleInfo, identity_label};
use std::fmt;

/// A borrowed message argument.
///
/// Bundles are kept apart from other values so they can be rendered with
/// their identity label instead of whatever their own formatting would be.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    Bundle(&'a dyn Bundle),
    Text(&'a str),
    Value(&'a dyn fmt::Display),
}

impl<'a> Arg<'a> {
    pub fn bundle(bundle: &'a dyn Bundle) -> Self {
        Arg::Bundle(bundle)
    }

    pub fn value(value: &'a dyn fmt::Display) -> Self {
        Arg::Value(value)
    }

    /// Text substituted for this argument in a message pattern.
    pub fn render(&self) -> String {
        match self {
            Arg::Bundle(bundle) => identity_label(*bundle),
            Arg::Text(text) => (*text).to_owned(),
            Arg::Value(value) => value.to_string(),
        }
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Bundle(bundle) => f.debug_tuple("Bundle").field(&bundle.bundle_id()).finish(),
            Arg::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Arg::Value(value) => f.debug_tuple("Value").field(&value.to_string()).finish(),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(text: &'a str) -> Self {
        Arg::Text(text)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(text: &'a String) -> Self {
        Arg::Text(text.as_str())
    }
}

impl<'a> From<&'a BundleInfo> for Arg<'a> {
    fn from(bundle: &'a BundleInfo) -> Self {
        Arg::Bundle(bundle)
    }
}

impl<'a> From<&'a dyn Bundle> for Arg<'a> {
    fn from(bundle: &'a dyn Bundle) -> Self {
        Arg::Bundle(bundle)
    }
}
