use std::fmt;

/// A component identity as seen by the runtime.
pub trait Bundle: Send + Sync {
    /// Symbolic name, if the bundle declares one.
    fn symbolic_name(&self) -> Option<&str>;
    fn version(&self) -> &str;
    fn bundle_id(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct BundleId(pub u64);

impl fmt::Display for BundleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleInfo {
    pub id: BundleId,
    pub symbolic_name: Option<String>,
    pub version: String,
}

impl BundleInfo {
    pub fn new(id: u64, symbolic_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: BundleId(id),
            symbolic_name: Some(symbolic_name.into()),
            version: version.into(),
        }
    }

    pub fn unnamed(id: u64) -> Self {
        Self {
            id: BundleId(id),
            symbolic_name: None,
            version: "0.0.0".to_owned(),
        }
    }
}

impl Bundle for BundleInfo {
    fn symbolic_name(&self) -> Option<&str> {
        self.symbolic_name.as_deref()
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn bundle_id(&self) -> u64 {
        self.id.0
    }
}

/// Human readable identity of a bundle: `bundle name:version (id)`, or
/// `bundle id` when the bundle has no symbolic name.
pub fn identity_label(bundle: &dyn Bundle) -> String {
    match bundle.symbolic_name() {
        Some(name) => format!(
            "bundle {}:{} ({})",
            name,
            bundle.version(),
            bundle.bundle_id()
        ),
        None => format!("bundle {}", bundle.bundle_id()),
    }
}
