// SPDX-License-Identifier: MPL-2.0
//! Port definitions for the hosting input-method framework.
//!
//! The module owns no interception or resource machinery of its own; the
//! host drives it through these seams. Keeping the seams as traits lets
//! the substitution logic be exercised against fake hosts in tests, while
//! the real host wires them to whatever mechanism it uses internally.

use crate::dicts::DictResource;
use crate::locale::Locale;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Method interception
// =============================================================================

/// Identity of a hooked method: class path plus method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodTarget {
    pub class: &'static str,
    pub method: &'static str,
}

impl fmt::Display for MethodTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.class, self.method)
    }
}

/// Mutable view of one in-flight dictionary lookup.
///
/// A hook may rewrite the locale argument before the host resumes the
/// original call with whatever is left here. Hooks cannot skip or
/// short-circuit the call itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupCall {
    pub locale: Locale,
}

impl LookupCall {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

/// A callback the host runs immediately before the hooked method executes.
///
/// Implementations must be `Send + Sync`; the host invokes hooks on
/// whatever thread performs the lookup.
pub trait DictionaryHook: Send + Sync {
    fn before_lookup(&self, call: &mut LookupCall);
}

/// Errors surfaced while attaching a hook.
#[derive(Debug, Clone)]
pub enum HookError {
    /// The host could not resolve the target class or method.
    TargetNotFound(String),
    /// The host resolved the target but refused the attachment.
    Rejected(String),
}

impl fmt::Display for HookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookError::TargetNotFound(target) => write!(f, "hook target not found: {target}"),
            HookError::Rejected(reason) => write!(f, "hook attachment rejected: {reason}"),
        }
    }
}

impl std::error::Error for HookError {}

/// Method interception seam offered by the host.
pub trait HookHost {
    /// Attaches `hook` to run before every invocation of `target`.
    ///
    /// # Errors
    ///
    /// Returns a [`HookError`] when the target cannot be resolved or the
    /// host refuses the attachment.
    fn attach_before_hook(
        &mut self,
        target: MethodTarget,
        hook: Arc<dyn DictionaryHook>,
    ) -> Result<(), HookError>;
}

// =============================================================================
// Resource overrides
// =============================================================================

/// Identity of one overridable resource in the target application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    pub package: String,
    pub kind: String,
    pub name: String,
}

impl ResourceKey {
    pub fn new(
        package: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            kind: kind.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.package, self.kind, self.name)
    }
}

/// Global resource-override seam offered by the host.
///
/// Installing an override for a key that already has one replaces it;
/// the module relies on that to stay idempotent across repeated
/// resource-initialization events.
pub trait ResourceTable {
    fn set_replacement(&mut self, key: ResourceKey, replacement: DictResource);
}
