//! Adapter filtering for selective listing.
//!
//! - **Pure matchers**: [`KindFilter`] and [`NameRegexFilter`] only answer
//!   "does this adapter match?" without include/exclude semantics.
//! - **Filter chain**: [`FilterChain`] combines matchers:
//!   - Exclude filters: AND logic (must pass ALL excludes)
//!   - Include filters: OR logic (pass ANY include, empty = match all)
//! - **Decorator**: [`FilteredFetcher`] applies a filter to any
//!   [`AdapterFetcher`].

use std::collections::HashSet;

use regex::Regex;

use super::{Adapter, AdapterFetcher, AdapterKind, FetchError};

/// Decides whether an adapter is kept.
pub trait AdapterFilter: Send + Sync {
    /// Returns `true` if the adapter matches this filter.
    fn matches(&self, adapter: &Adapter) -> bool;
}

// ============================================================================
// KindFilter - Pure matcher by adapter kind
// ============================================================================

/// Matches adapters whose [`Adapter::kind`] is in a set.
///
/// # Examples
///
/// ```
/// use winipcfg::network::filter::{AdapterFilter, KindFilter};
/// use winipcfg::network::{Adapter, AdapterKind, IF_TYPE_ETHERNET_CSMACD, IF_TYPE_SOFTWARE_LOOPBACK};
///
/// let filter = KindFilter::new([AdapterKind::Wireless, AdapterKind::Ethernet]);
///
/// let eth = Adapter { if_type: IF_TYPE_ETHERNET_CSMACD, ..Adapter::default() };
/// let loopback = Adapter { if_type: IF_TYPE_SOFTWARE_LOOPBACK, ..Adapter::default() };
///
/// assert!(filter.matches(&eth));
/// assert!(!filter.matches(&loopback));
/// ```
#[derive(Debug, Clone)]
pub struct KindFilter {
    kinds: HashSet<AdapterKind>,
}

impl KindFilter {
    /// Creates a kind filter matching any of the specified kinds.
    #[must_use]
    pub fn new(kinds: impl IntoIterator<Item = AdapterKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Returns true if no kinds are configured (matches nothing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Returns the number of kinds in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }
}

impl AdapterFilter for KindFilter {
    fn matches(&self, adapter: &Adapter) -> bool {
        self.kinds.contains(&adapter.kind())
    }
}

// ============================================================================
// FilterChain - Include OR / Exclude AND semantics
// ============================================================================

/// Filter chain with include/exclude semantics.
///
/// Evaluation order:
/// 1. **Exclude filters (AND)**: any match rejects the adapter.
/// 2. **Include filters (OR)**: any match accepts it. No includes accepts all.
///
/// # Examples
///
/// ```
/// use winipcfg::network::filter::{AdapterFilter, FilterChain, KindFilter, NameRegexFilter};
/// use winipcfg::network::{Adapter, AdapterKind, IF_TYPE_SOFTWARE_LOOPBACK};
///
/// let chain = FilterChain::new()
///     .exclude(KindFilter::new([AdapterKind::Loopback]))
///     .include(NameRegexFilter::new("^Ether").unwrap());
///
/// let eth = Adapter { friendly_name: "Ethernet".into(), ..Adapter::default() };
/// let wifi = Adapter { friendly_name: "Wi-Fi".into(), ..Adapter::default() };
/// let loopback = Adapter {
///     friendly_name: "Ethernet loopback".into(),
///     if_type: IF_TYPE_SOFTWARE_LOOPBACK,
///     ..Adapter::default()
/// };
///
/// assert!(chain.matches(&eth));
/// assert!(!chain.matches(&wifi));
/// assert!(!chain.matches(&loopback));
/// ```
#[derive(Default)]
pub struct FilterChain {
    includes: Vec<Box<dyn AdapterFilter>>,
    excludes: Vec<Box<dyn AdapterFilter>>,
}

impl FilterChain {
    /// Creates an empty filter chain (matches all adapters).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an include filter (OR semantics).
    #[must_use]
    pub fn include<F: AdapterFilter + 'static>(mut self, filter: F) -> Self {
        self.includes.push(Box::new(filter));
        self
    }

    /// Adds an exclude filter (AND semantics - must not match ANY).
    #[must_use]
    pub fn exclude<F: AdapterFilter + 'static>(mut self, filter: F) -> Self {
        self.excludes.push(Box::new(filter));
        self
    }

    /// Returns the number of include filters.
    #[must_use]
    pub fn include_count(&self) -> usize {
        self.includes.len()
    }

    /// Returns the number of exclude filters.
    #[must_use]
    pub fn exclude_count(&self) -> usize {
        self.excludes.len()
    }

    /// Returns true if no filters are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }
}

impl AdapterFilter for FilterChain {
    fn matches(&self, adapter: &Adapter) -> bool {
        if self.excludes.iter().any(|f| f.matches(adapter)) {
            return false;
        }

        self.includes.is_empty() || self.includes.iter().any(|f| f.matches(adapter))
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("include_count", &self.includes.len())
            .field("exclude_count", &self.excludes.len())
            .finish()
    }
}

// ============================================================================
// NameRegexFilter - Pure matcher by name pattern
// ============================================================================

/// Matches adapters whose friendly name matches a regex.
#[derive(Debug)]
pub struct NameRegexFilter {
    pattern: Regex,
}

impl NameRegexFilter {
    /// Creates a name filter with the given regex pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Returns a reference to the regex pattern.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Regex is not a const type
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl AdapterFilter for NameRegexFilter {
    fn matches(&self, adapter: &Adapter) -> bool {
        self.pattern.is_match(&adapter.friendly_name)
    }
}

// ============================================================================
// FilteredFetcher - Decorator
// ============================================================================

/// A fetcher decorator that applies a filter to results.
///
/// Lookups by luid or index go through the filtered list, so a filtered-out
/// adapter is not found either.
#[derive(Debug)]
pub struct FilteredFetcher<F, A> {
    inner: F,
    filter: A,
}

impl<F, A> FilteredFetcher<F, A> {
    /// Creates a new filtered fetcher.
    #[must_use]
    pub const fn new(inner: F, filter: A) -> Self {
        Self { inner, filter }
    }

    /// Returns a reference to the inner fetcher.
    pub const fn inner(&self) -> &F {
        &self.inner
    }

    /// Returns a reference to the filter.
    pub const fn filter(&self) -> &A {
        &self.filter
    }
}

impl<F: AdapterFetcher, A: AdapterFilter> AdapterFetcher for FilteredFetcher<F, A> {
    fn fetch(&self) -> Result<Vec<Adapter>, FetchError> {
        let adapters = self.inner.fetch()?;
        let total = adapters.len();
        let kept: Vec<Adapter> = adapters
            .into_iter()
            .filter(|adapter| self.filter.matches(adapter))
            .collect();
        tracing::debug!(total, kept = kept.len(), "filtered adapters");
        Ok(kept)
    }
}

impl<T: AdapterFilter + ?Sized> AdapterFilter for &T {
    fn matches(&self, adapter: &Adapter) -> bool {
        (*self).matches(adapter)
    }
}

impl AdapterFilter for Box<dyn AdapterFilter> {
    fn matches(&self, adapter: &Adapter) -> bool {
        self.as_ref().matches(adapter)
    }
}
