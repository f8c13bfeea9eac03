// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Type-keyed dependency providers.

use shopqa_capture::{console, short_type_name, ConsoleArg};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type Entry = (&'static str, Arc<dyn Any + Send + Sync>);

/// A set of dependency overrides keyed by type.
#[derive(Clone, Default)]
pub struct Providers {
    entries: HashMap<TypeId, Entry>,
}

impl Providers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `value` as the provider for `T`, replacing any earlier one.
    pub fn provide<T: Any + Send + Sync>(self, value: T) -> Self {
        self.provide_arc(Arc::new(value))
    }

    /// Register a shared provider, so the test can keep a handle to it.
    pub fn provide_arc<T: Any + Send + Sync>(mut self, value: Arc<T>) -> Self {
        let value: Arc<dyn Any + Send + Sync> = value;
        self.entries
            .insert(TypeId::of::<T>(), (short_type_name::<T>(), value));
        self
    }

    /// Merge `other` into `self`; entries in `other` win.
    pub fn merge(mut self, other: Providers) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Providers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.entries.values().map(|(name, _)| *name).collect();
        names.sort_unstable();
        f.debug_struct("Providers").field("types", &names).finish()
    }
}

/// Resolves dependencies for a component under test.
#[derive(Clone, Debug, Default)]
pub struct Injector {
    providers: Providers,
}

impl Injector {
    pub fn new(providers: Providers) -> Self {
        Self { providers }
    }

    /// Resolve `T`. A missing provider is reported on the console as a
    /// `NullInjectorError`, the way a misconfigured test bed would.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let resolved = self.try_get::<T>();
        if resolved.is_none() {
            console::error(&[ConsoleArg::named_error(
                "NullInjectorError",
                format!("No provider for {}!", short_type_name::<T>()),
            )]);
        }
        resolved
    }

    /// Resolve `T` without reporting a miss.
    pub fn try_get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let (_, value) = self.providers.entries.get(&TypeId::of::<T>())?;
        Arc::clone(value).downcast::<T>().ok()
    }

    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.providers.entries.contains_key(&TypeId::of::<T>())
    }
}

#[cfg(test)]
#[path = "injector_tests.rs"]
mod tests;
