//! 键控策略注册表实现

use principles_abstractions::StrategyRegistry;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// 基于有序映射的策略注册表
pub struct KeyedRegistry<S: ?Sized> {
    entries: BTreeMap<String, Arc<S>>,
}

impl<S: ?Sized> KeyedRegistry<S> {
    /// 创建空注册表
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<S: ?Sized> Default for KeyedRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> Clone for KeyedRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<S: ?Sized> fmt::Debug for KeyedRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedRegistry")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<S: ?Sized + Send + Sync> StrategyRegistry<S> for KeyedRegistry<S> {
    fn register(&mut self, key: impl Into<String>, strategy: Arc<S>) -> Option<Arc<S>> {
        let key = key.into();
        let previous = self.entries.insert(key.clone(), strategy);
        if previous.is_some() {
            warn!(key = %key, "替换已注册的策略");
        } else {
            debug!(key = %key, "注册策略");
        }
        previous
    }

    fn resolve(&self, key: &str) -> Option<Arc<S>> {
        self.entries.get(key).cloned()
    }

    fn unregister(&mut self, key: &str) -> Option<Arc<S>> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            debug!(key = %key, "注销策略");
        }
        removed
    }

    fn is_registered(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
