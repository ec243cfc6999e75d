//! Tree scans: active shared classes, lookup by widget type.

use std::collections::HashSet;

use crate::css::ClassName;

use super::id::WidgetId;
use super::registry::NodeRegistry;

impl NodeRegistry {
    /// Collect every shared class referenced by nodes reachable from `root`.
    ///
    /// Follows every ownership edge (single child, child lists and named
    /// slots alike) and nothing else, so classes interned by unrelated trees
    /// are never reported.
    pub fn active_classes(&self, root: WidgetId) -> HashSet<ClassName> {
        self.walk_depth_first(root)
            .into_iter()
            .filter_map(|id| self.get(id))
            .filter_map(|node| node.class().cloned())
            .collect()
    }

    /// Find all nodes under `root` (inclusive) whose widget type matches.
    pub fn find_by_type(&self, root: WidgetId, widget_type: &str) -> Vec<WidgetId> {
        self.walk_depth_first(root)
            .into_iter()
            .filter(|&id| {
                self.get(id)
                    .is_some_and(|node| node.widget_type() == widget_type)
            })
            .collect()
    }
}
