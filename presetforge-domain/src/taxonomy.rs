//! Two-level group/subgroup hierarchy, stored as an arena keyed by code.

use indexmap::IndexMap;
use presetforge_types::preset::ItemNode;
use presetforge_types::taxonomy::TaxonomyTable;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeLevel {
    Group,
    Subgroup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyNode {
    pub code: String,
    pub title: String,
    pub icon: String,
    /// Owning group code; `None` for groups.
    pub parent: Option<String>,
    /// Subgroup codes, in subgroup-table order.
    pub children: Vec<String>,
    /// Placed items (subgroups only).
    pub items: Vec<ItemNode>,
}

impl TaxonomyNode {
    pub fn level(&self) -> NodeLevel {
        if self.parent.is_some() {
            NodeLevel::Subgroup
        } else {
            NodeLevel::Group
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaxonomyTree {
    nodes: IndexMap<String, TaxonomyNode>,
}

impl TaxonomyTree {
    /// One group node per group code; one subgroup node per subgroup code whose first character
    /// names an existing group. Table order is preserved at both levels.
    pub fn build(groups: &TaxonomyTable, subgroups: &TaxonomyTable) -> Self {
        let mut nodes = IndexMap::new();

        for (g, entry) in groups {
            nodes.insert(
                g.clone(),
                TaxonomyNode {
                    code: g.clone(),
                    title: entry.title.clone(),
                    icon: entry.icon.clone(),
                    parent: None,
                    children: Vec::new(),
                    items: Vec::new(),
                },
            );
        }

        let mut orphans = 0usize;
        for (s, entry) in subgroups {
            let Some(group_code) = s.chars().next().map(String::from) else {
                continue;
            };
            if nodes.contains_key(s) || !nodes.contains_key(&group_code) {
                orphans += 1;
                continue;
            }
            if let Some(group) = nodes.get_mut(&group_code) {
                group.children.push(s.clone());
            }
            nodes.insert(
                s.clone(),
                TaxonomyNode {
                    code: s.clone(),
                    title: entry.title.clone(),
                    icon: entry.icon.clone(),
                    parent: Some(group_code),
                    children: Vec::new(),
                    items: Vec::new(),
                },
            );
        }

        debug!(
            groups = groups.len(),
            subgroups = subgroups.len() - orphans,
            skipped = orphans,
            "taxonomy built"
        );
        Self { nodes }
    }

    pub fn subgroup_for(&self, code: &str) -> Option<&TaxonomyNode> {
        self.nodes
            .get(code)
            .filter(|n| n.level() == NodeLevel::Subgroup)
    }

    pub fn group(&self, code: &str) -> Option<&TaxonomyNode> {
        self.nodes.get(code).filter(|n| n.level() == NodeLevel::Group)
    }

    /// Groups in table order.
    pub fn groups(&self) -> impl Iterator<Item = &TaxonomyNode> {
        self.nodes.values().filter(|n| n.level() == NodeLevel::Group)
    }

    /// Subgroups of `group`, in table order.
    pub fn subgroups_of<'a>(
        &'a self,
        group: &'a TaxonomyNode,
    ) -> impl Iterator<Item = &'a TaxonomyNode> + 'a {
        group.children.iter().filter_map(|c| self.nodes.get(c))
    }

    pub fn count(&self, level: NodeLevel) -> usize {
        self.nodes.values().filter(|n| n.level() == level).count()
    }

    /// Append `item` to the subgroup `code`. Returns `false` if no such subgroup exists.
    pub fn attach(&mut self, code: &str, item: ItemNode) -> bool {
        match self.nodes.get_mut(code) {
            Some(node) if node.level() == NodeLevel::Subgroup => {
                node.items.push(item);
                true
            }
            _ => false,
        }
    }

    /// Drop every node of `level` for which `keep` is false. Removing a group also removes its
    /// remaining subgroups. Returns the number of nodes removed.
    pub fn retain(&mut self, level: NodeLevel, keep: impl Fn(&TaxonomyNode) -> bool) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|_, n| n.level() != level || keep(n));

        if level == NodeLevel::Group {
            let nodes = &self.nodes;
            let dangling: Vec<String> = nodes
                .values()
                .filter(|n| n.parent.as_ref().is_some_and(|p| !nodes.contains_key(p)))
                .map(|n| n.code.clone())
                .collect();
            for code in dangling {
                self.nodes.shift_remove(&code);
            }
        }

        let live: Vec<String> = self.nodes.keys().cloned().collect();
        for node in self.nodes.values_mut() {
            node.children.retain(|c| live.contains(c));
        }

        before - self.nodes.len()
    }
}
