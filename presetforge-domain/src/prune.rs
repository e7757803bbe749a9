use crate::taxonomy::{NodeLevel, TaxonomyTree};
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    pub subgroups_removed: usize,
    pub groups_removed: usize,
}

/// Remove subgroups, then groups, whose code is not in `used`.
///
/// Placement marks a group used whenever one of its subgroups is, so by the time groups are
/// filtered no used subgroup can lose its parent.
pub fn prune(tree: &mut TaxonomyTree, used: &BTreeSet<String>) -> PruneStats {
    let subgroups_removed = tree.retain(NodeLevel::Subgroup, |n| used.contains(&n.code));
    let groups_removed = tree.retain(NodeLevel::Group, |n| used.contains(&n.code));

    debug!(subgroups_removed, groups_removed, "taxonomy pruned");
    PruneStats {
        subgroups_removed,
        groups_removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use presetforge_types::taxonomy::{TaxonomyEntry, TaxonomyTable};

    fn table(codes: &[&str]) -> TaxonomyTable {
        codes
            .iter()
            .map(|c| (c.to_string(), TaxonomyEntry::new(*c, "")))
            .collect()
    }

    fn used(codes: &[&str]) -> BTreeSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn unused_nodes_are_removed() {
        let mut tree = TaxonomyTree::build(&table(&["A", "B"]), &table(&["AL", "AK", "BH"]));
        let stats = prune(&mut tree, &used(&["A", "AL"]));

        assert_eq!(
            stats,
            PruneStats {
                subgroups_removed: 2,
                groups_removed: 1
            }
        );
        assert!(tree.group("A").is_some());
        assert!(tree.group("B").is_none());
        assert!(tree.subgroup_for("AL").is_some());
        assert!(tree.subgroup_for("AK").is_none());
        assert_eq!(tree.group("A").unwrap().children, vec!["AL"]);
    }

    #[test]
    fn empty_usage_prunes_everything() {
        let mut tree = TaxonomyTree::build(&table(&["A"]), &table(&["AL"]));
        prune(&mut tree, &BTreeSet::new());
        assert_eq!(tree.groups().count(), 0);
        assert!(tree.subgroup_for("AL").is_none());
    }
}
