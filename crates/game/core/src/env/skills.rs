use std::collections::BTreeMap;

use crate::skill::{CharacterClass, SkillId, SkillNode};

/// Oracle providing skill tree nodes by id.
pub trait SkillOracle: Send + Sync {
    fn skill(&self, id: &SkillId) -> Option<&SkillNode>;

    /// All nodes owned by `class`, in ascending id order.
    fn class_skills(&self, class: CharacterClass) -> Vec<&SkillNode>;
}

/// In-memory skill table keyed by id.
#[derive(Clone, Debug, Default)]
pub struct SkillTable {
    nodes: BTreeMap<SkillId, SkillNode>,
}

impl SkillTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node, returning the node previously stored under the same id.
    pub fn insert(&mut self, node: SkillNode) -> Option<SkillNode> {
        self.nodes.insert(node.id.clone(), node)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<SkillNode> for SkillTable {
    fn from_iter<T: IntoIterator<Item = SkillNode>>(iter: T) -> Self {
        let mut table = Self::new();
        for node in iter {
            table.insert(node);
        }
        table
    }
}

impl SkillOracle for SkillTable {
    fn skill(&self, id: &SkillId) -> Option<&SkillNode> {
        self.nodes.get(id)
    }

    fn class_skills(&self, class: CharacterClass) -> Vec<&SkillNode> {
        self.nodes
            .values()
            .filter(|node| node.class == Some(class))
            .collect()
    }
}
