use std::collections::{HashMap, HashSet};

use serde::Serialize;
use uuid::Uuid;

use super::entities::CodeCategory;

#[derive(Debug, Clone, Serialize)]
pub struct CodeCategoryNode {
    #[serde(flatten)]
    pub category: CodeCategory,
    pub children: Vec<CodeCategoryNode>,
}

/// Builds the category forest from flat rows. A category whose parent is
/// missing is promoted to a root. Sibling order follows input order.
pub fn build_hierarchy(categories: Vec<CodeCategory>) -> Vec<CodeCategoryNode> {
    let known: HashSet<Uuid> = categories.iter().map(|c| c.id).collect();

    let mut roots = Vec::new();
    let mut children: HashMap<Uuid, Vec<CodeCategory>> = HashMap::new();

    for category in categories {
        match category.parent_id {
            Some(parent) if known.contains(&parent) => {
                children.entry(parent).or_default().push(category)
            }
            _ => roots.push(category),
        }
    }

    let mut visited = HashSet::new();
    roots
        .into_iter()
        .map(|root| attach(root, &mut children, &mut visited))
        .collect()
}

fn attach(
    category: CodeCategory,
    children: &mut HashMap<Uuid, Vec<CodeCategory>>,
    visited: &mut HashSet<Uuid>,
) -> CodeCategoryNode {
    visited.insert(category.id);

    let mut nodes = Vec::new();
    for child in children.remove(&category.id).unwrap_or_default() {
        if !visited.contains(&child.id) {
            nodes.push(attach(child, children, visited));
        }
    }

    CodeCategoryNode {
        category,
        children: nodes,
    }
}

/// True when pointing `id` at `new_parent` would close a loop, i.e. `id` is
/// `new_parent` itself or one of its ancestors.
pub fn creates_cycle(id: Uuid, new_parent: Uuid, categories: &[CodeCategory]) -> bool {
    let parent_of: HashMap<Uuid, Option<Uuid>> =
        categories.iter().map(|c| (c.id, c.parent_id)).collect();

    let mut seen = HashSet::new();
    let mut current = Some(new_parent);

    while let Some(node) = current {
        if node == id {
            return true;
        }
        // stored data already loops; stop walking
        if !seen.insert(node) {
            return false;
        }
        current = parent_of.get(&node).copied().flatten();
    }

    false
}
