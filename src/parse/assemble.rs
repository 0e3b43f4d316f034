use log::warn;

use crate::data_structs::Feature;

/// Resolves the flat feature list into a forest by declared parent id.
///
/// Each pass places every parentless feature as a root (in encounter
/// order) and attaches parented features beneath an already-placed node
/// anywhere in the forest. Passes repeat while progress is made; features
/// whose parent never resolves are logged and discarded.
///
/// No current extraction rule populates parent ids, so in practice every
/// feature becomes a root; the resolution loop is kept as a general
/// capability.
pub(crate) fn assemble_forest(mut pending: Vec<Feature>) -> Vec<Feature> {
    let mut roots: Vec<Feature> = Vec::with_capacity(pending.len());

    let mut progress = true;
    while progress && !pending.is_empty() {
        progress = false;
        let mut unplaced = Vec::new();

        for feature in pending {
            match feature.parent.clone() {
                None => {
                    roots.push(feature);
                    progress = true;
                },
                Some(parent_id) => {
                    if let Some(node) = find_node(&mut roots, &parent_id) {
                        node.children.push(feature);
                        progress = true;
                    }
                    else {
                        unplaced.push(feature);
                    }
                },
            }
        }
        pending = unplaced;
    }

    for feature in &pending {
        warn!(
            "feature {} ({}) references unknown parent {:?}; dropped",
            feature.id_str(),
            feature.feature_type,
            feature.parent
        );
    }

    roots
}

/// Depth-first search for a node by id through the whole forest, not only
/// the roots.
fn find_node<'a>(
    nodes: &'a mut [Feature],
    id: &str,
) -> Option<&'a mut Feature> {
    for node in nodes {
        if node.id_str() == id {
            return Some(node);
        }
        if let Some(found) = find_node(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}
