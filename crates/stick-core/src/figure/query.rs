//! Query helpers and validation for Figure

use std::collections::HashSet;

use uuid::Uuid;

use super::{Figure, JointHandle, Node};
use crate::error::FigureError;
use crate::part::Part;

impl Figure {
    /// Find a node by name (O(1) lookup)
    pub fn find_by_name(&self, name: &str) -> Option<&Node> {
        self.name_index.get(name).and_then(|id| self.nodes.get(id))
    }

    /// Find a node ID by name (O(1) lookup)
    pub fn find_id_by_name(&self, name: &str) -> Option<Uuid> {
        self.name_index.get(name).copied()
    }

    /// Find a part by name
    pub fn find_part_by_name(&self, name: &str) -> Option<&Part> {
        self.find_by_name(name).and_then(Node::as_part)
    }

    /// Get the node a given node hangs from
    pub fn parent_of(&self, id: Uuid) -> Option<Uuid> {
        self.parent.get(&id).copied()
    }

    /// Get the direct children of a node, in attachment order
    pub fn children_of(&self, id: Uuid) -> &[Uuid] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get the connection that attached a part
    pub fn connection_to(&self, child_id: Uuid) -> Option<&JointHandle> {
        self.connections.get(&child_id)
    }

    /// Get the chain of node IDs from a node up to the root
    ///
    /// Empty if the node is unknown or its parent links loop.
    pub fn chain_to_root(&self, id: Uuid) -> Vec<Uuid> {
        self.ancestor_chain(id).unwrap_or_default()
    }

    /// Chain from a node up to the root, failing on a parent loop
    pub(crate) fn ancestor_chain(&self, id: Uuid) -> Result<Vec<Uuid>, FigureError> {
        if !self.nodes.contains_key(&id) {
            return Err(FigureError::NodeNotFound(id));
        }

        let mut chain = vec![id];
        let mut seen = HashSet::from([id]);
        let mut current = id;
        while let Some(parent_id) = self.parent.get(&current) {
            if !seen.insert(*parent_id) {
                return Err(FigureError::Cycle(*parent_id));
            }
            chain.push(*parent_id);
            current = *parent_id;
        }
        Ok(chain)
    }

    /// Node depth from root (root = 0); joints count as a level
    pub fn depth(&self, id: Uuid) -> Option<usize> {
        if !self.is_attached(id) {
            return None;
        }
        self.ancestor_chain(id).ok().map(|chain| chain.len() - 1)
    }

    /// Get all attached nodes in depth-first order from root
    pub fn nodes_depth_first(&self) -> Vec<Uuid> {
        self.walk_depth_first().0
    }

    /// Depth-first walk from the root, visiting each node once.
    /// Also returns the nodes that were reached a second time.
    fn walk_depth_first(&self) -> (Vec<Uuid>, Vec<Uuid>) {
        let mut order = Vec::new();
        let mut repeated = Vec::new();
        let mut visited = HashSet::new();
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                repeated.push(id);
                continue;
            }
            order.push(id);
            stack.extend(self.children_of(id).iter().rev());
        }

        (order, repeated)
    }

    /// Parts registered but never connected
    pub fn detached_parts(&self) -> Vec<&Part> {
        self.parts().filter(|p| !self.is_attached(p.id)).collect()
    }

    /// Validate the figure's tree structure
    pub fn validate(&self) -> Result<(), Vec<FigureError>> {
        let mut errors = Vec::new();

        if !matches!(self.nodes.get(&self.root), Some(Node::Part(_))) {
            errors.push(FigureError::DanglingReference(self.root));
        }
        if self.parent.contains_key(&self.root) {
            errors.push(FigureError::RootHasParent(self.root));
        }

        // Every edge must point at known nodes
        for (child_id, parent_id) in &self.parent {
            for id in [child_id, parent_id] {
                if !self.nodes.contains_key(id) {
                    errors.push(FigureError::DanglingReference(*id));
                }
            }
            if !self.children_of(*parent_id).contains(child_id) {
                errors.push(FigureError::DanglingReference(*child_id));
            }
            if let Err(e @ FigureError::Cycle(_)) = self.ancestor_chain(*child_id)
                && !errors.contains(&e)
            {
                errors.push(e);
            }
        }

        // Child lists must agree with the parent links
        for (parent_id, children) in &self.children {
            for child_id in children {
                if self.parent.get(child_id) != Some(parent_id) {
                    errors.push(FigureError::DanglingReference(*child_id));
                }
            }
        }

        // Parts unreachable from the root, and nodes reached twice
        let (order, repeated) = self.walk_depth_first();
        for id in repeated {
            let error = FigureError::Cycle(id);
            if !errors.contains(&error) {
                errors.push(error);
            }
        }
        let reachable: HashSet<Uuid> = order.into_iter().collect();
        for part in self.parts() {
            if !reachable.contains(&part.id) {
                errors.push(FigureError::OrphanedPart(part.id));
            }
        }

        for handle in self.connections.values() {
            if !reachable.contains(&handle.child) || !reachable.contains(&handle.parent) {
                errors.push(FigureError::DanglingReference(handle.child));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::ConnectionPoint;
    use crate::figure::ConnectOptions;

    fn sample() -> (Figure, Uuid, JointHandle, JointHandle) {
        let root = Part::new("torso", 0.4, 3.0).unwrap();
        let root_id = root.id;
        let mut figure = Figure::new("figure", root);
        let neck = figure
            .attach(
                root_id,
                ConnectionPoint::Y1,
                Part::new("neck", 0.1, 0.4).unwrap(),
                ConnectionPoint::Y2,
                ConnectOptions::default(),
            )
            .unwrap();
        let arm = figure
            .attach(
                root_id,
                ConnectionPoint::X1,
                Part::new("arm", 0.1, 2.0).unwrap(),
                ConnectionPoint::Y1,
                ConnectOptions::new().with_joint(),
            )
            .unwrap();
        (figure, root_id, neck, arm)
    }

    #[test]
    fn test_queries() {
        let (figure, root_id, neck, arm) = sample();
        let joint_id = arm.joint.unwrap();

        assert_eq!(figure.find_id_by_name("neck"), Some(neck.child));
        assert!(figure.find_part_by_name("torso_to_arm_joint").is_none());
        assert!(figure.find_by_name("torso_to_arm_joint").is_some());
        assert_eq!(figure.children_of(root_id), &[neck.child, joint_id]);
        assert_eq!(figure.chain_to_root(arm.child), vec![arm.child, joint_id, root_id]);
        assert_eq!(figure.depth(root_id), Some(0));
        assert_eq!(figure.depth(arm.child), Some(2));
        assert_eq!(figure.connection_to(neck.child), Some(&neck));
        assert!(figure.connection_to(root_id).is_none());
        assert_eq!(figure.part_count(), 3);
        assert_eq!(figure.joint_count(), 1);
        assert_eq!(
            figure.nodes_depth_first(),
            vec![root_id, neck.child, joint_id, arm.child]
        );
    }

    #[test]
    fn test_validate_reports_detached_parts() {
        let (mut figure, _, _, _) = sample();
        assert!(figure.validate().is_ok());

        let loose = figure.add_part(Part::new("loose", 0.1, 0.1).unwrap()).unwrap();
        assert_eq!(figure.depth(loose), None);
        assert_eq!(figure.detached_parts().len(), 1);
        assert_eq!(figure.validate(), Err(vec![FigureError::OrphanedPart(loose)]));
    }

    #[test]
    fn test_validate_reports_child_list_cycle() {
        let (figure, root_id, neck, _) = sample();
        let text = ron::to_string(&figure).unwrap();
        let mut restored: Figure = ron::from_str(&text).unwrap();
        restored.rebuild_indices();

        // Hand-edited file lists the root under its own descendant
        restored.children.entry(neck.child).or_default().push(root_id);

        let errors = restored.validate().unwrap_err();
        assert!(errors.contains(&FigureError::Cycle(root_id)));
        assert!(errors.contains(&FigureError::DanglingReference(root_id)));
        assert_eq!(restored.nodes_depth_first().len(), figure.nodes_depth_first().len());
        assert_eq!(restored.world_transforms().len(), figure.world_transforms().len());
    }

    #[test]
    fn test_parent_loop_is_reported() {
        let (mut figure, root_id, neck, _) = sample();
        figure.parent.insert(root_id, neck.child);

        assert!(figure.chain_to_root(neck.child).is_empty());
        assert_eq!(figure.depth(neck.child), None);
        assert!(matches!(
            figure.world_transform(neck.child),
            Err(FigureError::Cycle(_))
        ));

        let errors = figure.validate().unwrap_err();
        assert!(errors.contains(&FigureError::RootHasParent(root_id)));
        assert!(errors.iter().any(|e| matches!(e, FigureError::Cycle(_))));
    }

    #[test]
    fn test_serde_round_trip_rebuilds_indices() {
        let (figure, _, neck, _) = sample();
        let text = ron::to_string(&figure).unwrap();
        let mut restored: Figure = ron::from_str(&text).unwrap();

        assert!(restored.find_by_name("neck").is_none());
        restored.rebuild_indices();
        assert_eq!(restored, figure);
        assert_eq!(restored.find_id_by_name("neck"), Some(neck.child));
        assert!(restored.validate().is_ok());
    }
}
