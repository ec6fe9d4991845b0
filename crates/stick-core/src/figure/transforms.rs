//! World transform calculations for Figure

use std::collections::HashSet;

use glam::{Mat4, Vec3};
use uuid::Uuid;

use super::Figure;
use crate::anchor::ConnectionPoint;
use crate::error::FigureError;

impl Figure {
    /// Get the world transform of a node
    ///
    /// Detached parts are treated as if they hung from the world origin.
    pub fn world_transform(&self, id: Uuid) -> Result<Mat4, FigureError> {
        let chain = self.ancestor_chain(id)?;

        // Apply transforms from root to node
        let mut transform = Mat4::IDENTITY;
        for node_id in chain.into_iter().rev() {
            let node = self
                .nodes
                .get(&node_id)
                .ok_or(FigureError::DanglingReference(node_id))?;
            transform *= node.pose().to_mat4();
        }

        Ok(transform)
    }

    /// World-space position of a part's anchor
    pub fn world_anchor(&self, part_id: Uuid, anchor: ConnectionPoint) -> Result<Vec3, FigureError> {
        let part = self.require_part(part_id)?;
        let transform = self.world_transform(part_id)?;
        Ok(transform.transform_point3(part.anchor_local(anchor)))
    }

    /// World-space outward direction of a part's anchor
    pub fn world_direction(
        &self,
        part_id: Uuid,
        anchor: ConnectionPoint,
    ) -> Result<Vec3, FigureError> {
        let part = self.require_part(part_id)?;
        let transform = self.world_transform(part_id)?;
        Ok(transform
            .transform_vector3(part.direction_vector(anchor))
            .normalize())
    }

    /// World transforms of every attached node, depth-first from the root
    ///
    /// Each node is visited once; a node listed again under another parent
    /// is skipped.
    pub fn world_transforms(&self) -> Vec<(Uuid, Mat4)> {
        let mut result = Vec::new();
        let mut visited = HashSet::new();
        let mut stack = vec![(self.root, Mat4::IDENTITY)];

        while let Some((id, parent_transform)) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            let transform = parent_transform * node.pose().to_mat4();
            result.push((id, transform));

            stack.extend(self.children_of(id).iter().rev().map(|c| (*c, transform)));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::Quat;

    use super::*;
    use crate::figure::ConnectOptions;
    use crate::part::Part;
    use crate::types::Pose;

    #[test]
    fn test_world_transform_composes_chain() {
        let mut root = Part::new("root", 0.5, 1.0).unwrap();
        root.pose = Pose::new(Vec3::new(0.0, 5.0, 0.0), Quat::from_rotation_z(FRAC_PI_2));
        let root_id = root.id;
        let mut figure = Figure::new("figure", root);
        let child = figure
            .attach(
                root_id,
                ConnectionPoint::Y1,
                Part::new("child", 0.5, 1.0).unwrap(),
                ConnectionPoint::Y2,
                ConnectOptions::default(),
            )
            .unwrap();

        // Root's +Y points along world -X after the quarter turn
        let world = figure.world_transform(child.child).unwrap();
        let center = world.transform_point3(Vec3::ZERO);
        assert!((center - Vec3::new(-2.0, 5.0, 0.0)).length() < 1e-5);

        let direction = figure.world_direction(root_id, ConnectionPoint::Y1).unwrap();
        assert!((direction - Vec3::NEG_X).length() < 1e-6);
    }

    #[test]
    fn test_world_transforms_cover_attached_nodes() {
        let root = Part::new("root", 0.5, 1.0).unwrap();
        let root_id = root.id;
        let mut figure = Figure::new("figure", root);
        figure
            .attach(
                root_id,
                ConnectionPoint::Y2,
                Part::new("a", 0.1, 0.1).unwrap(),
                ConnectionPoint::Y1,
                ConnectOptions::new().with_joint(),
            )
            .unwrap();
        figure.add_part(Part::new("loose", 0.1, 0.1).unwrap()).unwrap();

        let transforms = figure.world_transforms();
        assert_eq!(transforms.len(), 3);
        assert_eq!(transforms[0].0, root_id);

        for (id, transform) in &transforms {
            assert!(transform.abs_diff_eq(figure.world_transform(*id).unwrap(), 1e-6));
        }
    }

    #[test]
    fn test_world_transform_unknown_node() {
        let figure = Figure::new("figure", Part::new("root", 0.5, 1.0).unwrap());
        let missing = Uuid::new_v4();
        assert_eq!(figure.world_transform(missing), Err(FigureError::NodeNotFound(missing)));
    }
}
