//! Graph operations for Figure (add parts, connect)

use uuid::Uuid;

use super::{ConnectOptions, Figure, Joint, JointHandle, Node};
use crate::anchor::ConnectionPoint;
use crate::error::FigureError;
use crate::part::Part;
use crate::types::Pose;

impl Figure {
    /// Register a detached part; it joins the tree once connected
    pub fn add_part(&mut self, part: Part) -> Result<Uuid, FigureError> {
        if self.nodes.contains_key(&part.id) {
            return Err(FigureError::DuplicateId(part.id));
        }
        if self.name_index.contains_key(&part.name) {
            return Err(FigureError::DuplicateName(part.name));
        }

        let id = part.id;
        self.name_index.insert(part.name.clone(), id);
        self.nodes.insert(id, Node::Part(part));
        Ok(id)
    }

    /// Place `child` so its `child_anchor` lands on `parent`'s `parent_anchor`
    /// and attach it beneath the parent (or beneath a new joint node).
    ///
    /// The parent anchor is resolved in world space through the parent's
    /// whole ancestor chain, then mapped back into the frame the child will
    /// live in, so rotated ancestors are handled.
    pub fn connect(
        &mut self,
        parent_id: Uuid,
        parent_anchor: ConnectionPoint,
        child_id: Uuid,
        child_anchor: ConnectionPoint,
        options: ConnectOptions,
    ) -> Result<JointHandle, FigureError> {
        if !options.spacer.is_finite() || options.spacer < 0.0 {
            return Err(FigureError::NegativeSpacer(options.spacer));
        }

        let parent = self.require_part(parent_id)?;
        let child = self.require_part(child_id)?;

        if parent_id == child_id {
            return Err(FigureError::SelfConnection(child.name.clone()));
        }
        if !self.is_attached(parent_id) {
            return Err(FigureError::DetachedParent(parent.name.clone()));
        }
        if self.is_attached(child_id) {
            return Err(FigureError::AlreadyAttached(child.name.clone()));
        }

        let joint_name = Joint::name_for(&parent.name, &child.name);
        if options.joint && self.name_index.contains_key(&joint_name) {
            return Err(FigureError::DuplicateName(joint_name));
        }

        // Orientation the child will have once placed
        let rotation = match options.pre_rotation {
            Some(pre) => (pre * child.pose.rotation).normalize(),
            None => child.pose.rotation,
        };

        // Target point in world space, pushed out by the spacer
        let parent_world = self.world_transform(parent_id)?;
        let parent_anchor_local = parent.anchor_local(parent_anchor);
        let anchor_world = parent_world.transform_point3(parent_anchor_local);
        let direction_world = parent_world
            .transform_vector3(parent.direction_vector(parent_anchor))
            .normalize();
        let target_world = anchor_world + direction_world * options.spacer;

        // Frame the child is attached under
        let joint = options
            .joint
            .then(|| Joint::new(joint_name.clone(), Pose::from_position(parent_anchor_local)));
        let frame_world = match &joint {
            Some(joint) => parent_world * joint.pose.to_mat4(),
            None => parent_world,
        };

        // Child center = target minus the rotated center-to-anchor offset
        let anchor_offset = rotation * child.anchor_local(child_anchor);
        let position = frame_world.inverse().transform_point3(target_world) - anchor_offset;

        let handle = JointHandle {
            name: joint_name,
            joint: joint.as_ref().map(|j| j.id),
            parent: parent_id,
            parent_anchor,
            child: child_id,
            child_anchor,
            spacer: options.spacer,
        };

        tracing::debug!(
            "Connecting {} ({}) to {} ({}) at {:?}",
            parent.name,
            parent_anchor,
            child.name,
            child_anchor,
            position
        );

        // All checks passed; mutate the graph
        let attach_to = match joint {
            Some(joint) => {
                let joint_id = joint.id;
                self.name_index.insert(joint.name.clone(), joint_id);
                self.nodes.insert(joint_id, Node::Joint(joint));
                self.link(parent_id, joint_id);
                joint_id
            }
            None => parent_id,
        };

        if let Some(Node::Part(child)) = self.nodes.get_mut(&child_id) {
            child.pose = Pose::new(position, rotation);
        }
        self.link(attach_to, child_id);
        self.connections.insert(child_id, handle.clone());

        Ok(handle)
    }

    /// Register `part` and connect it in one step.
    ///
    /// If the connection fails the part is not kept in the figure.
    pub fn attach(
        &mut self,
        parent_id: Uuid,
        parent_anchor: ConnectionPoint,
        part: Part,
        child_anchor: ConnectionPoint,
        options: ConnectOptions,
    ) -> Result<JointHandle, FigureError> {
        let child_id = self.add_part(part)?;
        match self.connect(parent_id, parent_anchor, child_id, child_anchor, options) {
            Ok(handle) => Ok(handle),
            Err(e) => {
                if let Some(node) = self.nodes.remove(&child_id) {
                    self.name_index.remove(node.name());
                }
                Err(e)
            }
        }
    }

    fn link(&mut self, parent_id: Uuid, child_id: Uuid) {
        self.children.entry(parent_id).or_default().push(child_id);
        self.parent.insert(child_id, parent_id);
    }
}
