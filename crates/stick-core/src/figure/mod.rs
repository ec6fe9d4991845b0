//! Figure (scene graph) of connected body parts
//!
//! The figure owns every node. Each node's children are held in an ordered
//! list under its id, and `parent` maps a child back to the node it hangs
//! from. Parts can be registered detached and connected later.

mod graph;
mod joint;
mod query;
mod transforms;

pub use joint::*;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FigureError;
use crate::part::Part;
use crate::types::Pose;

/// A node in the figure's scene graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Part(Part),
    Joint(Joint),
}

impl Node {
    pub fn id(&self) -> Uuid {
        match self {
            Node::Part(part) => part.id,
            Node::Joint(joint) => joint.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Part(part) => &part.name,
            Node::Joint(joint) => &joint.name,
        }
    }

    /// Pose in the parent node's frame
    pub fn pose(&self) -> &Pose {
        match self {
            Node::Part(part) => &part.pose,
            Node::Joint(joint) => &joint.pose,
        }
    }

    pub fn as_part(&self) -> Option<&Part> {
        match self {
            Node::Part(part) => Some(part),
            Node::Joint(_) => None,
        }
    }

    pub fn as_joint(&self) -> Option<&Joint> {
        match self {
            Node::Joint(joint) => Some(joint),
            Node::Part(_) => None,
        }
    }
}

/// Stick figure: a tree of parts rooted at one part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub name: String,
    /// Root part ID
    root: Uuid,
    /// All nodes, attached or not
    nodes: HashMap<Uuid, Node>,
    /// Children mapping: node -> [child nodes]
    children: HashMap<Uuid, Vec<Uuid>>,
    /// Parent mapping: child node -> parent node
    parent: HashMap<Uuid, Uuid>,
    /// Incoming connection of every attached non-root part
    connections: HashMap<Uuid, JointHandle>,
    /// Name to ID index (O(1) lookup)
    #[serde(skip)]
    name_index: HashMap<String, Uuid>,
}

impl Figure {
    /// Create a figure rooted at `root`
    pub fn new(name: impl Into<String>, root: Part) -> Self {
        let root_id = root.id;
        let mut name_index = HashMap::new();
        name_index.insert(root.name.clone(), root_id);

        let mut nodes = HashMap::new();
        nodes.insert(root_id, Node::Part(root));

        Self {
            name: name.into(),
            root: root_id,
            nodes,
            children: HashMap::new(),
            parent: HashMap::new(),
            connections: HashMap::new(),
            name_index,
        }
    }

    /// Rebuild name index (call after deserialization)
    pub fn rebuild_indices(&mut self) {
        self.name_index.clear();
        for (id, node) in &self.nodes {
            self.name_index.insert(node.name().to_string(), *id);
        }
    }

    /// Root part ID
    pub fn root(&self) -> Uuid {
        self.root
    }

    /// Root part
    pub fn root_part(&self) -> Option<&Part> {
        self.part(self.root)
    }

    pub fn node(&self, id: Uuid) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn part(&self, id: Uuid) -> Option<&Part> {
        self.nodes.get(&id).and_then(Node::as_part)
    }

    pub fn joint(&self, id: Uuid) -> Option<&Joint> {
        self.nodes.get(&id).and_then(Node::as_joint)
    }

    /// Get a part or the error explaining why it is not one
    pub(crate) fn require_part(&self, id: Uuid) -> Result<&Part, FigureError> {
        match self.nodes.get(&id) {
            Some(Node::Part(part)) => Ok(part),
            Some(Node::Joint(_)) => Err(FigureError::NotAPart(id)),
            None => Err(FigureError::NodeNotFound(id)),
        }
    }

    /// Iterate over all parts, attached or not
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.nodes.values().filter_map(Node::as_part)
    }

    /// Iterate over all joint nodes
    pub fn joints(&self) -> impl Iterator<Item = &Joint> {
        self.nodes.values().filter_map(Node::as_joint)
    }

    /// All recorded connections
    pub fn connections(&self) -> impl Iterator<Item = &JointHandle> {
        self.connections.values()
    }

    pub fn part_count(&self) -> usize {
        self.parts().count()
    }

    pub fn joint_count(&self) -> usize {
        self.joints().count()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True if the node is the root or hangs beneath another node
    pub fn is_attached(&self, id: Uuid) -> bool {
        id == self.root || self.parent.contains_key(&id)
    }
}
