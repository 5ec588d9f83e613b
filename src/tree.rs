// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parsed document trees and a depth-first walker over them.
//!
//! Pages arrive as mdast-style JSON: every node has a `type`, parents have
//! `children`, leaves carry a literal `value`, and headings add `depth` plus
//! an anchor (`identifier`, or `html_id` when the renderer assigned one).
//! Anything else on a node is ignored.

use serde::{Deserialize, Serialize};

/// One node of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Heading depth. Validated when the heading is sectionized, not here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, alias = "html-id", skip_serializing_if = "Option::is_none")]
    pub html_id: Option<String>,
}

impl Node {
    pub fn is(&self, node_type: &str) -> bool {
        self.node_type == node_type
    }

    /// Anchor to link to: the rendered HTML id if present, else the identifier.
    pub fn anchor(&self) -> Option<&str> {
        self.html_id.as_deref().or(self.identifier.as_deref())
    }
}

/// What the walker should do after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Continue,
    /// Don't descend, and don't call `depart` for this node.
    SkipChildren,
}

/// Callbacks for [`walk`].
pub trait Visitor {
    type Error;

    /// Called before a node's children (pre-order).
    fn visit(&mut self, node: &Node) -> Result<Visit, Self::Error>;

    /// Called after a node's children (post-order).
    fn depart(&mut self, _node: &Node) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Depth-first walk with pre-order `visit` and post-order `depart`.
///
/// Stops at the first error.
pub fn walk<V: Visitor>(node: &Node, visitor: &mut V) -> Result<(), V::Error> {
    if visitor.visit(node)? == Visit::SkipChildren {
        return Ok(());
    }
    for child in &node.children {
        walk(child, visitor)?;
    }
    visitor.depart(node)
}

/// Remove every descendant whose type is in `node_types`, along with its subtree.
///
/// The root itself is never removed.
pub fn prune<S: AsRef<str>>(node: &mut Node, node_types: &[S]) {
    node.children
        .retain(|child| !node_types.iter().any(|t| child.is(t.as_ref())));
    for child in &mut node.children {
        prune(child, node_types);
    }
}

/// Concatenated literal text under a node (the node's own value included).
pub fn to_text(node: &Node) -> String {
    struct Collect(String);

    impl Visitor for Collect {
        type Error = std::convert::Infallible;

        fn visit(&mut self, node: &Node) -> Result<Visit, Self::Error> {
            if let Some(value) = &node.value {
                self.0.push_str(value);
            }
            Ok(Visit::Continue)
        }
    }

    let mut collect = Collect(String::new());
    match walk(node, &mut collect) {
        Ok(()) => collect.0,
        Err(never) => match never {},
    }
}
