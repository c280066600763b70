//! Wiring diagram input.

use std::collections::HashMap;

use anyhow::{Result, bail};
use rustworkx_core::petgraph::graph::{NodeIndex, UnGraph};
use tracing::debug;

/// Components as nodes, one unit-weight edge per distinct wire.
#[derive(Debug, Default)]
pub struct Diagram {
    graph: UnGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl Diagram {
    pub fn graph(&self) -> &UnGraph<String, ()> {
        &self.graph
    }

    pub fn component_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn wire_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_wired(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    fn component(&mut self, name: &str) -> NodeIndex {
        if let Some(&node) = self.index.get(name) {
            return node;
        }
        let node = self.graph.add_node(name.to_string());
        self.index.insert(name.to_string(), node);
        node
    }

    fn wire(&mut self, a: &str, b: &str) {
        let a = self.component(a);
        let b = self.component(b);
        self.graph.update_edge(a, b, ());
    }
}

/// Parse every non-blank line; repeated wires collapse to one edge.
pub fn parse_diagram(input: &str) -> Result<Diagram> {
    let mut diagram = Diagram::default();
    for (index, text) in input.lines().enumerate() {
        let line = index + 1;
        if text.trim().is_empty() {
            continue;
        }
        let Some((name, others)) = text.split_once(':') else {
            bail!("line {line}: expected `name: other ...`, found {:?}", text.trim());
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("line {line}: missing component name");
        }
        let mut connected = false;
        for other in others.split_whitespace() {
            if other == name {
                bail!("line {line}: {name} is wired to itself");
            }
            diagram.wire(name, other);
            connected = true;
        }
        if !connected {
            bail!("line {line}: {name} has no connections");
        }
    }
    debug!(
        components = diagram.component_count(),
        wires = diagram.wire_count(),
        "diagram parsed"
    );
    Ok(diagram)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wires_are_undirected_and_deduplicated() {
        let diagram = parse_diagram("a: b c\nb: a\n\nc: d\n").expect("parse");
        assert_eq!(diagram.component_count(), 4);
        assert_eq!(diagram.wire_count(), 3);
        assert!(diagram.is_wired("b", "a"));
        assert!(diagram.is_wired("d", "c"));
        assert!(!diagram.is_wired("a", "d"));
        assert!(!diagram.is_wired("a", "zzz"));
    }

    #[test]
    fn malformed_lines_name_the_line() {
        let err = parse_diagram("a: b\nc d\n").expect_err("no colon");
        assert!(err.to_string().starts_with("line 2:"));

        let err = parse_diagram(" : b\n").expect_err("no name");
        assert!(err.to_string().contains("missing component name"));

        let err = parse_diagram("a: b\n\nc:   \n").expect_err("no wires");
        assert_eq!(err.to_string(), "line 3: c has no connections");

        let err = parse_diagram("a: a\n").expect_err("loop");
        assert!(err.to_string().contains("wired to itself"));
    }
}
