//! Global minimum cut of a wiring diagram.

use std::convert::Infallible;

use anyhow::{Result, bail};
use rustworkx_core::connectivity::stoer_wagner_min_cut;
use tracing::info;

use crate::diagram::Diagram;

/// A minimum cut: how many wires it severs and how big each side is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cut {
    pub wires: usize,
    pub groups: [usize; 2],
}

impl Cut {
    pub fn product(&self) -> usize {
        self.groups[0] * self.groups[1]
    }
}

/// Every wire weighs 1, so the cut weight is the number of severed wires.
pub fn min_cut(diagram: &Diagram) -> Result<Cut> {
    let components = diagram.component_count();
    let result: Result<Option<(usize, Vec<_>)>, Infallible> =
        stoer_wagner_min_cut(diagram.graph(), |_| Ok(1));
    let Ok(Some((wires, side))) = result else {
        bail!("need at least two components to cut, diagram has {components}");
    };
    let cut = Cut {
        wires,
        groups: [side.len(), components - side.len()],
    };
    info!(wires = cut.wires, groups = ?cut.groups, "minimum cut found");
    Ok(cut)
}
