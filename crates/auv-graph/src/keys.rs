//! Globally unique graph element keys.

use std::fmt;

use auv_core::AgentId;

/// Key of a pose-graph vertex: the agent that created it plus that agent's
/// own vertex sequence number.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct VertexKey {
    pub owner: AgentId,
    pub seq: u32,
}

impl VertexKey {
    #[inline]
    pub fn new(owner: AgentId, seq: u32) -> Self {
        Self { owner, seq }
    }
}

impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}:{}", self.owner.0, self.seq)
    }
}

/// Key of a pose-graph edge, namespaced by its creating agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct EdgeKey {
    pub owner: AgentId,
    pub seq: u32,
}

impl EdgeKey {
    #[inline]
    pub fn new(owner: AgentId, seq: u32) -> Self {
        Self { owner, seq }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}:{}", self.owner.0, self.seq)
    }
}
