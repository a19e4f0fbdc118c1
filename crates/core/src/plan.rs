//! Static execution plan of a job, as shown to monitoring consumers.

use serde::{Deserialize, Serialize};

/// The job plan: identity plus the operator nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Job id, as text.
    pub jid: String,
    pub name: String,
    /// Free-form plan type description; empty when unknown.
    #[serde(rename = "type")]
    pub plan_type: String,
    pub nodes: Vec<PlanNode>,
}

impl Plan {
    pub fn new(
        jid: impl Into<String>,
        name: impl Into<String>,
        plan_type: impl Into<String>,
        nodes: Vec<PlanNode>,
    ) -> Self {
        Self {
            jid: jid.into(),
            name: name.into(),
            plan_type: plan_type.into(),
            nodes,
        }
    }

    /// Look up a node by its id.
    pub fn node(&self, id: &str) -> Option<&PlanNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// One operator node of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanNode {
    pub id: String,
    pub parallelism: u32,
    pub operator: String,
    pub operator_strategy: String,
    pub description: String,
    pub inputs: Vec<PlanNodeInput>,
}

/// An edge into a plan node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanNodeInput {
    pub num: u32,
    /// Id of the upstream node.
    pub id: String,
    pub ship_strategy: String,
    pub exchange: String,
}
