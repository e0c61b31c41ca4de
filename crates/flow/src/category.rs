//! Contains [NodeCategory], the role tag every flow node carries.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The role of a node in the flow. Fixed when the node is created.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    Start,
    End,
    Connector,
    Transformation,
    Job,
}

impl NodeCategory {
    /// Every category, in display order.
    pub const ALL: [NodeCategory; 5] = [
        NodeCategory::Start,
        NodeCategory::End,
        NodeCategory::Connector,
        NodeCategory::Transformation,
        NodeCategory::Job,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeCategory::Start => "start",
            NodeCategory::End => "end",
            NodeCategory::Connector => "connector",
            NodeCategory::Transformation => "transformation",
            NodeCategory::Job => "job",
        }
    }

    /// Whether nodes of this category are the graph's fixed singletons.
    pub fn is_fixed(self) -> bool {
        matches!(self, NodeCategory::Start | NodeCategory::End)
    }
}

impl Display for NodeCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

/// Indicates that a string isn't the name of any [NodeCategory].
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("Unknown node category `{0}`")]
pub struct ParseCategoryError(pub String);
