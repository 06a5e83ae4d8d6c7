//! Rendering options for diagram export.

use serde::{Deserialize, Serialize};

/// Layout direction of the rendered graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub enum RankDir {
    #[default]
    #[serde(rename = "TB")]
    TopToBottom,
    #[serde(rename = "LR")]
    LeftToRight,
    #[serde(rename = "BT")]
    BottomToTop,
    #[serde(rename = "RL")]
    RightToLeft,
}

impl RankDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopToBottom => "TB",
            Self::LeftToRight => "LR",
            Self::BottomToTop => "BT",
            Self::RightToLeft => "RL",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagramOptions {
    #[serde(default = "default_graph_name")]
    pub graph_name: String,

    #[serde(default)]
    pub rank_dir: RankDir,

    /// Print the transition name on each edge.
    #[serde(default = "default_true")]
    pub label_edges: bool,

    /// Draw the initial state with a double border.
    #[serde(default = "default_true")]
    pub mark_initial: bool,
}

fn default_graph_name() -> String {
    "G".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            graph_name: default_graph_name(),
            rank_dir: RankDir::default(),
            label_edges: true,
            mark_initial: true,
        }
    }
}
