use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    Cat,
    Mouse,
}

impl Agent {
    pub fn opponent(self) -> Agent {
        match self {
            Agent::Cat => Agent::Mouse,
            Agent::Mouse => Agent::Cat,
        }
    }

    /// The cat maximizes the evaluation, the mouse minimizes it.
    pub fn is_maximizer(self) -> bool {
        self == Agent::Cat
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Agent::Cat => write!(f, "cat"),
            Agent::Mouse => write!(f, "mouse"),
        }
    }
}

/// Who picks an agent's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlType {
    Human,
    Ai,
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlType::Human => write!(f, "human"),
            ControlType::Ai => write!(f, "ai"),
        }
    }
}

/// Which agents are human-controlled in a match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    AiVsAi,
    HumanMouseVsAi,
    HumanCatVsAi,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [
        GameMode::AiVsAi,
        GameMode::HumanMouseVsAi,
        GameMode::HumanCatVsAi,
    ];

    pub fn control_of(self, agent: Agent) -> ControlType {
        match (self, agent) {
            (GameMode::HumanMouseVsAi, Agent::Mouse) | (GameMode::HumanCatVsAi, Agent::Cat) => {
                ControlType::Human
            }
            _ => ControlType::Ai,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameMode::AiVsAi => "ai_vs_ai",
            GameMode::HumanMouseVsAi => "human_mouse_vs_ai",
            GameMode::HumanCatVsAi => "human_cat_vs_ai",
        };
        f.write_str(label)
    }
}
