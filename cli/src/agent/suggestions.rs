//! Preset prompts shown when a conversation is still empty.
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub title: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}

pub const SUGGESTIONS: [Suggestion; 4] = [
    Suggestion {
        title: "💡 Capabilities",
        description: "Learn what I can do",
        prompt: "What can you help me with?",
    },
    Suggestion {
        title: "✍️ Creative Writing",
        description: "Generate creative content",
        prompt: "Write a short story about a robot",
    },
    Suggestion {
        title: "🔬 Explanations",
        description: "Understand complex topics",
        prompt: "Explain quantum computing simply",
    },
    Suggestion {
        title: "💭 Brainstorming",
        description: "Generate ideas together",
        prompt: "Help me brainstorm app ideas",
    },
];
