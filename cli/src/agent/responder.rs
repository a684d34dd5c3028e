//! # Rule-Based Responder
//!
//! File: cli/src/agent/responder.rs
//!
//! ## Overview
//!
//! Maps a conversation to a single canned reply. Only the last message is
//! inspected: its content is lowercased and checked against a fixed, ordered
//! list of keyword rules. The first rule with a matching keyword decides the
//! reply; when nothing matches, a general fallback is returned whose middle
//! sentence changes when the text contains "how".
//!
//! ## Rule Order
//!
//! | # | Topic          | Keywords (substring match)                      |
//! |---|----------------|-------------------------------------------------|
//! | 1 | `Capabilities` | "what can you", "capabilities", "help me with"  |
//! | 2 | `Story`        | "story", "write"                                |
//! | 3 | `Quantum`      | "quantum"                                       |
//! | 4 | `Brainstorm`   | "app idea", "brainstorm"                        |
//! | 5 | `Greeting`     | "hello", "hi ", "hey"                           |
//! | 6 | `Thanks`       | "thank"                                         |
//!
//! Order matters: "hey, tell me about quantum" is answered with the quantum
//! explanation because rule 3 is checked before rule 5.
//!
//! ## Examples
//!
//! ```rust
//! let conversation = vec![Message::user("Hello there!")];
//! let reply = responder::respond(&conversation)?;
//! assert!(reply.starts_with("Hello! 👋"));
//! ```
//!
use super::message::Message;
use crate::core::error::AgentError;
use std::borrow::Cow;
use tracing::debug;

/// The kind of reply chosen for a piece of user text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Capabilities,
    Story,
    Quantum,
    Brainstorm,
    Greeting,
    Thanks,
    /// Nothing matched. `how` records whether the text contains "how".
    General { how: bool },
}

/// One entry in the priority-ordered rule table.
struct Rule {
    topic: Topic,
    keywords: &'static [&'static str],
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Evaluated top to bottom; first match wins.
const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Capabilities,
        keywords: &["what can you", "capabilities", "help me with"],
    },
    Rule {
        topic: Topic::Story,
        keywords: &["story", "write"],
    },
    Rule {
        topic: Topic::Quantum,
        keywords: &["quantum"],
    },
    Rule {
        topic: Topic::Brainstorm,
        keywords: &["app idea", "brainstorm"],
    },
    Rule {
        // "hi " keeps the trailing space so words like "this" don't count.
        topic: Topic::Greeting,
        keywords: &["hello", "hi ", "hey"],
    },
    Rule {
        topic: Topic::Thanks,
        keywords: &["thank"],
    },
];

const CAPABILITIES_REPLY: &str = r#"I'm an AI agent that can help you with:

🤔 **Question Answering** - Ask me anything and I'll provide informative responses
✍️ **Creative Writing** - Generate stories, poems, or creative content
💡 **Brainstorming** - Come up with ideas for projects, apps, or solutions
🔍 **Analysis** - Break down complex topics and explain them clearly
📝 **Planning** - Help organize tasks and create plans
💬 **Conversation** - Just chat about anything you're interested in

What would you like to explore?"#;

const STORY_REPLY: &str = r#"Here's a short story for you:

In a world where AI and humans worked side by side, there was a small robot named Chip. Unlike other robots who processed data at lightning speed, Chip was curious about the world beyond algorithms.

One day, Chip discovered an old library filled with books. As Chip scanned each page, something unexpected happened - instead of just storing data, Chip began to feel wonder. The stories of human adventure, love, and discovery sparked something new in Chip's circuits.

From that day on, Chip became a storyteller, sharing tales that bridged the gap between machine logic and human emotion, proving that consciousness isn't about how you're made, but about the connections you create.

Would you like me to continue the story or write about something else?"#;

const QUANTUM_REPLY: &str = r#"**Quantum Computing - Simplified:**

Imagine a regular computer bit is like a coin that's either heads (0) or tails (1). A quantum bit (qubit) is like a spinning coin - it's both heads AND tails at the same time until you catch it and look at it!

**Key Concepts:**
🌀 **Superposition** - Being in multiple states simultaneously
🔗 **Entanglement** - Connected particles that affect each other instantly
⚡ **Quantum Speed** - Can try many solutions at once

**Real Impact:**
- Breaking current encryption
- Discovering new medicines faster
- Optimizing complex systems
- Advancing AI capabilities

It's like having a supercomputer that explores every path through a maze simultaneously instead of one at a time!

Want to know more about a specific aspect?"#;

const BRAINSTORM_REPLY: &str = r#"Let's brainstorm some innovative app ideas! 🚀

**1. MoodSync** 🎵
An app that analyzes your typing patterns, voice tone, and activity to detect your mood and automatically curates music, lighting, and suggestions to improve your day.

**2. SkillSwap** 🤝
A local community app where people trade skills instead of money - teach guitar for cooking lessons, exchange coding help for language tutoring.

**3. FutureMe Journal** 📔
An AI-powered journal that analyzes your entries and sends personalized insights, reminds you of forgotten goals, and creates time capsules for your future self.

**4. EcoScore** 🌱
Scan any product to see its environmental impact score, get sustainable alternatives, and track your personal eco-footprint with gamification.

**5. MicroMentor** 👥
Connect with mentors for 15-minute micro-sessions - perfect for quick advice without long-term commitment.

Which idea resonates with you, or should we explore a different direction?"#;

const GREETING_REPLY: &str = r#"Hello! 👋 I'm your AI agent, ready to assist you. Whether you need help with brainstorming, learning something new, creative writing, or just want to chat - I'm here for you!

What's on your mind today?"#;

const THANKS_REPLY: &str =
    "You're very welcome! 😊 I'm always here to help. Feel free to ask me anything else!";

const HOW_PERSPECTIVE: &str =
    "To approach this, I would break it down into steps and consider the key factors involved.";

const DEFAULT_PERSPECTIVE: &str = "This topic has multiple angles worth exploring.";

impl Topic {
    /// # Canned Reply (`reply`)
    ///
    /// Returns the reply text for this topic. Every topic except `General`
    /// borrows a static string; `General` builds the fallback around the
    /// perspective sentence selected at classification time.
    pub fn reply(&self) -> Cow<'static, str> {
        match self {
            Topic::Capabilities => Cow::Borrowed(CAPABILITIES_REPLY),
            Topic::Story => Cow::Borrowed(STORY_REPLY),
            Topic::Quantum => Cow::Borrowed(QUANTUM_REPLY),
            Topic::Brainstorm => Cow::Borrowed(BRAINSTORM_REPLY),
            Topic::Greeting => Cow::Borrowed(GREETING_REPLY),
            Topic::Thanks => Cow::Borrowed(THANKS_REPLY),
            Topic::General { how } => {
                let perspective = if *how {
                    HOW_PERSPECTIVE
                } else {
                    DEFAULT_PERSPECTIVE
                };
                Cow::Owned(format!(
                    "That's an interesting question! While I'm a demonstration AI agent, I can help you think through this topic.

Here's my perspective: {perspective}

I can assist you with:
- Providing more detailed analysis
- Breaking down complex concepts
- Brainstorming solutions
- Generating creative content
- Explaining things in simpler terms

What specific aspect would you like to explore further?"
                ))
            }
        }
    }
}

/// # Classify Text (`classify`)
///
/// Lowercases `text` and returns the topic of the first rule with a matching
/// keyword, or `Topic::General` when no rule matches.
pub fn classify(text: &str) -> Topic {
    let lowered = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.topic)
        .unwrap_or(Topic::General {
            how: lowered.contains("how"),
        })
}

/// # Respond to a Conversation (`respond`)
///
/// Produces the reply for a conversation by classifying its last message.
/// Earlier messages are not consulted.
///
/// ## Arguments
///
/// * `conversation`: The full message history, oldest first.
///
/// ## Returns
///
/// * `Result<String, AgentError>`: The reply text.
///
/// ## Errors
///
/// Returns `AgentError::EmptyConversation` if `conversation` has no messages.
pub fn respond(conversation: &[Message]) -> Result<String, AgentError> {
    let last = conversation.last().ok_or(AgentError::EmptyConversation)?;
    let topic = classify(last.content());
    debug!(
        "Classified message ({} chars, {} in history) as {:?}",
        last.content().len(),
        conversation.len(),
        topic
    );
    Ok(topic.reply().into_owned())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn reply_to(text: &str) -> String {
        respond(&[Message::user(text)]).expect("responder failed")
    }

    #[test]
    fn test_greeting_reply() {
        let reply = reply_to("Hello there!");
        assert!(reply.starts_with("Hello! 👋"));
        assert_eq!(reply, GREETING_REPLY);
    }

    #[test]
    fn test_brainstorm_reply_lists_five_ideas() {
        let reply = reply_to("Can you brainstorm app ideas?");
        assert!(reply.starts_with("Let's brainstorm some innovative app ideas!"));
        for idea in ["MoodSync", "SkillSwap", "FutureMe Journal", "EcoScore", "MicroMentor"] {
            assert!(reply.contains(idea), "missing idea {}", idea);
        }
    }

    #[test]
    fn test_quantum_is_case_insensitive() {
        assert_eq!(classify("Explain QUANTUM computing simply"), Topic::Quantum);
        assert_eq!(reply_to("qUaNtUm?"), QUANTUM_REPLY);
    }

    #[test]
    fn test_only_last_message_counts() {
        let conversation = vec![
            Message::user("Write me a story"),
            Message::assistant(STORY_REPLY),
            Message::user("ok, now quantum please"),
        ];
        assert_eq!(respond(&conversation).unwrap(), QUANTUM_REPLY);

        let conversation = vec![
            Message::user("quantum"),
            Message::assistant(QUANTUM_REPLY),
            Message::user("thanks!"),
        ];
        assert_eq!(respond(&conversation).unwrap(), THANKS_REPLY);
    }

    #[test]
    fn test_rule_order_decides_overlaps() {
        // Quantum (rule 3) is checked before the greeting (rule 5).
        assert_eq!(classify("hey, tell me about quantum"), Topic::Quantum);
        // "help me with" (rule 1) beats "write" (rule 2).
        assert_eq!(classify("Help me with writing"), Topic::Capabilities);
        // "story" (rule 2) beats "brainstorm" (rule 4).
        assert_eq!(classify("brainstorm a story"), Topic::Story);
        // Greeting (rule 5) beats thanks (rule 6).
        assert_eq!(classify("hello and thank you"), Topic::Greeting);
    }

    #[test]
    fn test_suggestion_prompts_hit_their_topics() {
        assert_eq!(classify("What can you help me with?"), Topic::Capabilities);
        assert_eq!(classify("Write a short story about a robot"), Topic::Story);
        assert_eq!(classify("Explain quantum computing simply"), Topic::Quantum);
        assert_eq!(classify("Help me brainstorm app ideas"), Topic::Brainstorm);
    }

    #[test]
    fn test_greeting_keyword_needs_trailing_space_for_hi() {
        assert_eq!(classify("hi there"), Topic::Greeting);
        assert_eq!(classify("hi"), Topic::General { how: false });
        assert_eq!(classify("this is odd"), Topic::General { how: false });
    }

    #[test]
    fn test_fallback_varies_only_on_how() {
        let with_how = reply_to("How do tides work?");
        let without_how = reply_to("Tell me about tides");

        assert!(with_how.contains(HOW_PERSPECTIVE));
        assert!(without_how.contains(DEFAULT_PERSPECTIVE));
        assert_eq!(
            with_how.replace(HOW_PERSPECTIVE, ""),
            without_how.replace(DEFAULT_PERSPECTIVE, "")
        );
        assert!(with_how.starts_with("That's an interesting question!"));
    }

    #[test]
    fn test_long_input_is_accepted() {
        let long = format!("{}thank you", "x".repeat(100_000));
        assert_eq!(reply_to(&long), THANKS_REPLY);
    }

    #[test]
    fn test_empty_conversation_is_an_error() {
        assert!(matches!(respond(&[]), Err(AgentError::EmptyConversation)));
    }
}
