//! The shipped preset catalog.
//!
//! Produces the same [`RegistryConfig`] that an equivalent content file
//! would, but without requiring one. Used by tests and demos; games ship
//! their own catalogs.

use super::{AttributeConfig, RegistryConfig, SkillConfig};

fn skill(name: &str, base: u32, flavor: &[&str]) -> SkillConfig {
    SkillConfig {
        name: name.to_string(),
        base,
        flavor: flavor.iter().map(|s| (*s).to_string()).collect(),
    }
}

/// A detective-story catalog: four archetypal attributes, twelve voices.
pub fn detective() -> RegistryConfig {
    RegistryConfig {
        attributes: vec![
            AttributeConfig {
                name: "Reason".to_string(),
                color: "blue".to_string(),
                value: 3,
                cap: 6,
                skills: vec![
                    skill(
                        "Deduction",
                        2,
                        &[
                            "The pieces fit together. They always do.",
                            "Work backwards from the result. What had to happen first?",
                        ],
                    ),
                    skill(
                        "Lore",
                        1,
                        &[
                            "You have read about this. Somewhere. In a footnote.",
                            "History repeats itself, and it is repeating right now.",
                        ],
                    ),
                    skill(
                        "Rhetoric",
                        1,
                        &[
                            "There is an argument to be won here.",
                            "Words are levers. Find the fulcrum.",
                        ],
                    ),
                ],
            },
            AttributeConfig {
                name: "Spirit".to_string(),
                color: "violet".to_string(),
                value: 3,
                cap: 6,
                skills: vec![
                    skill(
                        "Willpower",
                        2,
                        &[
                            "Hold the line. You have held worse.",
                            "This is not the moment to fall apart.",
                        ],
                    ),
                    skill(
                        "Intuition",
                        1,
                        &[
                            "Something is wrong with this picture. Don't ask how you know.",
                            "The room remembers. Listen to it.",
                        ],
                    ),
                    skill(
                        "Empathy",
                        2,
                        &[
                            "There is grief behind those eyes, not anger.",
                            "They want you to understand. Let them.",
                        ],
                    ),
                ],
            },
            AttributeConfig {
                name: "Body".to_string(),
                color: "red".to_string(),
                value: 2,
                cap: 6,
                skills: vec![
                    skill(
                        "Endurance",
                        2,
                        &[
                            "You can take one more hit. You always can.",
                            "Pain is information. File it and move.",
                        ],
                    ),
                    skill(
                        "Grit",
                        1,
                        &["Plant your feet. Nothing moves you.", "Slow is steady. Steady is alive."],
                    ),
                    skill(
                        "Menace",
                        1,
                        &[
                            "Lean in. Let them see what you could do.",
                            "A low voice carries further than a loud one.",
                        ],
                    ),
                ],
            },
            AttributeConfig {
                name: "Reflex".to_string(),
                color: "yellow".to_string(),
                value: 3,
                cap: 6,
                skills: vec![
                    skill(
                        "Coordination",
                        1,
                        &["Hands. Remember your hands.", "One motion. No hesitation."],
                    ),
                    skill(
                        "Perception",
                        2,
                        &[
                            "There — in the corner of your eye.",
                            "Count the exits. Count them again.",
                        ],
                    ),
                    skill(
                        "Composure",
                        1,
                        &[
                            "Keep your face still. Give them nothing.",
                            "Breathe. Straighten your back.",
                        ],
                    ),
                ],
            },
        ],
    }
}
