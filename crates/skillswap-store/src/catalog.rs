//! Built-in sample skills seeded into an empty catalog.

use skillswap_core::{Skill, SkillCategory, SkillLevel};

const SEED: [(&str, &str, SkillCategory, SkillLevel, &str); 6] = [
    (
        "1",
        "React Development",
        SkillCategory::Technology,
        SkillLevel::Intermediate,
        "Build modern web apps with React",
    ),
    (
        "2",
        "Guitar Playing",
        SkillCategory::Music,
        SkillLevel::Beginner,
        "Learn to play acoustic guitar",
    ),
    (
        "3",
        "Spanish Language",
        SkillCategory::Language,
        SkillLevel::Advanced,
        "Conversational Spanish",
    ),
    (
        "4",
        "Yoga Instruction",
        SkillCategory::Fitness,
        SkillLevel::Intermediate,
        "Hatha and Vinyasa yoga",
    ),
    (
        "5",
        "Graphic Design",
        SkillCategory::Creative,
        SkillLevel::Advanced,
        "Adobe Creative Suite mastery",
    ),
    (
        "6",
        "Business Strategy",
        SkillCategory::Business,
        SkillLevel::Intermediate,
        "Strategic planning and execution",
    ),
];

/// The six catalog skills, one per category, ids "1" through "6".
pub fn seed_skills() -> Vec<Skill> {
    SEED.iter()
        .map(|(id, name, category, level, description)| Skill {
            id: (*id).to_string(),
            name: (*name).to_string(),
            category: *category,
            level: *level,
            description: (*description).to_string(),
        })
        .collect()
}
