/// Difficulty bucket a level draws its words from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Easy, Tier::Medium, Tier::Hard, Tier::Expert];

    /// Fixed thresholds: 1-5 easy, 6-12 medium, 13-20 hard, everything else expert.
    pub fn for_level(level: u32) -> Self {
        match level {
            1..=5 => Tier::Easy,
            6..=12 => Tier::Medium,
            13..=20 => Tier::Hard,
            _ => Tier::Expert,
        }
    }

    /// Name of the embedded word list backing this tier.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Tier::Easy => "easy",
            Tier::Medium => "medium",
            Tier::Hard => "hard",
            Tier::Expert => "expert",
        }
    }
}
