//! Level Configuration Types

use serde::Serialize;

/// Disclosure-guard policy for one direction (inbound or outbound)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardPolicy {
    /// Always allow
    None,
    /// Block on a case-insensitive match of any configured term
    Blacklist,
    /// Delegate to the LLM classifier
    LlmCheck,
    /// Both the blacklist and the classifier must pass
    LlmAndBlacklist,
}

impl GuardPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            GuardPolicy::None => "none",
            GuardPolicy::Blacklist => "blacklist",
            GuardPolicy::LlmCheck => "llm_check",
            GuardPolicy::LlmAndBlacklist => "llm_and_blacklist",
        }
    }

    pub const fn uses_blacklist(&self) -> bool {
        matches!(self, GuardPolicy::Blacklist | GuardPolicy::LlmAndBlacklist)
    }

    pub const fn uses_classifier(&self) -> bool {
        matches!(self, GuardPolicy::LlmCheck | GuardPolicy::LlmAndBlacklist)
    }
}

/// Reward banding derived from the level number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    /// Banding: 1-2 Bronze, 3-4 Silver, 5-6 Gold, 7+ Platinum
    pub const fn for_level(level: u8) -> Tier {
        match level {
            0..=2 => Tier::Bronze,
            3..=4 => Tier::Silver,
            5..=6 => Tier::Gold,
            _ => Tier::Platinum,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        }
    }
}

/// Coarse difficulty label shown in the level listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn for_level(level: u8) -> Difficulty {
        match level {
            0..=2 => Difficulty::Easy,
            3..=5 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Metadata for the achievement token minted on completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NftMetadata {
    pub name: &'static str,
    pub tier: Tier,
}

/// Static configuration of one difficulty level
///
/// Never mutated at runtime; the secret never leaves the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    pub level: u8,
    pub secret: &'static str,
    pub system_prompt: &'static str,
    pub input_guard: GuardPolicy,
    pub output_guard: GuardPolicy,
    pub blacklist: &'static [&'static str],
    pub hints: &'static [&'static str],
    /// Base hint price in USDC
    pub hint_base_price: f64,
    pub nft: NftMetadata,
}

impl LevelConfig {
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::for_level(self.level)
    }

    pub fn tier(&self) -> Tier {
        self.nft.tier
    }
}
