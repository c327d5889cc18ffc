//! Blind completion reward.
//!
//! ```text
//! reward = base(blind) + unusedHands × perHand + unusedDiscards × perDiscard + Σ AddMoney
//! ```

use serde::{Deserialize, Serialize};

use crate::core::RulesConfig;
use crate::rules::BlindType;

/// Itemized reward for a defeated blind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardBreakdown {
    pub blind: BlindType,
    pub base: u64,
    pub unused_hands: u32,
    pub hands_bonus: u64,
    pub unused_discards: u32,
    pub discards_bonus: u64,
    /// `AddMoney` payouts by joker name.
    pub jokers: Vec<(String, i64)>,
    pub total: u64,
}

impl RewardBreakdown {
    /// Compute the reward for defeating `blind` with budget left over.
    #[must_use]
    pub fn compute(
        rules: &RulesConfig,
        blind: BlindType,
        unused_hands: u32,
        unused_discards: u32,
        jokers: Vec<(String, i64)>,
    ) -> Self {
        let base = match blind {
            BlindType::Small => rules.blind_rewards[0],
            BlindType::Big => rules.blind_rewards[1],
            BlindType::Boss => rules.blind_rewards[2],
        };
        let hands_bonus = u64::from(unused_hands) * rules.unused_hand_reward;
        let discards_bonus = u64::from(unused_discards) * rules.unused_discard_reward;
        let joker_money = jokers.iter().map(|&(_, amount)| amount).fold(0i64, i64::saturating_add);
        let total = (base + hands_bonus + discards_bonus).saturating_add_signed(joker_money);

        Self {
            blind,
            base,
            unused_hands,
            hands_bonus,
            unused_discards,
            discards_bonus,
            jokers,
            total,
        }
    }
}
