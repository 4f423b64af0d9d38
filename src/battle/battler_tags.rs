// In: src/battle/battler_tags.rs

use crate::battle::scheduler::BattleScheduler;
use crate::battle::state::BattlerIndex;
use crate::battle::tags::{Countdown, Tag, TagSet};
use crate::move_data::move_name;
use schema::{BattlerTagType, MoveId};
use serde::{Deserialize, Serialize};

/// When a battler tag counts down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LapseType {
    /// Counted down when the holder tries to move.
    PreMove,
    TurnEnd,
    /// Only lapsed explicitly by the code that owns the tag.
    Custom,
}

/// A temporary condition attached to a single combatant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattlerTag {
    pub tag_type: BattlerTagType,
    pub countdown: Countdown,
    pub lapse_type: LapseType,
    pub source_move: Option<MoveId>,
    pub source_id: Option<u32>,
    pub source_slot: Option<BattlerIndex>,
    /// Remaining hit points of a substitute.
    pub substitute_hp: u32,
}

impl Tag for BattlerTag {
    type Kind = BattlerTagType;

    fn kind(&self) -> BattlerTagType {
        self.tag_type
    }
}

impl BattlerTag {
    pub fn new(
        tag_type: BattlerTagType,
        turn_count: i32,
        source_move: Option<MoveId>,
        source_id: Option<u32>,
    ) -> Self {
        Self {
            tag_type,
            countdown: Countdown::new(turn_count),
            lapse_type: Self::lapse_type_for(tag_type),
            source_move,
            source_id,
            source_slot: None,
            substitute_hp: 0,
        }
    }

    pub fn with_source_slot(mut self, slot: BattlerIndex) -> Self {
        self.source_slot = Some(slot);
        self
    }

    pub fn lapse_type_for(tag_type: BattlerTagType) -> LapseType {
        use BattlerTagType::*;
        match tag_type {
            Confused => LapseType::PreMove,
            Flinched | Protected | Enduring | Seeded | Nightmare | Trapped | Cursed | Ingrain
            | AquaRing | IgnoreFlying => LapseType::TurnEnd,
            Recharging | Frenzy | Flying | Underground | Underwater | CritBoost | Substitute => {
                LapseType::Custom
            }
        }
    }

    pub fn lapse(&mut self) -> bool {
        self.countdown.tick()
    }

    fn add_message(&self, owner: &str) -> Option<String> {
        use BattlerTagType::*;
        match self.tag_type {
            Confused => Some(format!("{} became\nconfused!", owner)),
            Seeded => Some(format!("{} was seeded!", owner)),
            Nightmare => Some(format!("{} began\nhaving a NIGHTMARE!", owner)),
            Protected => Some(format!("{}\nprotected itself!", owner)),
            Enduring => Some(format!("{} braced\nitself!", owner)),
            Ingrain => Some(format!("{} planted its roots!", owner)),
            AquaRing => Some(format!("{} surrounded\nitself with a veil of water!", owner)),
            CritBoost => Some(format!("{} is getting\npumped!", owner)),
            IgnoreFlying => Some(format!("{} fell straight down!", owner)),
            Trapped => Some(format!(
                "{} was trapped\nby {}!",
                owner,
                self.source_move_name()
            )),
            Substitute => Some(format!("{} put in a substitute!", owner)),
            Recharging | Flinched | Frenzy | Flying | Underground | Underwater | Cursed => None,
        }
    }

    fn overlap_message(&self, owner: &str) -> Option<String> {
        use BattlerTagType::*;
        match self.tag_type {
            Confused => Some(format!("{} is\nalready confused!", owner)),
            Nightmare => Some(format!("{} is\nalready locked in a NIGHTMARE!", owner)),
            Seeded => Some(format!("{} is\nalready seeded!", owner)),
            _ => None,
        }
    }

    fn remove_message(&self, owner: &str) -> Option<String> {
        use BattlerTagType::*;
        match self.tag_type {
            Confused => Some(format!("{} snapped\nout of confusion!", owner)),
            CritBoost => Some(format!("{} relaxed.", owner)),
            Trapped => Some(format!(
                "{} was freed\nfrom {}!",
                owner,
                self.source_move_name()
            )),
            Substitute => Some(format!("{}'s substitute faded!", owner)),
            _ => None,
        }
    }

    fn source_move_name(&self) -> String {
        self.source_move
            .map(move_name)
            .unwrap_or_else(|| "the attack".to_string())
    }
}

/// Add/get/lapse/remove contract for a combatant's tags. Messages are queued
/// with the owner's display name.
pub trait BattlerTagHolder {
    fn tag_set(&self) -> &TagSet<BattlerTag>;
    fn tag_set_mut(&mut self) -> &mut TagSet<BattlerTag>;
    fn owner_name(&self) -> &str;
    fn can_add_tag(&self, tag_type: BattlerTagType) -> bool;

    /// Returns false when the tag was already present (after running its
    /// overlap hook) or when the holder cannot carry it.
    fn add_battler_tag(&mut self, tag: BattlerTag, scheduler: &mut BattleScheduler) -> bool {
        let owner = self.owner_name().to_string();
        if let Some(existing) = self.tag_set().get(tag.tag_type) {
            if let Some(message) = existing.overlap_message(&owner) {
                scheduler.queue_message(message);
            }
            return false;
        }
        if !self.can_add_tag(tag.tag_type) {
            return false;
        }
        let message = tag.add_message(&owner);
        if self.tag_set_mut().insert(tag).is_err() {
            return false;
        }
        if let Some(message) = message {
            scheduler.queue_message(message);
        }
        true
    }

    fn get_tag(&self, tag_type: BattlerTagType) -> Option<&BattlerTag> {
        self.tag_set().get(tag_type)
    }

    fn has_tag(&self, tag_type: BattlerTagType) -> bool {
        self.tag_set().contains(tag_type)
    }

    /// Count down one tag. Returns whether it is still present afterwards.
    fn lapse_tag(&mut self, tag_type: BattlerTagType, scheduler: &mut BattleScheduler) -> bool {
        let owner = self.owner_name().to_string();
        let expired = self
            .tag_set_mut()
            .lapse_where(|tag| tag.tag_type == tag_type, |tag| tag.lapse());
        let still_present = expired.is_empty() && self.has_tag(tag_type);
        for tag in expired {
            if let Some(message) = tag.remove_message(&owner) {
                scheduler.queue_message(message);
            }
        }
        still_present
    }

    /// Count down every tag of a lapse type, removing the expired ones.
    fn lapse_tags(&mut self, lapse_type: LapseType, scheduler: &mut BattleScheduler) {
        let owner = self.owner_name().to_string();
        let expired = self
            .tag_set_mut()
            .lapse_where(|tag| tag.lapse_type == lapse_type, |tag| tag.lapse());
        for tag in expired {
            if let Some(message) = tag.remove_message(&owner) {
                scheduler.queue_message(message);
            }
        }
    }

    fn remove_tag(&mut self, tag_type: BattlerTagType, scheduler: &mut BattleScheduler) -> bool {
        let owner = self.owner_name().to_string();
        match self.tag_set_mut().remove(tag_type) {
            Some(tag) => {
                if let Some(message) = tag.remove_message(&owner) {
                    scheduler.queue_message(message);
                }
                true
            }
            None => false,
        }
    }
}
