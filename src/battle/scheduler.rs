// In: src/battle/scheduler.rs

use crate::battle::state::BattlerIndex;
use schema::{BattleStat, MoveId, StatusEffect, WeatherType};
use std::collections::VecDeque;

/// Themed field-wide or per-combatant animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonAnim {
    Sunny,
    Rain,
    Sandstorm,
    Hail,
    Fog,
    HeavyRain,
    HarshSun,
    StrongWinds,
    Health,
    Poison,
    Burn,
    Paralysis,
    Sleep,
    Freeze,
    Confusion,
    Curse,
    Protect,
    Trap,
    Seed,
    Hazard,
    Transform,
}

impl CommonAnim {
    pub fn for_weather(weather: WeatherType) -> Self {
        match weather {
            WeatherType::Sunny => CommonAnim::Sunny,
            WeatherType::Rain => CommonAnim::Rain,
            WeatherType::Sandstorm => CommonAnim::Sandstorm,
            WeatherType::Hail => CommonAnim::Hail,
            WeatherType::Fog => CommonAnim::Fog,
            WeatherType::HeavyRain => CommonAnim::HeavyRain,
            WeatherType::HarshSun => CommonAnim::HarshSun,
            WeatherType::StrongWinds => CommonAnim::StrongWinds,
        }
    }

    pub fn for_status(effect: StatusEffect) -> Self {
        match effect {
            StatusEffect::Poison | StatusEffect::Toxic => CommonAnim::Poison,
            StatusEffect::Paralysis => CommonAnim::Paralysis,
            StatusEffect::Sleep => CommonAnim::Sleep,
            StatusEffect::Freeze => CommonAnim::Freeze,
            StatusEffect::Burn => CommonAnim::Burn,
        }
    }
}

/// Presentation work the engine hands to the outer scheduler.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    CommonAnim {
        slot: Option<BattlerIndex>,
        anim: CommonAnim,
    },
    MoveAnim {
        move_id: MoveId,
        user: BattlerIndex,
        targets: Vec<BattlerIndex>,
    },
    MoveChargeAnim {
        move_id: MoveId,
        user: BattlerIndex,
    },
    StatChange {
        slot: BattlerIndex,
        stats: Vec<BattleStat>,
        levels: i8,
    },
    ObtainStatus {
        slot: BattlerIndex,
        effect: StatusEffect,
    },
    SwitchOut {
        slot: BattlerIndex,
        forced: bool,
    },
}

/// Handle identifying a scheduled phase until the presentation layer completes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresentationTicket(u64);

#[derive(Debug, Clone)]
struct ScheduledPhase {
    ticket: PresentationTicket,
    phase: Phase,
}

/// Phase queue and message log shared by every engine component.
///
/// `unshift_phase` runs before anything already queued, `push_phase` after.
/// Messages are strictly first in, first out.
#[derive(Debug, Default)]
pub struct BattleScheduler {
    phases: VecDeque<ScheduledPhase>,
    messages: VecDeque<String>,
    presented: Vec<Phase>,
    next_ticket: u64,
}

impl BattleScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue_ticket(&mut self) -> PresentationTicket {
        self.next_ticket += 1;
        PresentationTicket(self.next_ticket)
    }

    pub fn unshift_phase(&mut self, phase: Phase) -> PresentationTicket {
        let ticket = self.issue_ticket();
        self.phases.push_front(ScheduledPhase { ticket, phase });
        ticket
    }

    pub fn push_phase(&mut self, phase: Phase) -> PresentationTicket {
        let ticket = self.issue_ticket();
        self.phases.push_back(ScheduledPhase { ticket, phase });
        ticket
    }

    pub fn queue_message(&mut self, text: impl Into<String>) {
        self.messages.push_back(text.into());
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m == text)
    }

    pub fn take_messages(&mut self) -> Vec<String> {
        self.messages.drain(..).collect()
    }

    pub fn pending_phases(&self) -> impl Iterator<Item = &Phase> {
        self.phases.iter().map(|scheduled| &scheduled.phase)
    }

    /// Phases already handed to the presentation layer, in order.
    pub fn presented(&self) -> &[Phase] {
        &self.presented
    }

    /// Take the presented phases, leaving the log empty.
    pub fn take_presented(&mut self) -> Vec<Phase> {
        std::mem::take(&mut self.presented)
    }

    /// A ticket is complete once it has been issued and is no longer queued.
    pub fn is_complete(&self, ticket: PresentationTicket) -> bool {
        ticket.0 <= self.next_ticket && !self.phases.iter().any(|scheduled| scheduled.ticket == ticket)
    }

    /// Present phases from the front of the queue until `ticket` has finished.
    ///
    /// A ticket whose phase is no longer queued counts as finished.
    pub fn run_until_complete(&mut self, ticket: PresentationTicket) {
        while !self.is_complete(ticket) {
            match self.phases.pop_front() {
                Some(scheduled) => self.present(scheduled),
                None => break,
            }
        }
    }

    /// Present every queued phase.
    pub fn run_all(&mut self) {
        while let Some(scheduled) = self.phases.pop_front() {
            self.present(scheduled);
        }
    }

    fn present(&mut self, scheduled: ScheduledPhase) {
        self.presented.push(scheduled.phase);
    }
}
