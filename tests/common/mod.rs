//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use citadels_engine::cards::{Color, District};
use citadels_engine::core::{Controller, GameConfig, GameRng, GameState, Player, PlayerId, PlayerMap};
use citadels_engine::decision::{
    BuildChoice, DecisionSource, IncomeChoice, MagicianAction, PlayerView, RoleOffer,
    WarlordTarget,
};
use citadels_engine::events::EventLog;
use citadels_engine::roles::Role;
use citadels_engine::rules::{Deciders, RoundContext};
use citadels_engine::zones::DrawPile;

/// Answers queued per query. When a queue runs dry the seat declines, or
/// takes the first option where declining is impossible.
#[derive(Debug, Default)]
pub struct ScriptedDecider {
    pub roles: VecDeque<Role>,
    pub assassin: VecDeque<Option<Role>>,
    pub theft: VecDeque<Option<Role>>,
    pub income: VecDeque<IncomeChoice>,
    pub keep: VecDeque<usize>,
    pub magician: VecDeque<MagicianAction>,
    pub laboratory: VecDeque<Option<usize>>,
    pub smithy: VecDeque<bool>,
    pub school: VecDeque<Color>,
    pub warlord: VecDeque<Option<WarlordTarget>>,
    pub graveyard: VecDeque<bool>,
    pub builds: VecDeque<BuildChoice>,
}

impl ScriptedDecider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roles(mut self, answers: impl IntoIterator<Item = Role>) -> Self {
        self.roles.extend(answers);
        self
    }

    pub fn kill(mut self, role: Option<Role>) -> Self {
        self.assassin.push_back(role);
        self
    }

    pub fn rob(mut self, role: Option<Role>) -> Self {
        self.theft.push_back(role);
        self
    }

    pub fn income(mut self, answers: impl IntoIterator<Item = IncomeChoice>) -> Self {
        self.income.extend(answers);
        self
    }

    pub fn keep(mut self, answers: impl IntoIterator<Item = usize>) -> Self {
        self.keep.extend(answers);
        self
    }

    pub fn magician(mut self, answers: impl IntoIterator<Item = MagicianAction>) -> Self {
        self.magician.extend(answers);
        self
    }

    pub fn laboratory(mut self, answers: impl IntoIterator<Item = Option<usize>>) -> Self {
        self.laboratory.extend(answers);
        self
    }

    pub fn smithy(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.smithy.extend(answers);
        self
    }

    pub fn school(mut self, answers: impl IntoIterator<Item = Color>) -> Self {
        self.school.extend(answers);
        self
    }

    pub fn warlord(mut self, answers: impl IntoIterator<Item = Option<WarlordTarget>>) -> Self {
        self.warlord.extend(answers);
        self
    }

    pub fn graveyard(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.graveyard.extend(answers);
        self
    }

    pub fn builds(mut self, answers: impl IntoIterator<Item = BuildChoice>) -> Self {
        self.builds.extend(answers);
        self
    }

    pub fn boxed(self) -> Box<dyn DecisionSource> {
        Box::new(self)
    }
}

impl DecisionSource for ScriptedDecider {
    fn choose_role(&mut self, _view: &PlayerView<'_>, offer: &RoleOffer) -> Role {
        self.roles
            .pop_front()
            .or_else(|| offer.available.first().copied())
            .unwrap_or(Role::Assassin)
    }

    fn choose_assassin_target(&mut self, _view: &PlayerView<'_>) -> Option<Role> {
        self.assassin.pop_front().flatten()
    }

    fn choose_theft_target(
        &mut self,
        _view: &PlayerView<'_>,
        _excluded: Option<Role>,
    ) -> Option<Role> {
        self.theft.pop_front().flatten()
    }

    fn choose_income(&mut self, _view: &PlayerView<'_>) -> IncomeChoice {
        self.income.pop_front().unwrap_or(IncomeChoice::Gold)
    }

    fn choose_card_to_keep(&mut self, _view: &PlayerView<'_>, _drawn: &[District]) -> usize {
        self.keep.pop_front().unwrap_or(0)
    }

    fn choose_magician_action(&mut self, _view: &PlayerView<'_>) -> MagicianAction {
        self.magician.pop_front().unwrap_or(MagicianAction::Decline)
    }

    fn use_laboratory(&mut self, _view: &PlayerView<'_>) -> Option<usize> {
        self.laboratory.pop_front().flatten()
    }

    fn use_smithy(&mut self, _view: &PlayerView<'_>) -> bool {
        self.smithy.pop_front().unwrap_or(false)
    }

    fn choose_school_of_magic_color(&mut self, _view: &PlayerView<'_>, slot_color: Color) -> Color {
        self.school.pop_front().unwrap_or(slot_color)
    }

    fn choose_warlord_target(&mut self, _view: &PlayerView<'_>) -> Option<WarlordTarget> {
        self.warlord.pop_front().flatten()
    }

    fn choose_graveyard_recovery(&mut self, _view: &PlayerView<'_>, _destroyed: &District) -> bool {
        self.graveyard.pop_front().unwrap_or(false)
    }

    fn choose_build(&mut self, _view: &PlayerView<'_>, _remaining: usize) -> BuildChoice {
        self.builds.pop_front().unwrap_or(BuildChoice::EndTurn)
    }
}

pub fn d(name: &str, color: Color, cost: u32) -> District {
    District::new(name, color, cost, "")
}

pub fn p(id: u8) -> PlayerId {
    PlayerId::new(id)
}

/// A table of `count` seats with no gold, empty hands and a pile of
/// distinct one-cost green districts.
pub fn table(count: usize) -> GameState {
    let pile = (0..30).map(|i| d(&format!("Pile {i}"), Color::Green, 1)).collect();
    GameState::new(
        GameConfig::default(),
        PlayerMap::new(count, |id| Player::new(id, Controller::Automated)),
        DrawPile::from_districts(pile),
        p(1),
        GameRng::new(1),
    )
}

/// Every seat answers from an empty script.
pub fn idle_deciders(count: usize) -> Deciders {
    PlayerMap::new(count, |_| ScriptedDecider::new().boxed())
}

/// Resolve slots 1 to 8 with the roles already assigned.
pub fn resolve(state: &mut GameState, deciders: &mut Deciders) -> EventLog {
    let mut log = EventLog::new();
    let mut ctx = RoundContext::new(state, deciders, &mut log);
    citadels_engine::rules::resolve_turns(&mut ctx);
    log
}

