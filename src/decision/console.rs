//! Line-based prompts for a person at a terminal.
//!
//! Positions are shown and typed 1-based. Text that cannot be parsed is
//! re-prompted here; parsed answers go to the engine, which validates them.
//! At end of input every question resolves to its declining answer (or the
//! first option) so a closed terminal never blocks the game.

use std::io::{BufRead, Write};

use super::{
    BuildChoice, DecisionSource, IncomeChoice, MagicianAction, PlayerView, RoleOffer,
    WarlordTarget,
};
use crate::cards::{Color, District};
use crate::core::PlayerId;
use crate::roles::Role;

/// Interactive decision source over any reader and writer.
#[derive(Debug)]
pub struct ConsoleDecider<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleDecider<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Recover the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn say(&mut self, text: &str) {
        let result = write!(self.output, "{text}").and_then(|()| self.output.flush());
        if let Err(err) = result {
            tracing::warn!(%err, "failed to write prompt");
        }
    }

    /// Next trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                tracing::warn!(%err, "failed to read answer");
                None
            }
        }
    }

    /// Prompt until `parse` accepts a line; `None` at end of input.
    fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        self.say(prompt);
        loop {
            let line = self.read_line()?;
            if let Some(answer) = parse(&line) {
                return Some(answer);
            }
            self.say("Invalid input, try again: ");
        }
    }

    fn show_hand(&mut self, view: &PlayerView<'_>) {
        let me = view.me();
        let mut text = format!("You have {} gold. Your hand:\n", me.gold());
        for (i, card) in me.hand.iter().enumerate() {
            text.push_str(&format!("  {}. {}\n", i + 1, card.display_short()));
        }
        self.say(&text);
    }
}

impl ConsoleDecider<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on standard output, read from standard input.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

/// Role by number or name.
#[must_use]
pub fn parse_role(text: &str) -> Option<Role> {
    match text.trim().parse::<u8>() {
        Ok(n) => Role::from_number(n),
        Err(_) => Role::from_name(text),
    }
}

#[must_use]
pub fn parse_yes_no(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// 1-based position to 0-based index.
#[must_use]
pub fn parse_position(text: &str) -> Option<usize> {
    text.trim().parse::<usize>().ok()?.checked_sub(1)
}

/// `exchange <player>`, `discard <positions...>` or `none`.
#[must_use]
pub fn parse_magician(text: &str) -> Option<MagicianAction> {
    let lower = text.trim().to_ascii_lowercase();
    let mut words = lower.split_whitespace();
    match words.next()? {
        "none" | "no" => Some(MagicianAction::Decline),
        "exchange" => {
            let id: u8 = words.next()?.parse().ok()?;
            Some(MagicianAction::Exchange(PlayerId::new(id)))
        }
        "discard" => {
            let positions: Option<Vec<usize>> = words.map(parse_position).collect();
            Some(MagicianAction::Discard(positions?))
        }
        _ => None,
    }
}

/// `<player> <district position>`, or `no` for no target (`Some(None)`).
#[must_use]
pub fn parse_warlord(text: &str) -> Option<Option<WarlordTarget>> {
    if parse_yes_no(text) == Some(false) {
        return Some(None);
    }
    let mut words = text.split_whitespace();
    let player: u8 = words.next()?.parse().ok()?;
    let district = parse_position(words.next()?)?;
    Some(Some(WarlordTarget {
        player: PlayerId::new(player),
        district,
    }))
}

/// `build <position>` or `end`.
#[must_use]
pub fn parse_build(text: &str) -> Option<BuildChoice> {
    let lower = text.trim().to_ascii_lowercase();
    let mut words = lower.split_whitespace();
    match words.next()? {
        "end" => Some(BuildChoice::EndTurn),
        "build" => Some(BuildChoice::Build(parse_position(words.next()?)?)),
        _ => None,
    }
}

impl<R: BufRead, W: Write> DecisionSource for ConsoleDecider<R, W> {
    fn choose_role(&mut self, _view: &PlayerView<'_>, offer: &RoleOffer) -> Role {
        let names: Vec<&str> = offer.available.iter().map(|r| r.name()).collect();
        let prompt = format!("Choose your character from: {}.\n> ", names.join(", "));
        let fallback = offer.available.first().copied().unwrap_or(Role::Assassin);
        self.ask(&prompt, parse_role).unwrap_or(fallback)
    }

    fn choose_assassin_target(&mut self, _view: &PlayerView<'_>) -> Option<Role> {
        self.say("Who do you want to kill? Choose 2-8 (anything else to skip): ");
        let role = parse_role(&self.read_line()?)?;
        (role != Role::Assassin).then_some(role)
    }

    fn choose_theft_target(
        &mut self,
        _view: &PlayerView<'_>,
        _excluded: Option<Role>,
    ) -> Option<Role> {
        self.say("Who do you want to steal from? Choose 3-8 (anything else to skip): ");
        parse_role(&self.read_line()?)
    }

    fn choose_income(&mut self, view: &PlayerView<'_>) -> IncomeChoice {
        self.show_hand(view);
        let prompt = "Collect 2 gold or draw cards and pick one [gold/cards]: ";
        self.ask(prompt, |line| match line.to_ascii_lowercase().as_str() {
            "gold" => Some(IncomeChoice::Gold),
            "cards" => Some(IncomeChoice::Cards),
            _ => None,
        })
        .unwrap_or(IncomeChoice::Gold)
    }

    fn choose_card_to_keep(&mut self, _view: &PlayerView<'_>, drawn: &[District]) -> usize {
        let mut prompt = String::from("You drew:\n");
        for (i, card) in drawn.iter().enumerate() {
            prompt.push_str(&format!("  {}. {}\n", i + 1, card.display_short()));
        }
        prompt.push_str(&format!("Choose which to keep [1-{}]: ", drawn.len()));
        self.ask(&prompt, parse_position).unwrap_or(0)
    }

    fn choose_magician_action(&mut self, view: &PlayerView<'_>) -> MagicianAction {
        self.show_hand(view);
        let prompt = "Magician: 'exchange <player>', 'discard <positions...>' or 'none': ";
        self.ask(prompt, parse_magician)
            .unwrap_or(MagicianAction::Decline)
    }

    fn use_laboratory(&mut self, view: &PlayerView<'_>) -> Option<usize> {
        self.show_hand(view);
        let prompt = "Laboratory: position of a card to discard for 1 gold, or 'no': ";
        self.ask(prompt, |line| {
            if parse_yes_no(line) == Some(false) {
                Some(None)
            } else {
                parse_position(line).map(Some)
            }
        })
        .flatten()
    }

    fn use_smithy(&mut self, _view: &PlayerView<'_>) -> bool {
        self.ask("Use Smithy? Pay 2 gold to draw 3 cards [yes/no]: ", parse_yes_no)
            .unwrap_or(false)
    }

    fn choose_school_of_magic_color(&mut self, _view: &PlayerView<'_>, slot_color: Color) -> Color {
        let prompt = "Choose School of Magic color for this income [yellow/blue/green/red]: ";
        self.ask(prompt, |line| line.parse::<Color>().ok())
            .unwrap_or(slot_color)
    }

    fn choose_warlord_target(&mut self, view: &PlayerView<'_>) -> Option<WarlordTarget> {
        let mut prompt = String::new();
        for player in view.others() {
            if let Some(city) = view.city(player) {
                let listing: Vec<String> = city
                    .iter()
                    .enumerate()
                    .map(|(i, d)| format!("{}. {}", i + 1, d.display_short()))
                    .collect();
                prompt.push_str(&format!("  {player}: {}\n", listing.join(", ")));
            }
        }
        prompt.push_str("Destroy a district? '<player> <position>' or 'no': ");
        self.ask(&prompt, parse_warlord).flatten()
    }

    fn choose_graveyard_recovery(&mut self, _view: &PlayerView<'_>, destroyed: &District) -> bool {
        let prompt = format!("Recover {} with the Graveyard for 1 gold? [yes/no]: ", destroyed.name);
        self.ask(&prompt, parse_yes_no).unwrap_or(false)
    }

    fn choose_build(&mut self, view: &PlayerView<'_>, remaining: usize) -> BuildChoice {
        self.show_hand(view);
        let prompt = format!("Builds left: {remaining}. 'build <position>' or 'end': ");
        self.ask(&prompt, parse_build).unwrap_or(BuildChoice::EndTurn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Controller, GameConfig, GameRng, GameState, Player, PlayerMap};
    use crate::zones::DrawPile;
    use std::io::Cursor;

    fn state() -> GameState {
        GameState::new(
            GameConfig::default(),
            PlayerMap::new(4, |id| Player::new(id, Controller::Interactive)),
            DrawPile::new(),
            PlayerId::new(1),
            GameRng::new(0),
        )
    }

    fn console(input: &str) -> ConsoleDecider<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleDecider::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role("4"), Some(Role::King));
        assert_eq!(parse_role("magician"), Some(Role::Magician));
        assert_eq!(parse_role("9"), None);
        assert_eq!(parse_role("queen"), None);
    }

    #[test]
    fn test_parse_magician() {
        assert_eq!(
            parse_magician("exchange 3"),
            Some(MagicianAction::Exchange(PlayerId::new(3)))
        );
        assert_eq!(
            parse_magician("discard 1 3"),
            Some(MagicianAction::Discard(vec![0, 2]))
        );
        assert_eq!(parse_magician("none"), Some(MagicianAction::Decline));
        assert_eq!(parse_magician("discard 0"), None);
        assert_eq!(parse_magician("juggle"), None);
    }

    #[test]
    fn test_parse_warlord_and_build() {
        assert_eq!(
            parse_warlord("2 1"),
            Some(Some(WarlordTarget { player: PlayerId::new(2), district: 0 }))
        );
        assert_eq!(parse_warlord("no"), Some(None));
        assert_eq!(parse_warlord("2"), None);
        assert_eq!(parse_build("build 2"), Some(BuildChoice::Build(1)));
        assert_eq!(parse_build("END"), Some(BuildChoice::EndTurn));
        assert_eq!(parse_build("buy 2"), None);
    }

    #[test]
    fn test_reprompts_on_garbage() {
        let s = state();
        let view = PlayerView::new(&s, PlayerId::new(1));
        let mut c = console("maybe\ncards\n");
        assert_eq!(c.choose_income(&view), IncomeChoice::Cards);

        let (_, out) = c.into_parts();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid input"));
    }

    #[test]
    fn test_end_of_input_declines() {
        let s = state();
        let view = PlayerView::new(&s, PlayerId::new(1));
        let mut c = console("");
        assert_eq!(c.choose_build(&view, 1), BuildChoice::EndTurn);
        assert_eq!(c.choose_magician_action(&view), MagicianAction::Decline);
        assert_eq!(c.choose_warlord_target(&view), None);
        assert!(!c.use_smithy(&view));
        assert_eq!(c.use_laboratory(&view), None);
    }

    #[test]
    fn test_role_prompt_lists_offer() {
        let s = state();
        let view = PlayerView::new(&s, PlayerId::new(1));
        let offer = RoleOffer {
            available: vec![Role::Thief, Role::Bishop],
            face_up: Vec::new(),
            last_of_seven: false,
        };
        let mut c = console("bishop\n");
        assert_eq!(c.choose_role(&view, &offer), Role::Bishop);
        let (_, out) = c.into_parts();
        assert!(String::from_utf8(out).unwrap().contains("Thief, Bishop"));
    }

    #[test]
    fn test_assassin_skip_on_invalid() {
        let s = state();
        let view = PlayerView::new(&s, PlayerId::new(1));
        let mut c = console("1\n");
        assert_eq!(c.choose_assassin_target(&view), None);
        let mut c = console("6\n");
        assert_eq!(c.choose_assassin_target(&view), Some(Role::Merchant));
    }
}
