//! The lightweight state the search engine clones and mutates.
//!
//! ## Transition
//!
//! `apply_action` is the only way a `SearchState` changes. It never touches
//! the live pyramid: the board is a persistent `im::Vector` of `SlotView`s,
//! so cloning a state for every tree node and rollout step is O(1).
//!
//! ## Terminal evaluation
//!
//! After every action, in order:
//! 1. Round budget exhausted: terminal, no winner from this rule alone.
//! 2. Conflict marker at either end: terminal, the favored player wins.
//! 3. Six or more distinct science types: terminal. If both players
//!    qualify in the same check the result is a tie.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::tally::PlayerTally;
use super::view::{CardView, SlotView};
use crate::cards::Color;
use crate::core::{Action, ActionKind, ConflictTrack, PlayerId, PlayerPair};
use crate::game::{MatchMeta, PlayerBoard, SELL_BASE};
use crate::pyramid::Pyramid;

/// Distinct scientific symbol types needed for a science victory.
pub const SCIENCE_VICTORY_TYPES: usize = 6;

/// Outcome of a search state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// No winner yet (or the match ended without one).
    #[default]
    Undecided,
    /// A player won.
    Player(PlayerId),
    /// Both players won simultaneously.
    Tie,
}

impl Winner {
    /// Numeric code: -1 undecided, 0/1 player, 2 tie.
    #[must_use]
    pub fn code(self) -> i8 {
        match self {
            Winner::Undecided => -1,
            Winner::Player(p) => p.0 as i8,
            Winner::Tie => 2,
        }
    }

    /// Reward for `player`: 1 win, 0 loss, 0.5 tie, `None` when undecided.
    #[must_use]
    pub fn reward_for(self, player: PlayerId) -> Option<f64> {
        match self {
            Winner::Undecided => None,
            Winner::Player(p) if p == player => Some(1.0),
            Winner::Player(_) => Some(0.0),
            Winner::Tie => Some(0.5),
        }
    }
}

/// Clonable summary of a match used only by the search engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    players: PlayerPair<PlayerTally>,
    board: Vector<SlotView>,
    conflict: ConflictTrack,
    to_move: PlayerId,
    rounds_remaining: u32,
    terminal: bool,
    winner: Winner,
    /// Legal actions for this state, in enumeration order.
    legal: Vec<Action>,
}

impl SearchState {
    /// Create a state from its parts.
    ///
    /// Terminal conditions and legal actions are evaluated immediately.
    #[must_use]
    pub fn new(
        players: PlayerPair<PlayerTally>,
        board: impl IntoIterator<Item = SlotView>,
        conflict: ConflictTrack,
        to_move: PlayerId,
        rounds_remaining: u32,
    ) -> Self {
        let mut state = Self {
            players,
            board: board.into_iter().collect(),
            conflict,
            to_move,
            rounds_remaining,
            terminal: false,
            winner: Winner::Undecided,
            legal: Vec::new(),
        };
        state.refresh_military();
        state.evaluate_terminal();
        state.refresh_legal();
        state
    }

    /// Snapshot a live match.
    ///
    /// The round budget is `meta.round_budget`, or the number of cards left
    /// in the pyramid when unset.
    #[must_use]
    pub fn project(
        pyramid: &Pyramid,
        players: &PlayerPair<PlayerBoard>,
        meta: &MatchMeta,
    ) -> Self {
        let rounds = meta
            .round_budget
            .unwrap_or_else(|| u32::try_from(pyramid.remaining()).unwrap_or(u32::MAX));
        Self::new(
            players.map(PlayerTally::from_board),
            pyramid.iter().map(|(_, slot)| SlotView::from(slot)),
            meta.conflict,
            meta.to_move,
            rounds,
        )
    }

    // === Accessors ===

    /// Both players' tallies.
    #[must_use]
    pub fn players(&self) -> &PlayerPair<PlayerTally> {
        &self.players
    }

    /// One player's tally.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerTally {
        &self.players[player]
    }

    /// The projected pyramid.
    #[must_use]
    pub fn board(&self) -> &Vector<SlotView> {
        &self.board
    }

    #[must_use]
    pub fn conflict(&self) -> ConflictTrack {
        self.conflict
    }

    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    #[must_use]
    pub fn rounds_remaining(&self) -> u32 {
        self.rounds_remaining
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    #[must_use]
    pub fn winner(&self) -> Winner {
        self.winner
    }

    /// Legal actions in enumeration order (empty once terminal).
    #[must_use]
    pub fn legal_actions(&self) -> &[Action] {
        &self.legal
    }

    /// Check if a board slot may be drafted: it holds a card and none of its
    /// children does.
    #[must_use]
    pub fn is_available(&self, slot: usize) -> bool {
        let Some(view) = self.board.get(slot) else {
            return false;
        };
        view.card.is_some()
            && view
                .children
                .iter()
                .flatten()
                .all(|&c| self.board.get(usize::from(c)).map_or(true, |v| v.card.is_none()))
    }

    /// Indices of available slots, ascending.
    pub fn available_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.board.len()).filter(|&i| self.is_available(i))
    }

    /// Cards still on the board.
    #[must_use]
    pub fn remaining_cards(&self) -> usize {
        self.board.iter().filter(|v| v.card.is_some()).count()
    }

    // === Transition ===

    /// Apply `action` for the player to move.
    ///
    /// Actions are expected to come from `legal_actions`. Debug builds
    /// assert that the slot is available; in release an unknown wonder
    /// contributes nothing but the turn still passes.
    pub fn apply_action(&mut self, action: &Action) {
        debug_assert!(
            self.is_available(action.slot),
            "slot {} is not available",
            action.slot
        );
        let actor = self.to_move;
        let card = self.take_card(action.slot);

        match action.kind {
            ActionKind::Build => {
                if let Some(card) = card {
                    self.build(actor, &card);
                }
            }
            ActionKind::Sell => {
                let tally = &mut self.players[actor];
                tally.coins += SELL_BASE + u32::from(tally.color_count(Color::Yellow));
            }
            ActionKind::UseAsWonder => {
                if let Some(index) = action.wonder {
                    self.construct_wonder(actor, index);
                }
            }
        }

        self.to_move = actor.opponent();
        self.rounds_remaining = self.rounds_remaining.saturating_sub(1);
        self.evaluate_terminal();
        self.refresh_legal();
    }

    /// A copy of this state with `action` applied.
    #[must_use]
    pub fn after(&self, action: &Action) -> Self {
        let mut next = self.clone();
        next.apply_action(action);
        next
    }

    fn take_card(&mut self, slot: usize) -> Option<CardView> {
        let view = self.board.get_mut(slot)?;
        view.card.take()
    }

    fn build(&mut self, actor: PlayerId, card: &CardView) {
        let tally = &mut self.players[actor];
        if let Some(color) = card.color {
            let count = &mut tally.cards_by_color[color.index()];
            *count = count.saturating_add(1);
            if color.bears_victory_points() {
                tally.building_vp += u32::from(card.victory_points);
            }
        }
        if let Some(symbol) = card.science {
            let count = &mut tally.science[symbol.index()];
            *count = count.saturating_add(1);
        }
        tally.production.add(&card.production);
        self.push_conflict(actor, card.shields);
    }

    fn construct_wonder(&mut self, actor: PlayerId, index: usize) {
        let tally = &mut self.players[actor];
        let Some(wonder) = tally.wonders.get_mut(index) else {
            return;
        };
        if wonder.constructed {
            return;
        }
        wonder.constructed = true;
        let (points, shields) = (wonder.victory_points, wonder.shields);
        tally.wonder_vp += u32::from(points);
        self.push_conflict(actor, shields);
    }

    fn push_conflict(&mut self, actor: PlayerId, shields: u8) {
        if shields > 0 {
            self.conflict.push(actor, shields);
            self.refresh_military();
        }
    }

    fn refresh_military(&mut self) {
        for player in PlayerId::BOTH {
            self.players[player].military_vp = self.conflict.military_vp(player);
        }
    }

    fn evaluate_terminal(&mut self) {
        if self.rounds_remaining == 0 {
            self.terminal = true;
        }

        if let Some(player) = self.conflict.supremacy() {
            self.terminal = true;
            self.winner = Winner::Player(player);
            return;
        }

        let science = self
            .players
            .map(|t| t.distinct_science() >= SCIENCE_VICTORY_TYPES);
        match (science[PlayerId::FIRST], science[PlayerId::SECOND]) {
            (true, true) => {
                self.terminal = true;
                self.winner = Winner::Tie;
            }
            (true, false) => {
                self.terminal = true;
                self.winner = Winner::Player(PlayerId::FIRST);
            }
            (false, true) => {
                self.terminal = true;
                self.winner = Winner::Player(PlayerId::SECOND);
            }
            (false, false) => {}
        }
    }

    fn refresh_legal(&mut self) {
        self.legal.clear();
        if self.terminal {
            return;
        }

        let available: Vec<usize> = self.available_slots().collect();
        for &slot in &available {
            self.legal.push(Action::build(slot));
            self.legal.push(Action::sell(slot));
        }
        let unbuilt: Vec<usize> = self.players[self.to_move].unbuilt_wonders().collect();
        for wonder in unbuilt {
            for &slot in &available {
                self.legal.push(Action::use_as_wonder(slot, wonder));
            }
        }
    }
}
