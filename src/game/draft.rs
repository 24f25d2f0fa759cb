//! A live three-era match.
//!
//! `DraftMatch` owns everything the search engine must never touch: the
//! card pool, the current era's pyramid and both player boards. Each turn
//! the caller either applies a human choice directly or projects a
//! `SearchState` with `snapshot` and hands it to the engine.

use crate::cards::{Card, CardPool, Era};
use crate::core::{Action, ActionKind, GameRng, PlayerId, PlayerPair};
use crate::error::{DraftError, Result};
use crate::pyramid::{build, Pyramid, RowPattern, SlotId};
use crate::state::{SearchState, Winner, SCIENCE_VICTORY_TYPES};

use super::board::PlayerBoard;
use super::meta::MatchMeta;

/// Coins worth one victory point at the final count.
pub const COINS_PER_VP: u32 = 3;

/// A two-player drafting match.
#[derive(Clone, Debug)]
pub struct DraftMatch {
    pool: CardPool,
    rng: GameRng,
    pyramid: Pyramid,
    players: PlayerPair<PlayerBoard>,
    meta: MatchMeta,
    discard: Vec<Card>,
}

impl DraftMatch {
    /// Start a match: deal era I from `pool` and seat both players with
    /// their wonders.
    pub fn new(pool: CardPool, wonders: PlayerPair<Vec<Card>>, seed: u64) -> Result<Self> {
        let [first, second] = wonders.into_array();
        let players = PlayerPair::from_array([PlayerBoard::new(first)?, PlayerBoard::new(second)?]);
        let mut rng = GameRng::new(seed);
        let meta = MatchMeta::new();
        let pyramid = deal(&pool, meta.era, &mut rng)?;

        log::info!("match started (seed {seed}), {} dealt", meta.era);

        Ok(Self {
            pool,
            rng,
            pyramid,
            players,
            meta,
            discard: Vec::new(),
        })
    }

    // === Accessors ===

    /// The current era's pyramid.
    #[must_use]
    pub fn pyramid(&self) -> &Pyramid {
        &self.pyramid
    }

    #[must_use]
    pub fn players(&self) -> &PlayerPair<PlayerBoard> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerBoard {
        &self.players[player]
    }

    #[must_use]
    pub fn meta(&self) -> &MatchMeta {
        &self.meta
    }

    #[must_use]
    pub fn era(&self) -> Era {
        self.meta.era
    }

    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        self.meta.to_move
    }

    /// Cards sold so far.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Limit how far ahead `snapshot` lets the search look. `None` means
    /// until the current pyramid is empty.
    pub fn set_round_budget(&mut self, rounds: Option<u32>) {
        self.meta.round_budget = rounds;
    }

    /// Project the match into a fresh search state.
    #[must_use]
    pub fn snapshot(&self) -> SearchState {
        SearchState::project(&self.pyramid, &self.players, &self.meta)
    }

    // === Turn flow ===

    /// Legal actions for the player to move, in the same order as the
    /// search state enumerates them.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_finished() {
            return Vec::new();
        }
        let available = self.pyramid.available_slots();
        let mut actions: Vec<Action> = available
            .iter()
            .flat_map(|id| [Action::build(id.index()), Action::sell(id.index())])
            .collect();
        for wonder in self.players[self.meta.to_move].unbuilt_wonders() {
            actions.extend(
                available
                    .iter()
                    .map(|id| Action::use_as_wonder(id.index(), wonder)),
            );
        }
        actions
    }

    /// Apply `action` for the player to move.
    ///
    /// The action is validated against the real pyramid and board before
    /// anything changes. When the pyramid empties the next era is dealt.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        if self.is_finished() {
            return Err(DraftError::MatchOver);
        }
        let actor = self.meta.to_move;
        let wonder = match action.kind {
            ActionKind::UseAsWonder => {
                let index = action.wonder.ok_or(DraftError::MissingWonder)?;
                self.players[actor].check_wonder(index)?;
                Some(index)
            }
            _ => None,
        };

        let card = self.pyramid.draft(SlotId::from(action.slot))?;
        log::trace!("{actor} {action} ({})", card.name);

        let board = &mut self.players[actor];
        let shields = match (action.kind, wonder) {
            (ActionKind::Build, _) => {
                let shields = card.shields();
                board.build(card);
                shields
            }
            (ActionKind::Sell, _) => {
                board.sell();
                self.discard.push(card);
                0
            }
            (ActionKind::UseAsWonder, Some(index)) => board.construct_wonder(index, card)?.shields(),
            (ActionKind::UseAsWonder, None) => return Err(DraftError::MissingWonder),
        };
        if shields > 0 {
            self.meta.conflict.push(actor, shields);
        }
        self.meta.to_move = actor.opponent();

        if self.is_finished() {
            log::info!("match finished: {:?}", self.winner());
        } else if self.pyramid.is_exhausted() {
            self.advance_era()?;
        }
        Ok(())
    }

    /// Deal the next era's pyramid.
    ///
    /// Fails with `EraExhausted` after era III.
    pub fn advance_era(&mut self) -> Result<()> {
        let next = self.meta.era.next().ok_or(DraftError::EraExhausted)?;
        self.pyramid = deal(&self.pool, next, &mut self.rng)?;
        self.meta.era = next;
        log::info!("{next} dealt, {} to move", self.meta.to_move);
        Ok(())
    }

    // === Outcome ===

    /// Victory points `player` would score if the match ended now.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        let board = &self.players[player];
        board.building_vp()
            + board.wonder_vp()
            + board.progress_vp
            + self.meta.conflict.military_vp(player)
            + board.coins / COINS_PER_VP
    }

    /// Check if the match is over: a supremacy win or era III drafted out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.supremacy().is_some()
            || (self.meta.era.next().is_none() && self.pyramid.is_exhausted())
    }

    /// The winner so far. Supremacy (military, then science) decides at
    /// once; otherwise the match is undecided until it ends and then goes
    /// to the higher score.
    #[must_use]
    pub fn winner(&self) -> Winner {
        if let Some(winner) = self.supremacy() {
            return winner;
        }
        if !self.is_finished() {
            return Winner::Undecided;
        }
        let first = self.score(PlayerId::FIRST);
        let second = self.score(PlayerId::SECOND);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Winner::Player(PlayerId::FIRST),
            std::cmp::Ordering::Less => Winner::Player(PlayerId::SECOND),
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }

    fn supremacy(&self) -> Option<Winner> {
        if let Some(player) = self.meta.conflict.supremacy() {
            return Some(Winner::Player(player));
        }
        let science = self
            .players
            .map(|b| b.distinct_science() >= SCIENCE_VICTORY_TYPES);
        match (science[PlayerId::FIRST], science[PlayerId::SECOND]) {
            (true, true) => Some(Winner::Tie),
            (true, false) => Some(Winner::Player(PlayerId::FIRST)),
            (false, true) => Some(Winner::Player(PlayerId::SECOND)),
            (false, false) => None,
        }
    }
}

fn deal(pool: &CardPool, era: Era, rng: &mut GameRng) -> Result<Pyramid> {
    build(pool.deal(era, rng), &RowPattern::for_era(era))
}
