//! MCTS policies for selection and simulation.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: How to choose which child to descend into (UCB1)
//! - `SimulationPolicy`: How to run rollouts (uniform random)
//!
//! Rollouts that stop before the match is decided are scored with a linear
//! heuristic weighted by the configured `Playstyle`.

use crate::cards::Color;
use crate::core::{ConflictTrack, GameRng, PlayerId};
use crate::state::{PlayerTally, SearchState};

use super::config::MCTSConfig;
use super::node::NodeId;
use super::playstyle::Playstyle;
use super::tree::MCTSTree;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Select a child of `node`, or `None` if it has no children.
    fn select(&self, tree: &MCTSTree, node: NodeId, config: &MCTSConfig) -> Option<NodeId>;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Balances exploitation (high reward) with exploration (low visits).
/// Formula: W/N + c * sqrt(ln(N_parent) / N). Ties go to the earliest
/// child.
#[derive(Clone, Debug, Default)]
pub struct UCB1;

impl SelectionPolicy for UCB1 {
    fn select(&self, tree: &MCTSTree, node: NodeId, config: &MCTSConfig) -> Option<NodeId> {
        let parent = tree.get(node);
        let mut best: Option<(NodeId, f64)> = None;

        for &child in &parent.children {
            let stats = tree.get(child);
            let score = ucb1_score(
                stats.value,
                stats.visits,
                parent.visits,
                config.exploration_constant,
            );
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((child, score));
            }
        }
        best.map(|(child, _)| child)
    }
}

/// UCB1 score of a child. Unvisited children score positive infinity.
#[must_use]
pub fn ucb1_score(value: f64, visits: u32, parent_visits: u32, exploration: f64) -> f64 {
    if visits == 0 {
        return f64::INFINITY;
    }
    let n = f64::from(visits);
    let ln_parent = f64::from(parent_visits.max(1)).ln();
    value / n + exploration * (ln_parent / n).sqrt()
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Result of one rollout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rollout {
    /// Reward for the searching player in `[0, 1]`.
    pub reward: f64,

    /// Random moves played.
    pub depth: u32,

    /// Whether the heuristic decided the reward.
    pub heuristic: bool,
}

/// Policy for running simulations (rollouts) from a leaf state.
pub trait SimulationPolicy: Send + Sync {
    /// Play out a throwaway copy of `state` and score it for `searching`.
    fn simulate(
        &self,
        state: &SearchState,
        searching: PlayerId,
        rng: &mut GameRng,
        config: &MCTSConfig,
    ) -> Rollout;
}

/// Random simulation policy.
///
/// Plays uniformly random legal actions until terminal or depth limit.
#[derive(Clone, Debug, Default)]
pub struct RandomRollout;

impl SimulationPolicy for RandomRollout {
    fn simulate(
        &self,
        state: &SearchState,
        searching: PlayerId,
        rng: &mut GameRng,
        config: &MCTSConfig,
    ) -> Rollout {
        let mut state = state.clone();
        let mut depth = 0;

        loop {
            if state.is_terminal() {
                return match state.winner().reward_for(searching) {
                    Some(reward) => Rollout {
                        reward,
                        depth,
                        heuristic: false,
                    },
                    None => Rollout {
                        reward: heuristic_reward(&state, searching, &config.playstyle),
                        depth,
                        heuristic: true,
                    },
                };
            }

            if config.max_rollout_depth > 0 && depth >= config.max_rollout_depth {
                return Rollout {
                    reward: heuristic_reward(&state, searching, &config.playstyle),
                    depth,
                    heuristic: true,
                };
            }

            let actions = state.legal_actions();
            if actions.is_empty() {
                // Dead end: nothing left to draft before the budget ran out.
                return Rollout {
                    reward: 0.5,
                    depth,
                    heuristic: false,
                };
            }

            let action = actions[rng.gen_index(actions.len())];
            state.apply_action(&action);
            depth += 1;
        }
    }
}

// =============================================================================
// Heuristic Scoring
// =============================================================================

/// Linear score of one player's position.
///
/// Sums coin value, victory points, per-color card bonuses, conflict-track
/// advantage and distinct science types, each weighted by `style`.
#[must_use]
pub fn heuristic_score(
    tally: &PlayerTally,
    player: PlayerId,
    conflict: ConflictTrack,
    style: &Playstyle,
) -> f64 {
    let cards: f64 = Color::ALL
        .iter()
        .map(|&c| style.color_weight(c) * f64::from(tally.color_count(c)))
        .sum();

    style.coin * f64::from(tally.coins)
        + style.victory_point * f64::from(tally.total_vp())
        + cards
        + style.military * f64::from(conflict.advantage(player))
        + style.science * tally.distinct_science() as f64
}

/// Compare both players' heuristic scores: 1 if `player` leads, 0.5 if
/// level, 0 if behind.
#[must_use]
pub fn heuristic_reward(state: &SearchState, player: PlayerId, style: &Playstyle) -> f64 {
    let conflict = state.conflict();
    let mine = heuristic_score(state.player(player), player, conflict, style);
    let theirs = heuristic_score(
        state.player(player.opponent()),
        player.opponent(),
        conflict,
        style,
    );

    match mine.partial_cmp(&theirs) {
        Some(std::cmp::Ordering::Greater) => 1.0,
        Some(std::cmp::Ordering::Less) => 0.0,
        _ => 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, PlayerPair};
    use crate::state::{CardView, SlotView};

    fn flat_state(cards: usize, rounds: u32) -> SearchState {
        let board = (0..cards).map(|_| SlotView {
            card: Some(CardView::plain(Color::Brown)),
            children: [None, None],
        });
        SearchState::new(
            PlayerPair::default(),
            board,
            ConflictTrack::default(),
            PlayerId::FIRST,
            rounds,
        )
    }

    #[test]
    fn test_ucb1_unvisited_is_infinite() {
        assert_eq!(ucb1_score(0.0, 0, 10, 1.4), f64::INFINITY);
        assert!(ucb1_score(5.0, 10, 20, 1.4).is_finite());
    }

    #[test]
    fn test_ucb1_monotone_in_value() {
        for visits in [1, 5, 40] {
            let low = ucb1_score(0.2 * f64::from(visits), visits, 100, 1.4);
            let high = ucb1_score(0.7 * f64::from(visits), visits, 100, 1.4);
            assert!(high >= low);
        }
    }

    #[test]
    fn test_ucb1_selects_unvisited() {
        let mut tree = MCTSTree::new(flat_state(2, 2));
        let root = tree.root();
        let a = tree.expand(root).unwrap();
        let b = tree.expand(root).unwrap();
        tree.backpropagate(a, 1.0);

        let selected = UCB1.select(&tree, root, &MCTSConfig::default());
        assert_eq!(selected, Some(b));
    }

    #[test]
    fn test_ucb1_prefers_higher_mean_at_equal_visits() {
        let mut tree = MCTSTree::new(flat_state(2, 2));
        let root = tree.root();
        let a = tree.expand(root).unwrap();
        let b = tree.expand(root).unwrap();
        tree.backpropagate(a, 0.0);
        tree.backpropagate(b, 1.0);

        let selected = UCB1.select(&tree, root, &MCTSConfig::default());
        assert_eq!(selected, Some(b));
    }

    #[test]
    fn test_ucb1_no_children() {
        let tree = MCTSTree::new(flat_state(2, 2));
        assert!(UCB1
            .select(&tree, tree.root(), &MCTSConfig::default())
            .is_none());
    }

    #[test]
    fn test_heuristic_score_weights() {
        let mut tally = PlayerTally::default();
        tally.coins = 6;
        tally.building_vp = 4;
        tally.cards_by_color[Color::Red.index()] = 2;
        tally.science[0] = 1;

        let style = Playstyle::balanced();
        let score = heuristic_score(&tally, PlayerId::FIRST, ConflictTrack::new(2), &style);
        let expected = 6.0 * style.coin
            + 4.0 * style.victory_point
            + 2.0 * style.color_weight(Color::Red)
            + 2.0 * style.military
            + style.science;
        assert!((score - expected).abs() < 1e-9);

        let behind = heuristic_score(&tally, PlayerId::SECOND, ConflictTrack::new(2), &style);
        assert!(behind < score);
    }

    #[test]
    fn test_heuristic_reward_compares_players() {
        let mut state = flat_state(2, 2);
        let style = Playstyle::balanced();
        assert_eq!(heuristic_reward(&state, PlayerId::FIRST, &style), 0.5);

        state.apply_action(&Action::sell(0));
        assert_eq!(heuristic_reward(&state, PlayerId::FIRST, &style), 1.0);
        assert_eq!(heuristic_reward(&state, PlayerId::SECOND, &style), 0.0);
    }

    #[test]
    fn test_rollout_reaches_terminal() {
        let state = flat_state(6, 6);
        let mut rng = GameRng::new(1);
        let rollout = RandomRollout.simulate(&state, PlayerId::FIRST, &mut rng, &MCTSConfig::default());

        assert_eq!(rollout.depth, 6);
        // The budget ends the match undecided, so the heuristic scores it.
        assert!(rollout.heuristic);
        assert!((0.0..=1.0).contains(&rollout.reward));
    }

    #[test]
    fn test_rollout_depth_cap() {
        let state = flat_state(6, 6);
        let mut rng = GameRng::new(1);
        let config = MCTSConfig::default().with_max_rollout_depth(2);
        let rollout = RandomRollout.simulate(&state, PlayerId::FIRST, &mut rng, &config);

        assert_eq!(rollout.depth, 2);
        assert!(rollout.heuristic);
    }

    #[test]
    fn test_rollout_dead_end() {
        // Budget outlasts the board.
        let state = flat_state(1, 5);
        let mut rng = GameRng::new(1);
        let rollout = RandomRollout.simulate(&state, PlayerId::FIRST, &mut rng, &MCTSConfig::default());

        assert_eq!(rollout.depth, 1);
        assert_eq!(rollout.reward, 0.5);
        assert!(!rollout.heuristic);
    }

    #[test]
    fn test_rollout_decided_terminal() {
        let state = SearchState::new(
            PlayerPair::default(),
            Vec::new(),
            ConflictTrack::new(ConflictTrack::LIMIT),
            PlayerId::FIRST,
            3,
        );
        let mut rng = GameRng::new(1);
        let config = MCTSConfig::default();

        let first = RandomRollout.simulate(&state, PlayerId::FIRST, &mut rng, &config);
        let second = RandomRollout.simulate(&state, PlayerId::SECOND, &mut rng, &config);
        assert_eq!(first.reward, 1.0);
        assert_eq!(second.reward, 0.0);
        assert_eq!(first.depth, 0);
    }
}
