//! Self-play: two MCTS agents draft a full three-era match.

use clap::Parser;

use duel_draft::cards::sample::{sample_pool, sample_wonders};
use duel_draft::logging::init_logging;
use duel_draft::{DraftMatch, MCTSConfig, MCTSSearch, PlayerId, PlayerPair, Playstyle, Winner};

#[derive(Parser, Debug)]
#[command(name = "selfplay", about = "Play an AI-vs-AI drafting match")]
struct Args {
    /// Match seed (deck shuffles)
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// MCTS iterations per move
    #[arg(short = 'i', long, default_value_t = 1000)]
    iterations: u32,

    /// UCB1 exploration constant
    #[arg(short = 'c', long, default_value_t = std::f64::consts::SQRT_2)]
    exploration: f64,

    /// Maximum rollout depth (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    rollout_depth: u32,

    /// Playstyle of the first player
    #[arg(long, default_value = "balanced")]
    playstyle_a: String,

    /// Playstyle of the second player
    #[arg(long, default_value = "balanced")]
    playstyle_b: String,

    /// Log spec used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn agent(args: &Args, playstyle: &str, seed: u64) -> duel_draft::Result<MCTSSearch> {
    let config = MCTSConfig::default()
        .with_iterations(args.iterations)
        .with_exploration(args.exploration)
        .with_max_rollout_depth(args.rollout_depth)
        .with_seed(seed)
        .with_playstyle(Playstyle::named(playstyle)?);
    Ok(MCTSSearch::new(config))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let _logger = init_logging(&args.log_level)?;

    let mut agents = PlayerPair::from_array([
        agent(&args, &args.playstyle_a, args.seed.wrapping_add(1))?,
        agent(&args, &args.playstyle_b, args.seed.wrapping_add(2))?,
    ]);
    let mut game = DraftMatch::new(sample_pool(), PlayerPair::new(sample_wonders), args.seed)?;

    let mut turn = 1;
    while !game.is_finished() {
        let player = game.to_move();
        let era = game.era().to_string();
        let Some(action) = agents[player].search(&game.snapshot()) else {
            log::warn!("{player} has no legal action");
            break;
        };
        let card = game
            .pyramid()
            .card(action.slot.into())
            .map(|c| c.name.clone())
            .unwrap_or_default();
        game.apply(action)?;
        let label = action.to_string();

        let stats = agents[player].stats();
        println!(
            "{turn:>3} {era:<8} {player}: {label:<24} {card:<20} ({} it, {:.0} it/s)",
            stats.iterations,
            stats.iterations_per_second(),
        );
        turn += 1;
    }

    println!();
    for player in PlayerId::BOTH {
        let board = game.player(player);
        println!(
            "{player}: {} VP, {} coins, {} cards, {} wonders",
            game.score(player),
            board.coins,
            board.cards.len(),
            board.wonders.iter().filter(|w| w.is_constructed()).count(),
        );
    }
    println!("conflict track: {}", game.meta().conflict.position());
    match game.winner() {
        Winner::Player(p) => println!("winner: {p}"),
        Winner::Tie => println!("tie"),
        Winner::Undecided => println!("undecided"),
    }
    Ok(())
}
