use clap::Parser;
use crossterm::style::Stylize;
use eight_puzzle::{Board, Manhattan, Outcome, Solver};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(name = "eight-puzzle")]
#[command(about = "Solves a scrambled 8-puzzle with IDA*")]
#[command(version)]
struct Args {
    /// Number of random moves used to scramble the solved board
    #[arg(short, long, default_value_t = 100)]
    scramble: usize,

    /// RNG seed for a reproducible scramble
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let start = Board::scrambled(args.scramble, &mut rng);

    println!("{}", "Initial board:".bold());
    println!("{}", start);

    let report = Solver::new(Manhattan).solve(&start);
    match &report.outcome {
        Outcome::Solved(path) => {
            println!("{} {} moves", "Solution found, cost:".bold(), path.len() - 1);
            println!();
            println!("{}", "Final board:".bold());
            if let Some(last) = path.last() {
                println!("{}", last);
            }
        }
        Outcome::Exhausted => println!("{}", "No solution exists".bold()),
        Outcome::DepthCapped => println!("{}", "No solution found within the depth cap".bold()),
    }
    println!("Nodes visited: {}", report.nodes_visited);
}
