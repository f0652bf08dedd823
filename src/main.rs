//! Command line front end: reads a cube, solves it and prints the solution.

use clap::Parser;
use log::error;

use cube_solver::cube333::CubieCube;
use cube_solver::cube333::facelet::FaceletCube;
use cube_solver::cube333::moves::Move333;
use cube_solver::cube333::two_phase_solver::{SolveStatus, Solver, SolverConfig};
use cube_solver::moves::MoveSequence;
use cube_solver::notation::DefaultNotation;
use cube_solver::progress::{CancelToken, LogProgress};

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Solves a 3x3x3 cube with Kociemba's two phase algorithm.
#[derive(Parser)]
#[command(name = "cube-solver")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The cube to solve: 54 facelet markers in face order U D L R F B, or six face specifiers
    /// like `U:uuuuuuuuu`. Defaults to the solved cube.
    cube: Option<String>,

    /// Moves applied to the cube before solving, e.g. "R U R' U'".
    #[arg(long)]
    scramble: Option<String>,

    /// Directory for generated tables. Defaults to the platform cache directory.
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Generate tables in memory only.
    #[arg(long, conflicts_with = "cache_dir")]
    no_cache: bool,

    /// Stop searching for shorter solutions after expanding this many nodes.
    #[arg(long)]
    node_limit: Option<u64>,

    /// Stop at the first solution found.
    #[arg(long, conflicts_with = "node_limit")]
    first: bool,

    /// Give up after this many seconds of searching, keeping the best solution so far.
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,
}

impl Cli {
    fn config(&self) -> SolverConfig {
        let mut config = if self.first {
            SolverConfig::first_solution()
        } else {
            SolverConfig::default()
        };
        if let Some(node_limit) = self.node_limit {
            config = config.with_node_limit(node_limit);
        }
        if !self.no_cache {
            let dir = self
                .cache_dir
                .clone()
                .or_else(|| dirs::cache_dir().map(|d| d.join("cube-solver")));
            config.cache_dir = dir;
        }
        config
    }

    fn cube(&self) -> Result<CubieCube, String> {
        let mut cube = match &self.cube {
            Some(text) => {
                let facelets: FaceletCube = text.parse().map_err(|e| format!("{e}"))?;
                facelets.validate().map_err(|e| format!("{e}"))?
            }
            None => CubieCube::SOLVED,
        };

        if let Some(scramble) = &self.scramble {
            let mvs = MoveSequence::<Move333>::parse(scramble, &DefaultNotation)
                .map_err(|e| format!("{e}"))?;
            cube = cube.make_moves(mvs);
        }

        Ok(cube)
    }
}

/// Cancel `token` once `timeout` has passed.
fn cancel_after(token: CancelToken, timeout: Duration) -> JoinHandle<()> {
    thread::spawn(move || {
        thread::sleep(timeout);
        token.cancel();
    })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let cube = match cli.cube() {
        Ok(cube) => cube,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let solver = Solver::new(cli.config());

    let token = CancelToken::new();
    if let Some(secs) = cli.timeout {
        cancel_after(token.clone(), Duration::from_secs(secs));
    }
    let outcome = solver.solve(&cube, &LogProgress::new(token));

    if let Some(solution) = &outcome.solution {
        println!("{}", solution.render(&DefaultNotation));
        println!("{}", solution.moves().render(&DefaultNotation));
    }

    match outcome.status {
        SolveStatus::Found | SolveStatus::OptimumFound => ExitCode::SUCCESS,
        SolveStatus::NotFound => ExitCode::from(2),
        SolveStatus::Abort => ExitCode::from(3),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn timeout_cancels_token() {
        let token = CancelToken::new();
        cancel_after(token.clone(), Duration::ZERO).join().unwrap();
        assert!(token.is_canceled());
    }

    #[test]
    fn parses_options() {
        let cli = Cli::try_parse_from(["cube-solver", "--no-cache", "--first", "--timeout", "5"])
            .unwrap();
        assert_eq!(cli.timeout, Some(5));
        let config = cli.config();
        assert_eq!(config.node_limit, 1);
        assert_eq!(config.cache_dir, None);

        assert!(Cli::try_parse_from(["cube-solver", "--first", "--node-limit", "3"]).is_err());
        assert!(Cli::try_parse_from(["cube-solver", "--timeout", "-1"]).is_err());
    }

    #[test]
    fn applies_scramble() {
        let cli = Cli::try_parse_from(["cube-solver", "--scramble", "R U"]).unwrap();
        assert!(!cli.cube().unwrap().is_solved());
        let cli = Cli::try_parse_from(["cube-solver", "--scramble", "R M"]).unwrap();
        assert!(cli.cube().is_err());
    }
}
