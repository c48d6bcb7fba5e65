//! Arrow Escape entry point
//!
//! Native builds expose the generator as a CLI. The browser build uses the
//! library's wasm-bindgen exports instead.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::{Parser, Subcommand};
    use rand::Rng;

    use arrow_escape::level::LevelSchema;
    use arrow_escape::sim::{Difficulty, LevelGenerator, PlaySession, SessionStatus, TapOutcome};
    use arrow_escape::survey::survey;
    use arrow_escape::{GeneratorSettings, Result};

    /// Arrow Escape - solvable-by-construction arrow puzzle generator
    #[derive(Parser)]
    #[command(name = "arrow-escape")]
    #[command(author, version, about, long_about = None)]
    struct Cli {
        /// Generator settings JSON (defaults reproduce the shipped levels)
        #[arg(long, global = true)]
        settings: Option<PathBuf>,

        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Generate a level and print it
        Generate {
            /// Difficulty tier (defaults to the campaign tier for the level)
            #[arg(short, long)]
            difficulty: Option<Difficulty>,

            /// Level number
            #[arg(short, long, default_value_t = 1)]
            level: u32,

            /// Seed modifier for alternate boards
            #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
            seed_modifier: i64,

            /// Pick a random seed modifier
            #[arg(long, conflicts_with = "seed_modifier")]
            random: bool,

            /// Print the level as JSON
            #[arg(long)]
            json: bool,
        },
        /// Clear a level by replaying its solution
        PlayCheck {
            #[arg(short, long)]
            difficulty: Option<Difficulty>,

            #[arg(short, long, default_value_t = 1)]
            level: u32,

            #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
            seed_modifier: i64,
        },
        /// Summarise block counts over many seed modifiers
        Survey {
            #[arg(short, long)]
            difficulty: Option<Difficulty>,

            #[arg(short, long, default_value_t = 1)]
            level: u32,

            /// Number of boards to generate
            #[arg(long, default_value_t = 200)]
            samples: u32,

            /// Seed for the modifier sampler
            #[arg(long, default_value_t = 0)]
            seed: u64,
        },
    }

    pub fn run() -> ExitCode {
        let cli = Cli::parse();
        match execute(cli) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("{}", e);
                eprintln!("error: {}", e);
                ExitCode::FAILURE
            }
        }
    }

    fn execute(cli: Cli) -> Result<()> {
        let settings = match &cli.settings {
            Some(path) => GeneratorSettings::load(path)?,
            None => GeneratorSettings::default(),
        };
        let generator = LevelGenerator::new(settings)?;

        match cli.command {
            Commands::Generate {
                difficulty,
                level,
                seed_modifier,
                random,
                json,
            } => {
                let difficulty = difficulty.unwrap_or_else(|| Difficulty::for_level(level));
                let seed_modifier = if random {
                    rand::rng().random_range(0..1_000_000)
                } else {
                    seed_modifier
                };
                let cfg = generator.generate(difficulty, level, seed_modifier);
                if json {
                    println!("{}", LevelSchema::from_config(&cfg).to_json()?);
                } else {
                    println!(
                        "{} level {} (modifier {}, seed {}): {} blocks, target {}",
                        difficulty, level, seed_modifier, cfg.seed, cfg.optimal_moves, cfg.target_blocks
                    );
                    print!("{}", cfg.grid);
                }
            }
            Commands::PlayCheck {
                difficulty,
                level,
                seed_modifier,
            } => {
                let difficulty = difficulty.unwrap_or_else(|| Difficulty::for_level(level));
                let cfg = generator.generate(difficulty, level, seed_modifier);
                let mut session = PlaySession::new(&cfg);
                print!("{}", cfg.grid);
                for step in cfg.solution() {
                    if let TapOutcome::Exited { pos, direction } = session.tap(step.pos) {
                        println!("tap ({}, {}) -> {}", pos.x, pos.y, direction);
                    }
                }
                match session.status() {
                    SessionStatus::Won => println!("cleared in {} moves", session.moves()),
                    status => println!("stopped: {:?} with {} blocks left", status, session.remaining()),
                }
            }
            Commands::Survey {
                difficulty,
                level,
                samples,
                seed,
            } => {
                let tiers = match difficulty {
                    Some(d) => vec![d],
                    None => Difficulty::ALL.to_vec(),
                };
                for d in tiers {
                    let report = survey(&generator, d, level, samples, seed);
                    println!(
                        "{:<6} level {:>4}: blocks {:>2}..{:>2} mean {:>5.2} (target {:>5.2}), under-filled {}/{}",
                        d.as_str(),
                        level,
                        report.min_blocks,
                        report.max_blocks,
                        report.mean_blocks,
                        report.mean_target,
                        report.underfilled,
                        report.samples
                    );
                }
            }
        }
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Arrow Escape (native) starting...");
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
