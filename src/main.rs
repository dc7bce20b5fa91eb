//! Flappy Sim entry point
//!
//! Native builds run a headless, autopiloted session and print a JSON
//! summary. The browser build is driven from `flappy_sim::web`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use serde::Serialize;

    use flappy_sim::sim::{FatalCause, GameEvent, GamePhase};
    use flappy_sim::{ConfigError, Game, GameConfig, Preset};

    const USAGE: &str =
        "usage: flappy-sim [--config PATH] [--preset classic|spikes] [--seed N] [--ticks N] [--trace]";

    /// Command line options
    #[derive(Debug)]
    pub struct Options {
        config: Option<String>,
        preset: Option<String>,
        seed: u64,
        ticks: u64,
        trace: bool,
    }

    impl Default for Options {
        fn default() -> Self {
            Self {
                config: None,
                preset: None,
                seed: 0,
                ticks: 3000,
                trace: false,
            }
        }
    }

    pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
        let mut options = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = |name: &str| args.next().ok_or_else(|| format!("{} needs a value", name));
            match arg.as_str() {
                "--config" => options.config = Some(value("--config")?),
                "--preset" => options.preset = Some(value("--preset")?),
                "--seed" => {
                    options.seed = value("--seed")?
                        .parse()
                        .map_err(|e| format!("bad --seed: {}", e))?
                }
                "--ticks" => {
                    options.ticks = value("--ticks")?
                        .parse()
                        .map_err(|e| format!("bad --ticks: {}", e))?
                }
                "--trace" => options.trace = true,
                "-h" | "--help" => return Err(USAGE.to_string()),
                other => return Err(format!("unknown argument: {}\n{}", other, USAGE)),
            }
        }
        Ok(options)
    }

    /// Result of one run
    #[derive(Debug, Serialize)]
    struct RunResult {
        run: u32,
        score: u32,
        ticks: u64,
        cause: Option<FatalCause>,
        gravity_flips: u32,
    }

    #[derive(Debug, Serialize)]
    struct Summary {
        seed: u64,
        preset: Option<Preset>,
        ticks: u64,
        runs: Vec<RunResult>,
        best_score: u32,
    }

    fn build_config(options: &Options) -> Result<(GameConfig, Option<Preset>), ConfigError> {
        let mut config = match &options.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        let preset = match &options.preset {
            Some(name) => {
                let preset =
                    Preset::from_str(name).ok_or_else(|| ConfigError::UnknownPreset(name.clone()))?;
                config.apply_preset(preset);
                config.validate()?;
                Some(preset)
            }
            None => None,
        };
        Ok((config, preset))
    }

    pub fn run(options: Options) -> Result<(), ConfigError> {
        let (config, preset) = build_config(&options)?;
        let mut game = Game::with_seed(config, options.seed)?;

        let mut runs = Vec::new();
        let mut flips = 0;
        for _ in 0..options.ticks {
            if game.autopilot_wants_jump() {
                game.on_jump();
            }
            let Some(frame) = game.on_tick() else {
                break;
            };
            if options.trace {
                if let Ok(json) = serde_json::to_string(&frame) {
                    println!("{}", json);
                }
            }

            let mut cause = None;
            for event in &frame.events {
                match event {
                    GameEvent::GravityInverted { .. } => flips += 1,
                    GameEvent::Collided(c) => cause = Some(*c),
                    _ => {}
                }
            }

            if frame.snapshot.phase == GamePhase::GameOver {
                runs.push(RunResult {
                    run: frame.snapshot.run,
                    score: frame.snapshot.score,
                    ticks: frame.snapshot.time_ticks,
                    cause,
                    gravity_flips: flips,
                });
                flips = 0;
                game.on_restart();
            }
        }

        // Record the run still in progress
        if let Some(snapshot) = game.snapshot() {
            if snapshot.phase == GamePhase::Playing && snapshot.time_ticks > 0 {
                runs.push(RunResult {
                    run: snapshot.run,
                    score: snapshot.score,
                    ticks: snapshot.time_ticks,
                    cause: None,
                    gravity_flips: flips,
                });
            }
        }
        game.on_quit();

        let summary = Summary {
            seed: options.seed,
            preset,
            ticks: options.ticks,
            best_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            runs,
        };
        log::info!(
            "Simulated {} runs, best score {}",
            summary.runs.len(),
            summary.best_score
        );
        if let Ok(json) = serde_json::to_string_pretty(&summary) {
            println!("{}", json);
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }

        #[test]
        fn test_parse_args() {
            let options = parse_args(args(&["--seed", "42", "--preset", "spikes", "--trace"]))
                .expect("valid args");
            assert_eq!(options.seed, 42);
            assert_eq!(options.preset.as_deref(), Some("spikes"));
            assert!(options.trace);
            assert_eq!(options.ticks, 3000);
        }

        #[test]
        fn test_parse_args_rejects_garbage() {
            assert!(parse_args(args(&["--seed", "abc"])).is_err());
            assert!(parse_args(args(&["--ticks"])).is_err());
            assert!(parse_args(args(&["--fly"])).is_err());
        }

        #[test]
        fn test_unknown_preset_is_config_error() {
            let options = parse_args(args(&["--preset", "ufo"])).expect("valid args");
            assert!(matches!(
                build_config(&options),
                Err(ConfigError::UnknownPreset(_))
            ));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Sim (native) starting...");

    let options = match native::parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    if let Err(e) = native::run(options) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is flappy_sim::web::wasm_start, this is just to satisfy the compiler
}
