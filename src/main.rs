use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use mailbox_chess::controller::controller_top::run_stdio_loop;
use mailbox_chess::engines::engine_random::RandomMover;
use mailbox_chess::engines::rules_engine::RulesEngine;
use mailbox_chess::game_state::chess_rules::STARTING_POSITION_FEN;

struct CliOptions {
    fen: String,
    seed: Option<u64>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        fen: STARTING_POSITION_FEN.to_owned(),
        seed: None,
    };

    let mut args = args.peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--fen" => {
                // A FEN spans six whitespace-separated tokens when unquoted.
                let mut fields = Vec::with_capacity(6);
                while fields.len() < 6 {
                    match args.next_if(|next| !next.starts_with("--")) {
                        Some(token) => fields.extend(token.split_whitespace().map(str::to_owned)),
                        None => break,
                    }
                }
                if fields.is_empty() {
                    return Err("--fen needs a position".to_owned());
                }
                options.fen = fields.join(" ");
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid --seed value '{value}'"))?;
                options.seed = Some(seed);
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok(options)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: mailbox_chess [--fen <fen>] [--seed <u64>]");
            return ExitCode::from(2);
        }
    };

    let engine = match RulesEngine::new_game(&options.fen) {
        Ok(engine) => engine,
        Err(err) => {
            error!(%err, "could not start game");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let mover = options.seed.map_or_else(RandomMover::new, RandomMover::seeded);

    if let Err(err) = run_stdio_loop(engine, mover) {
        error!(%err, "terminal loop failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
