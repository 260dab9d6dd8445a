use anyhow::{Context, Result};
use std::{io, thread};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod console;
mod options;
mod stats;

use sparselife::{Board, GameOfLife, PatternCodec, RunLengthEncoded};
use console::{ConsoleCommand, ConsoleRender};
use stats::Recorder;

fn try_init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .try_init()
}

fn init_tracing() {
    if let Err(err) = try_init_tracing() {
        eprintln!("failed to initialise logging: {err}");
    }
}

fn args_to_board(args: &options::Args) -> Result<Board> {
    if let Some(file_name) = args.input_file() {
        let encoded = std::fs::read_to_string(&file_name)
            .with_context(|| format!("failed to read pattern file {file_name}"))?;
        return RunLengthEncoded::default()
            .decode(&encoded)
            .with_context(|| format!("failed to decode pattern file {file_name}"));
    }

    // seed the board based on args
    let (grid_w, grid_h) = args.grid_size();
    let mut rng = sparselife::seeded_rng(args.seed())?;
    Ok(args.fill_mode()?.create_board(grid_w, grid_h, &mut rng))
}

fn main() -> Result<()> {
    init_tracing();
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    let board = args_to_board(&args)?;
    info!(alive = board.alive_count(), "initial board ready");

    let threads = args.threads();
    if threads > 1 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to start the worker pool")?;
    }

    let mut console = if args.console() {
        Some(ConsoleRender::new(&board)?)
    } else {
        None
    };
    let sleep = args.sleep();

    let mut game = GameOfLife::new(board);
    let mut stats = stats::SwitchRecorder::new(game.board(), args.stats_file().is_some());
    'generations: for _ in 0..args.generations() {
        if let Some(ref mut console) = console {
            console.render(game.generation(), game.board())?;
        }

        // report metrics every 500ms
        if stats.has_report() {
            let report = stats.report();
            if let Some(ref mut console) = console {
                console.set_report(report);
            } else {
                info!("{}", report);
            }
        }

        match (console.as_mut(), sleep) {
            (Some(view), Some(delay)) => {
                let cmd = view.wait(delay, game.generation(), game.board())?;
                if let ConsoleCommand::Exit = cmd {
                    break 'generations;
                }
            }
            (Some(view), None) => {
                while let Some(cmd) = view.poll_events(std::time::Duration::ZERO)? {
                    if let ConsoleCommand::Exit = cmd {
                        break 'generations;
                    }
                }
            }
            (None, Some(delay)) => {
                console::print_frame(&mut io::stdout(), game.generation(), game.board())?;
                thread::sleep(delay);
            }
            (None, None) => {}
        }

        if threads > 1 {
            game.next_generation_parallel(threads);
        } else {
            game.next_generation();
        }
        stats.record(game.board());
    }
    // restore the terminal before printing anything else
    std::mem::drop(console);
    info!(
        generations = game.generation(),
        alive = game.alive_count(),
        "simulation stopped"
    );

    if let Some(file_name) = args.stats_file() {
        if stats.save(&file_name).context("failed to write stats")? {
            debug!(file = %file_name, "wrote stats");
        }
    }

    if let Some(file_name) = args.output_file() {
        let encoder = RunLengthEncoded::default().set_name("sparselife generated pattern");
        let encoded_game = encoder.encode(&game.take());
        std::fs::write(&file_name, encoded_game)
            .with_context(|| format!("failed to write pattern file {file_name}"))?;
    }

    Ok(())
}
