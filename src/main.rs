use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vantage_core::Board;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    info!("vantage starting");

    let mut board = match std::env::args().nth(1) {
        Some(placement) => placement
            .parse::<Board>()
            .with_context(|| format!("invalid placement \"{placement}\""))?,
        None => Board::starting_position(),
    };
    board.recompute_control();
    log_control(&board);

    board
        .move_piece(0, 0, 4, 4)
        .context("relocating a1 to e5")?;
    board.recompute_control();
    log_control(&board);

    Ok(())
}

/// Log every square that holds a piece or is controlled by one.
fn log_control(board: &Board) {
    info!(placement = %board, "control recomputed");
    let control = board.control();
    for (sq, piece) in board.squares() {
        let count = control.count(sq);
        if piece.is_empty() && count.total() == 0 {
            continue;
        }
        info!(
            square = %sq,
            %piece,
            reach = control.reach(sq),
            black = count.black,
            white = count.white,
            "square control"
        );
    }
}
