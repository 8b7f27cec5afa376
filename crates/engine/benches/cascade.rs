use cascade_core::{Board, Coord, Placement, Player};
use cascade_engine::{apply_move, valid_moves};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Standard 9x6 board with alternating ownership and mid-range counts.
fn midgame_board() -> Board {
    let mut board = Board::new(9, 6);
    for at in board.coords().collect::<Vec<_>>() {
        if (at.row + at.col) % 3 == 2 {
            continue;
        }
        let cell = board.get_mut(at);
        cell.count = 1 + (at.row % 2) as u32;
        cell.owner = Some(if (at.row + at.col) % 2 == 0 {
            Player::Ai
        } else {
            Player::Human
        });
    }
    board
}

/// Column 0 primed one orb below critical: a long single-file chain.
fn fuse_board() -> Board {
    let mut board = Board::new(9, 6);
    for row in 0..9 {
        let at = Coord::new(row, 0);
        let critical = board.critical_mass(at);
        let cell = board.get_mut(at);
        cell.count = critical - 1;
        cell.owner = Some(Player::Ai);
    }
    let far = board.get_mut(Coord::new(8, 5));
    far.count = 1;
    far.owner = Some(Player::Human);
    board
}

fn bench_valid_moves(c: &mut Criterion) {
    let empty = Board::new(9, 6);
    let midgame = midgame_board();

    c.bench_function("valid_moves_empty_9x6", |b| {
        b.iter(|| valid_moves(black_box(&empty), black_box(Player::Ai)))
    });
    c.bench_function("valid_moves_midgame_9x6", |b| {
        b.iter(|| valid_moves(black_box(&midgame), black_box(Player::Ai)))
    });
}

fn bench_cascade(c: &mut Criterion) {
    let empty = Board::new(9, 6);
    let fuse = fuse_board();

    c.bench_function("apply_no_cascade", |b| {
        b.iter(|| apply_move(black_box(&empty), Placement::new(Coord::new(4, 3), Player::Ai)))
    });
    c.bench_function("apply_fuse_cascade", |b| {
        b.iter(|| apply_move(black_box(&fuse), Placement::new(Coord::new(0, 0), Player::Ai)))
    });
}

criterion_group!(benches, bench_valid_moves, bench_cascade);
criterion_main!(benches);
