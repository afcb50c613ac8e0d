use life_game_types::board::Board;
use life_game_types::inputs::fill_random;
use life_game_types::rules::Rule;
use life_game_types::simulator::GameLogic;
use life_game_types::types::{SimulatorInstruments, Topology};
use rand::{rngs::SmallRng, SeedableRng};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

#[derive(Debug)]
struct Instruments {}

impl SimulatorInstruments for Instruments {
    fn observe_simulation(&self, _: std::time::Duration) {}
}

fn random_board(width: u32, height: u32, topology: Topology) -> Board {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new(width, height, topology);
    fill_random(&mut board, Some(35.0), &mut rng).expect("35 percent is a valid fill");
    board
}

fn bench_step(logic: &mut GameLogic, board: &mut Board, instruments: &Instruments) {
    logic.step_with_instruments(board, instruments);
}

fn criterion_benchmark(c: &mut Criterion) {
    let instruments = Instruments {};
    let mut g = c.benchmark_group("step");
    for (name, topology) in [("solid", Topology::Solid), ("passthrough", Topology::Passthrough)].iter()
    {
        let initial = random_board(64, 64, *topology);
        g.bench_function(format!("conway 64x64 {}", name), |b| {
            let mut logic = GameLogic::new(Rule::Conway.rule_set(), u32::MAX);
            let mut board = initial.clone();
            b.iter(|| bench_step(&mut logic, black_box(&mut board), &instruments))
        });
    }

    let initial = random_board(64, 64, Topology::Solid);
    g.bench_function("anti conway 64x64 solid", |b| {
        let mut logic = GameLogic::with_anti_rules(Rule::Conway.rule_set(), u32::MAX)
            .expect("conway has an anti rule");
        let mut board = initial.clone();
        b.iter(|| bench_step(&mut logic, black_box(&mut board), &instruments))
    });
    g.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
