use life_game_types::config_fixture;
use life_game_types::inputs::fill_random;
use rand::thread_rng;

fn run_from_fixture_till_end() {
    let config = config_fixture(include_str!("../fixtures/simulation_config.json"));
    let (mut board, mut logic) = config.build().unwrap();
    fill_random(&mut board, None, &mut thread_rng()).unwrap();

    let reason = logic.run(&mut board);

    dbg!(reason, logic.current_step(), board.living_cell_fraction());
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    run_from_fixture_till_end();
}
