// Copyright (C) 2020-2026 Andy Kurnia.

use scrabble::{display, error, game_config, game_state, movegen};

fn main() -> error::Returns<()> {
    env_logger::init();
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/config.json".into());
    let game_config = game_config::GameConfig::read(&config_path)?;
    let lexicon = game_config.load_dictionary()?;
    log::debug!("{} words in {}", lexicon.num_words(), game_config.dictionary);
    let mut rng = game_config.make_rng();
    let mut move_generator = movegen::MoveGenerator::new();

    let mut game_state = game_state::GameState::new(
        &game_config,
        game_config.load_board()?,
        game_config.load_bag()?,
        vec![("computer 1".into(), true), ("computer 2".into(), true)],
        &mut rng,
    )?;

    println!("\nplaying self");
    loop {
        display::print_game_state(&game_state);
        let the_move = move_generator.get_move(
            &game_state.board,
            &lexicon,
            &game_state.current_player().rack,
        );
        let description = display::describe_move(&the_move, &game_state.board);
        let points = game_state.play(&mut rng, &the_move)?;
        println!(
            "{} {}, scoring {}",
            game_state.current_player().name,
            description,
            points
        );
        if game_state.is_game_over() {
            break;
        }
        game_state.next_turn();
    }

    game_state.finish();
    display::print_game_state(&game_state);
    for i in game_state.winners() {
        println!(
            "{} wins with {}",
            game_state.players[i].name, game_state.players[i].score
        );
    }
    Ok(())
}
