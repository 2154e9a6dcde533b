// Copyright (C) 2020-2026 Andy Kurnia.

use scrabble::{display, error, game_config, game_state, move_reader, movegen, rlhelper};

// None when the user hangs up.
fn read_line(rl: &mut rlhelper::RlEditor, prompt: &str) -> error::Returns<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => {
            rl.add_history_entry(line.as_str())?;
            Ok(Some(line))
        }
        Err(rustyline::error::ReadlineError::Interrupted) => {
            println!("CTRL-C");
            Ok(None)
        }
        Err(rustyline::error::ReadlineError::Eof) => {
            println!("CTRL-D");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn ask_players(rl: &mut rlhelper::RlEditor) -> error::Returns<Option<Vec<(String, bool)>>> {
    let num_players = loop {
        let Some(line) = read_line(
            rl,
            &format!("number of players (1-{})? ", game_state::MAX_PLAYERS),
        )?
        else {
            return Ok(None);
        };
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=game_state::MAX_PLAYERS).contains(&n) => break n,
            _ => println!("enter a number from 1 to {}", game_state::MAX_PLAYERS),
        }
    };
    let mut players = Vec::with_capacity(num_players);
    for i in 0..num_players {
        let Some(name) = read_line(rl, &format!("name of player {}? ", i + 1))? else {
            return Ok(None);
        };
        let name = match name.trim() {
            "" => format!("player {}", i + 1),
            s => s.to_string(),
        };
        let is_computer = loop {
            let Some(answer) = read_line(rl, &format!("is {} a computer (y/n)? ", name))? else {
                return Ok(None);
            };
            match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => break true,
                "n" | "no" => break false,
                _ => println!("answer y or n"),
            }
        };
        players.push((name, is_computer));
    }
    Ok(Some(players))
}

fn main() -> error::Returns<()> {
    env_logger::init();
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/config.json".into());
    let game_config = game_config::GameConfig::read(&config_path)?;
    let lexicon = game_config.load_dictionary()?;
    let mut rng = game_config.make_rng();
    let mut move_generator = movegen::MoveGenerator::new();
    let mut rl = rlhelper::new_rl_editor()?;

    let Some(players) = ask_players(&mut rl)? else {
        return Ok(());
    };
    let mut game_state = game_state::GameState::new(
        &game_config,
        game_config.load_board()?,
        game_config.load_bag()?,
        players,
        &mut rng,
    )?;

    'game: loop {
        display::print_game_state(&game_state);
        let name = game_state.current_player().name.clone();
        let the_move = if game_state.current_player().is_computer {
            move_generator.get_move(
                &game_state.board,
                &lexicon,
                &game_state.current_player().rack,
            )
        } else {
            loop {
                let Some(line) = read_line(&mut rl, &format!("{}> ", name))? else {
                    break 'game;
                };
                match line.trim().to_ascii_uppercase().as_str() {
                    "" => continue,
                    "HELP" => {
                        println!("{}", move_reader::USAGE);
                        continue;
                    }
                    "EXIT" => break 'game,
                    _ => {}
                }
                match move_reader::read_move(
                    &line,
                    &game_state.board,
                    &lexicon,
                    &game_state.current_player().rack,
                ) {
                    Ok(the_move) => break the_move,
                    Err(err) => {
                        log::warn!("rejected {:?}: {}", line, err);
                        println!("{}", err);
                    }
                }
            }
        };

        let description = display::describe_move(&the_move, &game_state.board);
        match game_state.play(&mut rng, &the_move) {
            Ok(points) => println!("{} {}, scoring {}", name, description, points),
            Err(err) => {
                log::warn!("{} cannot play {:?}: {}", name, the_move, err);
                println!("{}", err);
                continue;
            }
        }
        if game_state.is_game_over() {
            game_state.finish();
            display::print_game_state(&game_state);
            for i in game_state.winners() {
                println!(
                    "{} wins with {}",
                    game_state.players[i].name, game_state.players[i].score
                );
            }
            break;
        }
        game_state.next_turn();
    }

    Ok(())
}
