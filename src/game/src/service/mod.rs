pub mod console;
pub mod game_loop;
