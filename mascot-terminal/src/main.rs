/// Mascot Terminal Playground
///
/// Scroll through a virtual page and watch the mascot settle beside each
/// section; drag it onto the game box to drop it.
/// Usage: mascot-terminal [config.json]
/// Controls:
///   - j/k, Arrow Keys, Mouse Wheel: Scroll
///   - PageUp/PageDown/Space: Scroll by a screen
///   - Left-drag the mascot: Move it
///   - Q/ESC: Quit

use std::env;
use std::fs;
use std::io;
use mascot_core::MascotConfig;
use mascot_terminal::{terminal_config, TerminalApp};

fn load_config(path: &str) -> io::Result<MascotConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| io::Error::new(e.kind(), format!("Failed to read config {}: {}", path, e)))?;
    MascotConfig::from_json(&text)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
}

fn main() -> io::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => {
            println!("Loading config: {}", path);
            load_config(&path)?
        }
        None => terminal_config(),
    };

    println!("Starting mascot playground (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_millis(500));

    let mut app = TerminalApp::new(config)?;
    app.run()?;

    println!("Thanks for playing!");
    Ok(())
}
