//! The interactive game loop.
//!
//! Owns the world and the shell-level verbs (QUIT); everything else is
//! handed to `game-core`'s parser and engine. Output follows the classic
//! protocol: blank line, upper-cased narrative wrapped to the terminal
//! column, blank line, prompt.

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use game_core::text::wrap;
use game_core::{Engine, GameConfig, World, command};

pub struct Shell {
    world: World,
    config: GameConfig,
    game_over: bool,
}

impl Shell {
    pub fn new(world: World, config: GameConfig) -> Self {
        Self {
            world,
            config,
            game_over: false,
        }
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Runs one command line and returns the narrative for it.
    pub fn execute(&mut self, line: &str) -> String {
        let tokens: Vec<String> = line
            .to_uppercase()
            .split_whitespace()
            .map(String::from)
            .collect();
        let Some(verb) = tokens.first() else {
            return String::new();
        };

        if verb == "QUIT" {
            self.game_over = true;
            return "Okay. Bye!".to_string();
        }

        match command::parse(&self.world, &tokens) {
            Some(Ok(action)) => Engine::new(&mut self.world, &self.config).perform(action),
            Some(Err(message)) => message,
            None => format!("Don't know how to {verb}"),
        }
    }

    pub fn run(mut self) -> Result<()> {
        let mut editor = DefaultEditor::new()?;

        let opening = self.world.describe_room(self.world.player().room());
        self.say(&opening);

        while !self.game_over {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(&line);
                    let narrative = self.execute(&line);
                    if !narrative.is_empty() {
                        self.say(&narrative);
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    self.say("Okay. Bye!");
                    self.game_over = true;
                }
                Err(err) => {
                    tracing::error!(%err, "failed to read command");
                    return Err(err.into());
                }
            }
        }
        Ok(())
    }

    fn say(&self, narrative: &str) {
        println!(
            "\n{}\n",
            wrap(&narrative.to_uppercase(), self.config.wrap_column)
        );
    }
}
