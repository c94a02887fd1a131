//! Line-oriented play loop.
//!
//! Each input line may hold several keys; they are played as consecutive
//! turns. The map is redrawn after every line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use game_core::{Command, GameConfig, GameEngine, Level, MoveOutcome, TurnStatus};

/// Why a session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Escaped { treasure: u32 },
    LeftLevel { treasure: u32 },
    Captured,
    Quit,
    InputClosed,
}

impl SessionEnd {
    pub fn message(&self) -> String {
        match self {
            SessionEnd::Escaped { treasure } => {
                format!("You escaped with {treasure} treasure!")
            }
            SessionEnd::LeftLevel { treasure } => {
                format!("You slipped through a door carrying {treasure} treasure.")
            }
            SessionEnd::Captured => "A monster caught you. Game over.".to_string(),
            SessionEnd::Quit => "You gave up the quest.".to_string(),
            SessionEnd::InputClosed => "Input closed.".to_string(),
        }
    }
}

pub struct Session {
    level: Level,
    config: GameConfig,
    turns: u64,
}

impl Session {
    pub fn new(level: Level, config: GameConfig) -> Self {
        Self {
            level,
            config,
            turns: 0,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Plays until the level ends or `input` runs dry.
    pub fn run<R, W>(&mut self, mut input: R, output: &mut W) -> Result<SessionEnd>
    where
        R: BufRead,
        W: Write,
    {
        let mut line = String::new();
        loop {
            self.render(output)?;

            line.clear();
            if input.read_line(&mut line).context("failed to read input")? == 0 {
                return Ok(SessionEnd::InputClosed);
            }

            for key in line.chars().filter(|key| !key.is_whitespace()) {
                let Some(command) = Command::from_key(key) else {
                    tracing::debug!("Ignoring unmapped key {:?}", key);
                    writeln!(output, "Unknown key '{key}' (w/a/s/d move, e wait, q quit)")?;
                    continue;
                };

                if let Some(end) = self.play(command) {
                    self.render(output)?;
                    return Ok(end);
                }
            }
        }
    }

    fn play(&mut self, command: Command) -> Option<SessionEnd> {
        let report = GameEngine::new(&mut self.level).play_turn(command);
        self.turns += 1;
        tracing::debug!(
            "Turn {}: {:?} -> {} ({})",
            self.turns,
            command,
            report.outcome,
            report.status
        );

        if report.outcome == MoveOutcome::Amulet
            && report.status == TurnStatus::Continue
            && self.config.resize_on_amulet
        {
            match self.level.resize() {
                Ok(()) => {
                    tracing::info!("Amulet found, map grew to {}", self.level.map().dimensions())
                }
                Err(err) => tracing::warn!("Amulet found but the map cannot grow: {}", err),
            }
        }

        let treasure = self.level.treasure();
        match report.status {
            TurnStatus::Continue => None,
            TurnStatus::Captured => Some(SessionEnd::Captured),
            TurnStatus::LeftLevel => Some(SessionEnd::LeftLevel { treasure }),
            TurnStatus::Escaped => Some(SessionEnd::Escaped { treasure }),
            TurnStatus::Quit => Some(SessionEnd::Quit),
        }
    }

    fn render<W: Write>(&self, output: &mut W) -> Result<()> {
        write!(output, "{}", self.level.map())?;
        writeln!(output, "Treasure: {}", self.level.treasure())?;
        output.flush()?;
        Ok(())
    }
}
