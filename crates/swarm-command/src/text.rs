//! Deterministic text-command parser, the regex-free fallback when no
//! external translator is wired in.
//!
//! Grammar: a command names exactly one drone (`drone 2`, `drone2`,
//! `drone two`, `drone number 2`) and one or more direction/step pairs
//! (`up 3`, `right=2`, `left two`, compass aliases accepted).  Filler words
//! between pairs are ignored; a direction with no step count, or a command
//! with no drone or no movements, is rejected whole.

use swarm_core::Direction;

use crate::envelope::{LegacyMoveCommand, LegacyParameters, Movement, RawCommand, TargetRef};
use crate::{CommandError, CommandResult};

/// A parsed text command: one drone, ordered movement pairs.
#[derive(Debug, PartialEq, Eq)]
pub struct TextCommand {
    pub drone_id: u32,
    pub movements: Vec<(Direction, u32)>,
}

impl TextCommand {
    /// Re-express as a legacy move command so it compiles through the same
    /// path as translator output.
    pub fn into_raw(self) -> RawCommand {
        RawCommand::Legacy(LegacyMoveCommand {
            command_type: "move".to_owned(),
            target: TargetRef { drone_id: self.drone_id },
            parameters: LegacyParameters {
                movements: self
                    .movements
                    .into_iter()
                    .map(|(direction, steps)| Movement {
                        direction: direction.as_str().to_owned(),
                        steps,
                    })
                    .collect(),
            },
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Word(String),
    Number(u32),
}

/// Lowercase and split into word/number tokens.  Alpha/digit boundaries
/// split within a run (`drone2` is two tokens); number words one..ten
/// lex as numbers; everything else separates.
fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut number: Option<u32> = None;

    let flush_word = |word: &mut String, tokens: &mut Vec<Token>| {
        if word.is_empty() {
            return;
        }
        match number_word(word) {
            Some(n) => tokens.push(Token::Number(n)),
            None => tokens.push(Token::Word(std::mem::take(word))),
        }
        word.clear();
    };

    for ch in text.chars() {
        if ch.is_ascii_digit() {
            flush_word(&mut word, &mut tokens);
            let digit = u32::from(ch as u8 - b'0');
            number = Some(number.unwrap_or(0).saturating_mul(10).saturating_add(digit));
        } else {
            if let Some(n) = number.take() {
                tokens.push(Token::Number(n));
            }
            if ch.is_alphabetic() {
                word.push(ch.to_ascii_lowercase());
            } else {
                flush_word(&mut word, &mut tokens);
            }
        }
    }
    if let Some(n) = number.take() {
        tokens.push(Token::Number(n));
    }
    flush_word(&mut word, &mut tokens);
    tokens
}

fn number_word(word: &str) -> Option<u32> {
    let n = match word {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        _ => return None,
    };
    Some(n)
}

fn direction_word(word: &str) -> Option<Direction> {
    let direction = match word {
        "up" | "north" => Direction::Up,
        "down" | "south" => Direction::Down,
        "left" | "west" => Direction::Left,
        "right" | "east" => Direction::Right,
        _ => return None,
    };
    Some(direction)
}

/// Parse one text command.  Rejection leaves nothing behind: callers only
/// act on an `Ok`.
pub fn parse_text(text: &str) -> CommandResult<TextCommand> {
    let tokens = tokenize(text);
    let mut drone_id: Option<u32> = None;
    let mut movements = Vec::new();

    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i] {
            Token::Word(w) if w == "drone" => {
                // "drone 2" / "drone2" / "drone number 2"
                let mut next = i + 1;
                if matches!(tokens.get(next), Some(Token::Word(w)) if w == "number") {
                    next += 1;
                }
                if let Some(Token::Number(n)) = tokens.get(next) {
                    if drone_id.is_none() {
                        drone_id = Some(*n);
                    }
                    i = next + 1;
                    continue;
                }
                i += 1;
            }
            Token::Word(w) => {
                if let Some(direction) = direction_word(w) {
                    let Some(Token::Number(steps)) = tokens.get(i + 1) else {
                        return Err(CommandError::Text(format!(
                            "direction `{w}` has no step count"
                        )));
                    };
                    movements.push((direction, *steps));
                    i += 2;
                    continue;
                }
                i += 1;
            }
            Token::Number(_) => i += 1,
        }
    }

    let Some(drone_id) = drone_id else {
        return Err(CommandError::Text("no drone named".to_owned()));
    };
    if movements.is_empty() {
        return Err(CommandError::Text("no movements given".to_owned()));
    }
    Ok(TextCommand { drone_id, movements })
}
