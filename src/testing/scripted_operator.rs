use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Operator;

/// One scripted reply to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Line(String),
    Confirm(bool),
    Select(Option<usize>),
}

/// Operator that replays a fixed script and records the prompts it was shown.
#[derive(Default)]
pub struct ScriptedOperator {
    answers: VecDeque<Answer>,
    pub prompts: Vec<String>,
    pub choices: Vec<Vec<String>>,
}

impl ScriptedOperator {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers: answers.into(), ..Self::default() }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<Answer, AppError> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("no scripted answer for '{prompt}'")))
    }
}

impl Operator for ScriptedOperator {
    fn read_command(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        if self.answers.is_empty() {
            return Ok(None);
        }
        match self.next(prompt)? {
            Answer::Line(line) => Ok(Some(line)),
            other => Err(AppError::Prompt(format!("expected a command line, got {other:?}"))),
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, AppError> {
        match self.next(prompt)? {
            Answer::Confirm(value) => Ok(value),
            other => Err(AppError::Prompt(format!("expected a confirmation, got {other:?}"))),
        }
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>, AppError> {
        self.choices.push(items.to_vec());
        match self.next(prompt)? {
            Answer::Select(choice) => Ok(choice),
            other => Err(AppError::Prompt(format!("expected a selection, got {other:?}"))),
        }
    }
}
