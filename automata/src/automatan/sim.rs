use std::collections::HashSet;

use log::{debug, trace};

use super::pda::Automaton;
use super::*;

/// One branch of a nondeterministic run. `position` counts the input symbols
/// already consumed; the stack is stored top first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Configuration {
    pub state: State,
    pub position: usize,
    pub stack: Vec<Symbol>,
}

impl Configuration {
    pub fn initial(automaton: &Automaton) -> Self {
        Self {
            state: State::INITIAL,
            position: 0,
            stack: automaton.initial_stack().symbols().to_vec(),
        }
    }

    pub fn remaining<'i>(&self, input: &'i [Symbol]) -> &'i [Symbol] {
        input.get(self.position..).unwrap_or_default()
    }
}

pub type ConfigurationSet = HashSet<Configuration>;

/// Every configuration reachable from `configs` by firing exactly one rule.
///
/// Epsilon moves are rules with empty patterns, so they are expanded in the
/// same pass as input-consuming rules.
pub fn step(automaton: &Automaton, input: &[Symbol], configs: &ConfigurationSet) -> ConfigurationSet {
    let mut next = ConfigurationSet::new();
    for config in configs {
        let Some(rules) = automaton.table().get(config.state) else {
            continue;
        };
        let remaining = config.remaining(input);
        for (from, to) in rules.iter() {
            if !from.input.is_prefix_of(remaining) || !from.stack.is_prefix_of(&config.stack) {
                continue;
            }
            let rest = &config.stack[from.stack.len()..];
            for to in to {
                let mut stack = Vec::with_capacity(to.push.len() + rest.len());
                stack.extend_from_slice(to.push.symbols());
                stack.extend_from_slice(rest);
                next.insert(Configuration {
                    state: to.state,
                    position: config.position + from.input.len(),
                    stack,
                });
            }
        }
    }
    next
}

/// The budget a simulation ran out of.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, thiserror::Error)]
pub enum Limit {
    #[error("iteration limit reached (is there an infinite loop?)")]
    Iterations,
    #[error("too many configurations")]
    Configurations,
    #[error("stack too large")]
    Stack,
}

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum RunError {
    #[error("input symbol {symbol:?} is not in the input alphabet")]
    InvalidInput { symbol: Symbol },
    #[error(transparent)]
    LimitExceeded(#[from] Limit),
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Verdict {
    Running,
    Accepted(Configuration),
    Rejected,
    Failed(Limit),
}

impl Verdict {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::Running)
    }
}

/// Runs an automaton on one input, one generation of configurations per
/// [`Simulator::step`].
pub struct Simulator<'a> {
    automaton: &'a Automaton,
    input: Vec<Symbol>,
    limits: Limits,
    running: ConfigurationSet,
    iterations: usize,
    verdict: Verdict,
}

impl<'a> Simulator<'a> {
    pub fn begin(automaton: &'a Automaton, input: &str, limits: Limits) -> Result<Self, RunError> {
        let input: Vec<Symbol> = input.chars().collect();
        if let Some(symbol) = automaton.input_alphabet().first_foreign(&input) {
            return Err(RunError::InvalidInput { symbol });
        }
        Ok(Self {
            running: ConfigurationSet::from([Configuration::initial(automaton)]),
            automaton,
            input,
            limits,
            iterations: 0,
            verdict: Verdict::Running,
        })
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    pub fn configurations(&self) -> &ConfigurationSet {
        &self.running
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn input(&self) -> &[Symbol] {
        &self.input
    }

    fn accepting(&self) -> Option<&Configuration> {
        let condition = self.automaton.accept_condition();
        self.running.iter().find(|config| {
            config.position == self.input.len()
                && (!condition.requires_final_state() || self.automaton.is_final(config.state))
                && (!condition.requires_empty_stack() || config.stack.is_empty())
        })
    }

    /// Advances by one generation unless a verdict has been reached.
    pub fn step(&mut self) -> &Verdict {
        if self.verdict.is_terminal() {
            return &self.verdict;
        }

        if let Some(config) = self.accepting() {
            self.verdict = Verdict::Accepted(config.clone());
        } else if self.running.is_empty() {
            self.verdict = Verdict::Rejected;
        } else if self
            .limits
            .max_iterations
            .is_some_and(|max| self.iterations >= max)
        {
            self.verdict = Verdict::Failed(Limit::Iterations);
        } else {
            let next = step(self.automaton, &self.input, &self.running);
            self.iterations += 1;
            trace!(
                "generation {}: {} configurations",
                self.iterations,
                next.len()
            );
            if self.limits.max_configs.is_some_and(|max| next.len() > max) {
                self.verdict = Verdict::Failed(Limit::Configurations);
            } else if let Some(max) = self.limits.max_stack_size
                && next.iter().any(|config| config.stack.len() > max)
            {
                self.verdict = Verdict::Failed(Limit::Stack);
            }
            self.running = next;
        }

        if self.verdict.is_terminal() {
            debug!(
                "verdict after {} iterations: {:?}",
                self.iterations, self.verdict
            );
        }
        &self.verdict
    }

    /// Steps until a verdict is reached.
    pub fn run(mut self) -> Result<bool, RunError> {
        loop {
            match self.step() {
                Verdict::Running => {}
                Verdict::Accepted(_) => return Ok(true),
                Verdict::Rejected => return Ok(false),
                Verdict::Failed(limit) => return Err(RunError::LimitExceeded(*limit)),
            }
        }
    }
}

/// Decides whether `automaton` accepts `input` within `limits`.
pub fn simulate(automaton: &Automaton, input: &str, limits: &Limits) -> Result<bool, RunError> {
    Simulator::begin(automaton, input, *limits)?.run()
}
