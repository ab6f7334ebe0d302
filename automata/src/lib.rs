pub mod automatan;
pub mod loader;

pub use automatan::pda::{Automaton, Conflict, ValidationError, construct};
pub use automatan::sim::{Limit, RunError, simulate};
pub use automatan::{AcceptCondition, Alphabet, BuildOptions, Limits, Options, Pattern, State};
pub use loader::{SyntaxError, parse};

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("automaton is not deterministic: {}", conflict_list(.conflicts))]
    NotDeterministic { conflicts: Vec<Conflict> },
    #[error(transparent)]
    Run(#[from] RunError),
}

fn conflict_list(conflicts: &[Conflict]) -> String {
    let list: Vec<_> = conflicts.iter().map(Conflict::to_string).collect();
    list.join("; ")
}

/// Parses a transition table and builds an automaton from it with the given
/// alphabets and acceptance condition.
pub fn load(src: &str, options: &BuildOptions) -> Result<Automaton, Error> {
    let (table, final_states) = parse(src)?;
    let automaton = construct(
        options.input_alphabet.clone(),
        options.stack_alphabet.clone(),
        table,
        options.initial_stack.clone(),
        final_states,
        options.accept_condition,
    )?;

    if options.deterministic {
        let conflicts = automaton.conflicts();
        if !conflicts.is_empty() {
            return Err(Error::NotDeterministic { conflicts });
        }
    }
    Ok(automaton)
}
