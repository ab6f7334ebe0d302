//! Property tests: written tables read back unchanged, and the `0ⁿ1ⁿ`
//! automaton accepts exactly its language.

use proptest::prelude::*;
use pushdown::automatan::pda::{FinalStates, Rules, Table, TransitionFrom, TransitionTo};
use pushdown::automatan::{Alphabet, StateMap};
use pushdown::{AcceptCondition, BuildOptions, Limits, Pattern, State, construct, load, parse, simulate};

fn rules_strategy(states: u16) -> impl Strategy<Value = Rules> {
    let rule = (
        "[01]{0,2}",
        "[AZ]{0,2}",
        prop::collection::vec((0..states, "[AZ]{0,2}"), 1..3),
    );
    prop::collection::vec(rule, 0..4).prop_map(|rules| {
        let mut map = Rules::new();
        for (input, stack, to) in rules {
            map.insert(
                TransitionFrom::new(input.as_str(), stack.as_str()),
                to.iter()
                    .map(|(state, push)| TransitionTo::new(*state, push.as_str())),
            );
        }
        map
    })
}

/// A table with up to four states and final states that always include the
/// last one, so the state count survives a round trip.
fn table_strategy() -> impl Strategy<Value = (Table, FinalStates)> {
    (1u16..5).prop_flat_map(|states| {
        (
            prop::collection::vec(rules_strategy(states), states as usize),
            prop::collection::btree_set(0..states, 0..3),
        )
            .prop_map(move |(rules, finals)| {
                let mut finals: FinalStates = finals.into_iter().map(State).collect();
                finals.insert(State(states - 1));
                (StateMap::new(rules), finals)
            })
    })
}

fn write(table: &Table, finals: &FinalStates) -> String {
    let finals: Vec<_> = finals.iter().map(State::to_string).collect();
    format!("{table}{{{}}}\n", finals.join(", "))
}

fn build(table: Table, finals: FinalStates) -> Option<pushdown::Automaton> {
    construct(
        Alphabet::from("01"),
        Alphabet::from("AZ"),
        table,
        Pattern::from("Z"),
        Some(finals),
        AcceptCondition::FinalState,
    )
    .ok()
}

proptest! {
    #[test]
    fn written_tables_read_back((table, finals) in table_strategy()) {
        let text = write(&table, &finals);
        let (parsed, parsed_finals) = parse(&text).map_err(|err| {
            TestCaseError::fail(format!("{err}\n{text}"))
        })?;
        prop_assert_eq!(&parsed, &table, "{}", text);
        prop_assert_eq!(parsed_finals.as_ref(), Some(&finals));

        if let Some(original) = build(table, finals) {
            let reread = build(parsed, parsed_finals.unwrap_or_default());
            prop_assert!(reread.is_some());
            let reread = reread.unwrap();
            let limits = Limits {
                max_iterations: Some(50),
                max_configs: Some(50),
                max_stack_size: Some(20),
            };
            for word in Alphabet::from("01").words(4) {
                prop_assert_eq!(
                    simulate(&original, &word, &limits),
                    simulate(&reread, &word, &limits),
                    "{}", word
                );
            }
        }
    }

    #[test]
    fn zero_n_one_n_accepts_balanced_words(n in 0usize..20) {
        let automaton = zero_n_one_n();
        let word = format!("{}{}", "0".repeat(n), "1".repeat(n));
        prop_assert_eq!(simulate(&automaton, &word, &Limits::default()), Ok(true));
    }

    #[test]
    fn zero_n_one_n_rejects_everything_else(word in "[01]{0,16}") {
        let automaton = zero_n_one_n();
        let zeros = word.chars().take_while(|&c| c == '0').count();
        let balanced = word.len() == 2 * zeros && word[zeros..].chars().all(|c| c == '1');
        prop_assert_eq!(simulate(&automaton, &word, &Limits::default()), Ok(balanced));
    }
}

fn zero_n_one_n() -> pushdown::Automaton {
    let options = BuildOptions {
        deterministic: false,
        ..BuildOptions::default()
    };
    load(
        "(0, 0, Z) -> (0, AZ)\n\
         (0, 0, A) -> (0, AA)\n\
         (0, e, Z) -> (1, Z)\n\
         (0, e, A) -> (1, A)\n\
         (1, 1, A) -> (1, e)\n\
         (1, e, Z) -> (2, Z)\n\
         {2}",
        &options,
    )
    .unwrap()
}
