use std::collections::{BTreeSet, HashMap, HashSet, hash_map::Entry};

use log::debug;

use super::*;

use crate::loader::{Context, Span, Spanned, ast, log::LogSink};

/// Left hand side of a rule, matched as a prefix of the remaining input and
/// of the stack.
#[derive(Debug, PartialEq, Eq, Clone, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionFrom {
    pub input: Pattern,
    pub stack: Pattern,
}

impl TransitionFrom {
    pub fn new(input: impl Into<Pattern>, stack: impl Into<Pattern>) -> Self {
        Self {
            input: input.into(),
            stack: stack.into(),
        }
    }
}

/// One possible outcome of a rule. `push` replaces the matched stack prefix,
/// its first symbol becoming the new top.
#[derive(Debug, PartialEq, Eq, Clone, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionTo {
    pub state: State,
    pub push: Pattern,
}

impl TransitionTo {
    pub fn new(state: u16, push: impl Into<Pattern>) -> Self {
        Self {
            state: State(state),
            push: push.into(),
        }
    }
}

/// The rules leaving a single state.
#[cfg_attr(feature = "serde", serde_with::serde_as)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    #[cfg(feature = "serde")]
    #[serde_as(as = "serde_with::Seq<(_, _)>")]
    map: HashMap<TransitionFrom, HashSet<TransitionTo>>,

    #[cfg(not(feature = "serde"))]
    map: HashMap<TransitionFrom, HashSet<TransitionTo>>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule unless one with the same key exists already. Returns
    /// whether the rule was added.
    pub fn insert(
        &mut self,
        from: TransitionFrom,
        to: impl IntoIterator<Item = TransitionTo>,
    ) -> bool {
        match self.map.entry(from) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(to.into_iter().collect());
                true
            }
        }
    }

    /// Builder form of [`Rules::insert`]. Replaces any rule with the same key.
    pub fn rule<'p>(
        mut self,
        input: &str,
        stack: &str,
        to: impl IntoIterator<Item = (u16, &'p str)>,
    ) -> Self {
        self.map.insert(
            TransitionFrom::new(input, stack),
            to.into_iter()
                .map(|(state, push)| TransitionTo::new(state, push))
                .collect(),
        );
        self
    }

    pub fn get(&self, from: &TransitionFrom) -> Option<&HashSet<TransitionTo>> {
        self.map.get(from)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TransitionFrom, &HashSet<TransitionTo>)> {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Rules ordered by key, each with its outputs ordered.
    pub fn sorted(&self) -> Vec<(&TransitionFrom, Vec<&TransitionTo>)> {
        let mut rules: Vec<_> = self
            .map
            .iter()
            .map(|(from, to)| {
                let mut to: Vec<_> = to.iter().collect();
                to.sort();
                (from, to)
            })
            .collect();
        rules.sort_by(|a, b| a.0.cmp(b.0));
        rules
    }
}

/// Rules of every state; the number of states is the length of the map.
pub type Table = StateMap<Rules>;

pub type FinalStates = BTreeSet<State>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("transition table must include at least the initial state")]
    EmptyTable,
    #[error("transition table has {count} states (at most {} are supported)", MAX_STATES)]
    TooManyStates { count: usize },
    #[error("missing final state declaration")]
    MissingFinalStates,
    #[error("initial stack symbol {symbol:?} is not in the stack alphabet")]
    InvalidInitialStack { symbol: Symbol },
    #[error("{symbol:?} is not in the input alphabet (rule in state {state})")]
    UnknownInputSymbol { state: State, symbol: Symbol },
    #[error("{symbol:?} is not in the stack alphabet (rule in state {state})")]
    UnknownStackSymbol { state: State, symbol: Symbol },
    #[error("rule in state {from} leads to undeclared state {target}")]
    TargetOutOfRange { from: State, target: State },
    #[error("final state {state} is not declared")]
    FinalStateOutOfRange { state: State },
    #[error("states {} are unreachable", state_list(.states))]
    Unreachable { states: Vec<State> },
}

fn state_list(states: &[State]) -> String {
    let list: Vec<_> = states.iter().map(State::to_string).collect();
    format!("{{{}}}", list.join(", "))
}

/// Two rules of one state that can both fire on the same configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub state: State,
    pub first: TransitionFrom,
    pub second: TransitionFrom,
}

impl Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            state,
            first,
            second,
        } = self;
        write!(
            f,
            "({state}, {}, {}) overlaps ({state}, {}, {})",
            first.input, first.stack, second.input, second.stack
        )
    }
}

/// A validated pushdown automaton. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "AutomatonParts"))]
pub struct Automaton {
    input_alphabet: Alphabet,
    stack_alphabet: Alphabet,
    table: Table,
    initial_stack: Pattern,
    final_states: Option<FinalStates>,
    accept_condition: AcceptCondition,
}

/// Deserialized automata go through [`Automaton::new`] like any other.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct AutomatonParts {
    input_alphabet: Alphabet,
    stack_alphabet: Alphabet,
    table: Table,
    initial_stack: Pattern,
    final_states: Option<FinalStates>,
    accept_condition: AcceptCondition,
}

#[cfg(feature = "serde")]
impl TryFrom<AutomatonParts> for Automaton {
    type Error = ValidationError;

    fn try_from(parts: AutomatonParts) -> Result<Self, Self::Error> {
        Automaton::new(
            parts.input_alphabet,
            parts.stack_alphabet,
            parts.table,
            parts.initial_stack,
            parts.final_states,
            parts.accept_condition,
        )
    }
}

/// Validates the parts of an automaton and assembles it.
pub fn construct(
    input_alphabet: Alphabet,
    stack_alphabet: Alphabet,
    table: Table,
    initial_stack: Pattern,
    final_states: Option<FinalStates>,
    accept_condition: AcceptCondition,
) -> Result<Automaton, ValidationError> {
    Automaton::new(
        input_alphabet,
        stack_alphabet,
        table,
        initial_stack,
        final_states,
        accept_condition,
    )
}

impl Automaton {
    pub fn new(
        input_alphabet: Alphabet,
        stack_alphabet: Alphabet,
        table: Table,
        initial_stack: Pattern,
        final_states: Option<FinalStates>,
        accept_condition: AcceptCondition,
    ) -> Result<Self, ValidationError> {
        if !table.contains(State::INITIAL) {
            return Err(ValidationError::EmptyTable);
        }
        if table.len() > MAX_STATES {
            return Err(ValidationError::TooManyStates { count: table.len() });
        }
        if accept_condition.requires_final_state() && final_states.is_none() {
            return Err(ValidationError::MissingFinalStates);
        }
        if let Some(symbol) = stack_alphabet.first_foreign(initial_stack.symbols()) {
            return Err(ValidationError::InvalidInitialStack { symbol });
        }

        let mut unreachable: BTreeSet<State> = table.states().collect();
        for &state in final_states.iter().flatten() {
            if !table.contains(state) {
                return Err(ValidationError::FinalStateOutOfRange { state });
            }
        }
        unreachable.remove(&State::INITIAL);

        for (state, rules) in table.entries() {
            for (from, to) in rules.sorted() {
                if let Some(symbol) = input_alphabet.first_foreign(from.input.symbols()) {
                    return Err(ValidationError::UnknownInputSymbol { state, symbol });
                }
                if let Some(symbol) = stack_alphabet.first_foreign(from.stack.symbols()) {
                    return Err(ValidationError::UnknownStackSymbol { state, symbol });
                }
                for to in to {
                    if !table.contains(to.state) {
                        return Err(ValidationError::TargetOutOfRange {
                            from: state,
                            target: to.state,
                        });
                    }
                    if let Some(symbol) = stack_alphabet.first_foreign(to.push.symbols()) {
                        return Err(ValidationError::UnknownStackSymbol { state, symbol });
                    }
                    unreachable.remove(&to.state);
                }
            }
        }

        if !unreachable.is_empty() {
            return Err(ValidationError::Unreachable {
                states: unreachable.into_iter().collect(),
            });
        }

        debug!(
            "constructed automaton: {} states, {} rules, accepting by {:?}",
            table.len(),
            table.entries().map(|(_, rules)| rules.len()).sum::<usize>(),
            accept_condition
        );

        Ok(Self {
            input_alphabet,
            stack_alphabet,
            table,
            initial_stack,
            final_states,
            accept_condition,
        })
    }

    pub fn input_alphabet(&self) -> &Alphabet {
        &self.input_alphabet
    }

    pub fn stack_alphabet(&self) -> &Alphabet {
        &self.stack_alphabet
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn initial_stack(&self) -> &Pattern {
        &self.initial_stack
    }

    pub fn final_states(&self) -> Option<&FinalStates> {
        self.final_states.as_ref()
    }

    pub fn accept_condition(&self) -> AcceptCondition {
        self.accept_condition
    }

    pub fn is_final(&self, state: State) -> bool {
        self.final_states
            .as_ref()
            .is_some_and(|finals| finals.contains(&state))
    }

    pub fn is_deterministic(&self) -> bool {
        self.find_conflicts(true).is_empty()
    }

    /// Every pair of distinct rules that makes this automaton
    /// nondeterministic. Several outputs of one rule are not a conflict on
    /// their own.
    pub fn conflicts(&self) -> Vec<Conflict> {
        self.find_conflicts(false)
    }

    // Pairwise on purpose: prefix patterns can't be bucketed by hash.
    fn find_conflicts(&self, first_only: bool) -> Vec<Conflict> {
        let mut conflicts = Vec::new();
        for (state, rules) in self.table.entries() {
            let rules = rules.sorted();
            for (i, (first, first_to)) in rules.iter().enumerate() {
                for (second, second_to) in &rules[i + 1..] {
                    if first.input.overlaps(&second.input)
                        && first.stack.overlaps(&second.stack)
                        && first_to.len() + second_to.len() > 1
                    {
                        conflicts.push(Conflict {
                            state,
                            first: (*first).clone(),
                            second: (*second).clone(),
                        });
                    }
                }
                if first_only && !conflicts.is_empty() {
                    return conflicts;
                }
            }
        }
        conflicts
    }
}

/// Writes the table in the transition-table language, one rule per line.
///
/// Only tables whose symbols are word characters read back unchanged, and a
/// pattern made of the single symbol `e` reads back as the empty pattern.
impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (state, rules) in self.entries() {
            for (from, to) in rules.sorted() {
                write!(f, "({state}, {}, {}) -> ", from.input, from.stack)?;
                match to.as_slice() {
                    [single] => write!(f, "({}, {})", single.state, single.push)?,
                    many => {
                        write!(f, "{{")?;
                        for (i, to) in many.iter().enumerate() {
                            if i != 0 {
                                write!(f, ", ")?;
                            }
                            write!(f, "({}, {})", to.state, to.push)?;
                        }
                        write!(f, "}}")?;
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table)?;
        if let Some(finals) = &self.final_states {
            write!(f, "{}", state_list(&finals.iter().copied().collect::<Vec<_>>()))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

// ------ loading from the parsed language

impl Table {
    /// Builds a table from parsed clauses. Duplicate rule keys and repeated
    /// final state declarations are reported to `ctx`. Returns `None` if any
    /// error was reported.
    pub fn load<'a>(
        items: impl Iterator<Item = Spanned<ast::TopLevel<'a>>>,
        ctx: &mut Context<'a>,
    ) -> Option<(Table, Option<FinalStates>)> {
        let mut defined: HashMap<(State, TransitionFrom), Span> = HashMap::new();
        let mut rules = Vec::new();
        let mut final_states: Option<(FinalStates, Span)> = None;
        let mut highest: Option<State> = None;
        let mut mention = |state: State| {
            highest = Some(highest.map_or(state, |h| h.max(state)));
        };

        for Spanned(element, span) in items {
            use ast::TopLevel as TL;
            match element {
                TL::Transition(source, targets) => {
                    let Some((state, input, stack)) = source.as_ref().expect_rule_source(ctx)
                    else {
                        continue;
                    };
                    mention(state.0);

                    let mut to = HashSet::new();
                    if targets.set_weak().is_empty() {
                        ctx.emit_error("expected at least one output", targets.1);
                    }
                    for item in targets.set_weak() {
                        let Some((next, push)) = item
                            .expect_tuple(ctx)
                            .and_then(|tuple| tuple.expect_rule_target(ctx))
                        else {
                            continue;
                        };
                        mention(next.0);
                        if !to.insert(TransitionTo {
                            state: next.0,
                            push,
                        }) {
                            ctx.emit_warning("duplicate transition", item.1);
                        }
                    }

                    let from = TransitionFrom { input, stack };
                    match defined.entry((state.0, from.clone())) {
                        Entry::Occupied(first) => {
                            ctx.emit_error(
                                format!(
                                    "duplicate clause for ({}, {}, {})",
                                    state.0, from.input, from.stack
                                ),
                                source.1,
                            )
                            .emit_help("first defined here", *first.get());
                        }
                        Entry::Vacant(entry) => {
                            entry.insert(source.1);
                            rules.push((state.0, from, to));
                        }
                    }
                }
                TL::FinalStates(list) => {
                    if let Some((_, first)) = &final_states {
                        ctx.emit_error("duplicate final state declaration", span)
                            .emit_help("first declared here", *first);
                        continue;
                    }
                    let mut set = FinalStates::new();
                    for item in &list.0.0 {
                        let Some(state) = item.expect_state(ctx) else {
                            continue;
                        };
                        mention(state.0);
                        if !set.insert(state.0) {
                            ctx.emit_warning("final state listed twice", state.1);
                        }
                    }
                    final_states = Some((set, span));
                }
            }
        }

        if ctx.contains_errors() {
            return None;
        }

        let mut table = Table::with_states(highest.map_or(0, |h| h.index() + 1));
        for (state, from, to) in rules {
            table[state].insert(from, to);
        }
        Some((table, final_states.map(|(set, _)| set)))
    }
}

impl<'a, 'b> Spanned<&'b ast::Tuple<'a>> {
    fn expect_rule_source(
        &self,
        ctx: &mut Context<'a>,
    ) -> Option<(Spanned<State>, Pattern, Pattern)> {
        match &self.0.0[..] {
            [state, input, stack] => {
                let state = state.expect_state(ctx);
                let input = input.expect_pattern(ctx);
                let stack = stack.expect_pattern(ctx);
                Some((state?, input?, stack?))
            }
            _ => {
                ctx.emit_error(
                    "expected rule source (state, input pattern, stack pattern)",
                    self.1,
                );
                None
            }
        }
    }

    fn expect_rule_target(&self, ctx: &mut Context<'a>) -> Option<(Spanned<State>, Pattern)> {
        match &self.0.0[..] {
            [state, push] => {
                let state = state.expect_state(ctx);
                let push = push.expect_pattern(ctx);
                Some((state?, push?))
            }
            _ => {
                ctx.emit_error("expected rule output (state, stack pattern)", self.1);
                None
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use test_log::test;

    use super::*;

    pub(crate) fn zero_n_one_n_table() -> Table {
        StateMap::new(vec![
            Rules::new()
                .rule("0", "Z", [(0, "AZ")])
                .rule("0", "A", [(0, "AA")])
                .rule("", "Z", [(1, "Z")])
                .rule("", "A", [(1, "A")]),
            Rules::new()
                .rule("1", "A", [(1, "")])
                .rule("", "Z", [(2, "Z")]),
            Rules::new(),
        ])
    }

    fn build(table: Table, finals: Option<&[u16]>) -> Result<Automaton, ValidationError> {
        construct(
            Alphabet::from("01"),
            Alphabet::from("AZ"),
            table,
            Pattern::from("Z"),
            finals.map(|f| f.iter().copied().map(State).collect()),
            AcceptCondition::FinalState,
        )
    }

    #[test]
    fn builds_zero_n_one_n() {
        let automaton = build(zero_n_one_n_table(), Some(&[2])).unwrap();
        assert_eq!(automaton.table().len(), 3);
        assert!(automaton.is_final(State(2)));
        assert!(!automaton.is_final(State(0)));
    }

    #[test]
    fn empty_table() {
        assert_eq!(
            build(Table::default(), Some(&[])),
            Err(ValidationError::EmptyTable)
        );
    }

    #[test]
    fn missing_final_states() {
        assert_eq!(
            build(zero_n_one_n_table(), None),
            Err(ValidationError::MissingFinalStates)
        );
        let by_stack = construct(
            Alphabet::from("01"),
            Alphabet::from("AZ"),
            zero_n_one_n_table(),
            Pattern::from("Z"),
            None,
            AcceptCondition::EmptyStack,
        );
        assert!(by_stack.is_ok());
    }

    #[test]
    fn unknown_symbols() {
        let table = StateMap::new(vec![Rules::new().rule("2", "Z", [(0, "Z")])]);
        assert_eq!(
            build(table, Some(&[])),
            Err(ValidationError::UnknownInputSymbol {
                state: State(0),
                symbol: '2'
            })
        );

        let table = StateMap::new(vec![Rules::new().rule("0", "Q", [(0, "Z")])]);
        assert_eq!(
            build(table, Some(&[])),
            Err(ValidationError::UnknownStackSymbol {
                state: State(0),
                symbol: 'Q'
            })
        );

        let table = StateMap::new(vec![Rules::new().rule("0", "Z", [(0, "ZQ")])]);
        assert_eq!(
            build(table, Some(&[])),
            Err(ValidationError::UnknownStackSymbol {
                state: State(0),
                symbol: 'Q'
            })
        );

        let bad_stack = construct(
            Alphabet::from("01"),
            Alphabet::from("AZ"),
            zero_n_one_n_table(),
            Pattern::from("X"),
            Some(FinalStates::from([State(2)])),
            AcceptCondition::FinalState,
        );
        assert_eq!(
            bad_stack,
            Err(ValidationError::InvalidInitialStack { symbol: 'X' })
        );
    }

    #[test]
    fn out_of_range_states() {
        let table = StateMap::new(vec![Rules::new().rule("0", "Z", [(3, "Z")])]);
        assert_eq!(
            build(table, Some(&[])),
            Err(ValidationError::TargetOutOfRange {
                from: State(0),
                target: State(3)
            })
        );
        assert_eq!(
            build(zero_n_one_n_table(), Some(&[2, 5])),
            Err(ValidationError::FinalStateOutOfRange { state: State(5) })
        );
    }

    #[test]
    fn unreachable_states() {
        let mut table = zero_n_one_n_table();
        table[State(1)] = Rules::new().rule("1", "A", [(1, "")]);
        let err = build(table, Some(&[2])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Unreachable {
                states: vec![State(2)]
            }
        );
        assert_eq!(err.to_string(), "states {2} are unreachable");

        let orphans = StateMap::new(vec![Rules::new(), Rules::new(), Rules::new()]);
        assert_eq!(
            build(orphans, Some(&[])),
            Err(ValidationError::Unreachable {
                states: vec![State(1), State(2)]
            })
        );
    }

    #[test]
    fn zero_n_one_n_is_nondeterministic() {
        let automaton = build(zero_n_one_n_table(), Some(&[2])).unwrap();
        assert!(!automaton.is_deterministic());
        let conflicts = automaton.conflicts();
        assert!(conflicts.contains(&Conflict {
            state: State(0),
            first: TransitionFrom::new("", "Z"),
            second: TransitionFrom::new("0", "Z"),
        }));
        assert!(conflicts.iter().all(|c| c.state == State(0)));
    }

    #[test]
    fn deterministic_when_patterns_disjoint() {
        let table = StateMap::new(vec![
            Rules::new()
                .rule("0", "Z", [(0, "AZ")])
                .rule("0", "A", [(0, "AA")])
                .rule("1", "A", [(1, "")]),
            Rules::new()
                .rule("1", "A", [(1, "")])
                .rule("", "Z", [(2, "Z")]),
            Rules::new(),
        ]);
        let automaton = build(table, Some(&[2])).unwrap();
        assert!(automaton.is_deterministic());
        assert!(automaton.conflicts().is_empty());
    }

    #[test]
    fn longer_patterns_overlap_shorter_ones() {
        let table = StateMap::new(vec![
            Rules::new()
                .rule("01", "Z", [(0, "Z")])
                .rule("0", "", [(0, "Z")]),
        ]);
        let automaton = build(table, Some(&[])).unwrap();
        assert_eq!(
            automaton.conflicts(),
            [Conflict {
                state: State(0),
                first: TransitionFrom::new("0", ""),
                second: TransitionFrom::new("01", "Z"),
            }]
        );
    }

    #[test]
    fn several_outputs_of_one_rule_do_not_conflict() {
        let table = StateMap::new(vec![Rules::new().rule("", "", [(0, "A"), (0, "Z")])]);
        let automaton = build(table, Some(&[])).unwrap();
        assert!(automaton.is_deterministic());
        assert!(automaton.conflicts().is_empty());

        let table = StateMap::new(vec![
            Rules::new()
                .rule("", "", [(0, "A"), (0, "Z")])
                .rule("0", "Z", [(0, "Z")]),
        ]);
        let automaton = build(table, Some(&[])).unwrap();
        assert!(!automaton.is_deterministic());
        assert_eq!(
            automaton.conflicts()[0].to_string(),
            "(0, e, e) overlaps (0, 0, Z)"
        );
    }

    #[test]
    fn too_many_states() {
        let table = Table::with_states(MAX_STATES + 1);
        assert_eq!(
            build(table, Some(&[])),
            Err(ValidationError::TooManyStates {
                count: MAX_STATES + 1
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_validates() {
        let automaton = build(zero_n_one_n_table(), Some(&[2])).unwrap();
        let json = serde_json::to_string(&automaton).unwrap();
        let read: Automaton = serde_json::from_str(&json).unwrap();
        assert_eq!(read, automaton);

        let unchecked = r#"{
            "input_alphabet": ["0", "1"],
            "stack_alphabet": ["A", "Z"],
            "table": [{"map": []}, {"map": []}],
            "initial_stack": ["Q"],
            "final_states": null,
            "accept_condition": "final_state"
        }"#;
        let err = serde_json::from_str::<Automaton>(unchecked).unwrap_err();
        assert!(err.to_string().contains("missing final state declaration"), "{err}");

        let unreachable = unchecked
            .replace(r#"["Q"]"#, r#"["Z"]"#)
            .replace("null", "[0]");
        let err = serde_json::from_str::<Automaton>(&unreachable).unwrap_err();
        assert!(err.to_string().contains("states {1} are unreachable"), "{err}");
    }

    #[test]
    fn writes_language() {
        let automaton = build(zero_n_one_n_table(), Some(&[2])).unwrap();
        assert_eq!(
            automaton.to_string(),
            "(0, e, A) -> (1, A)\n\
             (0, e, Z) -> (1, Z)\n\
             (0, 0, A) -> (0, AA)\n\
             (0, 0, Z) -> (0, AZ)\n\
             (1, e, Z) -> (2, Z)\n\
             (1, 1, A) -> (1, e)\n\
             {2}\n"
        );
    }
}
