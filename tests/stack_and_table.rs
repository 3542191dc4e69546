use pdacc::npda::{
    InputSymbol, NpdaError, Stack, StackGuard, StackPush, Transition, TransitionTable,
};

fn t(from: u32, to: u32, input: Option<char>, top: Option<char>, push: &str) -> Transition {
    Transition {
        from,
        to,
        input: input.map_or(InputSymbol::Epsilon, InputSymbol::Char),
        guard: top.map_or(StackGuard::Any, StackGuard::Top),
        push: StackPush::from_chars(push.chars()),
    }
}

#[test]
fn push_sequence_first_symbol_ends_on_top() {
    let s = Stack::new().push_seq(&['A', 'B']);
    assert_eq!(s.top(), Some('A'));
    let s = s.pop().unwrap();
    assert_eq!(s.top(), Some('B'));
    let s = s.pop().unwrap();
    assert!(s.is_empty());
    assert_eq!(s.pop(), Err(NpdaError::EmptyStack));
}

#[test]
fn push_nothing_is_a_no_op() {
    let s = Stack::with_bottom(Some('Z'));
    let after = s.clone().apply(StackGuard::Any, &StackPush::Nothing).unwrap();
    assert_eq!(after, s);
    assert_eq!(after.depth(), 1);
    assert_eq!(StackPush::from_chars("".chars()), StackPush::Nothing);
}

#[test]
fn apply_pops_only_for_concrete_guard() {
    let s = Stack::with_bottom(Some('Z')).push_seq(&['A']);
    let kept = s.clone().apply(StackGuard::Any, &StackPush::from_chars("B".chars())).unwrap();
    assert_eq!(kept.as_slice(), &['Z', 'A', 'B']);
    let popped = s.clone().apply(StackGuard::Top('A'), &StackPush::from_chars("BC".chars())).unwrap();
    assert_eq!(popped.as_slice(), &['Z', 'C', 'B']);
    assert_eq!(popped.to_string(), "BCZ");
    // Clones are independent.
    assert_eq!(s.as_slice(), &['Z', 'A']);
}

#[test]
fn matching_keeps_declaration_order_and_always_offers_epsilon() {
    let ts = vec![
        t(0, 1, Some('a'), None, ""),
        t(0, 2, None, None, ""),
        t(1, 9, Some('a'), None, ""),
        t(0, 3, Some('b'), None, ""),
        t(0, 4, Some('a'), Some('A'), ""),
    ];
    let table = TransitionTable::new(&ts);
    let to = |next, top| -> Vec<u32> { table.matching(0, next, top).map(|t| t.to).collect() };

    assert_eq!(to(Some('a'), None), vec![1, 2]);
    assert_eq!(to(Some('a'), Some('A')), vec![1, 2, 4]);
    assert_eq!(to(Some('b'), Some('Z')), vec![2, 3]);
    assert_eq!(to(None, Some('A')), vec![2]);
    assert!(table.matching(7, Some('a'), None).next().is_none());
}

#[test]
fn epsilon_input_detection() {
    let ts = vec![t(0, 1, Some('a'), None, ""), t(1, 1, None, Some('Z'), "")];
    let table = TransitionTable::new(&ts);
    assert!(!table.has_epsilon_input(0));
    assert!(table.has_epsilon_input(1));
    assert!(!table.has_epsilon_input(2));
    assert_eq!(table.len(), 2);
    assert!(!table.is_empty());
    assert!(TransitionTable::new(&[]).is_empty());
}
