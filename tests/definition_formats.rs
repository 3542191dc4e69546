use pdacc::npda::{
    Automaton, ExploreLimits, InputSymbol, StackGuard, StackPush, Verdict, Word,
    loader::{AutomatonDoc, load_json_bytes, parse_definition, to_text},
    run,
};

#[test]
fn arrow_and_three_field_rules_read_the_same() {
    let arrow = parse_definition("0\n1 1\n1\n0 1 a,Z->AB\n", '*').unwrap();
    let spaced = parse_definition("0\n1 1\n1\n0 1 a , Z -> AB\n", '*').unwrap();
    let fields = parse_definition("0\n1 1\n1\n0 1 a Z AB\n", '*').unwrap();
    assert_eq!(arrow, spaced);
    assert_eq!(arrow, fields);

    let t = &arrow.transitions[0];
    assert_eq!(t.input, InputSymbol::Char('a'));
    assert_eq!(t.guard, StackGuard::Top('Z'));
    assert_eq!(t.push, StackPush::Seq(vec!['A', 'B']));
}

#[test]
fn wildcard_means_three_different_things() {
    let a = parse_definition("0\n1 1\n1\n0 1 *,*->*\n", '*').unwrap();
    let t = &a.transitions[0];
    assert_eq!(t.input, InputSymbol::Epsilon);
    assert_eq!(t.guard, StackGuard::Any);
    assert_eq!(t.push, StackPush::Nothing);
}

#[test]
fn custom_wildcard_frees_the_star() {
    let a = parse_definition("0\n1 1\n1\n0 1 _,*->_\n", '_').unwrap();
    let t = &a.transitions[0];
    assert_eq!(t.input, InputSymbol::Epsilon);
    assert_eq!(t.guard, StackGuard::Top('*'));
    assert_eq!(t.push, StackPush::Nothing);
}

#[test]
fn punctuation_is_a_valid_rule_symbol() {
    let a = parse_definition("0\n1 0\n3\n0 0 ,,*->*\n0 0 a,,->,\n0 0 -,*->-,\n", '*').unwrap();
    let comma = &a.transitions[0];
    assert_eq!(comma.input, InputSymbol::Char(','));
    assert_eq!(comma.guard, StackGuard::Any);
    assert_eq!(comma.push, StackPush::Nothing);

    let on_comma = &a.transitions[1];
    assert_eq!(on_comma.guard, StackGuard::Top(','));
    assert_eq!(on_comma.push, StackPush::Seq(vec![',']));

    let dash = &a.transitions[2];
    assert_eq!(dash.input, InputSymbol::Char('-'));
    assert_eq!(dash.push, StackPush::Seq(vec!['-', ',']));

    let again = parse_definition(&to_text(&a, '*'), '*').unwrap();
    assert_eq!(a, again);
    let outcome = run(&a, &Word::unbounded(",,-,"), ExploreLimits::default());
    assert_eq!(outcome.verdict, Verdict::Accepted);
}

#[test]
fn comments_blank_lines_and_packed_header() {
    let src = "# start, finals and count on one line\n\n0 2 0 3 2\n0 0 a,*->A\n\n# pop\n0 3 b,A->*\n";
    let a = parse_definition(src, '*').unwrap();
    assert_eq!(a.start, 0);
    assert_eq!(a.sorted_finals(), vec![0, 3]);
    assert_eq!(a.transitions.len(), 2);
    assert_eq!(a.states(), vec![0, 3]);
}

#[test]
fn text_output_reads_back() {
    let src = "3\n2 1 4\n3\n3 1 a,*->AB\n1 4 *,A->*\n4 4 b,B->B\n";
    let a = parse_definition(src, '*').unwrap();
    let again = parse_definition(&to_text(&a, '*'), '*').unwrap();
    assert_eq!(a, again);
}

#[test]
fn json_definition_carries_bottom_marker() {
    let json = br#"{
        "start": 0,
        "finals": [0],
        "bottom": "Z",
        "transitions": [
            {"from": 0, "to": 0, "input": "a", "top": "*", "push": "A"},
            {"from": 0, "to": 0, "input": "b", "top": "A", "push": "*"}
        ]
    }"#;
    let a = load_json_bytes(json).unwrap();
    assert_eq!(a.bottom, Some('Z'));
    let verdict = |w: &str| run(&a, &Word::unbounded(w), ExploreLimits::default()).verdict;
    assert_eq!(verdict("ab"), Verdict::Accepted);
    assert_eq!(verdict("abb"), Verdict::Unaccepted);
}

#[test]
fn json_document_matches_text_definition() {
    let text = parse_definition("0\n1 1\n2\n0 1 *,*->AB\n1 1 a,A->*\n", '*')
        .unwrap()
        .with_bottom(Some('Z'));
    let doc = AutomatonDoc::from_automaton(&text, '*');
    assert_eq!(doc.transitions[0].input, '*');
    assert_eq!(doc.transitions[0].push, "AB");
    let bytes = serde_json::to_vec(&doc).unwrap();
    let back: Automaton = load_json_bytes(&bytes).unwrap();
    assert_eq!(back, text);
}

#[test]
fn saved_json_loads_back() {
    let a = parse_definition("0\n1 2\n2\n0 1 a,*->A\n1 2 *,A->*\n", '*')
        .unwrap()
        .with_bottom(Some('Z'));
    let path = std::env::temp_dir().join(format!("pdacc_saved_{}.json", std::process::id()));
    pdacc::npda::loader::save_json(&path, &a, '*').unwrap();
    let bytes = std::fs::read(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(load_json_bytes(&bytes).unwrap(), a);
}
