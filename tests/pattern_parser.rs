use macpat::pattern::{ParseError, PatternNode, Quantifier, parse_pattern};
use pretty_assertions::assert_eq;

#[test]
fn parses_variables_and_operator() {
    let ast = parse_pattern("$var1 + $var2").expect("pattern should parse");
    assert_eq!(ast.root.children.len(), 3);
    match &ast.root.children[0] {
        PatternNode::Variable(var) => {
            assert_eq!(var.name, "var1");
            assert_eq!(var.position, 0);
        }
        other => panic!("expected variable node, got {other:?}"),
    }
    match &ast.root.children[1] {
        PatternNode::Operator(op) => {
            assert_eq!(op.text, "+");
            assert_eq!(op.position, 6);
        }
        other => panic!("expected operator node, got {other:?}"),
    }
    match &ast.root.children[2] {
        PatternNode::Variable(var) => {
            assert_eq!(var.name, "var2");
            assert_eq!(var.position, 8);
        }
        other => panic!("expected variable node, got {other:?}"),
    }
}

#[test]
fn escaped_operator_is_a_literal() {
    let ast = parse_pattern("$var1 \\+ $var2").expect("pattern should parse");
    assert_eq!(ast.root.children.len(), 3);
    match &ast.root.children[1] {
        PatternNode::Literal(lit) => assert_eq!(lit.text, "+"),
        other => panic!("expected literal node, got {other:?}"),
    }
}

#[test]
fn quantifier_binds_to_the_preceding_atom() {
    let ast = parse_pattern("$var1+ $var2").expect("pattern should parse");
    assert_eq!(ast.root.children.len(), 2);
    match &ast.root.children[0] {
        PatternNode::Repetition(rep) => {
            assert_eq!(rep.op, Quantifier::OneOrMore);
            match rep.child.as_ref() {
                PatternNode::Variable(var) => assert_eq!(var.name, "var1"),
                other => panic!("expected variable child, got {other:?}"),
            }
        }
        other => panic!("expected repetition node, got {other:?}"),
    }
}

#[test]
fn whitespace_separated_star_is_an_operator() {
    let ast = parse_pattern("$a * $b").expect("pattern should parse");
    match &ast.root.children[1] {
        PatternNode::Operator(op) => assert_eq!(op.text, "*"),
        other => panic!("expected operator node, got {other:?}"),
    }

    let ast = parse_pattern("$a* $b").expect("pattern should parse");
    match &ast.root.children[0] {
        PatternNode::Repetition(rep) => assert_eq!(rep.op, Quantifier::ZeroOrMore),
        other => panic!("expected repetition node, got {other:?}"),
    }
}

#[test]
fn standalone_brackets_are_literal_tokens() {
    let ast = parse_pattern("vec ! [ $e ; $n ]").expect("pattern should parse");
    assert_eq!(ast.root.children.len(), 7);
    match &ast.root.children[2] {
        PatternNode::Literal(lit) => assert_eq!(lit.text, "["),
        other => panic!("expected literal node, got {other:?}"),
    }
    match &ast.root.children[6] {
        PatternNode::Literal(lit) => assert_eq!(lit.text, "]"),
        other => panic!("expected literal node, got {other:?}"),
    }
}

#[test]
fn bracket_hugging_content_opens_an_optional() {
    let ast = parse_pattern("foo[else $x]").expect("pattern should parse");
    assert_eq!(ast.root.children.len(), 2);
    match &ast.root.children[1] {
        PatternNode::Optional(opt) => {
            assert_eq!(opt.body.children.len(), 2);
            match &opt.body.children[0] {
                PatternNode::Literal(lit) => assert_eq!(lit.text, "else"),
                other => panic!("expected literal node, got {other:?}"),
            }
            match &opt.body.children[1] {
                PatternNode::Variable(var) => assert_eq!(var.name, "x"),
                other => panic!("expected variable node, got {other:?}"),
            }
        }
        other => panic!("expected optional node, got {other:?}"),
    }
}

#[test]
fn group_parses_to_a_nested_sequence() {
    let ast = parse_pattern("($a $b)+").expect("pattern should parse");
    assert_eq!(ast.root.children.len(), 1);
    match &ast.root.children[0] {
        PatternNode::Repetition(rep) => {
            assert_eq!(rep.op, Quantifier::OneOrMore);
            match rep.child.as_ref() {
                PatternNode::Sequence(seq) => assert_eq!(seq.children.len(), 2),
                other => panic!("expected sequence child, got {other:?}"),
            }
        }
        other => panic!("expected repetition node, got {other:?}"),
    }
}

#[test]
fn reports_dangling_question_mark() {
    let err = parse_pattern("? foo").expect_err("dangling quantifier should fail");
    match err {
        ParseError::DanglingQuantifier { index, modifier } => {
            assert_eq!(index, 0);
            assert_eq!(modifier, '?');
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = parse_pattern("$a ?").expect_err("detached question mark should fail");
    assert_eq!(err.position(), 3);
}

#[test]
fn reports_unterminated_group() {
    let err = parse_pattern("(a b").expect_err("unterminated group should fail");
    match err {
        ParseError::UnterminatedGroup { start } => assert_eq!(start, 0),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn reports_unterminated_optional() {
    let err = parse_pattern("[a b").expect_err("unterminated optional should fail");
    match err {
        ParseError::UnterminatedOptional { start } => assert_eq!(start, 0),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn reports_lone_escape() {
    let err = parse_pattern("foo\\").expect_err("lone escape should fail");
    match err {
        ParseError::LoneEscape { index } => assert_eq!(index, 3),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn reports_missing_variable_name() {
    let err = parse_pattern("$var1 + $").expect_err("bare '$' should fail");
    match err {
        ParseError::VariableMissingName { index } => assert_eq!(index, 8),
        other => panic!("unexpected error: {other:?}"),
    }

    let err = parse_pattern("$1").expect_err("digit-led name should fail");
    match err {
        ParseError::VariableMissingName { index } => assert_eq!(index, 0),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn reports_stray_closing_parenthesis() {
    let err = parse_pattern("a )").expect_err("stray ')' should fail");
    match err {
        ParseError::UnexpectedDelimiter { index, delimiter } => {
            assert_eq!(index, 2);
            assert_eq!(delimiter, ')');
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn error_positions_stay_within_the_pattern() {
    let inputs = ["(", "[x", "\\", "$", "$a ?", "a )"];
    for input in inputs {
        let err = parse_pattern(input).expect_err("should fail");
        assert!(
            err.position() <= input.len(),
            "position {} out of bounds for {input:?}",
            err.position()
        );
    }
}

#[test]
fn empty_pattern_parses_to_an_empty_sequence() {
    assert!(parse_pattern("").expect("empty pattern").is_empty());
    assert!(parse_pattern("   ").expect("blank pattern").is_empty());
}

#[test]
fn structural_equality_ignores_positions() {
    let a = parse_pattern("$a  +   $b").expect("pattern should parse");
    let b = parse_pattern("$a + $b").expect("pattern should parse");
    assert_eq!(a, b);
}

#[test]
fn canonical_form_reparses_to_the_same_tree() {
    let patterns = [
        "$a + $b",
        "vec ! [ $e ; $n ]",
        "$x+",
        "foo[else $x]?",
        "( $a )*",
        "\\+ a",
        "a \\] b",
        "[]",
        "()",
        "$k = $v",
        "x - y / z",
    ];
    for text in patterns {
        let parsed = parse_pattern(text).expect("pattern should parse");
        let canonical = parsed.to_string();
        let reparsed = parse_pattern(&canonical)
            .unwrap_or_else(|err| panic!("canonical form {canonical:?} failed to parse: {err}"));
        assert_eq!(reparsed, parsed, "canonical form {canonical:?} diverged");
    }
}

#[test]
fn canonicalization_is_idempotent() {
    let parsed = parse_pattern("vec ! [ $e+ ]").expect("pattern should parse");
    let once = parsed.to_string();
    let twice = parse_pattern(&once).expect("canonical form").to_string();
    assert_eq!(once, twice);
}
