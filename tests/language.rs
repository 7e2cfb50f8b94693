use std::{
    collections::HashSet,
    fs::{self},
    path::Path,
};

use plotexpr::{Expression, ast::Node, parse_expression};
use walkdir::WalkDir;

#[test]
fn formula_files_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/formulas").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "formula")
                                      })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (number, (formula, x, expected)) in extract_cases(path, &content) {
            count += 1;
            let expr = parse_expression(&formula).unwrap_or_else(|e| {
                                                     panic!("{path:?}:{number}: failed to parse \
                                                             '{formula}':\n{}",
                                                            e.show(&formula))
                                                 });
            let actual = expr.evaluate(x);
            assert!(approx_eq(actual, expected),
                    "{path:?}:{number}: '{formula}' at x = {x} gave {actual}, expected {expected}");
        }
    }

    assert!(count > 0, "No formulas found in tests/formulas");
}

/// Reads `formula | x | expected` lines, skipping blanks and `#` comments.
fn extract_cases(path: &Path, content: &str) -> Vec<(usize, (String, f64, f64))> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .map(|(i, line)| {
               let fields: Vec<&str> = line.split('|').map(str::trim).collect();
               assert_eq!(fields.len(), 3, "{path:?}:{}: malformed case '{line}'", i + 1);
               let number = |s: &str| -> f64 {
                   s.parse()
                    .unwrap_or_else(|_| panic!("{path:?}:{}: bad number '{s}'", i + 1))
               };
               (i + 1, (fields[0].to_string(), number(fields[1]), number(fields[2])))
           })
           .collect()
}

fn approx_eq(actual: f64, expected: f64) -> bool {
    if expected.is_nan() {
        return actual.is_nan();
    }
    if expected.is_infinite() {
        return actual == expected;
    }
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

fn eval(src: &str, x: f64) -> f64 {
    match parse_expression(src) {
        Ok(expr) => expr.evaluate(x),
        Err(e) => panic!("Formula failed to parse:\n{}", e.show(src)),
    }
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(eval("2+3*4", 0.0), 14.0);
    assert_eq!(eval("(2+3)*4", 0.0), 20.0);
    assert_eq!(eval("2*3+4", 0.0), 10.0);
    assert_eq!(eval("2+3^2*2", 0.0), 20.0);
}

#[test]
fn every_tier_is_left_associative() {
    assert_eq!(eval("2-3-4", 0.0), -5.0);
    assert_eq!(eval("8/4/2", 0.0), 1.0);
    assert_eq!(eval("2^3^2", 0.0), 64.0);
    assert_eq!(eval("100%7%4", 0.0), 2.0);

    let tree = parse_expression("2^3^2").unwrap();
    assert_eq!(tree.tree().to_string(), "((2 ^ 3) ^ 2)");
}

#[test]
fn unary_operators_chain() {
    assert_eq!(eval("--5", 0.0), 5.0);
    assert_eq!(eval("-+-5", 0.0), 5.0);
    assert_eq!(eval("-sin x", 0.0), 0.0);
    assert_eq!(eval("abs -x", 3.0), 3.0);

    let expr = parse_expression("sin cos x").unwrap();
    assert_eq!(expr.tree().to_string(), "sin(cos(x))");
}

#[test]
fn prefix_operators_bind_to_the_operand_before_infix_operators() {
    let expr = parse_expression("-x^2").unwrap();
    assert_eq!(expr.tree().to_string(), "(-x ^ 2)");
    assert_eq!(expr.evaluate(3.0), 9.0);

    let expr = parse_expression("sin x^2").unwrap();
    assert_eq!(expr.tree().to_string(), "(sin(x) ^ 2)");
    assert_eq!(expr, parse_expression("(sin x)^2").unwrap());

    let expr = parse_expression("1 - -x * 2").unwrap();
    assert_eq!(expr.tree().to_string(), "(1 - (-x * 2))");
    assert_eq!(expr.evaluate(3.0), 7.0);
}

#[test]
fn constants_are_substituted_while_parsing() {
    assert!((eval("e", 0.0) - std::f64::consts::E).abs() < 1e-15);
    assert!((eval("pi", 0.0) - std::f64::consts::PI).abs() < 1e-15);

    let expr = parse_expression("2*pi").unwrap();
    assert_eq!(expr.tree(),
               &Node::Binary { op:    plotexpr::ast::BinaryOperator::Multiply,
                               left:  Box::new(Node::constant(2.0)),
                               right: Box::new(Node::constant(std::f64::consts::PI)), });
}

#[test]
fn variable_substitution() {
    assert_eq!(eval("x^2", 3.0), 9.0);
    assert_eq!(eval("x^2", -2.0), 4.0);
    assert_eq!(eval("x", f64::INFINITY), f64::INFINITY);
}

#[test]
fn undefined_results_are_nan() {
    assert!(eval("ln(x)", -1.0).is_nan());
    assert!(eval("acosh(x)", 0.0).is_nan());
    assert!(eval("x", f64::NAN).is_nan());
}

#[test]
fn evaluation_is_deterministic() {
    let expr = parse_expression("sin(x)^2 / (1 + exp(-x)) \\ 0.3").unwrap();
    for i in -50..50 {
        let x = f64::from(i) * 0.37;
        assert_eq!(expr.evaluate(x).to_bits(), expr.evaluate(x).to_bits());
    }
}

#[test]
fn structural_equality_ignores_spelling() {
    assert_eq!(parse_expression("1+2").unwrap(), parse_expression("1 + 2").unwrap());
    assert_eq!(parse_expression("1.50*x").unwrap(), parse_expression("15e-1 * x").unwrap());
    assert_eq!(parse_expression("(x)").unwrap(), parse_expression("x").unwrap());
    assert_ne!(parse_expression("1+2").unwrap(), parse_expression("2+1").unwrap());
    assert_ne!(parse_expression("x").unwrap(), parse_expression("+x").unwrap());

    let set: HashSet<Expression> = ["x^2", "x ^ 2", "x^(2)", "x*x"].iter()
                                                                 .map(|s| s.parse().unwrap())
                                                                 .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn canonical_form() {
    let expr = parse_expression("  sin( x )*2.0+pi  ").unwrap();
    assert_eq!(expr.to_canonical_string(), "sin ( x ) * 2 + pi");
    assert_eq!(expr.to_string(), expr.to_canonical_string());

    let expr = parse_expression("x\\3%2").unwrap();
    assert_eq!(expr.to_canonical_string(), "x \\ 3 % 2");
}

#[test]
fn tokens_end_with_a_single_end_marker() {
    use plotexpr::engine::lexer::TokenKind;

    let expr = parse_expression("x + 1 ").unwrap();
    let kinds: Vec<_> = expr.tokens().iter().map(|t| t.kind).collect();
    assert_eq!(kinds.iter().filter(|k| **k == TokenKind::End).count(), 1);
    assert_eq!(expr.tokens().last().map(|t| t.offset), Some(6));
}

#[test]
fn sampling_covers_both_ends() {
    let expr = parse_expression("x^2").unwrap();
    let points: Vec<_> = expr.sample(-1.0, 1.0, 2).collect();
    assert_eq!(points, [(-1.0, 1.0), (0.0, 0.0), (1.0, 1.0)]);

    let points: Vec<_> = expr.sample(3.0, 5.0, 0).collect();
    assert_eq!(points, [(3.0, 9.0)]);
}

#[test]
fn expressions_are_shared_across_threads() {
    let expr = parse_expression("x * x - 2").unwrap();
    let sums: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|t| {
                                        let expr = &expr;
                                        scope.spawn(move || {
                                                 (0..100).map(|i| expr.evaluate(f64::from(t * 100 + i)))
                                                         .sum::<f64>()
                                             })
                                    })
                                    .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let expected: f64 = (0..400).map(|i| f64::from(i * i) - 2.0).sum();
    assert_eq!(sums.iter().sum::<f64>(), expected);
}

#[test]
fn tree_shape_metrics() {
    let expr = parse_expression("-(1 + x) * 3").unwrap();
    assert_eq!(expr.tree().size(), 6);
    assert_eq!(expr.tree().depth(), 4);
}
