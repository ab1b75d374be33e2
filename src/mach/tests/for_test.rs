use super::*;
use crate::lang::Ident;

#[test]
fn test_loop_record() {
    let mut r = Runtime::new("10 for i=2 to 5\n20 next i\n", Printed::default());
    r.step().unwrap();
    let loops: Vec<_> = r.for_loops().collect();
    assert_eq!(loops.len(), 1);
    assert_eq!(loops[0].ident, Ident::from_char('i').unwrap());
    assert_eq!(loops[0].bound, 5);
    assert_eq!(loops[0].resume, Some(20));
    assert_eq!(r.variable('i'), 2);
}

#[test]
fn test_loop_popped_when_done() {
    let r = run("10 for i=1 to 3\n20 print i\n30 next i\n");
    assert_eq!(r.host().0, vec![1, 2, 3]);
    assert_eq!(r.for_loops().count(), 0);
    assert_eq!(r.variable('i'), 4);
}

#[test]
fn test_mismatched_next_keeps_loop() {
    let mut r = Runtime::new("10 for i=1 to 3\n20 next j\n30 end\n", Printed::default());
    r.step().unwrap();
    r.step().unwrap();
    assert_eq!(r.diagnostics(), 1);
    let loops: Vec<_> = r.for_loops().copied().collect();
    assert_eq!(loops.len(), 1);
    assert_eq!(loops[0].bound, 3);
    assert_eq!(r.variable('i'), 1);
    assert_eq!(r.variable('j'), 0);
}

#[test]
fn test_breaking_out_of_loop_with_goto() {
    let program = "\
10 for y=1 to 2
20 for x=8 to 9
30 print y
40 goto 60
50 next x
60 next y
";
    let r = run(program);
    assert_eq!(r.host().0, vec![1]);
    assert_eq!(r.diagnostics(), 1);
    assert_eq!(r.for_loops().count(), 2);
}

#[test]
fn test_for_on_last_line() {
    let r = run("10 for i=1 to 3");
    assert_eq!(r.for_loops().next().map(|f| f.resume), Some(None));
}

#[test]
fn test_syntax_error_leaves_variable() {
    let mut r = Runtime::new("10 i=1\n20 for i=5 to\n", Printed::default());
    r.step().unwrap();
    assert!(r.step().is_err());
    assert_eq!(r.variable('i'), 1);
    assert_eq!(r.for_loops().count(), 0);
}
