mod common;
use basic::lang::ErrorCode;
use basic::mach::{Config, Event, Runtime};
use common::*;

#[test]
fn test_counting_with_goto() {
    let program = "10 LET A=1\n20 PRINT A\n30 A=A+1\n40 IF A<4 THEN GOTO 20\n50 END";
    let mut r = Runtime::new(program, Recorder::default());
    r.run().unwrap();
    assert!(r.is_finished());
    assert_eq!(r.host().output, "1\n2\n3\n");
}

#[test]
fn test_for_next() {
    assert_eq!(
        exec("10 FOR I=1 TO 3\n20 PRINT I\n30 NEXT I\n40 END"),
        "1\n2\n3\n"
    );
}

#[test]
fn test_for_body_runs_once_past_bound() {
    assert_eq!(exec("10 for i=3 to 0\n20 print i\n30 next i\n"), "3\n");
}

#[test]
fn test_nested_for() {
    let program = "10 for j=1 to 2\n20 for i=1 to 2\n30 print j;i\n40 next i\n50 next j\n";
    assert_eq!(exec(program), "11\n12\n21\n22\n");
}

#[test]
fn test_next_wrong_variable() {
    let program = "10 for i=1 to 3\n20 print i\n30 next j\n40 next i\n";
    let host = exec_with(program, Recorder::default());
    assert_eq!(host.output, "1\n2\n3\n");
    assert_eq!(host.diagnostics.len(), 3);
    assert!(host.diagnostics[0].is(ErrorCode::NextWithoutFor));
    assert_eq!(host.diagnostics[0].line_number(), Some(30));
}

#[test]
fn test_next_without_for() {
    let host = exec_with("10 next i\n20 print 1\n", Recorder::default());
    assert_eq!(host.output, "1\n");
    assert_eq!(host.diagnostics.len(), 1);
}

#[test]
fn test_gosub_return() {
    let program = "10 gosub 100\n20 print \"world\"\n30 end\n100 print \"hello\"\n110 return\n";
    assert_eq!(exec(program), "hello\nworld\n");
}

#[test]
fn test_nested_gosub() {
    let program = "\
10 gosub 100
20 print 3
30 end
100 print 1
110 gosub 200
120 return
200 print 2
210 return
";
    assert_eq!(exec(program), "1\n2\n3\n");
}

#[test]
fn test_gosub_from_last_line() {
    let program = "10 goto 30\n20 print 1\n25 return\n30 gosub 20";
    let mut r = Runtime::new(program, Recorder::default());
    r.run().unwrap();
    assert_eq!(r.host().output, "1\n");
    assert!(r.is_finished());
}

#[test]
fn test_return_without_gosub() {
    let host = exec_with("10 return\n20 print 1\n", Recorder::default());
    assert_eq!(host.output, "1\n");
    assert_eq!(host.diagnostics.len(), 1);
    assert!(host.diagnostics[0].is(ErrorCode::ReturnWithoutGosub));
    assert_eq!(
        host.diagnostics[0].to_string(),
        "RETURN WITHOUT GOSUB IN 10 (3..9)"
    );
}

#[test]
fn test_gosub_overflow() {
    let program = "\
10 gosub 100
20 print \"back\";d
30 end
100 d=d+1
110 if d<12 then gosub 100
120 return
";
    let host = exec_with(program, Recorder::default());
    assert_eq!(host.output, "back10\n");
    assert_eq!(host.diagnostics.len(), 1);
    assert!(host.diagnostics[0].is(ErrorCode::OutOfMemory));
    assert_eq!(
        host.diagnostics[0].to_string(),
        "OUT OF MEMORY IN 110; GOSUB STACK OVERFLOW"
    );
}

#[test]
fn test_for_overflow() {
    let program = "\
10 for a=1 to 2
20 for b=1 to 1
30 print a
40 next b
50 next a
";
    let config = Config {
        for_depth: 1,
        ..Config::default()
    };
    let host = exec_config(program, Recorder::default(), config);
    assert_eq!(host.output, "1\n2\n");
    assert!(host.diagnostics.iter().any(|e| e.is(ErrorCode::OutOfMemory)));
}

#[test]
fn test_goto_undefined_line() {
    assert_eq!(
        exec("10 print 1\n20 goto 99\n30 print 2\n"),
        "1\nUNDEFINED LINE IN 20\n"
    );
}

#[test]
fn test_goto_forward_then_indexed() {
    let program = "10 goto 40\n20 print 2\n30 end\n40 print 4\n50 goto 20\n";
    let mut r = Runtime::new(program, Recorder::default());
    r.step().unwrap();
    assert!(r.line_index().lookup(40).is_none());
    r.step().unwrap();
    assert_eq!(r.line_index().lookup(40), Some(program.find("\n40").unwrap() + 1));
    r.run().unwrap();
    assert_eq!(r.host().output, "4\n2\n");
}

#[test]
fn test_execute_budget() {
    let mut r = Runtime::new("10 a=a+1\n20 goto 10\n", ());
    assert_eq!(r.execute(10).unwrap(), Event::Running);
    assert_eq!(r.variable('a'), 5);
    assert_eq!(r.execute(10).unwrap(), Event::Running);
    assert_eq!(r.variable('a'), 10);
}

#[test]
fn test_execute_stops() {
    let mut r = Runtime::new("10 a=1\n20 end\n30 a=2\n", ());
    assert_eq!(r.execute(100).unwrap(), Event::Stopped);
    assert_eq!(r.variable('a'), 1);
}

#[test]
fn test_independent_runtimes_interleave() {
    let mut a = Runtime::new("10 a=a+1\n20 goto 10\n", ());
    let mut b = Runtime::new("10 a=a+2\n20 goto 10\n", ());
    for _ in 0..3 {
        a.execute(2).unwrap();
        b.execute(2).unwrap();
    }
    assert_eq!(a.variable('a'), 3);
    assert_eq!(b.variable('a'), 6);
}

#[test]
fn test_restart() {
    let mut r = Runtime::new("10 a=a+1\n20 end\n", Recorder::default());
    r.run().unwrap();
    r.set_variable('b', 9);
    r.restart();
    assert!(!r.is_finished());
    assert_eq!(r.variable('b'), 0);
    assert!(r.line_index().is_empty());
    r.run().unwrap();
    assert_eq!(r.variable('a'), 1);
}
