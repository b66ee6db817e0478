use std::io::Cursor;

use avm_core::{ExitStatus, Number, Operand, StackMachine, TextSource, VmConfig};

struct Outcome {
    status: ExitStatus,
    stdout: Vec<u8>,
    stderr: String,
}

fn run_text(program: &str) -> Outcome {
    let source = TextSource::new(Cursor::new(program.to_string()));
    let mut vm = StackMachine::new(VmConfig::new(), source);
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let status = vm.run(&mut stdout, &mut stderr);
    Outcome {
        status,
        stdout,
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

#[test]
fn sample_program_runs() {
    let outcome = run_text(
        "; -------------
; sample.avm -
; -------------

push int32(42)
push int32(33)
add
push float(44.55)
mul
push double(42.42)
push int32(42)
dump
pop
assert double(42.42)
exit
",
    );
    assert_eq!(outcome.status, ExitStatus::Success, "{}", outcome.stderr);
    assert_eq!(String::from_utf8(outcome.stdout).unwrap(), "42\n42.42\n3341.25\n");
    assert!(outcome.stderr.is_empty());
}

#[test]
fn prints_characters() {
    let outcome = run_text(
        "push int8(72)\nprint\npop\npush int8(105)\nprint\npush int8(10)\nprint\nexit\n",
    );
    assert_eq!(outcome.status, ExitStatus::Success);
    assert_eq!(outcome.stdout, b"Hi\n");
}

#[test]
fn syntax_error_is_reported_with_its_line() {
    let outcome = run_text("push int8(1)\npush int8(1)\nfrobnicate\nadd\n");
    assert_eq!(outcome.status, ExitStatus::Failure);
    assert_eq!(outcome.stderr, "Line 3 : Error : unknown instruction: frobnicate\n");
}

#[test]
fn out_of_range_literal_is_rejected_by_the_loader() {
    let outcome = run_text("push int8(200)\n");
    assert_eq!(outcome.status, ExitStatus::Failure);
    assert_eq!(outcome.stderr, "Line 1 : Error : int8 literal out of range: 200\n");
}

#[test]
fn instructions_before_the_failure_take_effect() {
    let outcome = run_text("push int16(7)\ndump\npop\npop\ndump\n");
    assert_eq!(outcome.status, ExitStatus::Failure);
    assert_eq!(outcome.stdout, b"7\n");
    assert_eq!(
        outcome.stderr,
        "Line 4 : Error : pop requires 1 value(s) on the stack, found 0\n"
    );
}

#[test]
fn float_modulus_and_division() {
    let source = TextSource::new(Cursor::new(
        "push double(-7.5)\npush int8(2)\nmod\npush float(3.0)\ndiv\n".to_string(),
    ));
    let mut vm = StackMachine::new(VmConfig::new(), source);
    vm.execute(&mut Vec::new()).expect("execution failed");
    assert_eq!(vm.peek_top().map(Operand::value), Some(Number::Double(-0.5)));
}

#[test]
fn empty_program_succeeds() {
    let outcome = run_text("");
    assert_eq!(outcome.status, ExitStatus::Success);
    assert!(outcome.stdout.is_empty());
}

#[test]
fn unreadable_bytes_are_reported_on_their_line() {
    let bytes: &[u8] = b"push int8(1)\npush int8(\xff)\n";
    let mut vm = StackMachine::new(VmConfig::new(), TextSource::new(Cursor::new(bytes)));
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    assert_eq!(vm.run(&mut stdout, &mut stderr), ExitStatus::Failure);
    let stderr = String::from_utf8(stderr).unwrap();
    assert!(stderr.starts_with("Line 2 : Error : io error:"), "{}", stderr);
}
