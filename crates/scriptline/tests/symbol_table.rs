//! A tiny consumer that interprets `let` and `print` actions, the way an
//! embedding application would.

use std::collections::HashMap;

use scriptline::{parse, Action, Token, Value};

#[derive(Debug, Clone, PartialEq)]
enum Binding {
    Str(String),
    Bool(bool),
    Number(f32),
}

#[derive(Default)]
struct Interpreter {
    symbols: HashMap<String, Binding>,
    output: Vec<String>,
}

impl Interpreter {
    fn resolve(&self, tok: &Token) -> Result<Binding, String> {
        if tok.is_identifier() {
            let name = tok.must_get_identifier();
            return self
                .symbols
                .get(name)
                .cloned()
                .ok_or_else(|| format!("undefined symbol {}", name));
        }
        match tok.value() {
            Value::Str(s) => Ok(Binding::Str(s.to_string())),
            Value::Bool(b) => Ok(Binding::Bool(b)),
            Value::Number(n) => Ok(Binding::Number(n)),
        }
    }

    fn run(&mut self, action: &Action) -> Result<(), String> {
        match (action.name(), action.args()) {
            ("let", [name, op, value]) if op.must_get_operator() == "=" => {
                let name = name.get_identifier().map_err(|e| e.to_string())?;
                let value = self.resolve(value)?;
                self.symbols.insert(name.to_string(), value);
                Ok(())
            }
            ("print", args) => {
                let mut parts = Vec::new();
                for arg in args {
                    parts.push(match self.resolve(arg)? {
                        Binding::Str(s) => s,
                        Binding::Bool(b) => b.to_string(),
                        Binding::Number(n) => n.to_string(),
                    });
                }
                self.output.push(parts.join(" "));
                Ok(())
            }
            _ => Err(format!("line {}: cannot run {}", action.line(), action)),
        }
    }
}

fn run_script(source: &str) -> Result<Interpreter, String> {
    let actions = parse(source).map_err(|e| e.to_string())?;
    let mut interp = Interpreter::default();
    for action in &actions {
        interp.run(action)?;
    }
    Ok(interp)
}

#[test]
fn test_let_and_print() {
    let interp = run_script(
        "
        let a = 1
        let b = true
        let c = 'hello'
        print c \"World\"
        print a b
        ",
    )
    .unwrap();
    assert_eq!(interp.symbols.get("a"), Some(&Binding::Number(1.0)));
    assert_eq!(interp.symbols.get("b"), Some(&Binding::Bool(true)));
    assert_eq!(interp.output, vec!["hello World", "1 true"]);
}

#[test]
fn test_copy_binding() {
    let interp = run_script("let x = 2.5\nlet y = x\nprint y").unwrap();
    assert_eq!(interp.output, vec!["2.5"]);
}

#[test]
fn test_undefined_symbol() {
    let err = run_script("print nope").err().unwrap();
    assert_eq!(err, "undefined symbol nope");
}

#[test]
fn test_unknown_action() {
    let err = run_script("\njump 3").err().unwrap();
    assert_eq!(err, "line 2: cannot run jump <n 3.000000>");
}

#[test]
fn test_parse_error_surfaces() {
    let err = run_script("let a = 1.2.3").err().unwrap();
    assert!(err.contains("line 1"), "{}", err);
}
