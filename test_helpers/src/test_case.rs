pub type TestCaseCollection = Vec<TestCase>;

pub struct TestCase {
    name: &'static str,
    action: fn(),
}

impl TestCase {
    pub fn new(name: &'static str, action: fn()) -> Self {
        Self {
            name: name,
            action: action,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Runs the case body. A failing `check!` inside it never returns.
    pub fn execute(&self) {
        (self.action)()
    }
}

#[cfg(test)]
fn mark_executed() {
    EXECUTED.with(|flag| flag.set(true));
}

#[cfg(test)]
thread_local!(static EXECUTED: ::std::cell::Cell<bool> = ::std::cell::Cell::new(false));

#[test]
fn test_execute_runs_action() {
    let case = TestCase::new("marks", mark_executed);
    assert_eq!(case.name(), "marks");
    assert!(!EXECUTED.with(|flag| flag.get()));
    case.execute();
    assert!(EXECUTED.with(|flag| flag.get()));
}
