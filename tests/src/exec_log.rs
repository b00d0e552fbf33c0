use dtomap::Value;
use std::sync::{Arc, Mutex};

/// One call to `PreparedStatement::execute`.
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    pub sql: String,
    pub params: Vec<Value>,
}

/// A handle on the statements a [`MockClient`](crate::MockClient) prepared
/// and executed, in call order.
#[derive(Debug, Clone)]
pub struct ExecLog {
    prepared: Arc<Mutex<Vec<String>>>,
    executions: Arc<Mutex<Vec<Execution>>>,
}

impl ExecLog {
    pub(crate) fn new(
        prepared: Arc<Mutex<Vec<String>>>,
        executions: Arc<Mutex<Vec<Execution>>>,
    ) -> Self {
        Self {
            prepared,
            executions,
        }
    }

    /// Get the number of executions
    pub fn len(&self) -> usize {
        self.executions.lock().unwrap().len()
    }

    /// Check if nothing was executed
    pub fn is_empty(&self) -> bool {
        self.executions.lock().unwrap().is_empty()
    }

    /// SQL of every `prepare` call reaching the client
    pub fn prepared(&self) -> Vec<String> {
        self.prepared.lock().unwrap().clone()
    }

    /// Check if any execution matches the given predicate
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Execution) -> bool,
    {
        self.executions.lock().unwrap().iter().any(predicate)
    }

    /// Count executions matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Execution) -> bool,
    {
        self.executions
            .lock()
            .unwrap()
            .iter()
            .filter(|exec| predicate(exec))
            .count()
    }

    /// Remove and return the oldest execution
    pub fn pop(&mut self) -> Option<Execution> {
        let mut executions = self.executions.lock().unwrap();
        if executions.is_empty() {
            None
        } else {
            Some(executions.remove(0))
        }
    }

    /// Remove and return the oldest execution, panicking when there is none
    #[track_caller]
    pub fn pop_execution(&mut self) -> Execution {
        self.pop().expect("no execution left in the log")
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.prepared.lock().unwrap().clear();
        self.executions.lock().unwrap().clear();
    }
}
