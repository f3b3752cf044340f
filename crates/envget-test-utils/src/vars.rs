//! Variable names that no other test uses.

use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Build a process-unique variable name starting with `prefix`.
pub fn unique_var(prefix: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("ENVGET_TEST_{}_{}_{}", prefix, std::process::id(), n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_var_differs_per_call() {
        assert_ne!(unique_var("A"), unique_var("A"));
    }
}
