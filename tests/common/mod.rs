pub mod fixtures;

use flexlayout::{Interchange, InterchangeBuilder, SerializedTree};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Route log output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An interchange with the built-in components and single-line markup.
pub fn compact_interchange() -> Interchange {
    InterchangeBuilder::new()
        .with_pretty(false)
        .build()
        .expect("default interchange must build")
}

/// Collects every node of a tree in pre-order.
pub fn flatten(tree: &SerializedTree) -> Vec<&SerializedTree> {
    let mut out = vec![tree];
    for child in tree.children() {
        out.extend(flatten(child));
    }
    out
}
