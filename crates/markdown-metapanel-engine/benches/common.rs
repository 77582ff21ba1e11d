// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2

/// A typical note: a handful of keys, one short list, then a body.
#[allow(dead_code)]
pub fn generate_typical_document() -> String {
    let mut doc = String::from("---\n");
    doc.push_str("title: \"Weekly review\"\n");
    doc.push_str("date: 2024-03-01\n");
    doc.push_str("tags:\n  - review\n  - planning\n  - team\n");
    doc.push_str("summary: Notes from the weekly sync & follow-ups\n");
    doc.push_str("---\n");
    doc.push_str(&"# Section\n\nParagraph with some content.\n\n- Bullet\n".repeat(20));
    doc
}

/// Every key opens an oversized array, so both ceilings are hit.
#[allow(dead_code)]
pub fn generate_oversized_document(keys: usize, items: usize) -> String {
    let mut doc = String::from("---\n");
    for k in 0..keys {
        doc.push_str(&format!("key_{k}:\n"));
        for i in 0..items {
            doc.push_str(&format!("  - item_{i}\n"));
        }
    }
    doc.push_str("---\nbody\n");
    doc
}

/// Alias fan-out of the kind that explodes in resolving parsers.
#[allow(dead_code)]
pub fn generate_billion_laughs(levels: usize) -> String {
    let mut doc = String::from("---\nl0: &l0 \"lol\"\n");
    for level in 1..levels {
        let prev = level - 1;
        let refs = vec![format!("*l{prev}"); 9].join(",");
        doc.push_str(&format!("l{level}: &l{level} [{refs}]\n"));
    }
    doc.push_str("title: bomb\n---\n");
    doc
}

/// A single scalar far above the value length ceiling.
#[allow(dead_code)]
pub fn generate_huge_scalar(len: usize) -> String {
    format!("---\nbig: {}\n---\n", "x".repeat(len))
}
