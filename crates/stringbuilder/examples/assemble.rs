//! Builds a couple of strings piecewise and prints them along with the
//! builder's bookkeeping.
//!
//! The first builder is edited in place and dropped at the end of `main`.
//! The second is assembled by a helper that hands the finished bytes to its
//! caller, which then owns them outright.
//!
//! Run with
//!
//! ```bash
//! cargo run -p stringbuilder --example assemble
//! ```

use stringbuilder::{StringBuilder, append_format};

fn assemble_some_string() -> Vec<u8> {
    let mut sb = StringBuilder::new();

    sb.append_line("String builder test");
    sb.append_line("===================");
    sb.append_line("");

    for i in 1..=5 {
        append_format!(sb, "{i}. Some item\n");
    }

    sb.into_bytes()
}

fn main() {
    let mut sb = StringBuilder::new();

    sb.append("Some content...");
    sb.append_line(" More content.");
    append_format!(sb, "Some number: {} and a string: \"{}\".\n", 69, "nice");
    sb.insert(0, "First! ");

    println!("{sb}");
    println!("length: {}, capacity: {}", sb.len(), sb.capacity());

    let assembled = assemble_some_string();
    println!("{}", String::from_utf8_lossy(&assembled));
}
