#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};
use stringbuilder::{LINE_TERMINATOR, StringBuilder};

/// Where an insert or remove lands. `Random` draws an offset inside the
/// current content so in-range edits are common; `Raw` keeps the fuzzer's
/// value, which is usually far past the end.
#[derive(Debug, Arbitrary)]
enum Offset {
    Random,
    Raw(usize),
}

#[derive(Debug, Arbitrary)]
enum Op {
    Append(Vec<u8>),
    AppendLine(Vec<u8>),
    AppendChar(char),
    AppendFmt(u64, String),
    Insert(Offset, Vec<u8>),
    Remove(Offset, u16),
    Replace(Vec<u8>, Vec<u8>),
    Clear,
    Release,
    Reserve(u16),
}

#[derive(Debug, Arbitrary)]
struct Input {
    seed: u64,
    ops: Vec<Op>,
}

fn replace_model(content: &[u8], old: &[u8], new: &[u8]) -> Vec<u8> {
    if old.is_empty() {
        return content.to_vec();
    }
    let mut out = Vec::with_capacity(content.len());
    let mut i = 0;
    while i < content.len() {
        if content[i..].starts_with(old) {
            out.extend_from_slice(new);
            i += old.len();
        } else {
            out.push(content[i]);
            i += 1;
        }
    }
    out
}

fn resolve(offset: &Offset, len: usize, rng: &mut SmallRng) -> usize {
    match offset {
        Offset::Random => rng.random_range(0..=len),
        Offset::Raw(at) => *at,
    }
}

fn run(input: Input) {
    let mut rng = SmallRng::seed_from_u64(input.seed);
    let mut sb = StringBuilder::new();
    let mut model: Vec<u8> = Vec::new();

    for op in &input.ops {
        let capacity = sb.capacity();
        match op {
            Op::Append(bytes) => {
                sb.append(bytes);
                model.extend_from_slice(bytes);
            }
            Op::AppendLine(bytes) => {
                sb.append_line(bytes);
                model.extend_from_slice(bytes);
                model.extend_from_slice(LINE_TERMINATOR.as_bytes());
            }
            Op::AppendChar(c) => {
                sb.append_char(*c);
                if *c != '\0' {
                    model.extend_from_slice(c.encode_utf8(&mut [0; 4]).as_bytes());
                }
            }
            Op::AppendFmt(n, s) => {
                sb.append_fmt(format_args!("{n:x}{s}"));
                model.extend_from_slice(format!("{n:x}{s}").as_bytes());
            }
            Op::Insert(offset, bytes) => {
                let at = resolve(offset, model.len(), &mut rng);
                sb.insert(at, bytes);
                let at = at.min(model.len());
                model.splice(at..at, bytes.iter().copied());
            }
            Op::Remove(offset, len) => {
                let at = resolve(offset, model.len(), &mut rng);
                let len = usize::from(*len);
                sb.remove(at, len);
                if at < model.len() {
                    let end = at.saturating_add(len).min(model.len());
                    model.drain(at..end);
                }
            }
            Op::Replace(old, new) => {
                sb.replace(old, new);
                model = replace_model(&model, old, new);
            }
            Op::Clear => {
                sb.clear();
                model.clear();
            }
            Op::Release => {
                sb.release();
                model.clear();
                assert_eq!(sb.capacity(), 0);
            }
            Op::Reserve(min) => {
                let min = usize::from(*min);
                assert!(sb.ensure_capacity(min).is_ok());
                assert!(sb.capacity() >= min);
            }
        }

        sb.check_invariants();
        assert_eq!(sb.as_bytes(), model.as_slice(), "after {op:?}");
        if !matches!(op, Op::Release) {
            assert!(sb.capacity() >= capacity, "capacity shrank after {op:?}");
        }
    }
}

fuzz_target!(|input: Input| run(input));
