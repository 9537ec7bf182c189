#![no_main]

use arbitrary::Arbitrary;
use bytetree::{BytesTree, StringTree};
use libfuzzer_sys::fuzz_target;

/// One combinator application. The interpreter below mirrors every op
/// into a flat `Vec<u8>` model; materialization must match the model
/// exactly, whatever sequence the fuzzer invents.
#[derive(Arbitrary, Debug)]
enum Op {
    AppendBytes(Vec<u8>),
    PrependBytes(Vec<u8>),
    AppendText(String),
    PrependText(String),
    ConcatAfter(Vec<Vec<u8>>),
    WrapText(Vec<String>),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut tree = BytesTree::new();
    let mut model: Vec<u8> = Vec::new();

    for op in ops {
        match op {
            Op::AppendBytes(bytes) => {
                model.extend_from_slice(&bytes);
                tree = tree.append_bytes(bytes);
            }
            Op::PrependBytes(bytes) => {
                let mut next = bytes.clone();
                next.extend_from_slice(&model);
                model = next;
                tree = tree.prepend_bytes(bytes);
            }
            Op::AppendText(text) => {
                model.extend_from_slice(text.as_bytes());
                tree = tree.append_text(text);
            }
            Op::PrependText(text) => {
                let mut next = text.clone().into_bytes();
                next.extend_from_slice(&model);
                model = next;
                tree = tree.prepend_text(text);
            }
            Op::ConcatAfter(chunks) => {
                for chunk in &chunks {
                    model.extend_from_slice(chunk);
                }
                let tail = BytesTree::concat(chunks.into_iter().map(BytesTree::from_bytes).collect());
                tree = tree.append(tail);
            }
            Op::WrapText(strings) => {
                for text in &strings {
                    model.extend_from_slice(text.as_bytes());
                }
                tree = tree.append(BytesTree::from_string_tree(StringTree::from_strings(strings)));
            }
        }
    }

    assert_eq!(tree.byte_len(), model.len());
    assert_eq!(tree.to_bytes(), model);
    assert_eq!(tree.is_empty(), model.is_empty());
});
