#![no_main]
use libfuzzer_sys::fuzz_target;
use nmox::{Document, NodeId};

// Each byte pair drives one operation on a small pool of nodes.
fuzz_target!(|data: &[u8]| {
    let mut doc = Document::new();
    let mut ids: Vec<NodeId> = Vec::new();

    for pair in data.chunks(2) {
        let (op, arg) = match pair {
            [op, arg] => (*op, usize::from(*arg)),
            _ => break,
        };
        match op % 4 {
            0 => ids.push(doc.create_element("e")),
            1 => ids.push(doc.create_text(&arg.to_string())),
            2 if !ids.is_empty() => {
                let parent = ids[arg % ids.len()];
                let child = ids[usize::from(op) % ids.len()];
                let _ = doc.append_child(parent, child);
            }
            3 if !ids.is_empty() => {
                let _ = doc.set_attribute(ids[arg % ids.len()], "k", "v");
            }
            _ => {}
        }
    }

    for root in doc.roots().collect::<Vec<_>>() {
        let _ = doc.render(root);
    }
});
