use crate::node::Node;
use crate::trie::Trie;

#[derive(Clone, Copy)]
enum State {
    Start,
    Recurse(Option<u8>),
    PopByte(Option<u8>),
}

struct WordIterator<'a> {
    key: Vec<u8>,
    stack: Vec<(&'a Node, State)>,
}

impl<'a> Iterator for WordIterator<'a> {
    type Item = Vec<u8>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, state) = self.stack.last_mut()?;
            match *state {
                State::Start => {
                    *state = State::Recurse(Some(0));
                    if node.is_terminal {
                        return Some(self.key.clone());
                    }
                }
                State::Recurse(Some(i)) => {
                    let next_ix = i.checked_add(1);
                    if let Some(child) = node.child(i) {
                        *state = State::PopByte(next_ix);
                        self.key.push(i);
                        self.stack.push((child, State::Start));
                    } else {
                        *state = State::Recurse(next_ix);
                    }
                }
                State::PopByte(next_ix) => {
                    self.key.pop();
                    *state = State::Recurse(next_ix);
                }
                State::Recurse(None) => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl Trie {
    // Words come out in ascending byte order: each node probes child labels
    // 0..=255 in order rather than walking the map directly.
    pub fn iter(&self) -> impl Iterator<Item = Vec<u8>> + '_ {
        WordIterator {
            key: vec![],
            stack: vec![(&self.root, State::Start)],
        }
    }
}
