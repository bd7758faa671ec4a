use std::io;

use hashbrown::HashMap;

// No Box around the child: the map's table is already a heap allocation, so
// the recursive type is finite.
pub struct Node {
    pub(crate) children: HashMap<u8, Node>,
    pub(crate) is_terminal: bool,
}

impl Node {
    pub(crate) fn new() -> Self {
        Self {
            children: HashMap::new(),
            is_terminal: false,
        }
    }

    pub(crate) fn child(&self, byte: u8) -> Option<&Node> {
        self.children.get(&byte)
    }

    pub(crate) fn child_or_insert(&mut self, byte: u8) -> &mut Node {
        self.children.entry(byte).or_insert_with(Node::new)
    }

    pub(crate) fn debug(&self, indent: &str, out: &mut impl io::Write) -> io::Result<()> {
        write!(
            out,
            "Node {{ terminal: {:?}, children: {} }}\n",
            self.is_terminal,
            self.children.len()
        )?;

        let mut labels = self.children.keys().copied().collect::<Vec<_>>();
        labels.sort_unstable();

        if let Some((last, init)) = labels.split_last() {
            let child_indent = format!("{} \u{2502}", indent);
            for b in init {
                write!(out, "{} \u{251C} {}: ", indent, b)?;
                self.children[b].debug(&child_indent, out)?;
            }

            write!(out, "{} \u{2514} {}: ", indent, last)?;
            let child_indent = format!("{}  ", indent);
            self.children[last].debug(&child_indent, out)?;
        }
        Ok(())
    }
}
