// TODO:
// [ ] Removal, with cleanup of childless non-terminal nodes up the path
// [ ] Store a value per key instead of bare membership
// [ ] Collapse single-child chains into prefix-compressed nodes

mod iter;
mod node;
mod trie;


pub use trie::Trie;
