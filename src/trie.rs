// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

// navigation over a word list, one letter at a time.
pub trait Lexicon {
    type Node: Copy;

    fn root(&self) -> Self::Node;
    fn advance(&self, node: Self::Node, letter: char) -> Option<Self::Node>;
    fn accepts(&self, node: Self::Node) -> bool;
    // ascending by letter
    fn arcs(&self, node: Self::Node) -> &[(char, Self::Node)];

    #[inline(always)]
    fn find_prefix(&self, s: &str) -> Option<Self::Node> {
        s.chars()
            .try_fold(self.root(), |node, letter| self.advance(node, letter))
    }

    #[inline(always)]
    fn has_prefix(&self, s: &str) -> bool {
        self.find_prefix(s).is_some()
    }

    #[inline(always)]
    fn is_word(&self, s: &str) -> bool {
        self.find_prefix(s).is_some_and(|node| self.accepts(node))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeIndex(u32);

#[derive(Clone, Debug, Default)]
pub struct Node {
    arcs: Vec<(char, NodeIndex)>,
    accepts: bool,
}

#[derive(Debug)]
pub struct Trie {
    nodes: Box<[Node]>,
    num_words: usize,
}

impl std::ops::Index<NodeIndex> for Trie {
    type Output = Node;

    #[inline(always)]
    fn index(&self, i: NodeIndex) -> &Node {
        &self.nodes[i.0 as usize]
    }
}

impl Trie {
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> error::Returns<Trie> {
        let mut nodes = vec![Node::default()];
        let mut num_words = 0;
        for (line_number, word) in words.into_iter().enumerate() {
            let word = word.trim();
            if word.is_empty() {
                continue;
            }
            if !word.chars().all(|c| c.is_alphabetic()) {
                return_error!(
                    Format,
                    format!(
                        "invalid dictionary: {:?} on line {} is not a word",
                        word,
                        line_number + 1
                    )
                );
            }
            let mut p = 0;
            for letter in word.chars().map(|c| c.to_ascii_uppercase()) {
                p = match nodes[p].arcs.binary_search_by_key(&letter, |arc| arc.0) {
                    Ok(i) => nodes[p].arcs[i].1.0 as usize,
                    Err(i) => {
                        let child = nodes.len();
                        nodes.push(Node::default());
                        nodes[p].arcs.insert(i, (letter, NodeIndex(child as u32)));
                        child
                    }
                };
            }
            if !nodes[p].accepts {
                nodes[p].accepts = true;
                num_words += 1;
            }
        }
        Ok(Trie {
            nodes: nodes.into_boxed_slice(),
            num_words,
        })
    }

    // one word per line.
    pub fn parse(text: &str) -> error::Returns<Trie> {
        Self::from_words(text.lines())
    }

    pub fn read(path: &str) -> error::Returns<Trie> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) => {
                return_error!(
                    Format,
                    format!("cannot open dictionary file {}: {}", path, err)
                );
            }
        }
    }

    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
}

impl Lexicon for Trie {
    type Node = NodeIndex;

    #[inline(always)]
    fn root(&self) -> NodeIndex {
        NodeIndex(0)
    }

    #[inline(always)]
    fn advance(&self, node: NodeIndex, letter: char) -> Option<NodeIndex> {
        let arcs = &self[node].arcs;
        arcs.binary_search_by_key(&letter, |arc| arc.0)
            .ok()
            .map(|i| arcs[i].1)
    }

    #[inline(always)]
    fn accepts(&self, node: NodeIndex) -> bool {
        self[node].accepts
    }

    #[inline(always)]
    fn arcs(&self, node: NodeIndex) -> &[(char, NodeIndex)] {
        &self[node].arcs
    }
}
