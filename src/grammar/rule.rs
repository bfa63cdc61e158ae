//! Pattern rules matched against text at a byte offset.
//!
//! A [`Rule`] is a small PEG-style pattern: literals, character classes,
//! ordered choice, sequences and greedy repetition. Matching is pure: a rule
//! reports where a match would end and never moves anything itself, which
//! lets [`Cursor`](crate::cursor::Cursor) implement attempt-and-rollback as a
//! saved index.

use smallvec::SmallVec;

/// One member of a [`CharClass`] union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassItem {
    /// Inclusive character range
    Range(char, char),
    /// Every character except the listed ones
    AnyExcept(SmallVec<[char; 4]>),
}

impl ClassItem {
    #[inline]
    fn contains(&self, c: char) -> bool {
        match self {
            ClassItem::Range(lo, hi) => *lo <= c && c <= *hi,
            ClassItem::AnyExcept(excluded) => !excluded.contains(&c),
        }
    }
}

/// A set of characters, stored as a union of [`ClassItem`]s.
///
/// Membership for ASCII characters is precomputed into a 128-bit bitmap when
/// the class is built; other characters are checked against the items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    items: SmallVec<[ClassItem; 4]>,
    ascii: u128,
}

impl CharClass {
    /// Build a class from a union of items.
    pub fn new(items: impl IntoIterator<Item = ClassItem>) -> Self {
        let items: SmallVec<[ClassItem; 4]> = items.into_iter().collect();
        let ascii = ascii_bitmap(&items);
        CharClass { items, ascii }
    }

    /// Characters in `lo..=hi`.
    pub fn range(lo: char, hi: char) -> Self {
        Self::new([ClassItem::Range(lo, hi)])
    }

    /// Exactly the listed characters.
    pub fn chars(chars: &[char]) -> Self {
        Self::new(chars.iter().map(|&c| ClassItem::Range(c, c)))
    }

    /// Every character except the listed ones.
    pub fn any_except(chars: &[char]) -> Self {
        Self::new([ClassItem::AnyExcept(chars.iter().copied().collect())])
    }

    /// Union of two classes.
    pub fn union(mut self, other: CharClass) -> Self {
        self.merge(other);
        self
    }

    /// Add every member of `other` to this class.
    pub fn merge(&mut self, other: CharClass) {
        self.items.extend(other.items);
        self.ascii |= other.ascii;
    }

    /// This class with `c` added.
    pub fn with_char(self, c: char) -> Self {
        if self.contains(c) {
            return self;
        }
        self.union(CharClass::chars(&[c]))
    }

    /// This class with `c` removed from every item.
    pub fn without_char(self, c: char) -> Self {
        let mut items = SmallVec::<[ClassItem; 4]>::new();
        for item in self.items {
            match item {
                ClassItem::Range(lo, hi) if lo <= c && c <= hi => {
                    if let Some(before) = step_back(c).filter(|&b| b >= lo) {
                        items.push(ClassItem::Range(lo, before));
                    }
                    if let Some(after) = step_forward(c).filter(|&a| a <= hi) {
                        items.push(ClassItem::Range(after, hi));
                    }
                },
                ClassItem::AnyExcept(mut excluded) => {
                    if !excluded.contains(&c) {
                        excluded.push(c);
                    }
                    items.push(ClassItem::AnyExcept(excluded));
                },
                other => items.push(other),
            }
        }
        Self::new(items)
    }

    /// Whether `c` is a member.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        let code = c as u32;
        if code < 128 {
            return self.ascii & (1u128 << code) != 0;
        }
        self.items.iter().any(|item| item.contains(c))
    }

    pub fn items(&self) -> &[ClassItem] {
        &self.items
    }
}

fn ascii_bitmap(items: &[ClassItem]) -> u128 {
    (0u8..128)
        .filter(|&b| items.iter().any(|item| item.contains(char::from(b))))
        .fold(0u128, |bits, b| bits | (1u128 << b))
}

fn step_back(c: char) -> Option<char> {
    match c {
        '\0' => None,
        '\u{E000}' => Some('\u{D7FF}'),
        _ => char::from_u32(c as u32 - 1),
    }
}

fn step_forward(c: char) -> Option<char> {
    match c {
        char::MAX => None,
        '\u{D7FF}' => Some('\u{E000}'),
        _ => char::from_u32(c as u32 + 1),
    }
}

/// A pattern over text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Exact text
    Literal(Box<str>),
    /// One character from a class
    Class(CharClass),
    /// Ordered choice: the first alternative that matches wins
    Choice(Vec<Rule>),
    /// Every rule in turn
    Sequence(Vec<Rule>),
    /// Greedy repetition, at least `min` times
    Repeat { rule: Box<Rule>, min: usize },
}

impl Rule {
    pub fn literal(text: &str) -> Self {
        Rule::Literal(text.into())
    }

    pub fn class(class: CharClass) -> Self {
        Rule::Class(class)
    }

    /// A single character out of `chars`.
    pub fn any_of(chars: &[char]) -> Self {
        Rule::Class(CharClass::chars(chars))
    }

    pub fn choice(rules: impl IntoIterator<Item = Rule>) -> Self {
        Rule::Choice(rules.into_iter().collect())
    }

    pub fn sequence(rules: impl IntoIterator<Item = Rule>) -> Self {
        Rule::Sequence(rules.into_iter().collect())
    }

    /// Greedy repetition of this rule, at least `min` times.
    pub fn at_least(self, min: usize) -> Self {
        Rule::Repeat {
            rule: Box::new(self),
            min,
        }
    }

    /// Ordered choice of this rule, then `other`.
    pub fn or(self, other: Rule) -> Self {
        match self {
            Rule::Choice(mut rules) => {
                rules.push(other);
                Rule::Choice(rules)
            },
            rule => Rule::Choice(vec![rule, other]),
        }
    }

    /// The text of a literal rule.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Rule::Literal(text) => Some(&**text),
            _ => None,
        }
    }

    /// Try to match at `offset`, returning the end offset of the match.
    ///
    /// `offset` must lie on a character boundary of `text`.
    pub fn match_at(&self, text: &str, offset: usize) -> Option<usize> {
        match self {
            Rule::Literal(literal) => text[offset..]
                .starts_with(&**literal)
                .then(|| offset + literal.len()),
            Rule::Class(class) => text[offset..]
                .chars()
                .next()
                .filter(|&c| class.contains(c))
                .map(|c| offset + c.len_utf8()),
            Rule::Choice(rules) => rules.iter().find_map(|rule| rule.match_at(text, offset)),
            Rule::Sequence(rules) => rules
                .iter()
                .try_fold(offset, |end, rule| rule.match_at(text, end)),
            Rule::Repeat { rule, min } => {
                let mut end = offset;
                let mut count = 0usize;
                while let Some(next) = rule.match_at(text, end) {
                    if next == end {
                        // Zero-width body: every further iteration matches too
                        return Some(end);
                    }
                    count += 1;
                    end = next;
                }
                (count >= *min).then_some(end)
            },
        }
    }

    /// Whether this rule can succeed without consuming anything.
    pub fn matches_empty(&self) -> bool {
        self.match_at("", 0).is_some()
    }

    /// Rewrite into an equivalent rule that is cheaper to match.
    ///
    /// Nested choices and sequences are flattened, single-character literals
    /// become classes, and runs of adjacent single-character alternatives in a
    /// choice are merged into one class. Only adjacent alternatives are merged
    /// so ordered-choice results are unchanged.
    pub fn optimize(self) -> Rule {
        match self {
            Rule::Literal(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Rule::Class(CharClass::chars(&[c])),
                    _ => Rule::Literal(text),
                }
            },
            Rule::Class(class) => Rule::Class(class),
            Rule::Choice(rules) => {
                let mut merged: Vec<Rule> = Vec::with_capacity(rules.len());
                for rule in flatten_choice(rules) {
                    match rule {
                        Rule::Class(class) => match merged.last_mut() {
                            Some(Rule::Class(previous)) => previous.merge(class),
                            _ => merged.push(Rule::Class(class)),
                        },
                        rule => merged.push(rule),
                    }
                }
                if merged.len() == 1 {
                    merged.pop().unwrap_or(Rule::Choice(Vec::new()))
                } else {
                    Rule::Choice(merged)
                }
            },
            Rule::Sequence(rules) => {
                let mut flat = Vec::with_capacity(rules.len());
                for rule in rules.into_iter().map(Rule::optimize) {
                    match rule {
                        Rule::Sequence(inner) => flat.extend(inner),
                        Rule::Literal(text) if text.is_empty() => {},
                        rule => flat.push(rule),
                    }
                }
                match flat.len() {
                    0 => Rule::Literal("".into()),
                    1 => flat.pop().unwrap_or(Rule::Literal("".into())),
                    _ => Rule::Sequence(flat),
                }
            },
            Rule::Repeat { rule, min } => Rule::Repeat {
                rule: Box::new(rule.optimize()),
                min,
            },
        }
    }
}

fn flatten_choice(rules: Vec<Rule>) -> Vec<Rule> {
    let mut flat = Vec::with_capacity(rules.len());
    for rule in rules.into_iter().map(Rule::optimize) {
        match rule {
            Rule::Choice(inner) => flat.extend(inner),
            rule => flat.push(rule),
        }
    }
    flat
}

impl From<&str> for Rule {
    fn from(text: &str) -> Self {
        Rule::literal(text)
    }
}

impl From<char> for Rule {
    fn from(c: char) -> Self {
        Rule::Literal(c.to_string().into_boxed_str())
    }
}

impl From<CharClass> for Rule {
    fn from(class: CharClass) -> Self {
        Rule::Class(class)
    }
}
