use crate::document::Document;
use crate::language::{TargetLanguage, FENCE};
use serde::Serialize;
use std::iter::{Enumerate, FusedIterator};

/// A fenced code block extracted from markdown.
///
/// Only fences tagged with the target language produce blocks:
///
/// ````markdown
/// Some prose.
///
/// ```rust,no_run
/// let x = 1;
/// ```
/// ````
///
/// yields `Block { start_line: 3, attributes: "no_run", content: "let x = 1;" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    /// 1-indexed line number of the opening fence
    pub start_line: usize,
    /// Everything after the first comma of the opening fence, verbatim
    pub attributes: String,
    /// Lines between the opening and closing fence, joined with `\n`
    pub content: String,
}

impl Block {
    /// Iterates over the comma-separated attribute words, trimmed, skipping
    /// empty entries.
    ///
    /// # Example
    ///
    /// ```
    /// use extract_code_blocks::{extract_blocks, TargetLanguage};
    ///
    /// let blocks = extract_blocks("```rust,ignore, edition2021\n```", &TargetLanguage::default());
    /// let flags: Vec<_> = blocks[0].flags().collect();
    /// assert_eq!(flags, vec!["ignore", "edition2021"]);
    /// ```
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .split(',')
            .map(str::trim)
            .filter(|flag| !flag.is_empty())
    }

    /// Returns whether `flag` is one of the block's attribute words.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags().any(|f| f == flag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Outside,
    Inside,
}

/// Per-scan state: where the open block started and what it holds so far.
#[derive(Debug)]
struct ScanState<'d> {
    mode: Mode,
    block_start: usize,
    lines: Vec<&'d str>,
    attributes: &'d str,
}

impl<'d> ScanState<'d> {
    fn new() -> Self {
        Self {
            mode: Mode::Outside,
            block_start: 0,
            lines: Vec::new(),
            attributes: "",
        }
    }

    fn open(&mut self, line_number: usize, attributes: &'d str) {
        self.mode = Mode::Inside;
        self.block_start = line_number;
        self.lines.clear();
        self.attributes = attributes;
    }

    fn close(&mut self) -> Block {
        self.mode = Mode::Outside;
        Block {
            start_line: self.block_start,
            attributes: self.attributes.to_string(),
            content: self.lines.join("\n"),
        }
    }

    fn discard(&mut self) {
        self.mode = Mode::Outside;
        self.lines.clear();
        self.attributes = "";
    }
}

/// Walks a document line by line and yields each target-language block.
///
/// The scanner is a two-state machine. Outside a block it waits for an
/// opening fence of the target language. Inside a block it accumulates lines
/// until one of:
///
/// - a line that is exactly three backticks, which emits the block;
/// - any other line starting with three backticks (a nested fence such as
///   `` ```python ``), which drops the open block without emitting it and
///   returns to the outside state;
/// - the end of the document, which emits the block as accumulated so far.
///
/// Scanning never fails; malformed input is absorbed by these rules. The
/// input is borrowed and never modified, and blocks are produced lazily in
/// document order.
///
/// # Example
///
/// ```
/// use extract_code_blocks::{Scanner, TargetLanguage};
///
/// let doc = "intro\n```rust\nfn main() {}\n```\noutro";
/// let lang = TargetLanguage::default();
/// let blocks: Vec<_> = Scanner::new(doc.lines(), &lang).collect();
///
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].start_line, 2);
/// assert_eq!(blocks[0].content, "fn main() {}");
/// ```
pub struct Scanner<'d, 'l, I> {
    lines: Enumerate<I>,
    language: &'l TargetLanguage,
    state: ScanState<'d>,
    exhausted: bool,
}

impl<'d, 'l, I> Scanner<'d, 'l, I>
where
    I: Iterator<Item = &'d str>,
{
    pub fn new<D>(lines: D, language: &'l TargetLanguage) -> Self
    where
        D: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter().enumerate(),
            language,
            state: ScanState::new(),
            exhausted: false,
        }
    }

    fn finish(&mut self) -> Option<Block> {
        self.exhausted = true;
        match self.state.mode {
            Mode::Inside => {
                log::debug!(
                    "Unclosed {} block starting at line {}",
                    self.language.name(),
                    self.state.block_start
                );
                Some(self.state.close())
            }
            Mode::Outside => None,
        }
    }
}

impl<'d, I> Iterator for Scanner<'d, '_, I>
where
    I: Iterator<Item = &'d str>,
{
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if self.exhausted {
            return None;
        }

        for (index, line) in self.lines.by_ref() {
            let line_number = index + 1;

            match self.state.mode {
                Mode::Outside => {
                    if let Some(attributes) = self.language.match_opening(line) {
                        self.state.open(line_number, attributes);
                    }
                }
                Mode::Inside if line == FENCE => return Some(self.state.close()),
                Mode::Inside if line.starts_with(FENCE) => {
                    // The open block is dropped, not emitted
                    log::warn!(
                        "Dropping {} block starting at line {}: nested fence at line {}",
                        self.language.name(),
                        self.state.block_start,
                        line_number
                    );
                    self.state.discard();
                }
                Mode::Inside => self.state.lines.push(line),
            }
        }

        self.finish()
    }
}

impl<'d, I> FusedIterator for Scanner<'d, '_, I> where I: Iterator<Item = &'d str> {}

/// Extracts every target-language block from `content`.
///
/// Line endings are normalized the same way [`Document`] does it.
///
/// # Example
///
/// ```
/// use extract_code_blocks::{extract_blocks, TargetLanguage};
///
/// let blocks = extract_blocks("```rust,no_run\nlet x = 1;\n```", &TargetLanguage::default());
/// assert_eq!(blocks[0].attributes, "no_run");
/// assert_eq!(blocks[0].content, "let x = 1;");
/// ```
pub fn extract_blocks(content: &str, language: &TargetLanguage) -> Vec<Block> {
    Document::new(content).scan(language).collect()
}
