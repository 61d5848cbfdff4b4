//! First-table row extraction from raw markup.
//!
//! Token-level scanning on the `html5ever` tokenizer, not a DOM tree. A
//! [`TokenSink`] tracks three flags (inside table / row / cell) and collects
//! cell text in document order. Nested markup inside a cell contributes only
//! its text; character references are decoded by the tokenizer, so `&nbsp;`
//! arrives as U+00A0 and is normalized to a plain space.
//!
//! Only the first `<table>` in the document is extracted. Malformed markup
//! never raises; a document without a table yields an empty row sequence.

use std::cell::{Cell, RefCell};

use html5ever::buffer_queue::BufferQueue;
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

/// Extract the rows of the first table in `markup`.
///
/// Each row is the ordered sequence of its cell texts, NBSP-normalized and
/// trimmed. Rows with no cells are dropped. Sink state is fresh per call.
pub fn extract_rows(markup: &str) -> Vec<Vec<String>> {
    let tokenizer = Tokenizer::new(TableSink::default(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from(markup));
    let _ = tokenizer.feed(&input);
    tokenizer.end();
    tokenizer.sink.rows.take()
}

/// Token sink that captures the rows of the first table it sees.
#[derive(Default)]
struct TableSink {
    in_table: Cell<bool>,
    in_row: Cell<bool>,
    in_cell: Cell<bool>,
    /// Latched at the first `</table>`; everything after is ignored.
    finished: Cell<bool>,
    cell: RefCell<String>,
    row: RefCell<Vec<String>>,
    rows: RefCell<Vec<Vec<String>>>,
}

impl TableSink {
    fn start_tag(&self, tag: &Tag) {
        match &*tag.name {
            "table" => self.in_table.set(true),
            "tr" if self.in_table.get() => {
                self.in_row.set(true);
                self.row.borrow_mut().clear();
            }
            "td" if self.in_row.get() => {
                self.in_cell.set(true);
                self.cell.borrow_mut().clear();
            }
            _ => {}
        }
    }

    fn end_tag(&self, tag: &Tag) {
        match &*tag.name {
            "td" if self.in_cell.get() => {
                self.in_cell.set(false);
                let text = self.cell.take().replace('\u{a0}', " ");
                self.row.borrow_mut().push(text.trim().to_string());
            }
            "tr" if self.in_row.get() => {
                self.in_row.set(false);
                let row = self.row.take();
                if !row.is_empty() {
                    self.rows.borrow_mut().push(row);
                }
            }
            "table" if self.in_table.get() => {
                self.in_table.set(false);
                self.finished.set(true);
            }
            _ => {}
        }
    }
}

impl TokenSink for TableSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        if self.finished.get() {
            return TokenSinkResult::Continue;
        }

        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => self.start_tag(&tag),
                TagKind::EndTag => self.end_tag(&tag),
            },
            Token::CharacterTokens(text) => {
                if self.in_cell.get() {
                    self.cell.borrow_mut().push_str(&text);
                }
            }
            _ => {}
        }

        TokenSinkResult::Continue
    }
}
