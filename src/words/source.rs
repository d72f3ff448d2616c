//! Word sources.
//!
//! A `WordSource` supplies candidate words at session start. The grid
//! builder only depends on this trait, never on where words come from:
//!
//! - `BankSource`: the built-in word bank
//! - `FeedSource`: words scraped from a text or HTML feed
//! - `FnSource`: any closure (tests, host-provided fetchers)
//! - `TimeoutSource`: bounds another source's fetch time
//!
//! A failing source never fails the game; the builder falls back to the
//! fixed word set.

use std::io::Read;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use super::bank::WordBank;
use super::candidate::{normalize_word, Candidate};
use crate::core::{SourceError, MAX_WORD_LEN};

/// Supplier of candidate words.
pub trait WordSource: Send {
    /// Fetch candidate words. Called once per session build.
    fn fetch(&mut self) -> Result<Vec<Candidate>, SourceError>;

    /// Name used in log output.
    fn name(&self) -> &str {
        "word source"
    }
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn fetch(&mut self) -> Result<Vec<Candidate>, SourceError> {
        (**self).fetch()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Serves every word in a [`WordBank`], hints included.
#[derive(Clone, Debug)]
pub struct BankSource {
    bank: WordBank,
}

impl BankSource {
    #[must_use]
    pub fn new(bank: WordBank) -> Self {
        Self { bank }
    }
}

impl Default for BankSource {
    fn default() -> Self {
        Self::new(WordBank::builtin())
    }
}

impl WordSource for BankSource {
    fn fetch(&mut self) -> Result<Vec<Candidate>, SourceError> {
        Ok(self.bank.candidates().to_vec())
    }

    fn name(&self) -> &str {
        "word bank"
    }
}

/// Wraps a closure as a word source.
pub struct FnSource<F> {
    name: String,
    fetch: F,
}

impl<F> FnSource<F>
where
    F: FnMut() -> Result<Vec<Candidate>, SourceError> + Send,
{
    pub fn new(name: impl Into<String>, fetch: F) -> Self {
        Self {
            name: name.into(),
            fetch,
        }
    }
}

impl<F> WordSource for FnSource<F>
where
    F: FnMut() -> Result<Vec<Candidate>, SourceError> + Send,
{
    fn fetch(&mut self) -> Result<Vec<Candidate>, SourceError> {
        (self.fetch)()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Reads a feed document and keeps the words that fit the grid.
///
/// See [`parse_feed`] for the extraction rules.
pub struct FeedSource<R> {
    reader: R,
}

impl<R: Read + Send> FeedSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read + Send> WordSource for FeedSource<R> {
    fn fetch(&mut self) -> Result<Vec<Candidate>, SourceError> {
        let mut text = String::new();
        self.reader
            .read_to_string(&mut text)
            .map_err(|e| SourceError::Failed(e.to_string()))?;
        Ok(parse_feed(&text))
    }

    fn name(&self) -> &str {
        "feed"
    }
}

/// Extract grid-sized words from a feed.
///
/// When the document has `<i>` elements only their contents are used
/// (that is where the feed puts its headwords); otherwise the whole text is.
/// Tag names match in any case and may carry attributes.
/// Whitespace-separated tokens of 1..=7 letters are kept, uppercased.
///
/// ```
/// use crossword_duel::words::parse_feed;
///
/// let feed = "<p>Neu: <i>Brot Wasserfall</i> und <i>See 2x</i></p>";
/// let words: Vec<_> = parse_feed(feed).into_iter().map(|c| c.word).collect();
/// assert_eq!(words, vec!["BROT", "SEE"]);
/// ```
#[must_use]
pub fn parse_feed(text: &str) -> Vec<Candidate> {
    let segments = italic_segments(text);
    let tokens: Box<dyn Iterator<Item = &str>> = if segments.is_empty() {
        Box::new(text.split_whitespace())
    } else {
        Box::new(segments.into_iter().flat_map(str::split_whitespace))
    };

    let words: Vec<Candidate> = tokens
        .filter(|t| t.chars().count() <= MAX_WORD_LEN)
        .filter_map(normalize_word)
        .map(Candidate::new)
        .collect();
    debug!(count = words.len(), "parsed feed words");
    words
}

fn italic_segments(text: &str) -> Vec<&str> {
    // ASCII lowercasing keeps byte offsets, so indices into `lower` slice `text`.
    let lower = text.to_ascii_lowercase();
    let mut segments = Vec::new();
    let mut pos = 0;
    while let Some(found) = lower[pos..].find("<i") {
        let name_end = pos + found + 2;
        // `<img>`, `<input>` and other tags starting with `i`.
        match lower[name_end..].chars().next() {
            Some(c) if c == '>' || c.is_ascii_whitespace() => {}
            _ => {
                pos = name_end;
                continue;
            }
        }
        let Some(tag_end) = lower[name_end..].find('>') else {
            break;
        };
        let start = name_end + tag_end + 1;
        let Some(close) = lower[start..].find("</i>") else {
            break;
        };
        segments.push(&text[start..start + close]);
        pos = start + close + 4;
    }
    segments
}

/// Runs another source on a worker thread and stops waiting after a timeout.
///
/// A timed-out worker is left to finish on its own; its result is dropped.
pub struct TimeoutSource<S> {
    inner: Arc<Mutex<S>>,
    timeout: Duration,
}

impl<S: WordSource + 'static> TimeoutSource<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inner)),
            timeout,
        }
    }
}

impl<S: WordSource + 'static> WordSource for TimeoutSource<S> {
    fn fetch(&mut self) -> Result<Vec<Candidate>, SourceError> {
        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&self.inner);

        thread::spawn(move || {
            let result = match inner.lock() {
                Ok(mut source) => source.fetch(),
                Err(_) => Err(SourceError::Failed("word source lock poisoned".to_string())),
            };
            // The receiver is gone if we already timed out.
            let _ = tx.send(result);
        });

        match rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                warn!(timeout = ?self.timeout, "word source timed out");
                Err(SourceError::Timeout(self.timeout))
            }
            Err(RecvTimeoutError::Disconnected) => Err(SourceError::Disconnected),
        }
    }

    fn name(&self) -> &str {
        "timeout"
    }
}
