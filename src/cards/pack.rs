//! Card packs and the flat-file pack format.
//!
//! A pack directory holds:
//!
//! - `info.txt`: JSON metadata, `{"name": ..., "license": ..., "copyright": ...,
//!   "desc": ..., "official": ...}`. Only `name` is required.
//! - `black.txt`: prompt cards, one per line, `text\tdraw\tplay[\twatermark]`.
//! - `white.txt`: response cards, one per line, `text[\twatermark]`.
//!
//! Either card file may be missing, but not both.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::Card;

const INFO_FILE: &str = "info.txt";
const PROMPT_FILE: &str = "black.txt";
const RESPONSE_FILE: &str = "white.txt";

/// Failure to load a pack.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: bad pack info: {source}")]
    Info {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}:{line}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("{0}: pack contains no cards")]
    Blank(PathBuf),
}

fn default_unknown() -> String {
    "Unknown".to_owned()
}

/// Pack metadata from `info.txt`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackInfo {
    pub name: String,
    #[serde(default = "default_unknown")]
    pub license: String,
    #[serde(default = "default_unknown")]
    pub copyright: String,
    #[serde(default, rename = "desc")]
    pub description: String,
    #[serde(default)]
    pub official: bool,
}

impl PackInfo {
    /// Metadata with only a name set.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            license: default_unknown(),
            copyright: default_unknown(),
            description: String::new(),
            official: false,
        }
    }
}

/// One source of cards.
#[derive(Clone, Debug)]
pub struct Pack {
    pub info: PackInfo,
    prompt_cards: Vec<Card>,
    response_cards: Vec<Card>,
    max_draw: u32,
    max_play: u32,
}

impl Pack {
    /// Build a pack from already-parsed cards.
    #[must_use]
    pub fn new(info: PackInfo, prompt_cards: Vec<Card>, response_cards: Vec<Card>) -> Self {
        let max_draw = prompt_cards.iter().map(Card::draw_count).max().unwrap_or(0);
        let max_play = prompt_cards.iter().map(Card::play_count).max().unwrap_or(0);
        Self {
            info,
            prompt_cards,
            response_cards,
            max_draw,
            max_play,
        }
    }

    /// Load a pack from a directory.
    pub fn load(dir: impl AsRef<Path>) -> Result<Pack, PackError> {
        let dir = dir.as_ref();

        let info_path = dir.join(INFO_FILE);
        let info_text = read(&info_path)?;
        let info: PackInfo = serde_json::from_str(&info_text).map_err(|source| PackError::Info {
            path: info_path.clone(),
            source,
        })?;

        let prompt_path = dir.join(PROMPT_FILE);
        let prompts = if prompt_path.is_file() {
            Some(parse_prompts(&prompt_path, &read(&prompt_path)?)?)
        } else {
            None
        };

        let response_path = dir.join(RESPONSE_FILE);
        let responses = if response_path.is_file() {
            Some(parse_responses(&read(&response_path)?))
        } else {
            None
        };

        if prompts.is_none() && responses.is_none() {
            return Err(PackError::Blank(dir.to_path_buf()));
        }

        let pack = Pack::new(info, prompts.unwrap_or_default(), responses.unwrap_or_default());
        debug!(
            "loaded pack {:?}: {} prompt, {} response cards",
            pack.info.name,
            pack.prompt_cards.len(),
            pack.response_cards.len()
        );
        Ok(pack)
    }

    /// Load every pack in the subdirectories of `dir`, in name order.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Vec<Pack>, PackError> {
        let dir = dir.as_ref();
        let io_err = |source| PackError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut subdirs = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_dir() {
                subdirs.push(path);
            }
        }
        subdirs.sort();

        subdirs.iter().map(Pack::load).collect()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.info.name
    }

    #[must_use]
    pub fn prompt_cards(&self) -> &[Card] {
        &self.prompt_cards
    }

    #[must_use]
    pub fn response_cards(&self) -> &[Card] {
        &self.response_cards
    }

    #[must_use]
    pub fn max_draw(&self) -> u32 {
        self.max_draw
    }

    #[must_use]
    pub fn max_play(&self) -> u32 {
        self.max_play
    }
}

fn read(path: &Path) -> Result<String, PackError> {
    fs::read_to_string(path).map_err(|source| PackError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse prompt lines: `text\tdraw\tplay[\twatermark]`.
pub fn parse_prompts(path: &Path, contents: &str) -> Result<Vec<Card>, PackError> {
    let mut cards = Vec::new();

    for (n, line) in contents.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let malformed = |reason: String| PackError::Malformed {
            path: path.to_path_buf(),
            line: n + 1,
            reason,
        };

        let mut cols = line.split('\t');
        let text = cols.next().unwrap_or_default();
        let draw = cols.next().ok_or_else(|| malformed("missing draw count".into()))?;
        let play = cols.next().ok_or_else(|| malformed("missing play count".into()))?;
        let watermark = cols.next().unwrap_or_default();

        let draw: u32 = draw
            .trim()
            .parse()
            .map_err(|e| malformed(format!("bad draw count {draw:?}: {e}")))?;
        let play: u32 = play
            .trim()
            .parse()
            .map_err(|e| malformed(format!("bad play count {play:?}: {e}")))?;

        cards.push(Card::prompt(text, draw, play).with_watermark(watermark));
    }

    Ok(cards)
}

/// Parse response lines: `text[\twatermark]`.
#[must_use]
pub fn parse_responses(contents: &str) -> Vec<Card> {
    contents
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut cols = line.split('\t');
            let text = cols.next().unwrap_or_default();
            let watermark = cols.next().unwrap_or_default();
            Card::response(text).with_watermark(watermark)
        })
        .collect()
}
