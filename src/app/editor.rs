//! The editing core as the popup layer sees it: two callbacks.

use compact_str::{format_compact, CompactString};
use std::io;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentHandle {
    pub name: CompactString,
}

pub trait Editor {
    fn save(&mut self) -> io::Result<()>;

    fn open(&mut self) -> io::Result<ContentHandle>;
}

/// An in-memory editor with nothing to persist.
#[derive(Debug, Default)]
pub struct ScratchEditor {
    saves: usize,
    opened: Vec<ContentHandle>,
}

impl ScratchEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn opened(&self) -> &[ContentHandle] {
        &self.opened
    }
}

impl Editor for ScratchEditor {
    fn save(&mut self) -> io::Result<()> {
        self.saves += 1;
        tracing::info!(saves = self.saves, "scratch buffer saved");
        Ok(())
    }

    fn open(&mut self) -> io::Result<ContentHandle> {
        let handle = ContentHandle {
            name: format_compact!("scratch-{}", self.opened.len() + 1),
        };
        tracing::info!(name = %handle.name, "scratch buffer opened");
        self.opened.push(handle.clone());
        Ok(handle)
    }
}
