//! Chapter addressing by path: `/` redirects to the cover, `/<n>` addresses
//! chapter `n`, everything else is not found.

use crate::chapters::ChapterIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Redirect(ChapterIndex),
    Chapter(ChapterIndex),
    NotFound,
}

impl Route {
    /// Chapter a client ends up on, following redirects.
    pub fn landing(self) -> Option<ChapterIndex> {
        match self {
            Route::Redirect(index) | Route::Chapter(index) => Some(index),
            Route::NotFound => None,
        }
    }
}

pub fn resolve(path: &str) -> Route {
    let trimmed = path.trim();
    let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Route::Redirect(ChapterIndex::FIRST);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Route::NotFound;
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(ChapterIndex::new)
        .map(Route::Chapter)
        .unwrap_or(Route::NotFound)
}

/// Canonical path for a chapter.
pub fn path_for(index: ChapterIndex) -> String {
    format!("/{}", index.get())
}
