//! Static chapter registry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of chapters in the book.
pub const CHAPTER_COUNT: usize = 8;

/// Bounds-checked chapter position in `0..CHAPTER_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct ChapterIndex(u8);

impl ChapterIndex {
    pub const FIRST: ChapterIndex = ChapterIndex(0);
    pub const LAST: ChapterIndex = ChapterIndex((CHAPTER_COUNT - 1) as u8);

    pub fn new(raw: usize) -> Option<Self> {
        (raw < CHAPTER_COUNT).then_some(ChapterIndex(raw as u8))
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    pub fn next(self) -> Option<Self> {
        Self::new(self.get() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.get().checked_sub(1).and_then(Self::new)
    }

    pub fn chapter(self) -> &'static Chapter {
        &CHAPTERS[self.get()]
    }

    pub fn all() -> impl Iterator<Item = ChapterIndex> {
        (0..CHAPTER_COUNT).map(|raw| ChapterIndex(raw as u8))
    }
}

impl Default for ChapterIndex {
    fn default() -> Self {
        ChapterIndex::FIRST
    }
}

impl fmt::Display for ChapterIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for ChapterIndex {
    type Error = String;

    fn try_from(raw: usize) -> Result<Self, Self::Error> {
        ChapterIndex::new(raw).ok_or_else(|| format!("chapter index {raw} out of range"))
    }
}

impl From<ChapterIndex> for usize {
    fn from(index: ChapterIndex) -> Self {
        index.get()
    }
}

/// Stable identity of each chapter, independent of its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChapterId {
    Cover,
    About,
    ProjectsA,
    ProjectsB,
    Skills,
    Education,
    Certifications,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chapter {
    pub index: ChapterIndex,
    pub id: ChapterId,
    pub title: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub static CHAPTERS: [Chapter; CHAPTER_COUNT] = [
    Chapter {
        index: ChapterIndex(0),
        id: ChapterId::Cover,
        title: "Cover",
        slug: "cover",
        description: "Hakkan Parbej Shah - Full Stack Developer",
        icon: "🏠",
    },
    Chapter {
        index: ChapterIndex(1),
        id: ChapterId::About,
        title: "About",
        slug: "about",
        description: "Learn about the developer behind the code",
        icon: "👤",
    },
    Chapter {
        index: ChapterIndex(2),
        id: ChapterId::ProjectsA,
        title: "Projects A",
        slug: "projects-a",
        description: "Featured projects and applications",
        icon: "🚀",
    },
    Chapter {
        index: ChapterIndex(3),
        id: ChapterId::ProjectsB,
        title: "Projects B",
        slug: "projects-b",
        description: "More projects and future endeavors",
        icon: "💻",
    },
    Chapter {
        index: ChapterIndex(4),
        id: ChapterId::Skills,
        title: "Skills",
        slug: "skills",
        description: "Technical skills and power-ups",
        icon: "⚡",
    },
    Chapter {
        index: ChapterIndex(5),
        id: ChapterId::Education,
        title: "Education",
        slug: "education",
        description: "Academic journey and achievements",
        icon: "🎓",
    },
    Chapter {
        index: ChapterIndex(6),
        id: ChapterId::Certifications,
        title: "Certifications",
        slug: "certifications",
        description: "Professional certifications and badges",
        icon: "🏆",
    },
    Chapter {
        index: ChapterIndex(7),
        id: ChapterId::Contact,
        title: "Contact",
        slug: "contact",
        description: "Get in touch with the developer",
        icon: "📧",
    },
];

pub fn by_slug(slug: &str) -> Option<&'static Chapter> {
    CHAPTERS.iter().find(|chapter| chapter.slug == slug)
}
