//! Display-free core of the comic folio.
//!
//! Everything that decides *which* chapter is shown lives here: the chapter
//! registry, the navigation state machine, input arbitration, the flip
//! animation clock and chapter routing, plus the contact wire types. The
//! desktop shell and the HTTP service only adapt their inputs into these types
//! and render the results.

pub mod chapters;
pub mod contact;
pub mod flip;
pub mod gesture;
pub mod navigator;
pub mod route;
pub mod session;

pub use chapters::{CHAPTER_COUNT, CHAPTERS, Chapter, ChapterId, ChapterIndex};
pub use contact::{ContactReceipt, ContactRequest, ErrorBody};
pub use flip::{FlipMode, FlipPlan, FlipProgress, FlipVisuals};
pub use gesture::{Arbitration, InputEvent, NavKey, PointerSource, Surface};
pub use navigator::{Intent, Navigator, Transition};
pub use route::{Route, resolve};
pub use session::{FlipStart, Preferences, Session, TickOutcome};
