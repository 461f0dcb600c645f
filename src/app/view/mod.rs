mod flip;
mod panels;

use super::messages::Message;
use super::state::{App, NAV_BAR_HEIGHT, PAGE_PADDING, PAGE_SCROLL_ID};
use crate::theme::{COMIC_YELLOW, INK, PAPER_STAIN};
use flip::FlipLeaf;
use folio_core::{CHAPTER_COUNT, ChapterIndex};
use iced::alignment::Vertical;
use iced::widget::{
    Row, button, canvas, column, container, horizontal_space, row, scrollable, stack, text,
};
use iced::{Border, Element, Length, Theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let current = self.session.current();
        let flipping = self.session.is_transitioning();

        // Once the leaf has turned far enough the target shows underneath it.
        let shown = self.session.peek_target().unwrap_or(current);
        let page = scrollable(
            container(panels::chapter_panel(self, shown))
                .padding(PAGE_PADDING)
                .width(Length::Fill),
        )
        .id(PAGE_SCROLL_ID.clone())
        .on_scroll(|viewport| Message::PageScrolled(viewport.absolute_offset()))
        .width(Length::Fill)
        .height(Length::Fill);

        let page_layer: Element<'_, Message> = match self.session.in_flight() {
            Some(transition) => {
                let leaf = FlipLeaf::new(
                    transition,
                    self.session.visuals(),
                    self.session.is_cross_fading(),
                );
                stack![
                    page,
                    canvas(leaf).width(Length::Fill).height(Length::Fill)
                ]
                .into()
            }
            None => page.into(),
        };

        column![
            self.nav_bar(current, flipping),
            page_layer,
            self.pager(current, flipping)
        ]
        .into()
    }

    fn nav_bar(&self, current: ChapterIndex, flipping: bool) -> Element<'_, Message> {
        let mut tabs = Row::new().spacing(6).align_y(Vertical::Center);
        for index in ChapterIndex::all() {
            let chapter = index.chapter();
            let label = text(format!("{} {}", chapter.icon, chapter.title)).size(14);
            let style: fn(&Theme, button::Status) -> button::Style = if index == current {
                button::primary
            } else {
                button::secondary
            };
            let target = (!flipping && index != current).then_some(Message::GoToChapter(index.get()));
            tabs = tabs.push(button(label).style(style).on_press_maybe(target));
        }

        let sound_label = if self.session.preferences().sound_enabled {
            "🔊 Sound on"
        } else {
            "🔇 Sound off"
        };
        let bar = row![
            tabs,
            horizontal_space(),
            button(text(sound_label).size(14))
                .style(button::text)
                .on_press(Message::ToggleSound)
        ]
        .spacing(12)
        .align_y(Vertical::Center);

        container(bar)
            .padding([8, 16])
            .height(Length::Fixed(NAV_BAR_HEIGHT))
            .width(Length::Fill)
            .align_y(Vertical::Center)
            .style(|_theme| container::Style {
                background: Some(COMIC_YELLOW.into()),
                border: Border {
                    color: INK,
                    width: 3.0,
                    radius: 0.0.into(),
                },
                ..container::Style::default()
            })
            .into()
    }

    fn pager(&self, current: ChapterIndex, flipping: bool) -> Element<'_, Message> {
        let previous = current
            .previous()
            .filter(|_| !flipping)
            .map(|_| Message::PreviousChapter);
        let next = current
            .next()
            .filter(|_| !flipping)
            .map(|_| Message::NextChapter);

        let bar = row![
            button("◀ Previous").on_press_maybe(previous),
            horizontal_space(),
            text(format!("{} / {}", current.get() + 1, CHAPTER_COUNT)),
            horizontal_space(),
            button("Next ▶").on_press_maybe(next),
        ]
        .align_y(Vertical::Center);

        container(bar)
            .padding([8, 16])
            .width(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(PAPER_STAIN.into()),
                ..container::Style::default()
            })
            .into()
    }
}
