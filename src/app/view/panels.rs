use super::super::messages::Message;
use super::super::state::{App, ContactStatus};
use crate::content::{
    self, ABOUT_FUN_FACTS, ABOUT_HIGHLIGHTS, ABOUT_QUICK_SKILLS, CERTIFICATIONS, CONTACT_INFO,
    EDUCATION, PERSONAL_INFO, Project, SkillCategory,
};
use crate::theme::{COMIC_BLUE, COMIC_RED, INK, PAPER};
use folio_core::{ChapterId, ChapterIndex};
use iced::alignment::Horizontal;
use iced::widget::{
    Column, Row, button, column, container, horizontal_space, row, text, text_editor, text_input,
};
use iced::{Border, Color, Element, Length, Shadow, Vector};

const HEADING_SIZE: u16 = 34;
const CARD_TITLE_SIZE: u16 = 20;
const BODY_SIZE: u16 = 15;

pub(super) fn chapter_panel(app: &App, index: ChapterIndex) -> Element<'_, Message> {
    let chapter = index.chapter();
    let body = match chapter.id {
        ChapterId::Cover => cover(),
        ChapterId::About => about(),
        ChapterId::ProjectsA => projects(content::featured_projects()),
        ChapterId::ProjectsB => projects(content::remaining_projects()),
        ChapterId::Skills => skills(),
        ChapterId::Education => education(),
        ChapterId::Certifications => certifications(),
        ChapterId::Contact => contact(app),
    };

    column![
        text(format!("{} {}", chapter.icon, chapter.title)).size(HEADING_SIZE),
        text(chapter.description).size(BODY_SIZE),
        body
    ]
    .spacing(16)
    .width(Length::Fill)
    .into()
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            text_color: Some(INK),
            background: Some(PAPER.into()),
            border: Border {
                color: INK,
                width: 3.0,
                radius: 6.0.into(),
            },
            shadow: Shadow {
                color: INK,
                offset: Vector::new(4.0, 4.0),
                blur_radius: 0.0,
            },
        })
        .into()
}

fn bullets<'a>(items: impl IntoIterator<Item = &'a str>) -> Element<'a, Message> {
    Column::with_children(
        items
            .into_iter()
            .map(|item| text(format!("• {item}")).size(BODY_SIZE).into()),
    )
    .spacing(4)
    .into()
}

fn badge(label: &str, color: Color) -> Element<'_, Message> {
    container(text(label).size(12))
        .padding([2, 8])
        .style(move |_theme| container::Style {
            text_color: Some(PAPER),
            background: Some(color.into()),
            border: Border {
                color: INK,
                width: 2.0,
                radius: 4.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

fn cover() -> Element<'static, Message> {
    card(
        column![
            text(PERSONAL_INFO.name).size(48),
            text(PERSONAL_INFO.title).size(26).color(COMIC_RED),
            text(PERSONAL_INFO.tagline).size(18),
            text("Swipe, click the page edge or press → to turn the page.").size(BODY_SIZE),
        ]
        .spacing(12)
        .align_x(Horizontal::Center)
        .width(Length::Fill),
    )
}

fn about() -> Element<'static, Message> {
    let quick_skills = Row::with_children(
        ABOUT_QUICK_SKILLS
            .into_iter()
            .map(|skill| badge(skill, COMIC_BLUE)),
    )
    .spacing(8);

    column![
        card(text(PERSONAL_INFO.bio).size(BODY_SIZE)),
        card(column![text("Highlights").size(CARD_TITLE_SIZE), bullets(ABOUT_HIGHLIGHTS)].spacing(8)),
        card(column![text("Quick skills").size(CARD_TITLE_SIZE), quick_skills].spacing(8)),
        card(column![text("Fun facts").size(CARD_TITLE_SIZE), bullets(ABOUT_FUN_FACTS)].spacing(8)),
    ]
    .spacing(16)
    .into()
}

fn project_card(project: &'static Project) -> Element<'static, Message> {
    let technologies =
        Row::with_children(project.technologies.iter().map(|tech| badge(tech, COMIC_BLUE)))
            .spacing(6);
    let mut links = Row::new().spacing(16);
    if let Some(url) = project.live_url {
        links = links.push(text(format!("Live: {url}")).size(13));
    }
    if let Some(url) = project.repo_url {
        links = links.push(text(format!("Code: {url}")).size(13));
    }

    card(
        column![
            row![
                text(project.title).size(CARD_TITLE_SIZE),
                horizontal_space(),
                badge(project.category.label(), COMIC_RED)
            ],
            text(project.description).size(BODY_SIZE),
            text(project.long_description).size(13),
            bullets(project.features.iter().copied()),
            technologies,
            links,
        ]
        .spacing(8),
    )
}

fn projects(list: impl Iterator<Item = &'static Project>) -> Element<'static, Message> {
    Column::with_children(list.map(project_card))
        .spacing(16)
        .into()
}

fn pips(filled: usize) -> String {
    (0..4)
        .map(|slot| if slot < filled { '●' } else { '○' })
        .collect()
}

fn skills() -> Element<'static, Message> {
    Column::with_children(SkillCategory::ALL.into_iter().map(|category| {
        let rows = Column::with_children(content::skills_in(category).map(|skill| {
            row![
                text(format!("{} {}", skill.icon, skill.name)).size(BODY_SIZE),
                horizontal_space(),
                text(pips(skill.level.pips())).size(BODY_SIZE).color(COMIC_RED),
            ]
            .into()
        }))
        .spacing(4);
        card(column![text(category.label()).size(CARD_TITLE_SIZE), rows].spacing(8))
    }))
    .spacing(16)
    .into()
}

fn education() -> Element<'static, Message> {
    Column::with_children(EDUCATION.iter().map(|entry| {
        card(
            column![
                text(entry.degree).size(CARD_TITLE_SIZE),
                text(format!("{} · {}", entry.institution, entry.period)).size(BODY_SIZE),
                text(entry.grade).size(BODY_SIZE).color(COMIC_BLUE),
                text(entry.description).size(13),
            ]
            .spacing(6),
        )
    }))
    .spacing(16)
    .into()
}

fn certifications() -> Element<'static, Message> {
    Column::with_children(CERTIFICATIONS.iter().map(|cert| {
        card(
            column![
                text(cert.title).size(CARD_TITLE_SIZE),
                text(format!("{} · {}", cert.issuer, cert.date)).size(BODY_SIZE),
                text(cert.description).size(13),
            ]
            .spacing(6),
        )
    }))
    .spacing(16)
    .into()
}

fn contact(app: &App) -> Element<'_, Message> {
    let form = &app.contact;
    let sending = form.is_sending();

    let details = card(
        column![
            text(format!("✉ {}", CONTACT_INFO.email)).size(BODY_SIZE),
            text(format!("☎ {}", CONTACT_INFO.phone)).size(BODY_SIZE),
            text(format!("GitHub: {}", CONTACT_INFO.github)).size(BODY_SIZE),
            text(format!("LinkedIn: {}", CONTACT_INFO.linkedin)).size(BODY_SIZE),
            text(format!("📍 {}", CONTACT_INFO.location)).size(BODY_SIZE),
        ]
        .spacing(6),
    );

    let status: Element<'_, Message> = match &form.status {
        ContactStatus::Idle => text("").into(),
        ContactStatus::Sending => text("Sending…").size(BODY_SIZE).into(),
        ContactStatus::Sent(message) => text(message).size(BODY_SIZE).color(COMIC_BLUE).into(),
        ContactStatus::Failed(error) => text(error).size(BODY_SIZE).color(COMIC_RED).into(),
    };

    let submit_label = if sending { "Sending…" } else { "Send message" };
    let fields = column![
        text("Send a message").size(CARD_TITLE_SIZE),
        text_input("Your name", &form.name)
            .on_input_maybe((!sending).then_some(Message::ContactNameChanged))
            .padding(8),
        text_input("you@example.com", &form.email)
            .on_input_maybe((!sending).then_some(Message::ContactEmailChanged))
            .on_submit(Message::SubmitContact)
            .padding(8),
        text_editor(&form.message)
            .placeholder("What would you like to talk about?")
            .on_action(Message::ContactMessageEdited)
            .height(Length::Fixed(140.0)),
        row![
            button(submit_label).on_press_maybe((!sending).then_some(Message::SubmitContact)),
            status
        ]
        .spacing(16),
    ]
    .spacing(10);

    column![details, card(fields)].spacing(16).into()
}
