// SPDX-License-Identifier: MPL-2.0
//! Landing page shown once the splash has revealed.
//!
//! This module renders the marketing content: hero headline with outbound
//! action buttons, the feature grid, the vision statement, and the footer.
//! A language switcher in the top corner changes the active locale at any
//! time; every label below it goes through the localization catalogs.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use chrono::Datelike;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, Button, Column, Container, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Project organization on GitHub.
const GITHUB_URL: &str = "https://github.com/solcrafts";

/// Announcements account on X.
const TWITTER_URL: &str = "https://x.com/aisolcraft";

/// Wallet release downloads.
const DOWNLOAD_URL: &str = "https://github.com/solcrafts/wallet/releases";

/// Machine-readable skill manifest for agent integrations.
const AGENT_SKILL_URL: &str = "https://agipocket.com/skill.md";

/// Outbound destinations reachable from the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Github,
    Twitter,
    Download,
    AgentSkill,
}

impl Link {
    /// Address this link opens in the system browser.
    #[must_use]
    pub fn url(self) -> &'static str {
        match self {
            Self::Github => GITHUB_URL,
            Self::Twitter => TWITTER_URL,
            Self::Download => DOWNLOAD_URL,
            Self::AgentSkill => AGENT_SKILL_URL,
        }
    }
}

/// Contextual data needed to render the landing page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the landing page.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    LinkPressed(Link),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    LanguageSelected(LanguageIdentifier),
    OpenLink(Link),
}

/// Process a landing page message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale.clone()),
        Message::LinkPressed(link) => Event::OpenLink(*link),
    }
}

/// Render the landing page.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let switcher = build_language_switcher(&ctx);
    let hero = build_hero(&ctx);
    let features = build_features(&ctx);
    let vision = build_vision(&ctx);
    let footer = build_footer(&ctx);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::SECTION)
        .align_x(Horizontal::Center)
        .padding([spacing::LG, spacing::XL])
        .push(switcher)
        .push(hero)
        .push(features)
        .push(vision)
        .push(footer);

    scrollable(content).into()
}

/// Build the locale buttons in the top corner, one per registered catalog.
fn build_language_switcher<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for locale in &ctx.i18n.available_locales {
        // Native name from the catalogs, e.g. "language-name-zh-CN".
        let label_key = format!("language-name-{locale}");
        let label = ctx.i18n.tr(&label_key);
        let label = if label == label_key {
            locale.to_string()
        } else {
            label
        };

        let is_current = ctx.i18n.current_locale() == locale;
        let style = if is_current {
            styles::button::selected
        } else {
            styles::button::unselected
        };

        let entry = Button::new(Text::new(label).size(typography::BODY_SM))
            .padding([spacing::XXS, spacing::SM])
            .style(style)
            .on_press(Message::LanguageSelected(locale.clone()));

        row = row.push(entry);
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .into()
}

/// Build the hero section: wordmark, headline, subtitle, and the action
/// button row.
fn build_hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let wordmark = Text::new("AGIPOCKET")
        .size(typography::TITLE_SM)
        .color(theme::accent_color());

    let title = Text::new(ctx.i18n.tr("hero-title"))
        .size(typography::DISPLAY)
        .color(theme::heading_text_color());

    let subtitle = Text::new(ctx.i18n.tr("hero-subtitle"))
        .size(typography::BODY_LG)
        .color(theme::body_text_color());

    let actions = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(build_action_button(
            ctx.i18n.tr("buttons-github"),
            Link::Github,
            false,
        ))
        .push(build_action_button(
            ctx.i18n.tr("buttons-twitter"),
            Link::Twitter,
            false,
        ))
        .push(build_action_button(
            ctx.i18n.tr("buttons-download"),
            Link::Download,
            true,
        ))
        .push(build_action_button(
            ctx.i18n.tr("buttons-agent"),
            Link::AgentSkill,
            false,
        ));

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(wordmark)
        .push(title)
        .push(
            Container::new(subtitle)
                .max_width(sizing::CONTENT_MAX_WIDTH)
                .align_x(Horizontal::Center),
        )
        .push(actions)
        .into()
}

/// Build one hero action button. `primary` selects the filled brand style;
/// the rest get the glass outline.
fn build_action_button<'a>(label: String, link: Link, primary: bool) -> Element<'a, Message> {
    let style = if primary {
        styles::button::primary
    } else {
        styles::button::secondary
    };

    button(Text::new(label).size(typography::BODY))
        .padding([spacing::SM, spacing::LG])
        .style(style)
        .on_press(Message::LinkPressed(link))
        .into()
}

/// Build the three feature cards.
fn build_features<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = Row::new()
        .spacing(spacing::LG)
        .push(build_feature_card(
            "🛡",
            ctx.i18n.tr("features-identity-title"),
            ctx.i18n.tr("features-identity-desc"),
        ))
        .push(build_feature_card(
            "🤖",
            ctx.i18n.tr("features-execution-title"),
            ctx.i18n.tr("features-execution-desc"),
        ))
        .push(build_feature_card(
            "🔒",
            ctx.i18n.tr("features-intent-title"),
            ctx.i18n.tr("features-intent-desc"),
        ));

    Container::new(cards)
        .width(Length::Shrink)
        .align_x(Horizontal::Center)
        .into()
}

/// Build a single feature card with glyph, title, and description.
fn build_feature_card<'a>(glyph: &'a str, title: String, description: String) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(glyph).size(typography::TITLE_LG))
        .push(
            Text::new(title)
                .size(typography::TITLE_MD)
                .color(theme::heading_text_color()),
        )
        .push(
            Text::new(description)
                .size(typography::BODY_SM)
                .color(theme::body_text_color()),
        );

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::glass_card)
        .into()
}

/// Build the vision statement block.
fn build_vision<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("vision-title"))
        .size(typography::TITLE_LG)
        .color(theme::heading_text_color());

    let body = Text::new(ctx.i18n.tr("vision-desc"))
        .size(typography::BODY_LG)
        .color(theme::body_text_color());

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(
            Container::new(body)
                .max_width(sizing::CONTENT_MAX_WIDTH)
                .align_x(Horizontal::Center),
        )
        .into()
}

/// Build the footer: copyright line with the current year, plus text links.
fn build_footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let year = chrono::Local::now().year().to_string();
    let copyright = Text::new(ctx.i18n.tr_with_args("footer", &[("year", &year)]))
        .size(typography::CAPTION)
        .color(theme::body_text_color());

    let links = Row::new()
        .spacing(spacing::MD)
        .push(build_footer_link(ctx.i18n.tr("buttons-github"), Link::Github))
        .push(build_footer_link(
            ctx.i18n.tr("buttons-twitter"),
            Link::Twitter,
        ));

    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(links)
        .push(copyright)
        .into()
}

/// Build a plain text link for the footer.
fn build_footer_link<'a>(label: String, link: Link) -> Element<'a, Message> {
    button(Text::new(label).size(typography::CAPTION))
        .padding(spacing::XXS)
        .style(styles::button::link)
        .on_press(Message::LinkPressed(link))
        .into()
}
