use std::collections::HashSet;

use ammonia::Builder;
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{controller::AppState, data::{Story, User}, view::{StarIcon, View}};

use self::format::{format_account_date, host_name};

pub mod format;

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const NOT_FOUND_HTML: &str = include_str!("../../assets/page/404.html");
const STORY_HTML: &str = include_str!("../../assets/element/story.html");
const STAR_HTML: &str = include_str!("../../assets/element/star.html");
const TRASH_CAN_HTML: &str = include_str!("../../assets/element/trash-can.html");
const EMPTY_HTML: &str = include_str!("../../assets/element/empty.html");
const NOTICE_HTML: &str = include_str!("../../assets/element/notice.html");
const PROFILE_HTML: &str = include_str!("../../assets/element/profile.html");
const NAV_LOGGED_IN_HTML: &str = include_str!("../../assets/element/nav/logged-in.html");
const NAV_LOGGED_OUT_HTML: &str = include_str!("../../assets/element/nav/logged-out.html");

pub fn render_page(state: &AppState, notice: Option<&str>) -> String {
    let user = state.current_user.as_ref();
    let mut slots: Vec<(String, String)> = View::ALL.iter()
        .map(|view| (
            format!("visibility:{}", view.slug()),
            if *view == state.view { "" } else { " hidden" }.to_string(),
        ))
        .collect();
    slots.extend([
        ("nav".to_string(), render_nav(user)),
        ("notice".to_string(), notice.map_or_else(String::new, |x|
            fill(NOTICE_HTML, &[("message", encode_text(x).as_ref())]))),
        ("all-stories".to_string(), render_story_list(&state.story_list.stories, user, View::AllStories, "No stories yet!")),
        ("my-stories".to_string(), user.map_or_else(String::new, |x|
            render_story_list(&x.own_stories, user, View::MyStories, "No stories added by user yet!"))),
        ("favorites".to_string(), user.map_or_else(String::new, |x|
            render_story_list(&x.favorites, user, View::Favorites, "No favorites added!"))),
        ("profile".to_string(), user.map_or_else(String::new, render_profile)),
    ]);
    fill(INDEX_HTML, &slots)
}

pub fn render_not_found() -> String {
    NOT_FOUND_HTML.to_string()
}

/// Replaces every `{{key}}` of `template` in a single scan. Inserted values
/// are never scanned again, so server text cannot open new placeholders.
/// Unknown keys are left as they are.
fn fill<K: AsRef<str>, V: AsRef<str>>(template: &str, values: &[(K, V)]) -> String {
    let mut html = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        html.push_str(&rest[..start]);
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        let key = &rest[start + 2..start + 2 + len];
        let end = start + len + 4;
        match values.iter().find(|(k, _)| k.as_ref() == key) {
            Some((_, value)) => html.push_str(value.as_ref()),
            None => html.push_str(&rest[start..end]),
        }
        rest = &rest[end..];
    }
    html.push_str(rest);
    html
}

fn render_nav(user: Option<&User>) -> String {
    match user {
        Some(user) => fill(NAV_LOGGED_IN_HTML, &[("user-name", encode_text(user.username.0.as_str()))]),
        None => NAV_LOGGED_OUT_HTML.to_string(),
    }
}

fn render_profile(user: &User) -> String {
    fill(PROFILE_HTML, &[
        ("created", format_account_date(&user.created_at)),
        ("user-name", encode_text(user.username.0.as_str()).to_string()),
        ("name", encode_text(user.name.as_str()).to_string()),
    ])
}

fn render_story_list(stories: &[Story], user: Option<&User>, return_to: View, empty_text: &str) -> String {
    if stories.is_empty() {
        return fill(EMPTY_HTML, &[("text", empty_text)]);
    }
    stories.iter()
        .map(|x| render_story(x, user, return_to))
        .collect::<Vec<_>>()
        .join("")
}

/// One story row. The trash can only shows for the owner and the star only
/// for logged in users.
pub fn render_story(story: &Story, user: Option<&User>, return_to: View) -> String {
    let story_id = encode_double_quoted_attribute(story.story_id.0.as_str());
    let trash_can = match user {
        Some(user) if user.owns(&story.story_id) => fill(TRASH_CAN_HTML, &[
            ("story-id", story_id.as_ref()),
            ("return-to", return_to.nav().path()),
        ]),
        _ => "".to_string(),
    };
    let star = match user {
        Some(user) => fill(STAR_HTML, &[
            ("star-class", StarIcon::for_favorite(user.is_favorite(&story.story_id)).class()),
            ("story-id", story_id.as_ref()),
            ("return-to", return_to.nav().path()),
        ]),
        None => "".to_string(),
    };
    let title = Builder::new()
        .tags(HashSet::from(["b", "i", "em", "q", "u", "var"]))
        .clean(story.title.as_str())
        .to_string();
    fill(STORY_HTML, &[
        ("trash-can", trash_can.as_str()),
        ("star", star.as_str()),
        ("story-id", story_id.as_ref()),
        ("url", encode_double_quoted_attribute(story.url.as_str()).as_ref()),
        ("host-name", encode_double_quoted_attribute(host_name(story.url.as_str())).as_ref()),
        ("username", encode_text(story.username.0.as_str()).as_ref()),
        ("author", encode_text(story.author.as_str()).as_ref()),
        ("title", title.as_str()),
    ])
}
