use dioxus::prelude::*;

use crate::components::icons::{CheckIcon, HeartIcon, MapPinIcon, MessageCircleIcon, ThumbsDownIcon};
use crate::components::{ClientTimeDisplay, SmartImage};
use crate::services::posts::{Author, Post};

#[derive(Props, Clone, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
    /// Signed-in user, used to highlight their own reactions
    #[props(default)]
    pub current_user_id: Option<String>,
    pub on_like: EventHandler<String>,
    pub on_dislike: EventHandler<String>,
}

#[component]
pub fn PostCard(props: PostCardProps) -> Element {
    let post = &props.post;
    let user_id = props.current_user_id.as_deref();
    let is_liked = post.is_liked_by(user_id);
    let is_disliked = post.is_disliked_by(user_id);

    let like_class = if is_liked {
        "flex items-center gap-2 text-red-600"
    } else {
        "flex items-center gap-2 text-gray-500 hover:text-red-600 transition"
    };
    let dislike_class = if is_disliked {
        "flex items-center gap-2 text-gray-900"
    } else {
        "flex items-center gap-2 text-gray-500 hover:text-gray-900 transition"
    };

    let on_like = props.on_like;
    let on_dislike = props.on_dislike;
    let like_id = post.id.clone();
    let dislike_id = post.id.clone();
    let like_count = post.likes.len();
    let dislike_count = post.dislikes.len();
    let reply_count = post.replies.len();

    rsx! {
        article {
            class: "bg-white rounded-xl shadow-sm border border-gray-200 p-6",

            // Header
            div {
                class: "flex items-start justify-between mb-4",
                AuthorLine { author: post.author.clone(), created_at: post.created_at }
                span {
                    class: "px-3 py-1 rounded-full text-xs font-medium {post.post_type.badge_class()}",
                    "{post.post_type.label()}"
                }
            }

            div {
                class: "flex items-center gap-1 text-sm text-gray-500 mb-3",
                MapPinIcon { class: "w-4 h-4" }
                span { "{post.city}" }
            }

            p {
                class: "text-gray-800 whitespace-pre-wrap break-words mb-4",
                "{post.content}"
            }

            if let Some(image) = post.image.clone() {
                div {
                    class: "mb-4",
                    SmartImage {
                        src: image,
                        alt: "Post image".to_string(),
                    }
                }
            }

            // Actions
            div {
                class: "flex items-center gap-6 pt-4 border-t border-gray-100",
                button {
                    class: "{like_class}",
                    onclick: move |_| on_like.call(like_id.clone()),
                    HeartIcon { class: "w-5 h-5", filled: is_liked }
                    span { class: "text-sm", "{like_count}" }
                }
                button {
                    class: "{dislike_class}",
                    onclick: move |_| on_dislike.call(dislike_id.clone()),
                    ThumbsDownIcon { class: "w-5 h-5", filled: is_disliked }
                    span { class: "text-sm", "{dislike_count}" }
                }
                div {
                    class: "flex items-center gap-2 text-gray-500",
                    MessageCircleIcon { class: "w-5 h-5" }
                    span { class: "text-sm", "{reply_count}" }
                }
            }

            if !post.replies.is_empty() {
                div {
                    class: "mt-4 space-y-3",
                    for reply in post.replies.iter() {
                        div {
                            key: "{reply.id}",
                            class: "bg-gray-50 rounded-lg p-3",
                            AuthorLine { author: reply.author.clone(), created_at: reply.created_at, compact: true }
                            p { class: "text-sm text-gray-700 mt-2", "{reply.content}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AuthorLine(author: Author, created_at: chrono::DateTime<chrono::Utc>, #[props(default)] compact: bool) -> Element {
    let initial = author.first_name.chars().next().unwrap_or('?');
    let avatar_class = if compact { "w-7 h-7 text-xs" } else { "w-10 h-10" };
    let name_class = if compact { "text-sm font-medium" } else { "font-semibold" };

    rsx! {
        div {
            class: "flex items-center gap-3",
            div {
                class: "{avatar_class} rounded-full bg-indigo-100 text-indigo-700 flex items-center justify-center font-semibold",
                "{initial}"
            }
            div {
                div {
                    class: "flex items-center gap-1",
                    span { class: "{name_class} text-gray-900", "{author.display_name()}" }
                    if author.is_verified {
                        span {
                            class: "inline-flex items-center justify-center w-4 h-4 rounded-full bg-blue-500 text-white",
                            title: "Verified",
                            CheckIcon { class: "w-3 h-3" }
                        }
                    }
                }
                div {
                    class: "text-xs text-gray-500",
                    ClientTimeDisplay { date: created_at }
                }
            }
        }
    }
}
