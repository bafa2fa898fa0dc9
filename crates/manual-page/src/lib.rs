//! Manual pages: content, table of contents and rendering.
//!
//! A [`Page`] holds the raw markdown of one manual document together with its title,
//! URL-safe name and hierarchical path. Rendering goes through a [`Decorator`]
//! (markdown to HTML), rewrites relative anchors against a base URL and can prefix
//! the result with a [`Submenu`] built from the page's headings.

#![warn(missing_docs)]

mod decorate;
mod html;
mod name;
mod page;
mod slug;
mod submenu;

pub use decorate::{Decorator, MarkdownDecorator};
pub use html::make_anchors_absolute;
pub use name::{PAGE_PLACEHOLDER, decode_name, encode_name, normalize_path};
pub use page::Page;
pub use slug::slugify;
pub use submenu::Submenu;
