//! Shared UI primitive library for the BookMates landing page.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable
//! `data-ui-*` DOM contract consumed by the page stylesheet. Page sections should compose these
//! primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, BadgeTone, Button, ButtonShape, ButtonSize, ButtonVariant, Card, Cluster, Drawer,
    Elevation, Grid, Heading, HeadingLevel, IconButton, LayoutAlign, LayoutGap, LayoutJustify,
    LayoutPadding, LinkButton, Section, Stack, SurfaceVariant, Text, TextField, TextRole, TextTone,
};
