//! Board operations, one file per entity.

mod answer;
mod moderation;
mod question;
