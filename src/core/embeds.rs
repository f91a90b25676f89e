//! Shared embed builders for command responses
//!
//! One place for the accent colors and the common title + description shape,
//! so handlers don't each rebuild the same styling.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use serenity::builder::CreateEmbed;

/// Accent for successful state changes (session started, reminder set).
pub const COLOR_SUCCESS: u32 = 0x57F287;
/// Accent for completed-session reports.
pub const COLOR_REPORT: u32 = 0x5865F2;
/// Accent for soft warnings (session already running).
pub const COLOR_WARNING: u32 = 0xE59A2F;
/// Accent for neutral listings.
pub const COLOR_NEUTRAL: u32 = 0x2F3136;

/// Build a titled embed with an accent color and description.
///
/// Callers needing extras (fields, timestamps) chain setters on the result.
pub fn titled_embed(title: &str, description: &str, color: u32) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed.title(title);
    embed.description(description);
    embed.color(color);
    embed
}
