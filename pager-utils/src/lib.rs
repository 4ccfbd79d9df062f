/// Control labels and their defaults.
pub mod labels;
/// Single source of truth for the command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Presentation helpers layered over the pagination controller.
pub mod pagination;
/// Pure parser helpers.
pub mod parse;
/// Plain-text rendering of pagination views.
pub mod render;
