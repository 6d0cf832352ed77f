// Page affordances: collapsible bullet lists and the light/dark theme.
// The browser half lives in assets/interactions.js and mirrors these models.

pub mod expand;
pub mod theme;
