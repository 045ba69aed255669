// Host page hooks and media queries the front-end looks for.

pub const CANVAS_SELECTOR: &str = ".mountain-canvas"; // drawing surface element
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)"; // touch-first devices get a lighter field
