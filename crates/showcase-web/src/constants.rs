// DOM hooks expected in index.html

pub const CANVAS_SELECTOR: &str = "canvas.webgl";
pub const HEADING_SELECTOR: &str = "h1";
pub const COLOR_INPUT_ID: &str = "particle-color";

// URL query overrides, e.g. ?particles=2000&seed=7
pub const QUERY_PARTICLES: &str = "particles";
pub const QUERY_SEED: &str = "seed";

// Fully transparent so the page background shows through the canvas
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];
