// View tuning shared by the controller and the web frontend.

// Plane mapping
pub const ZOOM: f64 = 0.2; // plane units per max(viewport side) is 1/ZOOM
pub const MANDELBROT_OFFSET: [f64; 2] = [-0.75, 0.0]; // centers the main cardioid

// Blend animation
pub const BLEND_RATE_PER_SEC: f64 = 1.0; // full Mandelbrot -> Julia fade in one second
pub const INITIAL_BLEND: f64 = 1.0; // first frames fade out of the Julia view

// DOM button codes
pub const BUTTON_PRIMARY: i16 = 0;
pub const BUTTON_SECONDARY: i16 = 2;
