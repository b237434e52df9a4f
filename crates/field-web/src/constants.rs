// Styling for the overlay canvas.

pub const PARTICLE_FILL: &str = "rgba(255, 255, 255, 0.8)";
pub const GLYPH_FONT: &str = "32px serif"; // 2rem
pub const LINK_RGB: [u8; 3] = [138, 43, 226]; // entanglement violet
