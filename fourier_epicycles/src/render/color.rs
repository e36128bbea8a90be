/// Number of entries in the point color ramp, circles past the end reuse the last color.
pub const GRADIENT_LEN: usize = 100;

/// Color of the point at the end of the `index`-th circle (0 based) as `[r, g, b]`.
///
/// Ramps from blue through purple to red over the first 50 entries and from red to orange over the
/// remaining 50.
///
/// # Examples
///
/// ```
/// # use fourier_epicycles::render::gradient_color;
/// assert_eq!(gradient_color(0), [0x05, 0x00, 0xfa]);
/// assert_eq!(gradient_color(49), [0xfa, 0x00, 0x05]);
/// assert_eq!(gradient_color(50), [0xff, 0x03, 0x00]);
/// assert_eq!(gradient_color(99), [0xff, 0xa7, 0x00]);
/// assert_eq!(gradient_color(500), gradient_color(99));
/// ```
pub fn gradient_color(index: usize) -> [u8; 3] {
    let i = index.min(GRADIENT_LEN - 1);
    if i < 50 {
        let step = 5 * i as u8;
        [5 + step, 0, 250 - step]
    } else {
        let g = ((i - 49) as f64 * 10.0 / 3.0).round() as u8;
        [0xff, g, 0]
    }
}

/// [gradient_color] as a `#rrggbb` string.
pub fn gradient_color_hex(index: usize) -> String {
    let [r, g, b] = gradient_color(index);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
