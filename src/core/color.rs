/// Accent used when the stylesheet does not define `--accent-primary`.
pub const FALLBACK_ACCENT: &str = "#00d4aa";

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)` into its
/// colour channels.
pub fn parse_rgb(color: &str) -> Option<[u8; 3]> {
    let c = color.trim();
    if let Some(hex) = c.strip_prefix('#') {
        return parse_hex(hex);
    }
    let inner = c
        .strip_prefix("rgba(")
        .or_else(|| c.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let mut channels = inner.split(',').map(|s| s.trim().parse::<f32>().ok());
    let r = channels.next()??;
    let g = channels.next()??;
    let b = channels.next()??;
    Some([to_u8(r), to_u8(g), to_u8(b)])
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digit = |i: usize, len: usize| u8::from_str_radix(hex.get(i..i + len)?, 16).ok();
    match hex.len() {
        3 => Some([digit(0, 1)? * 17, digit(1, 1)? * 17, digit(2, 1)? * 17]),
        6 => Some([digit(0, 2)?, digit(2, 2)?, digit(4, 2)?]),
        _ => None,
    }
}

#[inline]
fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// `rgba(...)` string of `color` at the given alpha; falls back to the
/// default accent when `color` can't be parsed.
pub fn with_alpha(color: &str, alpha: f32) -> String {
    let [r, g, b] = parse_rgb(color)
        .or_else(|| parse_rgb(FALLBACK_ACCENT))
        .unwrap_or([0, 212, 170]);
    format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0))
}

/// Trimmed theme value, or the fallback when the property is unset.
pub fn accent_or_fallback(raw: &str) -> &str {
    let t = raw.trim();
    if t.is_empty() {
        FALLBACK_ACCENT
    } else {
        t
    }
}
