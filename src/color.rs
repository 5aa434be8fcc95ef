//! Mapping between a (base, quality) pair and an RGB pixel.
//!
//! Bases pick the hue and quality scores pick the saturation, value is always
//! full. Decoding is a best-effort classifier over hue bands and is not an
//! exact inverse: N bases are rendered black on encode and black is padding
//! on decode, so they never come back.

use std::fmt;

/// Highest quality score that can be encoded, lower bound is zero.
pub const MAX_QUALITY: u8 = 40;

/// Offset between a quality score and its printable character.
pub const QUALITY_OFFSET: u8 = 33;

const MIN_SATURATION: f32 = 0.1;
const SATURATION_RANGE: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    C,
    G,
    T,
    N,
}

impl Base {
    /// Lowercase letters are accepted, any non ACGT symbol is N.
    pub fn from_ascii(b: u8) -> Self {
        match b.to_ascii_uppercase() {
            b'A' => Base::A,
            b'C' => Base::C,
            b'G' => Base::G,
            b'T' => Base::T,
            _ => Base::N,
        }
    }

    pub fn as_ascii(self) -> u8 {
        match self {
            Base::A => b'A',
            Base::C => b'C',
            Base::G => b'G',
            Base::T => b'T',
            Base::N => b'N',
        }
    }

    /// Hue in degrees used when encoding. N shares hue 0 with A.
    pub fn hue(self) -> f32 {
        match self {
            Base::A => 0.0,
            Base::T => 60.0,
            Base::C => 120.0,
            Base::G => 240.0,
            Base::N => 0.0,
        }
    }

    /// Classify a decoded hue. The bands are wider than the encode table and
    /// leave 150-210 and 270-330 unassigned.
    pub fn from_hue(h: f32) -> Self {
        if !(30.0..=330.0).contains(&h) {
            Base::A
        } else if h < 90.0 {
            Base::T
        } else if (90.0..150.0).contains(&h) {
            Base::C
        } else if (210.0..270.0).contains(&h) {
            Base::G
        } else {
            Base::N
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ascii() as char)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black pixels are padding, they are never decoded into bases.
    pub fn is_padding(&self) -> bool {
        *self == Pixel::BLACK
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Score from a quality character, clamped to [0, 40].
pub fn score_from_char(q: u8) -> u8 {
    q.saturating_sub(QUALITY_OFFSET).min(MAX_QUALITY)
}

pub fn char_from_score(score: u8) -> u8 {
    score.min(MAX_QUALITY) + QUALITY_OFFSET
}

/// Saturation lies in [0.1, 1.0] so no encoded base is ever gray or black.
pub fn saturation_from_score(score: u8) -> f32 {
    let score = score.min(MAX_QUALITY) as f32;
    MIN_SATURATION + (SATURATION_RANGE * (score / MAX_QUALITY as f32))
}

pub fn score_from_saturation(s: f32) -> u8 {
    let val = (s - MIN_SATURATION) / SATURATION_RANGE * MAX_QUALITY as f32;
    let score = (val + 0.5) as i32;
    score.clamp(0, MAX_QUALITY as i32) as u8
}

pub fn hsv_to_rgb(hsv: Hsv) -> Pixel {
    let Hsv { h, s, v } = hsv;
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;
    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    // Truncating casts, not rounding
    Pixel {
        r: ((r + m) * 255.0) as u8,
        g: ((g + m) * 255.0) as u8,
        b: ((b + m) * 255.0) as u8,
    }
}

pub fn rgb_to_hsv(pixel: Pixel) -> Hsv {
    let rf = pixel.r as f32 / 255.0;
    let gf = pixel.g as f32 / 255.0;
    let bf = pixel.b as f32 / 255.0;
    let cmax = rf.max(gf).max(bf);
    let cmin = rf.min(gf).min(bf);
    let delta = cmax - cmin;

    let mut h = if delta == 0.0 {
        0.0
    } else if cmax == rf {
        60.0 * (((gf - bf) / delta) % 6.0)
    } else if cmax == gf {
        60.0 * (((bf - rf) / delta) + 2.0)
    } else {
        60.0 * (((rf - gf) / delta) + 4.0)
    };
    if h < 0.0 {
        h += 360.0;
    }
    let s = if cmax == 0.0 { 0.0 } else { delta / cmax };
    Hsv { h, s, v: cmax }
}

/// Pixel for a single base call, `quality` is the raw quality character.
pub fn encode_color(base: Base, quality: u8) -> Pixel {
    match base {
        Base::N => Pixel::BLACK,
        base => hsv_to_rgb(Hsv {
            h: base.hue(),
            s: saturation_from_score(score_from_char(quality)),
            v: 1.0,
        }),
    }
}

/// Base and quality character for a non-padding pixel.
pub fn decode_color(pixel: Pixel) -> (Base, u8) {
    let hsv = rgb_to_hsv(pixel);
    let base = Base::from_hue(hsv.h);
    let quality = char_from_score(score_from_saturation(hsv.s));
    (base, quality)
}

#[cfg(test)]
mod test {
    use float_eq::assert_float_eq;
    use quickcheck::quickcheck;

    use super::*;

    const ACGT: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    #[test]
    fn test_from_ascii() {
        assert_eq!(Base::from_ascii(b'a'), Base::A);
        assert_eq!(Base::from_ascii(b'g'), Base::G);
        assert_eq!(Base::from_ascii(b'T'), Base::T);
        assert_eq!(Base::from_ascii(b'N'), Base::N);
        assert_eq!(Base::from_ascii(b'-'), Base::N);
        assert_eq!(Base::from_ascii(b'U'), Base::N);
    }

    #[test]
    fn test_quality_chars() {
        assert_eq!(score_from_char(b'!'), 0);
        assert_eq!(score_from_char(b'I'), 40);
        assert_eq!(score_from_char(b'~'), 40);
        assert_eq!(score_from_char(b' '), 0);
        assert_eq!(score_from_char(0), 0);
        assert_eq!(char_from_score(0), b'!');
        assert_eq!(char_from_score(40), b'I');
        assert_eq!(char_from_score(93), b'I');
    }

    #[test]
    fn test_saturation_bounds() {
        assert_float_eq!(saturation_from_score(0), 0.1, abs <= 1e-6);
        assert_float_eq!(saturation_from_score(40), 1.0, abs <= 1e-6);
        assert_float_eq!(saturation_from_score(200), 1.0, abs <= 1e-6);
        assert_eq!(score_from_saturation(0.0), 0);
        assert_eq!(score_from_saturation(1.0), 40);
    }

    #[test]
    fn test_saturated_primaries() {
        assert_eq!(encode_color(Base::A, b'I'), Pixel::new(255, 0, 0));
        assert_eq!(encode_color(Base::T, b'I'), Pixel::new(255, 255, 0));
        assert_eq!(encode_color(Base::C, b'I'), Pixel::new(0, 255, 0));
        assert_eq!(encode_color(Base::G, b'I'), Pixel::new(0, 0, 255));
    }

    #[test]
    fn test_n_is_black() {
        for q in b'!'..=b'~' {
            assert!(encode_color(Base::N, q).is_padding());
            assert!(encode_color(Base::from_ascii(b'x'), q).is_padding());
        }
    }

    #[test]
    fn test_rgb_to_hsv() {
        let hsv = rgb_to_hsv(Pixel::new(255, 255, 0));
        assert_float_eq!(hsv.h, 60.0, abs <= 1e-3);
        assert_float_eq!(hsv.s, 1.0, abs <= 1e-6);
        assert_float_eq!(hsv.v, 1.0, abs <= 1e-6);

        let hsv = rgb_to_hsv(Pixel::new(255, 0, 255));
        assert_float_eq!(hsv.h, 300.0, abs <= 1e-3);

        let hsv = rgb_to_hsv(Pixel::new(0, 0, 0));
        assert_float_eq!(hsv.h, 0.0, abs <= 1e-6);
        assert_float_eq!(hsv.s, 0.0, abs <= 1e-6);
        assert_float_eq!(hsv.v, 0.0, abs <= 1e-6);
    }

    #[test]
    fn test_hue_bands() {
        assert_eq!(Base::from_hue(0.0), Base::A);
        assert_eq!(Base::from_hue(29.9), Base::A);
        assert_eq!(Base::from_hue(330.5), Base::A);
        assert_eq!(Base::from_hue(30.0), Base::T);
        assert_eq!(Base::from_hue(89.9), Base::T);
        assert_eq!(Base::from_hue(90.0), Base::C);
        assert_eq!(Base::from_hue(150.0), Base::N);
        assert_eq!(Base::from_hue(180.0), Base::N);
        assert_eq!(Base::from_hue(210.0), Base::G);
        assert_eq!(Base::from_hue(270.0), Base::N);
        assert_eq!(Base::from_hue(330.0), Base::N);
    }

    #[test]
    fn test_off_table_colors() {
        // Cyan and magenta sit in the unassigned bands
        assert_eq!(decode_color(Pixel::new(0, 255, 255)).0, Base::N);
        assert_eq!(decode_color(Pixel::new(255, 0, 255)).0, Base::N);
        // Gray has no hue and no saturation
        assert_eq!(decode_color(Pixel::new(128, 128, 128)), (Base::A, b'!'));
        assert_eq!(decode_color(Pixel::new(255, 255, 255)), (Base::A, b'!'));
    }

    #[test]
    fn test_every_score_round_trips() {
        for base in ACGT {
            for score in 0..=MAX_QUALITY {
                let q = char_from_score(score);
                let pixel = encode_color(base, q);
                assert!(!pixel.is_padding(), "{base} {score} rendered as padding");
                assert_eq!(decode_color(pixel), (base, q), "{base} {score} {pixel:?}");
            }
        }
    }

    quickcheck! {
        fn prop_encoded_base_classifies_back(idx: usize, q: u8) -> bool {
            let base = ACGT[idx % ACGT.len()];
            decode_color(encode_color(base, q)).0 == base
        }

        fn prop_decoded_quality_in_range(r: u8, g: u8, b: u8) -> bool {
            let (_, q) = decode_color(Pixel::new(r, g, b));
            (b'!'..=b'I').contains(&q)
        }
    }
}
