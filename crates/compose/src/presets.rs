//! Fixed colour and filter parameter sets for the base transform.

/// Colour levels applied before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPreset {
    #[default]
    Natural,
    Greyscale,
}

/// Blur-like effect applied to the whole screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPreset {
    #[default]
    Blur,
    Pixelate,
}

const NATURAL_ARGS: &[&str] = &["-level", "0%,100%,0.6"];

const GREYSCALE_ARGS: &[&str] = &[
    "-level",
    "0%,100%,0.6",
    "-set",
    "colorspace",
    "Gray",
    "-separate",
    "-average",
];

// Gaussian downscale to 10%, then back up.
const BLUR_ARGS: &[&str] = &[
    "-filter",
    "Gaussian",
    "-resize",
    "10%",
    "-define",
    "filter:sigma=1.5",
    "-resize",
    "1000%",
    "+profile",
    "*",
];

const PIXELATE_ARGS: &[&str] = &["-scale", "10%", "-scale", "1000%"];

impl ColorPreset {
    pub fn from_greyscale(greyscale: bool) -> Self {
        if greyscale {
            Self::Greyscale
        } else {
            Self::Natural
        }
    }

    pub fn args(self) -> &'static [&'static str] {
        match self {
            Self::Natural => NATURAL_ARGS,
            Self::Greyscale => GREYSCALE_ARGS,
        }
    }
}

impl FilterPreset {
    pub fn from_pixelate(pixelate: bool) -> Self {
        if pixelate {
            Self::Pixelate
        } else {
            Self::Blur
        }
    }

    pub fn args(self) -> &'static [&'static str] {
        match self {
            Self::Blur => BLUR_ARGS,
            Self::Pixelate => PIXELATE_ARGS,
        }
    }
}
