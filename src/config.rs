use crate::error::CombineError;

use clap::Parser;

use std::{
    ffi::OsString,
    fmt,
    path::PathBuf,
    str::FromStr,
};

pub const MAX_INPUTS: usize = 9;

// Long options that may also be spelled with a single dash.
const LEGACY_FLAGS: [&str; 5] = ["format", "side", "out", "help", "verbose"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackMode{
    Bottom,
    Right,
}

impl FromStr for StackMode{
    type Err = CombineError;

    fn from_str(s: &str) -> Result<Self, Self::Err>{
        match s.to_ascii_lowercase().as_str() {
            "bottom" => Ok(Self::Bottom),
            "right" => Ok(Self::Right),
            _ => Err(CombineError::UnsupportedMode(s.to_string())),
        }
    }
}

impl fmt::Display for StackMode{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        match self {
            Self::Bottom => write!(f, "bottom"),
            Self::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat{
    Png,
    Jpeg{ quality: u8 },
}

impl OutputFormat{
    pub const JPEG_QUALITY: u8 = 90;
}

impl FromStr for OutputFormat{
    type Err = CombineError;

    fn from_str(s: &str) -> Result<Self, Self::Err>{
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg{ quality: Self::JPEG_QUALITY }),
            _ => Err(CombineError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        match self {
            Self::Png => write!(f, "png"),
            Self::Jpeg{ quality } => write!(f, "jpg (quality {quality})"),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    author, version,
    about = "Concatenate up to 9 PNG/JPEG images into one, stacked below each other or side by side",
    long_about = None,
    after_help = "Ex: combineimg --format png --side bottom --out go.png 1.png 2.png",
)]
pub struct Args{
    /// Input images, combined in the order given
    pub inputs: Vec<PathBuf>,

    /// Output file format, supports png/jpg
    #[clap(long, default_value = "png")]
    pub format: OutputFormat,

    /// bottom or right
    #[clap(long, default_value = "bottom")]
    pub side: StackMode,

    /// Output file name
    #[clap(long, default_value = "combined.png")]
    pub out: PathBuf,

    /// Print debug logs and stage timings
    #[clap(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct Config{
    pub inputs: Vec<PathBuf>,
    pub format: OutputFormat,
    pub side: StackMode,
    pub out: PathBuf,
}

impl Config{
    pub fn from_args(args: Args) -> Result<Self, CombineError>{
        let Args{ inputs, format, side, out, .. } = args;
        match inputs.len() {
            0 => Err(CombineError::NoFiles),
            n if n > MAX_INPUTS => Err(CombineError::TooManyFiles{ count: n, max: MAX_INPUTS }),
            _ => Ok(Self{ inputs, format, side, out }),
        }
    }
}

/// Rewrites `-format png` / `-format=png` style options into the double dash
/// form clap understands. Everything after a bare `--` is left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut literal = false;
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            // argv[0] is the program name
            if i == 0 || literal {
                return arg;
            }
            let Some(s) = arg.to_str() else { return arg; };
            if s == "--" {
                literal = true;
                return arg;
            }
            match s.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') && is_legacy_flag(rest) => {
                    OsString::from(format!("-{s}"))
                },
                _ => arg,
            }
        })
        .collect()
}

fn is_legacy_flag(rest: &str) -> bool{
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LEGACY_FLAGS.contains(&name)
}
