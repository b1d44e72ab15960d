#![forbid(unsafe_code)]

//! Command-line argument parsing for the sweep demo.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `STICKY_DEMO_*` prefix; explicit flags win over
//! the environment.

use std::env;
use std::process;

use sticky_core::{HandoffPolicy, StickyConfig};
use sticky_harness::{ContentModel, ScrollSimulation};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Sticky header sweep demo

USAGE:
    sticky-demo [OPTIONS]

OPTIONS:
    --sections=N         Number of headed sections (default: 50)
    --banner-height=H    Height of the block above the first section (default: 56)
    --header-height=H    Height of each sticky header (default: 34)
    --body-height=H      Height of each section body (default: 120)
    --viewport=H         Viewport height (default: 600)
    --start=S            First scroll position (default: 0)
    --end=S              Last scroll position (default: content height - viewport)
    --step=S             Scroll distance between frames (default: 8)
    --top-inset=F        Pinned edge, overrides STICKY_TOP_INSET
    --handoff=MODE       'push' or 'overlap', overrides STICKY_HANDOFF
    --ascii              Print an ASCII viewport per frame instead of JSONL
    --row-height=H       ASCII row height (default: 10)
    --jsonl=PATH         Also write JSONL to PATH ('-' for stdout)
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    STICKY_TOP_INSET          Pinned edge (default: 0)
    STICKY_HANDOFF            Hand-off policy: push|overlap (default: push)
    STICKY_DEMO_SECTIONS      Override --sections
    STICKY_DEMO_VIEWPORT      Override --viewport
    STICKY_DEMO_STEP          Override --step
    STICKY_DEMO_ASCII         Enable --ascii (1/true)
    STICKY_DEMO_JSONL         Override --jsonl
    RUST_LOG                  Log filter for stderr diagnostics";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// Number of sections.
    pub sections: usize,
    /// Banner height.
    pub banner_height: f64,
    /// Header height.
    pub header_height: f64,
    /// Body height.
    pub body_height: f64,
    /// Viewport height.
    pub viewport: f64,
    /// First scroll position.
    pub start: f64,
    /// Last scroll position (None = bottom of content).
    pub end: Option<f64>,
    /// Scroll step between frames.
    pub step: f64,
    /// Pinned edge override.
    pub top_inset: Option<f64>,
    /// Hand-off policy override.
    pub handoff: Option<HandoffPolicy>,
    /// Print ASCII viewports.
    pub ascii: bool,
    /// ASCII row height.
    pub row_height: f64,
    /// JSONL output path ('-' = stdout).
    pub jsonl: Option<String>,
}

/// Why argument parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `--help` was requested.
    Help,
    /// `--version` was requested.
    Version,
    /// A flag's value could not be parsed or was out of range.
    InvalidValue { flag: &'static str, value: String },
    /// An argument that is not a known flag.
    UnknownArg(String),
    /// The requested sweep would exceed the frame limit.
    TooManyFrames { frames: u64, limit: usize },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Help => write!(f, "help requested"),
            Self::Version => write!(f, "version requested"),
            Self::InvalidValue { flag, value } => write!(f, "invalid {flag} value: {value}"),
            Self::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            Self::TooManyFrames { frames, limit } => {
                write!(f, "sweep of {frames} frames exceeds the limit of {limit}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl Default for Opts {
    fn default() -> Self {
        Self {
            sections: ContentModel::REFERENCE_SECTIONS,
            banner_height: ContentModel::REFERENCE_BANNER,
            header_height: ContentModel::REFERENCE_HEADER,
            body_height: ContentModel::REFERENCE_BODY,
            viewport: 600.0,
            start: 0.0,
            end: None,
            step: 8.0,
            top_inset: None,
            handoff: None,
            ascii: false,
            row_height: 10.0,
            jsonl: None,
        }
    }
}

fn env_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue {
        flag,
        value: value.to_string(),
    })
}

fn parse_finite(flag: &'static str, value: &str) -> Result<f64, ParseError> {
    let n: f64 = parse_number(flag, value)?;
    if n.is_finite() {
        Ok(n)
    } else {
        Err(ParseError::InvalidValue {
            flag,
            value: value.to_string(),
        })
    }
}

fn parse_length(flag: &'static str, value: &str) -> Result<f64, ParseError> {
    let n = parse_finite(flag, value)?;
    if n >= 0.0 {
        Ok(n)
    } else {
        Err(ParseError::InvalidValue {
            flag,
            value: value.to_string(),
        })
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("sticky-demo {VERSION}");
                process::exit(0);
            }
            Err(err @ (ParseError::InvalidValue { .. } | ParseError::TooManyFrames { .. })) => {
                eprintln!("{err}");
                process::exit(1);
            }
            Err(err @ ParseError::UnknownArg(_)) => {
                eprintln!("{err}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse from explicit args and an environment lookup.
    pub fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(val) = get_env("STICKY_DEMO_SECTIONS")
            && let Ok(n) = val.trim().parse()
        {
            opts.sections = n;
        }
        if let Some(val) = get_env("STICKY_DEMO_VIEWPORT")
            && let Ok(n) = parse_length("STICKY_DEMO_VIEWPORT", val.trim())
        {
            opts.viewport = n;
        }
        if let Some(val) = get_env("STICKY_DEMO_STEP")
            && let Ok(n) = parse_length("STICKY_DEMO_STEP", val.trim())
        {
            opts.step = n;
        }
        if let Some(val) = get_env("STICKY_DEMO_ASCII") {
            opts.ascii = env_flag(val.trim());
        }
        if let Some(val) = get_env("STICKY_DEMO_JSONL")
            && !val.trim().is_empty()
        {
            opts.jsonl = Some(val);
        }

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Err(ParseError::Help),
                "--version" | "-V" => return Err(ParseError::Version),
                "--ascii" => opts.ascii = true,
                other => {
                    let Some((flag, val)) = other.split_once('=') else {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    };
                    match flag {
                        "--sections" => opts.sections = parse_number("--sections", val)?,
                        "--banner-height" => {
                            opts.banner_height = parse_length("--banner-height", val)?;
                        }
                        "--header-height" => {
                            opts.header_height = parse_length("--header-height", val)?;
                        }
                        "--body-height" => opts.body_height = parse_length("--body-height", val)?,
                        "--viewport" => opts.viewport = parse_length("--viewport", val)?,
                        "--start" => opts.start = parse_finite("--start", val)?,
                        "--end" => opts.end = Some(parse_finite("--end", val)?),
                        "--step" => opts.step = parse_length("--step", val)?,
                        "--row-height" => opts.row_height = parse_length("--row-height", val)?,
                        "--top-inset" => {
                            opts.top_inset = Some(parse_finite("--top-inset", val)?);
                        }
                        "--handoff" => {
                            opts.handoff = Some(HandoffPolicy::parse(val).ok_or_else(|| {
                                ParseError::InvalidValue {
                                    flag: "--handoff",
                                    value: val.to_string(),
                                }
                            })?);
                        }
                        "--jsonl" => opts.jsonl = Some(val.to_string()),
                        _ => return Err(ParseError::UnknownArg(other.to_string())),
                    }
                }
            }
        }

        Ok(opts)
    }

    /// Content described by the layout flags.
    #[must_use]
    pub fn model(&self) -> ContentModel {
        ContentModel::uniform(
            self.banner_height,
            self.sections,
            self.header_height,
            self.body_height,
        )
    }

    /// Last scroll position of the sweep over `model`.
    ///
    /// Defaults to the bottom of the content. Fails when the sweep would
    /// produce more than [`ScrollSimulation::MAX_SWEEP_FRAMES`] frames.
    pub fn sweep_end(&self, model: &ContentModel) -> Result<f64, ParseError> {
        let end = self.end.unwrap_or_else(|| model.max_scroll(self.viewport));
        let frames = ScrollSimulation::sweep_frame_count(self.start, end, self.step);
        let limit = ScrollSimulation::MAX_SWEEP_FRAMES;
        if frames > limit as u64 {
            return Err(ParseError::TooManyFrames { frames, limit });
        }
        Ok(end)
    }

    /// Apply flag overrides on top of an environment-derived config.
    #[must_use]
    pub fn apply_to(&self, mut config: StickyConfig) -> StickyConfig {
        if let Some(inset) = self.top_inset {
            config.top_inset = inset;
        }
        if let Some(handoff) = self.handoff {
            config.handoff = handoff;
        }
        config
    }
}
