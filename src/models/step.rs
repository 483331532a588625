use std::fmt;
use std::str::FromStr;

use pixel_engine::{
    apply_dither, apply_filter, Binary, Brightness, Contrast, DitherAlgorithm, Filter, Gamma,
    Gray, GrayTone, Invert, PixelBuffer, Sepia, Shading, Solarize, Tint,
};

use crate::error::StepError;

/// One stage of a [`Pipeline`](super::Pipeline): a filter or a dither pass.
///
/// Parsed from `name[:key=value,...]`:
///
/// ```
/// use filterplay::models::Step;
///
/// let sepia: Step = "sepia:level=0.34".parse().unwrap();
/// assert_eq!(sepia.name(), "sepia");
///
/// let dither: Step = "dither:atkinson".parse().unwrap();
/// assert_eq!(dither.name(), "dither");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Filter(Filter),
    Dither(DitherAlgorithm),
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Filter(filter) => filter.name(),
            Step::Dither(_) => "dither",
        }
    }

    /// Run this step over `buffer` in place.
    pub fn apply(&self, buffer: &mut PixelBuffer) {
        match self {
            Step::Filter(filter) => apply_filter(buffer, filter),
            Step::Dither(algorithm) => apply_dither(buffer, *algorithm),
        }
    }
}

impl From<Filter> for Step {
    fn from(filter: Filter) -> Self {
        Step::Filter(filter)
    }
}

impl From<DitherAlgorithm> for Step {
    fn from(algorithm: DitherAlgorithm) -> Self {
        Step::Dither(algorithm)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Filter(filter) => write!(f, "{filter}"),
            Step::Dither(algorithm) => write!(f, "dither:{algorithm}"),
        }
    }
}

impl FromStr for Step {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(StepError::Empty);
        }
        let (name, rest) = s.split_once(':').unwrap_or((s, ""));
        let name = name.trim().to_ascii_lowercase();

        if name == "dither" {
            return parse_dither(rest);
        }

        let step = Filter::NAMES
            .iter()
            .copied()
            .find(|known| *known == name)
            .ok_or(StepError::UnknownStep(name))?;

        let mut options = Options::parse(step, rest)?;
        let threshold = options.float("threshold", 0.0)?;

        let filter: Filter = match step {
            "binary" => Binary::new(
                options.float("level", 0.5)?,
                threshold,
                options.flag("transparent", false)?,
            )?
            .into(),
            "gray" => {
                let tone = match options.take("tone") {
                    Some(tone) => tone.parse::<GrayTone>()?,
                    None => GrayTone::default(),
                };
                Gray::new(tone, threshold)?.into()
            }
            "shading" => {
                let [red, green, blue] = options.channels()?;
                Shading::new(red, green, blue, threshold)?.into()
            }
            "tint" => {
                let [red, green, blue] = options.channels()?;
                Tint::new(red, green, blue, threshold)?.into()
            }
            "solarize" => {
                let [red, green, blue] = options.channels()?;
                Solarize::new(red, green, blue, threshold)?.into()
            }
            "invert" => Invert::new(threshold)?.into(),
            "gamma" => Gamma::new(options.float("level", 1.0)?, threshold)?.into(),
            "brightness" => Brightness::new(options.float("level", 0.0)?, threshold)?.into(),
            "contrast" => Contrast::new(options.float("level", 0.0)?, threshold)?.into(),
            "sepia" => Sepia::new(options.float("level", 1.0)?, threshold)?.into(),
            _ => return Err(StepError::UnknownStep(step.to_string())),
        };

        options.finish()?;
        Ok(filter.into())
    }
}

/// `dither`, `dither:<algorithm>` or `dither:algorithm=<algorithm>`.
fn parse_dither(rest: &str) -> Result<Step, StepError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Ok(DitherAlgorithm::default().into());
    }
    if !rest.contains('=') {
        return Ok(Step::Dither(rest.parse()?));
    }

    let mut options = Options::parse("dither", rest)?;
    let algorithm = match options.take("algorithm") {
        Some(name) => name.parse()?,
        None => DitherAlgorithm::default(),
    };
    options.finish()?;
    Ok(Step::Dither(algorithm))
}

/// `key=value` pairs of one step, consumed as the step is built.
struct Options<'a> {
    step: &'static str,
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> Options<'a> {
    fn parse(step: &'static str, raw: &'a str) -> Result<Self, StepError> {
        let mut pairs = Vec::new();
        for item in raw.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            let (key, value) = item
                .split_once('=')
                .ok_or_else(|| StepError::MalformedOption(item.to_string()))?;
            pairs.push((key.trim(), value.trim()));
        }
        Ok(Self { step, pairs })
    }

    fn take(&mut self, key: &str) -> Option<&'a str> {
        let index = self
            .pairs
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(key))?;
        Some(self.pairs.remove(index).1)
    }

    fn float(&mut self, key: &str, default: f64) -> Result<f64, StepError> {
        match self.take(key) {
            Some(value) => value.parse().map_err(|_| invalid(key, value)),
            None => Ok(default),
        }
    }

    fn flag(&mut self, key: &str, default: bool) -> Result<bool, StepError> {
        match self.take(key) {
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(true),
                "false" | "no" | "off" | "0" => Ok(false),
                _ => Err(invalid(key, value)),
            },
            None => Ok(default),
        }
    }

    /// `red`, `green` and `blue` factors, each defaulting to 0.
    fn channels(&mut self) -> Result<[f64; 3], StepError> {
        Ok([
            self.float("red", 0.0)?,
            self.float("green", 0.0)?,
            self.float("blue", 0.0)?,
        ])
    }

    /// Reject whatever was not consumed.
    fn finish(self) -> Result<(), StepError> {
        match self.pairs.first() {
            Some((key, _)) => Err(StepError::UnknownOption {
                step: self.step,
                key: key.to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn invalid(key: &str, value: &str) -> StepError {
    StepError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
