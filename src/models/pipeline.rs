use std::fmt;
use std::str::FromStr;

use pixel_engine::PixelBuffer;

use super::Step;
use crate::error::StepError;

/// An ordered list of [`Step`]s.
///
/// All steps are validated when the pipeline is built, so running it cannot
/// fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    /// Parse every step, stopping at the first invalid one.
    pub fn parse<I, S>(steps: I) -> Result<Self, StepError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let steps = steps
            .into_iter()
            .map(|step| step.as_ref().parse())
            .collect::<Result<Vec<Step>, _>>()?;
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order on a copy of `input`.
    pub fn run(&self, input: &PixelBuffer) -> PixelBuffer {
        let mut buffer = input.clone();
        self.run_in_place(&mut buffer);
        buffer
    }

    /// Run every step in order, overwriting `buffer`.
    pub fn run_in_place(&self, buffer: &mut PixelBuffer) {
        let (width, height) = buffer.dimensions();
        tracing::debug!(width, height, steps = self.steps.len(), "Running pipeline");

        for step in &self.steps {
            step.apply(buffer);
        }
    }
}

impl FromStr for Pipeline {
    type Err = StepError;

    /// Steps separated by `|`, e.g. `dither:atkinson | binary:level=0.335`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.split('|').filter(|step| !step.trim().is_empty()))
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
