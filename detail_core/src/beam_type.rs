//! # Unscaled Beam Line
//!
//! [`BeamType`] is a [`ScaleBeamType`] drawn 1:1, for output whose units are
//! the model units. It can still be re-scaled through
//! [`set_scale`](ScaleBeamType::set_scale), e.g. to emit a second, scaled
//! rendering of the same line.

use std::ops::{Deref, DerefMut};

use crate::errors::DetailResult;
use crate::scale_beam_type::{BeamTypeInput, ScaleBeamType};
use crate::settings::DetailSettings;
use crate::units::Scale;

#[derive(Debug, Clone)]
pub struct BeamType(ScaleBeamType);

impl BeamType {
    pub fn new(input: BeamTypeInput) -> DetailResult<Self> {
        Ok(BeamType(ScaleBeamType::unscaled(input)?))
    }

    pub fn with_settings(input: BeamTypeInput, settings: DetailSettings) -> DetailResult<Self> {
        Ok(BeamType(ScaleBeamType::with_settings(input, Scale::UNIT, settings)?))
    }

    pub fn into_inner(self) -> ScaleBeamType {
        self.0
    }
}

impl Deref for BeamType {
    type Target = ScaleBeamType;

    fn deref(&self) -> &ScaleBeamType {
        &self.0
    }
}

impl DerefMut for BeamType {
    fn deref_mut(&mut self) -> &mut ScaleBeamType {
        &mut self.0
    }
}
