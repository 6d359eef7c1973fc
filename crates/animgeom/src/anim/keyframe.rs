use serde::{Deserialize, Serialize};

use crate::rational::Rational;

/// How the segment starting at a keyframe is blended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyframeKind {
    /// Hold the value until the next keyframe.
    Step,
    #[default]
    Linear,
    /// Catmull-Rom through the neighbouring keyframes.
    Spline,
}

/// One sample of a track.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe<V> {
    pub value: V,
    #[serde(default)]
    pub kind: KeyframeKind,
    pub time: Rational,
}

impl<V> Keyframe<V> {
    #[inline]
    pub fn new(value: V, kind: KeyframeKind, time: Rational) -> Self {
        Self { value, kind, time }
    }
}
