use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::keyframe::{Keyframe, KeyframeKind};
use crate::interp::{interpolate_segment, Interpolatable};
use crate::rational::{Overflow, OverflowArith, Rational};

/// Segment located for a query time.
///
/// `internal_time` is negative when the query precedes the first keyframe.
/// `section_time` is `None` on the last keyframe. Both differences fall back
/// to `Overflow::Approximate` when they leave the `i64` range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeResult {
    pub index: usize,
    pub internal_time: Overflow<Rational>,
    pub section_time: Option<Overflow<Rational>>,
    pub time: Rational,
}

/// Keyframe track kept in non-decreasing time order.
///
/// Invariants:
/// - `keyframes[i].time <= keyframes[i + 1].time` after every mutation.
/// - Equal times keep their insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation<V> {
    keyframes: Vec<Keyframe<V>>,
}

impl<V> Default for Animation<V> {
    fn default() -> Self {
        Self {
            keyframes: Vec::new(),
        }
    }
}

impl<V> Animation<V> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stable sort by time; equivalent to inserting one by one.
    pub fn from_keyframes(keyframes: impl IntoIterator<Item = Keyframe<V>>) -> Self {
        let mut keyframes: Vec<_> = keyframes.into_iter().collect();
        keyframes.sort_by_key(|k| k.time);
        Self { keyframes }
    }

    #[inline]
    pub fn keyframes(&self) -> &[Keyframe<V>] {
        &self.keyframes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Insert before the first keyframe with a strictly greater time; returns the index.
    pub fn insert(&mut self, keyframe: Keyframe<V>) -> usize {
        let index = self
            .keyframes
            .iter()
            .position(|k| k.time > keyframe.time)
            .unwrap_or(self.keyframes.len());
        self.keyframes.insert(index, keyframe);
        index
    }

    pub fn remove(&mut self, index: usize) -> Option<Keyframe<V>> {
        (index < self.keyframes.len()).then(|| self.keyframes.remove(index))
    }

    #[inline]
    pub fn first_time(&self) -> Option<Rational> {
        self.keyframes.first().map(|k| k.time)
    }

    #[inline]
    pub fn last_time(&self) -> Option<Rational> {
        self.keyframes.last().map(|k| k.time)
    }

    pub fn duration(&self) -> Option<Overflow<Rational>> {
        Some(self.last_time()?.over_diff(self.first_time()?))
    }

    /// Locate the keyframe with the greatest time `<= t` (backward scan).
    ///
    /// Before the first keyframe the result anchors at index 0. `None` only
    /// for an empty track.
    pub fn time_result(&self, t: Rational) -> Option<TimeResult> {
        if self.keyframes.is_empty() {
            return None;
        }
        let index = self
            .keyframes
            .iter()
            .rposition(|k| k.time <= t)
            .unwrap_or(0);
        let kt = self.keyframes[index].time;
        let section_time = self
            .keyframes
            .get(index + 1)
            .map(|next| next.time.over_diff(kt));
        Some(TimeResult {
            index,
            internal_time: t.over_diff(kt),
            section_time,
            time: t,
        })
    }
}

impl<V: Interpolatable + Clone> Animation<V> {
    /// Blend within the located segment; edges clamp to the nearest keyframe value.
    pub fn value(&self, located: &TimeResult) -> Option<V> {
        let k1 = self.keyframes.get(located.index)?;
        if k1.kind == KeyframeKind::Step {
            return Some(k1.value.clone());
        }
        let (Some(k2), Some(section)) = (self.keyframes.get(located.index + 1), located.section_time)
        else {
            return Some(k1.value.clone());
        };
        // Signs come from exact comparisons; only the ratio may be approximate.
        if located.time <= k1.time || k2.time <= k1.time {
            return Some(k1.value.clone());
        }
        let t = located.internal_time.to_f64() / section.to_f64();
        if self.keyframes.len() <= 2 || k1.kind == KeyframeKind::Linear {
            return Some(V::linear(&k1.value, &k2.value, t));
        }
        let k0 = located
            .index
            .checked_sub(1)
            .and_then(|i| self.keyframes.get(i));
        let k3 = self.keyframes.get(located.index + 2);
        Some(interpolate_segment(
            k0.map(|k| &k.value),
            &k1.value,
            &k2.value,
            k3.map(|k| &k.value),
            t,
        ))
    }

    /// `time_result` followed by `value`.
    pub fn value_at(&self, t: Rational) -> Option<V> {
        let located = self.time_result(t)?;
        self.value(&located)
    }
}

/// Encoded as the bare keyframe array.
impl<V: Serialize> Serialize for Animation<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.keyframes.serialize(serializer)
    }
}

/// Decoding re-establishes time order.
impl<'de, V: Deserialize<'de>> Deserialize<'de> for Animation<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let keyframes = Vec::<Keyframe<V>>::deserialize(deserializer)?;
        Ok(Self::from_keyframes(keyframes))
    }
}
