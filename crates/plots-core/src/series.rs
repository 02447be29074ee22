// File: crates/plots-core/src/series.rs
// Summary: Named (x, y) series storage with insertion-ordered lookup.
// Notes:
// - x and y always have equal length; mismatched extends are rejected before
//   anything is appended.
// - Serialized form is `{"name": [[xs...], [ys...]], ...}` in insertion order.
// - NaN samples (curve gaps) are written as `null` and read back as NaN.
//   Infinite samples have no JSON form and fail serialization.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::{self, SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PlotError, Result};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Series {
    pub fn new() -> Self { Self::default() }

    /// Build from parallel coordinate vectors.
    pub fn from_xy(name: &str, xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(PlotError::LengthMismatch { series: name.to_string(), xs: xs.len(), ys: ys.len() });
        }
        Ok(Self { xs, ys })
    }

    pub fn xs(&self) -> &[f64] { &self.xs }
    pub fn ys(&self) -> &[f64] { &self.ys }
    pub fn len(&self) -> usize { self.xs.len() }
    pub fn is_empty(&self) -> bool { self.xs.is_empty() }

    pub fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    /// Append both sequences. `name` is only used for the error.
    pub fn extend(&mut self, name: &str, xs: &[f64], ys: &[f64]) -> Result<()> {
        if xs.len() != ys.len() {
            return Err(PlotError::LengthMismatch { series: name.to_string(), xs: xs.len(), ys: ys.len() });
        }
        self.xs.extend_from_slice(xs);
        self.ys.extend_from_slice(ys);
        Ok(())
    }

    /// Iterate (x, y) pairs in append order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// (min, max) of x and y over finite samples, or None when nothing is finite.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for (px, py) in self.points() {
            if !px.is_finite() || !py.is_finite() { continue; }
            x = (x.0.min(px), x.1.max(px));
            y = (y.0.min(py), y.1.max(py));
        }
        if x.0.is_finite() { Some((x, y)) } else { None }
    }
}

/// One coordinate list on the wire.
struct Samples<'a>(&'a [f64]);

impl Serialize for Samples<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for &v in self.0 {
            if v.is_nan() {
                seq.serialize_element(&None::<f64>)?;
            } else if v.is_infinite() {
                return Err(ser::Error::custom(format!("cannot serialize infinite sample {v}")));
            } else {
                seq.serialize_element(&v)?;
            }
        }
        seq.end()
    }
}

impl Serialize for Series {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (Samples(&self.xs), Samples(&self.ys)).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Series {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let (xs, ys) = <(Vec<Option<f64>>, Vec<Option<f64>>)>::deserialize(deserializer)?;
        if xs.len() != ys.len() {
            return Err(de::Error::custom(format!("{} x values but {} y values", xs.len(), ys.len())));
        }
        let gaps = |v: Vec<Option<f64>>| -> Vec<f64> { v.into_iter().map(|s| s.unwrap_or(f64::NAN)).collect() };
        Ok(Self { xs: gaps(xs), ys: gaps(ys) })
    }
}

/// Series keyed by unique name, iterated in first-insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesMap {
    entries: Vec<(String, Series)>,
}

impl SeriesMap {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn get(&self, name: &str) -> Option<&Series> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    /// Existing series for `name`, or a freshly appended empty one.
    pub fn get_or_create(&mut self, name: &str) -> &mut Series {
        let idx = match self.entries.iter().position(|(n, _)| n == name) {
            Some(i) => i,
            None => {
                self.entries.push((name.to_string(), Series::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Insert or replace, keeping the original position on replace.
    pub fn insert(&mut self, name: impl Into<String>, series: Series) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = series,
            None => self.entries.push((name, series)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl Serialize for SeriesMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, series) in &self.entries {
            map.serialize_entry(name, series)?;
        }
        map.end()
    }
}

struct SeriesMapVisitor;

impl<'de> Visitor<'de> for SeriesMapVisitor {
    type Value = SeriesMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of series name to [xs, ys]")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<SeriesMap, A::Error> {
        let mut out = SeriesMap::new();
        while let Some((name, series)) = access.next_entry::<String, Series>()? {
            out.insert(name, series);
        }
        Ok(out)
    }
}

impl<'de> Deserialize<'de> for SeriesMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(SeriesMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_rejects_mismatch_without_mutating() {
        let mut s = Series::new();
        s.extend("a", &[1.0, 2.0], &[3.0, 4.0]).unwrap();
        let err = s.extend("a", &[5.0], &[6.0, 7.0]).unwrap_err();
        assert!(matches!(err, PlotError::LengthMismatch { xs: 1, ys: 2, .. }));
        assert_eq!(s.xs(), &[1.0, 2.0]);
        assert_eq!(s.ys(), &[3.0, 4.0]);
    }

    #[test]
    fn map_keeps_insertion_order() {
        let mut m = SeriesMap::new();
        m.get_or_create("zeta").push(0.0, 0.0);
        m.get_or_create("alpha").push(1.0, 1.0);
        m.get_or_create("zeta").push(2.0, 2.0);
        let names: Vec<_> = m.names().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(m.get("zeta").map(Series::len), Some(2));
    }

    #[test]
    fn json_shape_is_name_to_pair_of_arrays() {
        let mut m = SeriesMap::new();
        m.get_or_create("b").extend("b", &[1.0], &[2.0]).unwrap();
        m.get_or_create("a").extend("a", &[3.5], &[-1.0]).unwrap();
        let text = serde_json::to_string(&m).unwrap();
        assert_eq!(text, r#"{"b":[[1.0],[2.0]],"a":[[3.5],[-1.0]]}"#);

        let back: SeriesMap = serde_json::from_str(&text).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn json_with_ragged_series_is_rejected() {
        let res: std::result::Result<SeriesMap, _> = serde_json::from_str(r#"{"a":[[1,2],[3]]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn nan_is_null_on_the_wire() {
        let mut m = SeriesMap::new();
        m.get_or_create("g").extend("g", &[0.0, 1.0], &[1.0, f64::NAN]).unwrap();
        let text = serde_json::to_string(&m).unwrap();
        assert_eq!(text, r#"{"g":[[0.0,1.0],[1.0,null]]}"#);

        let back: SeriesMap = serde_json::from_str(&text).unwrap();
        let g = back.get("g").unwrap();
        assert_eq!(g.xs(), &[0.0, 1.0]);
        assert_eq!(g.ys()[0], 1.0);
        assert!(g.ys()[1].is_nan());
    }

    #[test]
    fn infinite_sample_fails_to_serialize() {
        let mut m = SeriesMap::new();
        m.get_or_create("g").push(f64::INFINITY, 0.0);
        let err = serde_json::to_string(&m).unwrap_err();
        assert!(err.to_string().contains("infinite"));
    }

    #[test]
    fn bounds_skip_non_finite() {
        let s = Series::from_xy("s", vec![0.0, f64::NAN, 4.0], vec![-1.0, 100.0, 3.0]).unwrap();
        assert_eq!(s.bounds(), Some(((0.0, 4.0), (-1.0, 3.0))));
        assert_eq!(Series::new().bounds(), None);
    }
}
