use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use animgeom::anim::Animation;
use animgeom::geom2::{region_contains, PathSegment, Point};
use animgeom::rational::{Rational, RoundingRule};

/// One evaluated track value; `None` for an empty track.
#[derive(Debug, PartialEq, Serialize)]
pub struct Sample {
    pub time: Rational,
    pub value: Option<f64>,
}

pub fn approx(value: f64, max_denominator: i64, tolerance: f64) -> Result<Rational> {
    let r = Rational::approximate(value, max_denominator, tolerance)
        .with_context(|| format!("approximating {value}"))?;
    tracing::info!(value, %r, max_denominator, "approx");
    Ok(r)
}

pub fn round(value: &str, rule: RoundingRule) -> Result<Rational> {
    let r: Rational = value
        .parse()
        .with_context(|| format!("parsing rational {value:?}"))?;
    let rounded = r.rounded(rule);
    tracing::info!(%r, ?rule, %rounded, "round");
    Ok(rounded)
}

pub fn sample(input: &Path, at: &[String]) -> Result<Vec<Sample>> {
    let track: Animation<f64> = read_json(input)?;
    let times = at
        .iter()
        .map(|s| {
            s.parse::<Rational>()
                .with_context(|| format!("parsing time {s:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::info!(
        input = %input.display(),
        keyframes = track.len(),
        queries = times.len(),
        "sample"
    );
    Ok(times
        .into_iter()
        .map(|time| Sample {
            time,
            value: track.value_at(time),
        })
        .collect())
}

pub fn contains(input: &Path, x: f64, y: f64) -> Result<bool> {
    let outline: Vec<PathSegment> = read_json(input)?;
    let inside = region_contains(&outline, &Point::new(x, y));
    tracing::info!(input = %input.display(), segments = outline.len(), x, y, inside, "contains");
    Ok(inside)
}

/// Pretty JSON to `out` (parent directories created) or to stdout.
pub fn emit_json<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    let Some(out) = out else {
        println!("{}", String::from_utf8_lossy(&bytes));
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("decoding {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn r(p: i64, q: i64) -> Rational {
        Rational::new(p, q).unwrap()
    }

    #[test]
    fn approx_and_round() {
        assert_eq!(approx(0.75, 100, 1e-9).unwrap(), r(3, 4));
        assert_eq!(approx(std::f64::consts::PI, 100, 1e-12).unwrap(), r(22, 7));
        assert!(approx(f64::INFINITY, 100, 1e-9).is_err());
        assert_eq!(round("5/2", RoundingRule::ToNearestOrEven).unwrap(), r(2, 1));
        assert_eq!(round("-7/2", RoundingRule::Down).unwrap(), r(-4, 1));
        let err = round("1/0", RoundingRule::Up).unwrap_err();
        assert!(format!("{err:#}").contains("parsing rational"));
    }

    #[test]
    fn sample_reads_track_and_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("track.json");
        fs::write(
            &input,
            r#"[{"value":2.0,"kind":"linear","time":[2,1]},{"value":0.0,"time":[0,1]}]"#,
        )
        .unwrap();
        let at = ["1/2".to_string(), "-1".to_string(), "3".to_string()];
        let samples = sample(&input, &at).unwrap();
        assert_eq!(
            samples,
            vec![
                Sample { time: r(1, 2), value: Some(0.5) },
                Sample { time: r(-1, 1), value: Some(0.0) },
                Sample { time: r(3, 1), value: Some(2.0) },
            ]
        );

        let out = dir.path().join("nested/out.json");
        emit_json(&samples, Some(&out)).unwrap();
        let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written[0]["time"], serde_json::json!([1, 2]));
        assert_eq!(written[0]["value"], serde_json::json!(0.5));

        assert!(sample(&input, &["x".to_string()]).is_err());
        assert!(sample(&dir.path().join("missing.json"), &at).is_err());
    }

    #[test]
    fn contains_reads_outline() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("outline.json");
        fs::write(
            &input,
            r#"[
                {"kind":"arc","center":[0,0],"radius":1,"start_angle":0,"end_angle":3.141592653589793},
                {"kind":"line","p0":[-1,0],"p1":[1,0]}
            ]"#,
        )
        .unwrap();
        assert!(contains(&input, 0.0, 0.5).unwrap());
        assert!(!contains(&input, 0.0, -0.5).unwrap());

        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"[{"kind":"arc","center":[0,0],"radius":-1,"start_angle":0,"end_angle":1}]"#)
            .unwrap();
        let err = contains(&bad, 0.0, 0.0).unwrap_err();
        assert!(format!("{err:#}").contains("negative arc radius"));
    }
}
