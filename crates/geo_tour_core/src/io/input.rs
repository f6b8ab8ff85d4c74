use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use crate::{Error, Result, point::Point};

/// Reads points from `path`, or stdin when `None`.
pub fn read_points(path: Option<&Path>) -> Result<Vec<Point>> {
    let raw = match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            Error::invalid_input(format!("failed to read {}: {e}", path.display()))
        })?,
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };
    let points = parse_points(&raw)?;
    log::debug!("input: parsed n={}", points.len());
    Ok(points)
}

/// Parses one `lat,lng[,label]` point per line.
///
/// The label is everything after the second comma, so it may contain commas
/// itself. Blank lines and `#` comments are skipped.
pub fn parse_points(input: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.splitn(3, ',');
        let lat_s = fields.next().unwrap_or_default().trim();
        let lng_s = fields
            .next()
            .ok_or_else(|| Error::invalid_input(format!("Line {line_no}: missing longitude")))?
            .trim();
        let label = fields.next().map(str::trim).filter(|l| !l.is_empty());

        let lat: f64 = lat_s.parse().map_err(|_| {
            Error::invalid_input(format!("Line {line_no}: invalid latitude: {lat_s}"))
        })?;
        let lng: f64 = lng_s.parse().map_err(|_| {
            Error::invalid_input(format!("Line {line_no}: invalid longitude: {lng_s}"))
        })?;

        let point = Point::new(lat, lng);
        points.push(match label {
            Some(label) => point.with_label(label),
            None => point,
        });
    }

    if points.is_empty() {
        return Err(Error::invalid_input("No points provided."));
    }

    Ok(points)
}
