/// Converts a percentage (0–100) into a letter grade.
///
/// | Range       | Grade |
/// |-------------|-------|
/// | >= 90       | A1    |
/// | >= 80       | A     |
/// | >= 70       | B     |
/// | >= 60       | C     |
/// | >= 50       | D     |
/// | < 50        | F     |
///
/// Boundary values belong to the higher band: 90.0 is "A1", 80.0 is "A".
pub fn grade(pct: f64) -> &'static str {
    match pct {
        p if p >= 90.0 => "A1",
        p if p >= 80.0 => "A",
        p if p >= 70.0 => "B",
        p if p >= 60.0 => "C",
        p if p >= 50.0 => "D",
        _ => "F",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade(100.0), "A1");
        assert_eq!(grade(90.0), "A1");
        assert_eq!(grade(89.999), "A");
        assert_eq!(grade(80.0), "A");
        assert_eq!(grade(79.999), "B");
        assert_eq!(grade(70.0), "B");
        assert_eq!(grade(69.999), "C");
        assert_eq!(grade(60.0), "C");
        assert_eq!(grade(59.999), "D");
        assert_eq!(grade(50.0), "D");
        assert_eq!(grade(49.999), "F");
        assert_eq!(grade(0.0), "F");
    }
}
