pub fn format_percent(value: f64) -> String {
	format_percent_with_precision(value, 2)
}

pub fn format_percent_with_precision(value: f64, precision: usize) -> String {
	format!("{:.1$}%", value * 100.0, precision)
}

#[test]
fn test_format_percent() {
	assert_eq!(format_percent(0.0), "0.00%");
	assert_eq!(format_percent(0.87), "87.00%");
	assert_eq!(format_percent(0.424292), "42.43%");
	assert_eq!(format_percent_with_precision(0.424292, 3), "42.429%");
	assert_eq!(format_percent(1.00), "100.00%");
}
