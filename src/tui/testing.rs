//! Buffer helpers for widget and view tests.

use ratatui::buffer::Buffer;

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(area.x + x, area.y + y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i], *expected_line,
            "\nLine {} mismatch:\nExpected: {}\nActual:   {}",
            i, expected_line, actual[i]
        );
    }
}

/// Whether any line of the buffer contains `needle`
pub fn buffer_contains(buf: &Buffer, needle: &str) -> bool {
    buffer_lines(buf).iter().any(|line| line.contains(needle))
}
