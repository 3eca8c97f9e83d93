//! Streaming segment filter
//!
//! Walks the input once, line by line, and comments out every qualifying
//! `G1` move that is shorter than the threshold. Everything else is written
//! back byte for byte, line terminators included. Lines are read as raw
//! bytes; only the ASCII tokens of a move matter, so other encodings in
//! comments pass through untouched.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use shortseg_core::{Error, GcodeError, Result, Threshold, TrackingMode};

use super::{classify, TrackerState};

/// Prefix that turns a line into a G-code comment
pub const COMMENT_MARKER: char = ';';

/// Options for one filtering pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterOptions {
    /// Minimum length of a kept move
    pub threshold: Threshold,
    /// How the tracked position carries across lines
    pub tracking_mode: TrackingMode,
}

impl FilterOptions {
    /// Create options with the given threshold and compatible tracking
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            tracking_mode: TrackingMode::default(),
        }
    }

    /// Select the tracking mode
    pub fn with_tracking_mode(mut self, tracking_mode: TrackingMode) -> Self {
        self.tracking_mode = tracking_mode;
        self
    }
}

/// Counters gathered over one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Lines read (and written)
    pub lines: u64,
    /// Qualifying moves whose length was measured
    pub moves_evaluated: u64,
    /// Moves commented out as short segments
    pub short_segments: u64,
}

/// Per-line segment filter holding the state of one pass
#[derive(Debug, Clone)]
pub struct SegmentFilter {
    threshold: Threshold,
    tracker: TrackerState,
    report: FilterReport,
}

impl SegmentFilter {
    /// Start a new pass at the origin
    pub fn new(options: FilterOptions) -> Self {
        Self {
            threshold: options.threshold,
            tracker: TrackerState::new(options.tracking_mode),
            report: FilterReport::default(),
        }
    }

    /// Tracker for the current pass
    pub fn tracker(&self) -> &TrackerState {
        &self.tracker
    }

    /// Counters so far
    pub fn report(&self) -> FilterReport {
        self.report
    }

    /// Process the next line of the stream
    ///
    /// `line` may carry its terminator; it is kept as is. Returns the line to
    /// emit, either borrowed unchanged or prefixed with [`COMMENT_MARKER`].
    ///
    /// # Errors
    /// Returns [`GcodeError::InvalidParameter`] with the 1-based line number
    /// when a coordinate token is malformed.
    pub fn process_line<'a>(
        &mut self,
        line: &'a str,
    ) -> std::result::Result<Cow<'a, str>, GcodeError> {
        if !self.is_short_segment(line)? {
            return Ok(Cow::Borrowed(line));
        }

        let mut commented = String::with_capacity(line.len() + 1);
        commented.push(COMMENT_MARKER);
        commented.push_str(line);
        Ok(Cow::Owned(commented))
    }

    /// Classify, measure and track one line; true when it must be commented out
    fn is_short_segment(&mut self, line: &str) -> std::result::Result<bool, GcodeError> {
        self.report.lines += 1;
        let line_number = self.report.lines;

        let parsed = classify(line).map_err(|e| e.at_line(line_number))?;

        let mut is_short = false;
        if parsed.qualifies {
            self.report.moves_evaluated += 1;
            let eval = self.tracker.evaluate(&parsed, self.threshold);
            if eval.is_short {
                tracing::trace!(
                    line_number,
                    distance = eval.distance,
                    "Commenting out short segment"
                );
                self.report.short_segments += 1;
                is_short = true;
            }
        }

        self.tracker.update(&parsed);

        Ok(is_short)
    }

    /// End the pass and return its counters
    pub fn finish(self) -> FilterReport {
        tracing::debug!(
            lines = self.report.lines,
            moves_evaluated = self.report.moves_evaluated,
            short_segments = self.report.short_segments,
            "Segment filter pass complete"
        );
        self.report
    }
}

/// Filter a whole stream
///
/// Reads `input` line by line, writes every line to `output` in order and
/// flushes it. A partially written output is left behind on error.
///
/// Lines are not required to be UTF-8. Classification sees a lossy decoding
/// and the original bytes are written back.
///
/// # Errors
/// Returns [`Error::Io`] if reading or writing fails and [`Error::Gcode`]
/// for a malformed coordinate token.
pub fn filter_stream<R, W>(
    mut input: R,
    mut output: W,
    options: FilterOptions,
) -> Result<FilterReport>
where
    R: BufRead,
    W: Write,
{
    let mut filter = SegmentFilter::new(options);
    let mut line = Vec::new();
    let mut buf = [0u8; 4];
    let marker = COMMENT_MARKER.encode_utf8(&mut buf).as_bytes();

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        if filter.is_short_segment(&String::from_utf8_lossy(&line))? {
            output.write_all(marker)?;
        }
        output.write_all(&line)?;
    }

    output.flush()?;
    Ok(filter.finish())
}

/// Filter text held in memory, keeping its line terminators
pub fn filter_str(input: &str, options: FilterOptions) -> Result<(String, FilterReport)> {
    let mut output = Vec::with_capacity(input.len());
    let report = filter_stream(input.as_bytes(), &mut output, options)?;
    let output = String::from_utf8(output).map_err(|e| Error::other(e.to_string()))?;
    Ok((output, report))
}

/// Filter a list of lines without terminators
pub fn filter_lines<S: AsRef<str>>(
    lines: &[S],
    options: FilterOptions,
) -> Result<(Vec<String>, FilterReport)> {
    let mut filter = SegmentFilter::new(options);
    let mut output = Vec::with_capacity(lines.len());

    for line in lines {
        output.push(filter.process_line(line.as_ref())?.into_owned());
    }

    Ok((output, filter.finish()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortseg_core::Position;
    use std::io::{self, BufReader, Read};

    /// Serves `data` once, then fails every read
    struct BrokenReader {
        data: &'static [u8],
        served: bool,
    }

    impl Read for BrokenReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "link dropped"));
            }
            self.served = true;
            let n = self.data.len().min(buf.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            Ok(n)
        }
    }

    /// Sink that fails on write or on flush
    struct BrokenWriter {
        fail_on_flush: bool,
    }

    impl Write for BrokenWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.fail_on_flush {
                Ok(buf.len())
            } else {
                Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"))
            }
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.fail_on_flush {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            } else {
                Ok(())
            }
        }
    }

    fn options(threshold: f64) -> FilterOptions {
        FilterOptions::new(Threshold::new(threshold).unwrap())
    }

    #[test]
    fn test_scenario_short_move_after_origin() {
        let lines = ["G1 X0 Y0 F900", "G1 X0.01 Y0.01 F900", "G1 X5 Y5 F900"];
        let (output, report) = filter_lines(&lines, options(0.08)).unwrap();

        assert_eq!(
            output,
            vec!["G1 X0 Y0 F900", ";G1 X0.01 Y0.01 F900", "G1 X5 Y5 F900"]
        );
        assert_eq!(report.short_segments, 1);
        assert_eq!(report.moves_evaluated, 2);
        assert_eq!(report.lines, 3);
    }

    #[test]
    fn test_rapid_move_passes_through() {
        let mut filter = SegmentFilter::new(options(100.0));
        let out = filter.process_line("G0 X1 Y1").unwrap();
        assert_eq!(out, "G0 X1 Y1");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(filter.tracker().position(), Position::origin());
        assert_eq!(filter.report().short_segments, 0);
    }

    #[test]
    fn test_single_axis_move_passes_through() {
        let mut filter = SegmentFilter::new(options(100.0));
        assert_eq!(filter.process_line("G1 X2 F900").unwrap(), "G1 X2 F900");
        assert_eq!(filter.tracker().position(), Position::new(2.0, 0.0));
        assert_eq!(filter.report().moves_evaluated, 0);
    }

    #[test]
    fn test_empty_input() {
        let (output, report) = filter_str("", options(0.08)).unwrap();
        assert!(output.is_empty());
        assert_eq!(report, FilterReport::default());
    }

    #[test]
    fn test_preserves_terminators() {
        let input = "G1 X1 Y1 F900\r\nG1 X1.01 Y1.01\r\n; end\nG1 X1.02 Y1.02";
        let (output, report) = filter_str(input, options(0.08)).unwrap();
        assert_eq!(
            output,
            "G1 X1 Y1 F900\r\n;G1 X1.01 Y1.01\r\n; end\nG1 X1.02 Y1.02"
        );
        assert_eq!(report.short_segments, 1);
        assert_eq!(report.lines, 4);
    }

    #[test]
    fn test_comment_resets_position_in_compatible_mode() {
        let lines = ["G1 X0.05 Y0.05 F900", "G1 X10 Y10", "; note", "G1 X0.02 Y0.02"];

        let (output, report) = filter_lines(&lines, options(0.08)).unwrap();
        assert_eq!(output[0], ";G1 X0.05 Y0.05 F900");
        assert_eq!(output[3], ";G1 X0.02 Y0.02");
        assert_eq!(report.short_segments, 2);

        let continuous = options(0.08).with_tracking_mode(TrackingMode::Continuous);
        let (output, report) = filter_lines(&lines, continuous).unwrap();
        assert_eq!(output[0], ";G1 X0.05 Y0.05 F900");
        assert_eq!(output[3], "G1 X0.02 Y0.02");
        assert_eq!(report.short_segments, 1);
    }

    #[test]
    fn test_malformed_token_reports_line_number() {
        let lines = ["G28", "G1 X1 Y1", "G1 X2 Y-"];
        let err = filter_lines(&lines, options(0.08)).unwrap_err();
        match err {
            Error::Gcode(GcodeError::InvalidParameter {
                line_number, param, ..
            }) => {
                assert_eq!(line_number, 3);
                assert_eq!(param, "Y-");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_utf8_comment_passes_through() {
        let input: &[u8] = b"; printed with PLA 210\xb0C\nG1 X1 Y1 F900\nG1 X1.01 Y1.01\n";
        let mut output = Vec::new();

        let report = filter_stream(input, &mut output, options(0.08)).unwrap();

        assert_eq!(
            output,
            b"; printed with PLA 210\xb0C\nG1 X1 Y1 F900\n;G1 X1.01 Y1.01\n".to_vec()
        );
        assert_eq!(report.lines, 3);
        assert_eq!(report.short_segments, 1);
    }

    #[test]
    fn test_move_on_reference_distance_is_kept() {
        let (output, report) =
            filter_lines(&["G1 X0.002 Y0.0023"], options(0.0030479501308256344)).unwrap();
        assert_eq!(output, vec!["G1 X0.002 Y0.0023"]);
        assert_eq!(report.short_segments, 0);
        assert_eq!(report.moves_evaluated, 1);
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let err = filter_stream(
            "G1 X1 Y1 F900\n".as_bytes(),
            BrokenWriter {
                fail_on_flush: false,
            },
            options(0.08),
        )
        .unwrap_err();
        assert!(err.is_io_error());

        let err = filter_stream(
            "G1 X1 Y1 F900\n".as_bytes(),
            BrokenWriter {
                fail_on_flush: true,
            },
            options(0.08),
        )
        .unwrap_err();
        assert!(err.is_io_error());
    }

    #[test]
    fn test_read_failure_midway_is_io_error() {
        let reader = BufReader::new(BrokenReader {
            data: b"G1 X1 Y1 F900\nG1 X2",
            served: false,
        });
        let mut output = Vec::new();

        let err = filter_stream(reader, &mut output, options(0.08)).unwrap_err();

        assert!(err.is_io_error());
        assert_eq!(output, b"G1 X1 Y1 F900\n".to_vec());
    }
}
