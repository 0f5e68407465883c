//! Writing generated files somewhere the user can get at them.
//!
//! Generation is pure. Everything that touches the outside world goes
//! through an [`ExportSink`], so hosts pick the destination and tests can
//! capture or fail writes.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CalendarError, CalendarResult};
use crate::event::ComplianceEvent;
use crate::ics::{self, ExportOptions};
use crate::profile::BusinessProfile;

pub const CALENDAR_FILENAME: &str = "business-compliance-calendar.ics";
pub const CALENDAR_MIME_TYPE: &str = "text/calendar";
pub const PROFILE_FILENAME: &str = "business-data.json";
pub const PROFILE_MIME_TYPE: &str = "application/json";

/// A generated file, ready to hand to a sink
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// Destination for exported artifacts.
pub trait ExportSink {
    /// Deliver the artifact. Failures must be returned, never dropped.
    fn write(&mut self, artifact: &Artifact) -> CalendarResult<()>;
}

/// Writes artifacts as files into a directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileSink { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where an artifact with this filename ends up
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl ExportSink for FileSink {
    fn write(&mut self, artifact: &Artifact) -> CalendarResult<()> {
        let path = self.path_for(&artifact.filename);

        std::fs::create_dir_all(&self.dir).map_err(|source| CalendarError::Export {
            path: self.dir.clone(),
            source,
        })?;

        std::fs::write(&path, &artifact.content).map_err(|source| CalendarError::Export {
            path: path.clone(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            mime_type = artifact.mime_type,
            bytes = artifact.content.len(),
            "Exported artifact"
        );

        Ok(())
    }
}

/// Streams artifact content to a writer, e.g. stdout.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ExportSink for WriterSink<W> {
    fn write(&mut self, artifact: &Artifact) -> CalendarResult<()> {
        let to_export_error = |source| CalendarError::Export {
            path: PathBuf::from(&artifact.filename),
            source,
        };

        self.writer
            .write_all(artifact.content.as_bytes())
            .map_err(to_export_error)?;
        self.writer.flush().map_err(to_export_error)?;

        Ok(())
    }
}

/// Serialize `events` to ICS and deliver the file to `sink`.
///
/// Returns the artifact that was written.
pub fn export(
    events: &[ComplianceEvent],
    filename: &str,
    options: &ExportOptions,
    sink: &mut dyn ExportSink,
) -> CalendarResult<Artifact> {
    let artifact = Artifact {
        filename: filename.to_string(),
        mime_type: CALENDAR_MIME_TYPE,
        content: ics::serialize(events, options),
    };

    sink.write(&artifact)?;
    Ok(artifact)
}

/// Export the business profile as pretty-printed JSON.
pub fn export_profile(
    profile: &BusinessProfile,
    filename: &str,
    sink: &mut dyn ExportSink,
) -> CalendarResult<Artifact> {
    let content = serde_json::to_string_pretty(profile)
        .map_err(|e| CalendarError::Serialization(e.to_string()))?;

    let artifact = Artifact {
        filename: filename.to_string(),
        mime_type: PROFILE_MIME_TYPE,
        content,
    };

    sink.write(&artifact)?;
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive;
    use std::io;

    /// Keeps every artifact in memory
    #[derive(Default)]
    struct MemorySink {
        written: Vec<Artifact>,
    }

    impl ExportSink for MemorySink {
        fn write(&mut self, artifact: &Artifact) -> CalendarResult<()> {
            self.written.push(artifact.clone());
            Ok(())
        }
    }

    /// Rejects every write, like a blocked download
    struct FailingSink;

    impl ExportSink for FailingSink {
        fn write(&mut self, artifact: &Artifact) -> CalendarResult<()> {
            Err(CalendarError::Export {
                path: PathBuf::from(&artifact.filename),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "blocked"),
            })
        }
    }

    /// Writer that always errors
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_export_hands_calendar_to_sink() {
        let events = derive(&BusinessProfile::default());
        let mut sink = MemorySink::default();

        let artifact = export(&events, CALENDAR_FILENAME, &ExportOptions::default(), &mut sink)
            .unwrap();

        assert_eq!(sink.written, vec![artifact.clone()]);
        assert_eq!(artifact.filename, "business-compliance-calendar.ics");
        assert_eq!(artifact.mime_type, "text/calendar");
        assert_eq!(
            artifact.content,
            ics::serialize(&events, &ExportOptions::default())
        );
    }

    #[test]
    fn test_export_surfaces_sink_failure() {
        let events = derive(&BusinessProfile::default());
        let options = ExportOptions::default();
        let result = export(&events, CALENDAR_FILENAME, &options, &mut FailingSink);

        match result {
            Err(CalendarError::Export { path, source }) => {
                assert_eq!(path, PathBuf::from(CALENDAR_FILENAME));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("Expected export error, got {:?}", other),
        }
    }

    #[test]
    fn test_file_sink_writes_into_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("out");
        let mut sink = FileSink::new(&dir);

        let events = derive(&BusinessProfile::new(Some("Delaware"), Some("2024-03-10")).unwrap());
        export(&events, CALENDAR_FILENAME, &ExportOptions::default(), &mut sink).unwrap();

        let written = std::fs::read_to_string(dir.join(CALENDAR_FILENAME)).unwrap();
        assert!(written.starts_with("BEGIN:VCALENDAR"));
        assert_eq!(written.matches("BEGIN:VEVENT").count(), events.len());
    }

    #[test]
    fn test_file_sink_reports_unwritable_target() {
        let tmp = tempfile::tempdir().unwrap();
        // A regular file where the output directory should be
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        let mut sink = FileSink::new(&blocker);
        let options = ExportOptions::default();
        let err = export(&[], CALENDAR_FILENAME, &options, &mut sink).unwrap_err();

        assert!(
            matches!(err, CalendarError::Export { ref path, .. } if path.starts_with(&blocker)),
            "Unexpected error: {:?}",
            err
        );
    }

    #[test]
    fn test_writer_sink_streams_content() {
        let mut sink = WriterSink::new(Vec::new());
        let options = ExportOptions::default();
        let artifact = export(&[], CALENDAR_FILENAME, &options, &mut sink).unwrap();

        let bytes = sink.into_inner();
        assert_eq!(String::from_utf8(bytes).unwrap(), artifact.content);
    }

    #[test]
    fn test_writer_sink_surfaces_write_error() {
        let mut sink = WriterSink::new(BrokenPipe);
        let options = ExportOptions::default();
        let err = export(&[], CALENDAR_FILENAME, &options, &mut sink).unwrap_err();
        assert!(matches!(err, CalendarError::Export { .. }));
    }

    #[test]
    fn test_export_profile_as_json() {
        let mut profile = BusinessProfile::new(Some("Delaware"), Some("2024-03-10")).unwrap();
        profile.business_name = Some("Acme".to_string());
        let mut sink = MemorySink::default();

        let artifact = export_profile(&profile, PROFILE_FILENAME, &mut sink).unwrap();

        assert_eq!(artifact.mime_type, "application/json");
        let value: serde_json::Value = serde_json::from_str(&artifact.content).unwrap();
        assert_eq!(value["business_name"], "Acme");
        assert_eq!(value["state"], "Delaware");
        assert_eq!(value["formation_date"], "2024-03-10");
    }
}
