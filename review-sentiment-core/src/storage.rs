use {
    std::{collections::HashSet, path::{Path, PathBuf}},
    tracing::info,
    crate::{
        error::PipelineError,
        models::{RawRecord, NormalizedRecord},
        source::Platform,
    },
};

/// Destination of a batch's normalized records. Each write replaces the
/// previous contents.
pub trait RecordSink {
    fn write_records(&mut self, records: &[NormalizedRecord]) -> Result<(), PipelineError>;
}

pub struct CsvSink {
    path: PathBuf,
    platform: Platform,
}

impl CsvSink {
    pub fn new(path: PathBuf, platform: Platform) -> Self {
        Self {
            path,
            platform,
        }
    }

    pub fn in_dir(dir: &Path, platform: Platform) -> Self {
        Self::new(dir.join(platform.output_file_name()), platform)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for CsvSink {
    fn write_records(&mut self, records: &[NormalizedRecord]) -> Result<(), PipelineError> {
        let mut writer = csv::Writer::from_path(&self.path)
            .map_err(|err| PipelineError::Sink(format!("{}: {}", self.path.display(), err)))?;

        writer.write_record([self.platform.auxiliary_column(), self.platform.text_column()])?;
        for record in records {
            writer.write_record([record.auxiliary.value(), record.text.as_str()])?;
        }
        writer.flush()?;

        info!("processing completed, {} records saved to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// Reads the scraper output for one platform, dropping rows with an empty
/// field and exact duplicates. Scrape order is preserved.
pub fn load_raw_records(path: &Path, platform: Platform) -> Result<Vec<RawRecord>, PipelineError> {
    let input_error = |reason: String| PipelineError::Input {
        path: path.to_owned(),
        reason,
    };

    let mut reader = csv::Reader::from_path(path).map_err(|err| input_error(err.to_string()))?;
    let headers = reader.headers().map_err(|err| input_error(err.to_string()))?.clone();

    let column = |name: &str| headers.iter()
        .position(|v| v.trim() == name)
        .ok_or_else(|| input_error(format!("missing column '{}'", name)));
    let auxiliary_column = column(platform.auxiliary_column())?;
    let text_column = column(platform.text_column())?;

    let mut seen = HashSet::new();
    let mut records = Vec::new();
    let mut total_rows = 0;

    for row in reader.records() {
        let row = row.map_err(|err| input_error(err.to_string()))?;
        total_rows += 1;

        let auxiliary = row.get(auxiliary_column).unwrap_or("").trim();
        let text = row.get(text_column).unwrap_or("").trim();
        if auxiliary.is_empty() || text.is_empty() {
            continue;
        }

        if seen.insert((auxiliary.to_owned(), text.to_owned())) {
            records.push(platform.record(auxiliary.to_owned(), text.to_owned()));
        }
    }

    info!("loaded {} of {} rows from {}", records.len(), total_rows, path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::fs,
        tempfile::tempdir,
        crate::models::Auxiliary,
    };

    #[test]
    fn loads_and_deduplicates_reviews() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reviews_B0CHX1W1XY.csv");
        fs::write(&path, "category,review\n\
            5.0 out of 5 stars,\"Great phone, love it\"\n\
            1.0 out of 5 stars,Bad battery\n\
            5.0 out of 5 stars,\"Great phone, love it\"\n\
            ,missing category\n\
            3.0 out of 5 stars,\n\
            2.0 out of 5 stars,Bad battery\n").unwrap();

        let records = load_raw_records(&path, Platform::Amazon).unwrap();

        assert_eq!(records, vec![
            RawRecord::review("5.0 out of 5 stars", "Great phone, love it"),
            RawRecord::review("1.0 out of 5 stars", "Bad battery"),
            RawRecord::review("2.0 out of 5 stars", "Bad battery"),
        ]);
    }

    #[test]
    fn loads_comments_by_column_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("comment_Fs4vYQRK0U8.csv");
        fs::write(&path, "text,published\nnice video,2024-01-01T10:00:00Z\n").unwrap();

        let records = load_raw_records(&path, Platform::YouTube).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].auxiliary, Auxiliary::Published("2024-01-01T10:00:00Z".to_owned()));
        assert_eq!(records[0].text, "nice video");
    }

    #[test]
    fn missing_columns_or_file_are_input_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reviews.csv");
        fs::write(&path, "published,text\n2024,hello\n").unwrap();

        assert!(matches!(load_raw_records(&path, Platform::Amazon), Err(PipelineError::Input { .. })));
        assert!(matches!(
            load_raw_records(&dir.path().join("absent.csv"), Platform::Amazon),
            Err(PipelineError::Input { .. }),
        ));
    }

    #[test]
    fn sink_overwrites_previous_output() {
        let dir = tempdir().unwrap();
        let mut sink = CsvSink::in_dir(dir.path(), Platform::Amazon);

        let first = vec![
            RawRecord::review("5.0 out of 5 stars", "").normalized("great product".to_owned()),
            RawRecord::review("1.0 out of 5 stars", "").normalized("bad, quality".to_owned()),
        ];
        sink.write_records(&first).unwrap();
        sink.write_records(&first[..1]).unwrap();

        assert_eq!(sink.path(), dir.path().join("reviews.csv"));
        assert_eq!(
            fs::read_to_string(sink.path()).unwrap(),
            "category,review\n5.0 out of 5 stars,great product\n",
        );
    }

    #[test]
    fn unwritable_sink_is_an_error() {
        let dir = tempdir().unwrap();
        let mut sink = CsvSink::new(dir.path().join("missing").join("comments.csv"), Platform::YouTube);

        assert!(matches!(sink.write_records(&[]), Err(PipelineError::Sink(_))));
    }
}
