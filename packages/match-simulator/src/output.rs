//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::records::{CsvSummaryRow, GameRecord};
use crate::types::OutputFormat;

pub struct OutputWriter {
    format: OutputFormat,
    records_writer: Box<dyn Write + Send>,
    /// Held back until `finish` for the JSON array format.
    pending: Vec<GameRecord>,
    csv_writer: csv::Writer<BufWriter<File>>,
    records_path: PathBuf,
    csv_path: PathBuf,
}

fn create_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let mut records_path = dir.join(format!("bisca_{timestamp}.{extension}"));
        let records_writer: Box<dyn Write + Send> = if compress {
            records_path.set_extension(format!("{extension}.gz"));
            Box::new(BufWriter::new(GzEncoder::new(
                create_truncated(&records_path)?,
                Compression::default(),
            )))
        } else {
            Box::new(BufWriter::new(create_truncated(&records_path)?))
        };

        // CSV summary is always written, uncompressed
        let csv_path = dir.join(format!("bisca_{timestamp}_summary.csv"));
        let csv_writer = csv::Writer::from_writer(BufWriter::new(create_truncated(&csv_path)?));

        Ok(Self {
            format,
            records_writer,
            pending: Vec::new(),
            csv_writer,
            records_path,
            csv_path,
        })
    }

    pub fn write_game(&mut self, record: GameRecord) -> Result<(), Box<dyn std::error::Error>> {
        self.csv_writer.serialize(CsvSummaryRow::from(&record))?;
        self.csv_writer.flush()?;

        match self.format {
            OutputFormat::Jsonl => {
                let json = serde_json::to_string(&record)?;
                writeln!(self.records_writer, "{json}")?;
                self.records_writer.flush()?;
            }
            OutputFormat::Json => self.pending.push(record),
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if self.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut self.records_writer, &self.pending)?;
            writeln!(self.records_writer)?;
        }
        self.records_writer.flush()?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (&Path, &Path) {
        (&self.records_path, &self.csv_path)
    }
}
