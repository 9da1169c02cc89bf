// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::io;

use csv::{ReaderBuilder, StringRecord};

use super::error::{Input, LoadError, LoadErrorKind};

pub(super) const POINTS_HEADER: &str = "ID;Nome;Latitude;Longitude";
pub(super) const ROUTES_HEADER: &str = "ID;Nome;Extremidade 1;Extremidade 2;Comprimento";

const SEPARATOR: u8 = b';';

/// Streams `;`-separated records out of a tabular source,
/// after checking its header line.
///
/// Quotes carry no special meaning, and records may have any number of fields;
/// the field count is checked by [Records::next].
pub(super) struct Records<R: io::Read> {
    reader: csv::Reader<R>,
    record: StringRecord,
    input: Input,
    line: usize,
    any: bool,
}

impl<R: io::Read> Records<R> {
    /// Reads and checks the header line.
    pub(super) fn new(reader: R, input: Input) -> Result<Self, LoadError> {
        let expected = match input {
            Input::Points => POINTS_HEADER,
            Input::Routes => ROUTES_HEADER,
        };

        let mut records = Self {
            reader: ReaderBuilder::new()
                .delimiter(SEPARATOR)
                .has_headers(false)
                .quoting(false)
                .flexible(true)
                .from_reader(reader),
            record: StringRecord::new(),
            input,
            line: 1,
            any: false,
        };

        if !records.read()? {
            return Err(LoadError::new(
                input,
                1,
                LoadErrorKind::MissingHeader { expected },
            ));
        }

        let header = records.fields().join(";");
        let header = header.strip_prefix('\u{feff}').unwrap_or(&header);
        if header != expected {
            return Err(LoadError::new(
                input,
                records.line,
                LoadErrorKind::UnexpectedHeader {
                    got: header.to_string(),
                    expected,
                },
            ));
        }

        Ok(records)
    }

    /// Returns the fields of the next non-blank line, together with its line number,
    /// checking that there are exactly `expected` of them.
    ///
    /// A source without any records is an error.
    pub(super) fn next(
        &mut self,
        expected: usize,
    ) -> Result<Option<(usize, Vec<String>)>, LoadError> {
        while self.read()? {
            if self.record.len() == 1 && self.record[0].trim().is_empty() {
                continue;
            }

            if self.record.len() != expected {
                return Err(LoadError::new(
                    self.input,
                    self.line,
                    LoadErrorKind::FieldCount {
                        got: self.record.len(),
                        expected,
                    },
                ));
            }

            self.any = true;
            return Ok(Some((self.line, self.fields())));
        }

        if self.any {
            Ok(None)
        } else {
            Err(LoadError::new(
                self.input,
                self.line + 1,
                LoadErrorKind::MissingRecord,
            ))
        }
    }

    /// Reads the next record into `self.record`, returning false at the end of the source.
    fn read(&mut self) -> Result<bool, LoadError> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => Ok(false),
            Ok(true) => {
                if let Some(pos) = self.record.position() {
                    self.line = pos.line() as usize;
                }
                Ok(true)
            }
            Err(e) => {
                let line = e
                    .position()
                    .map(|pos| pos.line() as usize)
                    .unwrap_or(self.line + 1);
                Err(LoadError::new(self.input, line, e.into()))
            }
        }
    }

    fn fields(&self) -> Vec<String> {
        self.record.iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::error::Category;
    use super::*;

    fn collect(
        data: &str,
        input: Input,
        n: usize,
    ) -> Result<Vec<(usize, Vec<String>)>, LoadError> {
        let mut r = Records::new(data.as_bytes(), input)?;
        let mut all = Vec::default();
        while let Some(record) = r.next(n)? {
            all.push(record);
        }
        Ok(all)
    }

    #[test]
    fn reads_records() {
        let data = "ID;Nome;Latitude;Longitude\r\n#A;Some Place;-23.55;-46.63\r\n\r\n#B;Other;1;2\n";
        let records = collect(data, Input::Points, 4).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].0, 2);
        assert_eq!(records[0].1, ["#A", "Some Place", "-23.55", "-46.63"]);
        assert_eq!(records[1].0, 4);
        assert_eq!(records[1].1, ["#B", "Other", "1", "2"]);
    }

    #[test]
    fn quotes_are_plain_characters() {
        let data = "ID;Nome;Latitude;Longitude\n#A;\"Quoted; Place\";1;2\n";
        let err = collect(data, Input::Points, 4).unwrap_err();
        assert!(matches!(
            err.kind,
            LoadErrorKind::FieldCount {
                got: 5,
                expected: 4
            }
        ));

        let data = "ID;Nome;Latitude;Longitude\n#A;\"Place\";1;2\n";
        let records = collect(data, Input::Points, 4).unwrap();
        assert_eq!(records[0].1[1], "\"Place\"");
    }

    #[test]
    fn header_must_match() {
        let err = collect("ID;Name;Lat;Lon\n#A;Place;1;2\n", Input::Points, 4).unwrap_err();
        assert_eq!(err.line, 1);
        assert!(matches!(err.kind, LoadErrorKind::UnexpectedHeader { .. }));

        let err = collect("", Input::Routes, 5).unwrap_err();
        assert!(matches!(err.kind, LoadErrorKind::MissingHeader { .. }));
    }

    #[test]
    fn header_only_is_rejected() {
        let err = collect("ID;Nome;Latitude;Longitude\n", Input::Points, 4).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, LoadErrorKind::MissingRecord));
    }

    #[test]
    fn field_count() {
        let data = "ID;Nome;Extremidade 1;Extremidade 2;Comprimento\n&R;Road;#A;#B\n";
        let err = collect(data, Input::Routes, 5).unwrap_err();
        assert_eq!(err.input, Input::Routes);
        assert_eq!(err.line, 2);
        assert!(matches!(
            err.kind,
            LoadErrorKind::FieldCount {
                got: 4,
                expected: 5
            }
        ));
    }

    #[test]
    fn invalid_utf8() {
        let mut data = b"ID;Nome;Latitude;Longitude\n#A;".to_vec();
        data.extend_from_slice(&[0xff, 0xfe]);
        data.extend_from_slice(b";1;2\n");

        let mut r = Records::new(data.as_slice(), Input::Points).unwrap();
        let err = r.next(4).unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.category(), Category::Schema);
        assert!(matches!(err.kind, LoadErrorKind::Csv(_)));
    }
}
