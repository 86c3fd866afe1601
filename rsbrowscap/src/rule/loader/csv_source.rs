//! CSV 记录源
//! 逐条产出原始记录，不做字段解释；记录长度不固定
use csv::{Reader, ReaderBuilder, StringRecord};
use std::io::Read;

use crate::config::LoaderConfig;
use crate::error::RsbResult;

pub struct CsvRecordSource<R: Read> {
    reader: Reader<R>,
}

impl<R: Read> CsvRecordSource<R> {
    pub fn new(input: R, config: &LoaderConfig) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(config.has_headers)
            .delimiter(config.delimiter)
            .flexible(true)
            .from_reader(input);
        Self { reader }
    }

    /// 记录迭代器：IO/CSV 错误原样上抛
    pub fn records(&mut self) -> impl Iterator<Item = RsbResult<StringRecord>> + '_ {
        self.reader
            .records()
            .map(|record| record.map_err(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flexible_records_without_header() {
        let data = "\"Mozilla*\",a,b\n\"*bot*\"\n";
        let mut source = CsvRecordSource::new(data.as_bytes(), &LoaderConfig::default());
        let records: Vec<_> = source.records().collect::<RsbResult<_>>().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].len(), 3);
        assert_eq!(&records[1][0], "*bot*");
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let data = "\"Mozilla/5.0 (X11; Linux, x86_64)*\",\"Linux, desktop\"\n";
        let mut source = CsvRecordSource::new(data.as_bytes(), &LoaderConfig::default());
        let record = source.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "Mozilla/5.0 (X11; Linux, x86_64)*");
        assert_eq!(&record[1], "Linux, desktop");
    }
}
