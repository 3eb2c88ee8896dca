mod record_source;
mod report_sink;

pub use record_source::IRecordSource;
pub use report_sink::IReportSink;
