mod report;

pub use report::ReportService;
