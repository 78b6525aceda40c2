pub mod frame_report;
