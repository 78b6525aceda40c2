use crate::controllers::interactive::data::frame_report::FrameReport;
use crate::controllers::interactive::errors::render::RenderError;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Frame(FrameReport),
    Error(RenderError),
}

impl RenderEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Frame(report) => report.generation,
            Self::Error(error) => error.generation,
        }
    }
}
