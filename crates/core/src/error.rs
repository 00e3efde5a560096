use thiserror::Error;

use crate::curriculum::CurriculumError;
use crate::section::SectionParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Curriculum(#[from] CurriculumError),
    #[error(transparent)]
    SectionParse(#[from] SectionParseError),
}
