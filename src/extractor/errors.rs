use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("markup is empty")]
    EmptyMarkup,

    #[error("input is not html markup ({0} bytes without a tag)")]
    NotMarkup(usize),
}
