use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("booking record must be a JSON object")]
    NotAnObject,
    #[error("pnr must be exactly 10 digits, got {0:?}")]
    InvalidPnr(String),
    #[error("train is missing")]
    MissingTrain,
    #[error("train must be a JSON object")]
    TrainNotAnObject,
    #[error("passengers is missing")]
    MissingPassengers,
    #[error("passengers must be an array")]
    PassengersNotAnArray,
    #[error("passengers must not be empty")]
    NoPassengers,
}
