mod alignment;
pub use alignment::{AlignedColumn, AlignmentResult, GlobalAlignment};

mod direction_matrix;
pub use direction_matrix::{Direction, DirectionMatrix, ParseDirectionError};

mod labeled_matrix;
pub use labeled_matrix::LabeledMatrix;

mod score_matrix;
pub use score_matrix::ScoreMatrix;
