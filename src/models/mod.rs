pub mod catalog;
pub mod exam;
pub mod loaders;

pub use catalog::{Catalog, Piece, PieceLabel, Textbook};
pub use exam::{ContentId, ContentOrder, ExamQuestion};
pub use loaders::{load_sources, SourceData};
